//! ideforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the ideforge
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          ideforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (DiscoveryService, GenerateService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (SourceTree, ProjectWriter, Emitters)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   ideforge-adapters (Infrastructure)    │
//! │ (LocalFilesystem, JsonScriptLoader, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Catalog, GroupTree, Identifier, ..)   │
//! │            No I/O, no tracing           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ideforge_core::{
//!     application::{DiscoveryService, GenerateService, PlanRequest},
//!     domain::Ide,
//! };
//!
//! // 1. Wire the service (with injected adapters)
//! let service = GenerateService::new(DiscoveryService::new(tree), writer, scripts, emitters);
//!
//! // 2. Resolve what to build and build it
//! let plan = service.resolve_plan(root, &PlanRequest {
//!     default_script: "projects.json".into(),
//!     targets: vec![Ide::Vs2010],
//!     ..Default::default()
//! }).unwrap();
//! let report = service.run(root, &plan).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BatchPolicy, DiscoveryService, GenerateService, GenerationReport, PlanRequest,
        ports::{Artifact, EmitRequest, ProjectWriter, ScriptSource, SourceTree, TargetEmitter},
    };
    pub use crate::domain::{
        Catalog, FileCategory, GroupMap, GroupTree, IdMode, Ide, Identifier, IdentifierResolver,
        Platform, ProjectConfiguration, ProjectKind, ProjectModel, ProjectScript, SemanticKey,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
