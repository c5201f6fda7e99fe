//! Application layer for ideforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DiscoveryService, GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! model logic itself. Classification, grouping and identifiers live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BatchPolicy, DiscoveryService, GenerateService, GeneratedTarget, GenerationReport,
    Inspection, PlanRequest, SkippedTarget, FailedTarget,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Artifact, DirEntry, EmitRequest, EntryKind, ProjectWriter, ScriptSource, SourceTree,
    TargetEmitter,
};

pub use error::ApplicationError;
