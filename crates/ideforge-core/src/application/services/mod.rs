//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "discover sources" or "generate a batch".

pub mod discovery_service;
pub mod generate_service;

pub use discovery_service::DiscoveryService;
pub use generate_service::{
    BatchPolicy, FailedTarget, GenerateService, GeneratedTarget, GenerationReport, Inspection,
    PlanRequest, SkippedTarget,
};
