//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ideforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SourceTree`: Read-only directory listing for discovery
//!   - `ProjectWriter`: Writing and removing generated files
//!   - `ScriptSource`: Loading project scripts
//!   - `TargetEmitter`: Serializing the project model for one IDE family
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Artifact, DirEntry, EmitRequest, EntryKind, ProjectWriter, ScriptSource, SourceTree,
    TargetEmitter,
};

#[cfg(test)]
pub use output::{MockProjectWriter, MockSourceTree};
