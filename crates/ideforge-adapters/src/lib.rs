//! Infrastructure adapters for ideforge.
//!
//! This crate implements the ports defined in `ideforge-core::application::ports`.
//! It contains all external dependencies and I/O operations: directory
//! walking, `projects.json` parsing, and the per-IDE project file writers.

pub mod emitters;
pub mod filesystem;
pub mod script_loader;

// Re-export commonly used adapters
pub use emitters::{CodeWarriorEmitter, VisualStudioEmitter, XcodeEmitter, builtin_emitters};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use script_loader::JsonScriptLoader;
