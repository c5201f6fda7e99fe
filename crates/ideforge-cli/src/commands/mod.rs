//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core service calls and print the
//! result. No business logic lives here.

use std::path::{Path, PathBuf};

use ideforge_adapters::{JsonScriptLoader, LocalFilesystem, builtin_emitters};
use ideforge_core::application::{BatchPolicy, DiscoveryService, GenerateService};

use crate::error::{CliError, CliResult};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod list;

/// The project root: `-C` when given, else the working directory.
pub fn resolve_root(directory: Option<&Path>) -> CliResult<PathBuf> {
    let path = directory.unwrap_or_else(|| Path::new("."));
    path.canonicalize()
        .ok()
        .filter(|p| p.is_dir())
        .ok_or_else(|| CliError::DirectoryNotFound {
            path: path.to_path_buf(),
        })
}

/// Wire the core service to the local filesystem and the built-in emitters.
pub fn build_service(policy: BatchPolicy) -> GenerateService {
    GenerateService::new(
        DiscoveryService::new(Box::new(LocalFilesystem::new())),
        Box::new(LocalFilesystem::new()),
        Box::new(JsonScriptLoader::new()),
        builtin_emitters(),
    )
    .with_policy(policy)
}
