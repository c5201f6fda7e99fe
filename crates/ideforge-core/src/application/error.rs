//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! project model. Model errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Ide;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The project script could not be read or parsed.
    #[error("Cannot load project script {path}: {reason}")]
    ScriptLoad { path: PathBuf, reason: String },

    /// The IDE is recognized but no emitter is registered for it.
    #[error("Target '{ide}' is not supported yet")]
    UnsupportedTarget { ide: Ide },

    /// An emitter failed while building its artifacts.
    #[error("Generating {ide} project failed: {reason}")]
    EmissionFailed { ide: Ide, reason: String },

    /// A write failed after other files of the same target were written.
    #[error("Wrote {} of {total} files before failing at {path}: {reason}", written.len())]
    PartialWrite {
        path: PathBuf,
        written: Vec<PathBuf>,
        total: usize,
        reason: String,
    },

    /// No script was found and no target was asked for.
    #[error("No project script found and no target requested")]
    NoTargetsRequested,

    /// Shared state lock was poisoned.
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ScriptLoad { path, .. } => vec![
                format!("Check that {} exists and is a JSON array", path.display()),
                "Each item is either a settings object or a target name string".into(),
            ],
            Self::UnsupportedTarget { ide } => vec![
                format!("{} is recognized but has no generator", ide),
                "Try: ideforge list targets".into(),
            ],
            Self::PartialWrite { written, .. } => {
                let mut out = vec!["These files were written and may be out of date:".to_string()];
                out.extend(written.iter().map(|p| format!("  {}", p.display())));
                out.push("Fix the cause and re-run generate".into());
                out
            }
            Self::NoTargetsRequested => vec![
                "Pass a target flag, e.g. ideforge generate --vs2010".into(),
                "Or create a projects.json in the project directory".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::PartialWrite { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
            Self::EmissionFailed { .. } => ErrorCategory::Internal,
            Self::ScriptLoad { .. } => ErrorCategory::Configuration,
            Self::UnsupportedTarget { .. } => ErrorCategory::NotFound,
            Self::NoTargetsRequested => ErrorCategory::Validation,
        }
    }
}
