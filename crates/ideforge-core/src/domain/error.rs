// ============================================================================
// domain/error.rs - PROJECT MODEL ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the batch runner keeps them in its report)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors (caller input, never transient)
    // ========================================================================
    #[error("Invalid project configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown setting '{key}' in project script")]
    UnknownSetting { key: String },

    #[error("Setting '{key}' expects {expected}")]
    InvalidSettingValue { key: String, expected: &'static str },

    #[error("Project name must not be empty")]
    EmptyProjectName,

    #[error("Source folder must be relative to the project root: {path}")]
    AbsoluteSourceFolder { path: String },

    // ========================================================================
    // Vocabulary Errors (closed sets)
    // ========================================================================
    #[error("unknown IDE: {name}")]
    UnknownIde { name: String },

    #[error("unknown platform: {name}")]
    UnknownPlatform { name: String },

    #[error("unknown project kind: {name}")]
    UnknownKind { name: String },

    #[error("unknown identifier mode: {name}")]
    UnknownIdMode { name: String },

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("{ide} cannot build for platform '{platform}'")]
    IncompatiblePlatform { ide: String, platform: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownSetting { key } => vec![
                format!("'{}' is not a recognized project setting", key),
                "Known settings: kind, projectname, platform, finalfolder,".into(),
                "  configurations, sourcefolders, exclude, defines, includefolders".into(),
            ],
            Self::InvalidSettingValue { key, expected } => vec![
                format!("Fix the value of '{}' in your projects.json", key),
                format!("Expected {}", expected),
            ],
            Self::UnknownIde { name } => vec![
                format!("'{}' is not a known IDE", name),
                "Try: ideforge list targets".into(),
            ],
            Self::UnknownPlatform { name } => vec![
                format!("'{}' is not a known platform", name),
                "Try: ideforge list platforms".into(),
            ],
            Self::UnknownKind { .. } => vec!["Supported kinds: library, tool, game".into()],
            Self::EmptyProjectName => vec![
                "Set \"projectname\" in projects.json".into(),
                "Or run from a directory whose name can serve as the project name".into(),
            ],
            Self::AbsoluteSourceFolder { path } => vec![
                format!("Rewrite '{}' relative to the project root", path),
            ],
            Self::IncompatiblePlatform { ide, platform } => vec![
                format!("{} projects cannot target {}", ide, platform),
                "Change \"platform\" before this target in projects.json".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration(_)
            | Self::UnknownSetting { .. }
            | Self::InvalidSettingValue { .. }
            | Self::EmptyProjectName
            | Self::AbsoluteSourceFolder { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnknownIde { .. }
            | Self::UnknownPlatform { .. }
            | Self::UnknownKind { .. }
            | Self::UnknownIdMode { .. } => ErrorCategory::NotFound,
            Self::IncompatiblePlatform { .. } => ErrorCategory::Compatibility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
