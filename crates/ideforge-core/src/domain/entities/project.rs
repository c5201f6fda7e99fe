//! The `ProjectConfiguration` aggregate and its typestate builder.
//!
//! A configuration is immutable. Script steps never edit one in place;
//! [`ProjectConfiguration::apply`] returns a new, re-validated value.
//!
//! # Typestate builder
//!
//! The builder uses two phantom markers (`NoName` / `HasName`) so that
//! `build()` only exists once a project name has been supplied. Everything
//! else falls back to the documented defaults.
//!
//! # Domain purity
//!
//! This module must not import `tracing` or touch the filesystem.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::Serialize;

use crate::domain::{
    entities::script::SettingsPatch,
    error::DomainError,
    value_objects::{Ide, Platform, ProjectKind},
};

pub const DEFAULT_PROJECT_NAME: &str = "project";
pub const DEFAULT_CONFIGURATIONS: &[&str] = &["Debug", "Internal", "Release"];
pub const DEFAULT_SOURCE_FOLDER: &str = ".";

/// Final folder used by the scriptless default on Windows.
pub const WINDOWS_FINAL_FOLDER: &str = "$(sdks)/windows/bin/";
/// Final folder used by the scriptless default when an Xcode target is asked for.
pub const MACOSX_FINAL_FOLDER: &str = "$(SDKS)/macosx/bin/";

// ── Aggregate ────────────────────────────────────────────────────────────────

/// Everything that shapes one generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfiguration {
    name: String,
    kind: ProjectKind,
    platform: Platform,
    configurations: Vec<String>,
    include_folders: Vec<String>,
    defines: Vec<String>,
    exclude: Vec<String>,
    source_folders: Vec<String>,
    final_folder: Option<String>,
}

impl ProjectConfiguration {
    pub fn builder() -> ProjectConfigurationBuilder<NoName> {
        ProjectConfigurationBuilder::new()
    }

    /// The configuration used when no script exists.
    ///
    /// The project is named after `root`. Asking for any Xcode target
    /// switches the platform to macosx.
    pub fn default_for_directory(root: &Path, requested: &[Ide]) -> Result<Self, DomainError> {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (platform, final_folder) = if requested.iter().any(|ide| ide.is_xcode()) {
            (Platform::MacOsx, MACOSX_FINAL_FOLDER)
        } else {
            (Platform::Windows, WINDOWS_FINAL_FOLDER)
        };

        Self::builder()
            .name(name)
            .kind(ProjectKind::Tool)
            .platform(platform)
            .final_folder(final_folder)
            .build()
    }

    /// A copy with one more source folder, unless already present.
    pub fn with_source_folder(mut self, folder: impl Into<String>) -> Self {
        let folder = folder.into();
        if !self.source_folders.contains(&folder) {
            self.source_folders.push(folder);
        }
        self
    }

    /// A new configuration with every field the patch carries replaced.
    pub fn apply(&self, patch: &SettingsPatch) -> Result<Self, DomainError> {
        let mut next = self.clone();
        if let Some(kind) = patch.kind {
            next.kind = kind;
        }
        if let Some(name) = &patch.project_name {
            next.name = name.clone();
        }
        if let Some(platform) = patch.platform {
            next.platform = platform;
        }
        if let Some(folder) = &patch.final_folder {
            next.final_folder = Some(folder.clone()).filter(|f| !f.is_empty());
        }
        if let Some(v) = &patch.configurations {
            next.configurations = v.clone();
        }
        if let Some(v) = &patch.source_folders {
            next.source_folders = v.clone();
        }
        if let Some(v) = &patch.exclude {
            next.exclude = v.clone();
        }
        if let Some(v) = &patch.defines {
            next.defines = v.clone();
        }
        if let Some(v) = &patch.include_folders {
            next.include_folders = v.clone();
        }
        next.validate()?;
        Ok(next)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        if self.configurations.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "configurations",
            });
        }
        if let Some(path) = self.source_folders.iter().find(|f| is_absolute(f)) {
            return Err(DomainError::AbsoluteSourceFolder { path: path.clone() });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn kind(&self) -> ProjectKind {
        self.kind
    }
    pub const fn platform(&self) -> Platform {
        self.platform
    }
    pub fn configurations(&self) -> &[String] {
        &self.configurations
    }
    pub fn include_folders(&self) -> &[String] {
        &self.include_folders
    }
    pub fn defines(&self) -> &[String] {
        &self.defines
    }
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }
    pub fn source_folders(&self) -> &[String] {
        &self.source_folders
    }
    pub fn final_folder(&self) -> Option<&str> {
        self.final_folder.as_deref()
    }

    /// Case-insensitive exact match against the exclusion list.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.exclude.iter().any(|e| e.to_lowercase() == name)
    }

    /// The configuration Xcode and solution files treat as the default.
    pub fn default_configuration(&self) -> Option<&str> {
        self.configurations
            .iter()
            .find(|c| c.as_str() == "Release")
            .or_else(|| self.configurations.first())
            .map(String::as_str)
    }
}

impl Default for ProjectConfiguration {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            kind: ProjectKind::Tool,
            platform: Platform::Windows,
            configurations: DEFAULT_CONFIGURATIONS.iter().map(|s| s.to_string()).collect(),
            include_folders: Vec::new(),
            defines: Vec::new(),
            exclude: Vec::new(),
            source_folders: vec![DEFAULT_SOURCE_FOLDER.to_string()],
            final_folder: None,
        }
    }
}

impl fmt::Display for ProjectConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} for {})", self.name, self.kind, self.platform)
    }
}

fn is_absolute(folder: &str) -> bool {
    let bytes = folder.as_bytes();
    folder.starts_with('/')
        || folder.starts_with('\\')
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

// ── Typestate markers ────────────────────────────────────────────────────────

/// Marker: no project name yet.
pub struct NoName;
/// Marker: project name set; `build()` is available.
pub struct HasName;

// ── Builder ──────────────────────────────────────────────────────────────────

pub struct ProjectConfigurationBuilder<N> {
    inner: ProjectConfiguration,
    _marker: PhantomData<N>,
}

impl ProjectConfigurationBuilder<NoName> {
    pub fn new() -> Self {
        Self {
            inner: ProjectConfiguration::default(),
            _marker: PhantomData,
        }
    }

    /// Set the project name. This transitions the builder to `HasName`.
    pub fn name(mut self, name: impl Into<String>) -> ProjectConfigurationBuilder<HasName> {
        self.inner.name = name.into();
        ProjectConfigurationBuilder {
            inner: self.inner,
            _marker: PhantomData,
        }
    }
}

impl Default for ProjectConfigurationBuilder<NoName> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> ProjectConfigurationBuilder<N> {
    pub fn kind(mut self, kind: ProjectKind) -> Self {
        self.inner.kind = kind;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.inner.platform = platform;
        self
    }

    pub fn final_folder(mut self, folder: impl Into<String>) -> Self {
        self.inner.final_folder = Some(folder.into());
        self
    }

    pub fn configurations<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.configurations = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn source_folders<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.source_folders = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.exclude = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn defines<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.defines = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn include_folders<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.include_folders = items.into_iter().map(Into::into).collect();
        self
    }
}

impl ProjectConfigurationBuilder<HasName> {
    pub fn build(self) -> Result<ProjectConfiguration, DomainError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
