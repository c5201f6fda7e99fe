//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ideforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{FileCategory, IdMode, Ide, ProjectConfiguration, ProjectModel, ProjectScript};
use crate::error::ForgeResult;

// ── Source tree ──────────────────────────────────────────────────────────────

/// What a directory entry is, as reported without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    Directory,
    Symlink,
    /// FIFOs, sockets, device nodes.
    Other,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Port for reading the scanned source tree.
///
/// Implemented by:
/// - `ideforge_adapters::filesystem::LocalFilesystem` (production)
/// - `ideforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait SourceTree: Send + Sync {
    /// List the immediate children of `path`. Non-recursive.
    fn list_dir(&self, path: &Path) -> ForgeResult<Vec<DirEntry>>;

    /// True if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

// ── Writer ───────────────────────────────────────────────────────────────────

/// Port for writing generated project files.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectWriter: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write bytes to a file, replacing any previous content.
    fn write_file(&self, path: &Path, contents: &[u8]) -> ForgeResult<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

// ── Scripts ──────────────────────────────────────────────────────────────────

/// Port for loading project scripts.
pub trait ScriptSource: Send + Sync {
    /// Read and parse the script at `path`.
    fn load(&self, path: &Path) -> ForgeResult<ProjectScript>;

    /// True if a script file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

// ── Emitters ─────────────────────────────────────────────────────────────────

/// Everything an emitter gets to see.
#[derive(Debug, Clone, Copy)]
pub struct EmitRequest<'a> {
    pub ide: Ide,
    pub configuration: &'a ProjectConfiguration,
    pub model: &'a ProjectModel,
}

/// A file operation an emitter asks for. Paths are relative to the project
/// root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Write { path: PathBuf, contents: Vec<u8> },
    Remove { path: PathBuf },
}

impl Artifact {
    pub fn write(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self::Write {
            path: path.into(),
            contents: contents.into(),
        }
    }

    pub fn remove(path: impl Into<PathBuf>) -> Self {
        Self::Remove { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Write { path, .. } | Self::Remove { path } => path,
        }
    }
}

/// Port for one family of IDE project formats.
///
/// Emitters are pure: they build every artifact in memory from the model and
/// never touch the filesystem. The service writes what they return.
pub trait TargetEmitter: Send + Sync {
    /// Short name for logs and listings.
    fn name(&self) -> &'static str;

    /// Whether this emitter generates projects for `ide`.
    fn handles(&self, ide: Ide) -> bool;

    /// The identifier scheme this format uses.
    fn id_mode(&self) -> IdMode;

    /// The format's word for a file category, if it has one.
    fn role_for(&self, category: FileCategory) -> Option<&'static str>;

    /// Build the artifacts for one target.
    fn emit(&self, request: &EmitRequest<'_>) -> ForgeResult<Vec<Artifact>>;
}
