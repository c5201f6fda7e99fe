use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{paths, value_objects::FileCategory};

/// One classified source file.
///
/// Immutable once created; catalogs share entries as `Arc<SourceEntry>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEntry {
    relative_path: String,
    directory: PathBuf,
    category: FileCategory,
}

impl SourceEntry {
    pub fn new(relative_path: impl Into<String>, directory: PathBuf, category: FileCategory) -> Self {
        Self {
            relative_path: paths::to_forward_slash(&relative_path.into()),
            directory,
            category,
        }
    }

    /// Forward-slash path from the project root.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// The absolute directory the file was found in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub const fn category(&self) -> FileCategory {
        self.category
    }

    pub fn file_name(&self) -> &str {
        paths::basename(&self.relative_path)
    }

    pub fn group_key(&self) -> String {
        paths::group_key(&self.relative_path)
    }

    /// Relative path with `\` separators, as Windows project files want it.
    pub fn windows_path(&self) -> String {
        paths::to_back_slash(&self.relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_on_construction() {
        let e = SourceEntry::new("core\\a.cpp", PathBuf::from("/r/core"), FileCategory::TranslationUnit);
        assert_eq!(e.relative_path(), "core/a.cpp");
        assert_eq!(e.windows_path(), "core\\a.cpp");
        assert_eq!(e.file_name(), "a.cpp");
        assert_eq!(e.group_key(), "core");
    }

    #[test]
    fn root_level_entry_has_empty_group() {
        let e = SourceEntry::new("b.h", PathBuf::from("/r"), FileCategory::Header);
        assert_eq!(e.group_key(), "");
    }
}
