//! The flat, ordered list of discovered source files.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::{entities::source_entry::SourceEntry, paths, value_objects::FileCategory};

/// Discovered files in normalized-path order, plus the folders that
/// contributed at least one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<Arc<SourceEntry>>,
    include_directories: Vec<String>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn entries(&self) -> &[Arc<SourceEntry>] {
        &self.entries
    }

    pub fn include_directories(&self) -> &[String] {
        &self.include_directories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, relative_path: &str) -> Option<&Arc<SourceEntry>> {
        let wanted = paths::to_forward_slash(relative_path);
        self.entries.iter().find(|e| e.relative_path() == wanted)
    }

    /// Entries whose category is in `categories`, in catalog order.
    pub fn by_category<'a>(
        &'a self,
        categories: &'a [FileCategory],
    ) -> impl Iterator<Item = &'a Arc<SourceEntry>> + 'a {
        self.entries
            .iter()
            .filter(move |e| categories.contains(&e.category()))
    }

    pub fn has_category(&self, category: FileCategory) -> bool {
        self.entries.iter().any(|e| e.category() == category)
    }
}

/// Accumulates entries in discovery order and sorts once at the end.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    seen: HashSet<String>,
    entries: Vec<Arc<SourceEntry>>,
    include_directories: Vec<String>,
}

impl CatalogBuilder {
    /// Add an entry found in `folder`.
    ///
    /// Returns `false` (and drops the entry) when its relative path is
    /// already present. The first occurrence wins.
    pub fn push(&mut self, folder: &str, entry: SourceEntry) -> bool {
        if !self.seen.insert(entry.relative_path().to_string()) {
            return false;
        }
        if !self.include_directories.iter().any(|d| d == folder) {
            self.include_directories.push(folder.to_string());
        }
        self.entries.push(Arc::new(entry));
        true
    }

    pub fn build(mut self) -> Catalog {
        // stable: ties keep discovery order
        self.entries
            .sort_by(|a, b| paths::compare_normalized(a.relative_path(), b.relative_path()));
        Catalog {
            entries: self.entries,
            include_directories: self.include_directories,
        }
    }
}
