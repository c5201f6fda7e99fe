//! Discovery Service - turns configured source folders into a catalog.
//!
//! For each folder, in configuration order:
//! 1. Skip it silently if it is not an existing directory
//! 2. List its immediate children (no recursion)
//! 3. Keep regular files that are not excluded and have a known extension
//!
//! The resulting catalog is sorted once at the end, so listing order never
//! leaks into the model.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};

use crate::{
    application::ports::{EntryKind, SourceTree},
    domain::{Catalog, ProjectConfiguration, SourceEntry, capabilities, paths},
    error::ForgeResult,
};

/// The folder name that stands for the project root itself.
const ROOT_FOLDER: &str = ".";

pub struct DiscoveryService {
    tree: Box<dyn SourceTree>,
}

impl DiscoveryService {
    pub fn new(tree: Box<dyn SourceTree>) -> Self {
        Self { tree }
    }

    /// True if `path` is an existing directory in the scanned tree.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.tree.is_dir(path)
    }

    /// Scan `root` according to `config`.
    ///
    /// Missing folders and unclassifiable files are not errors. A failure to
    /// list an existing folder is.
    #[instrument(skip_all, fields(root = %root.display(), project = %config.name()))]
    pub fn discover(&self, root: &Path, config: &ProjectConfiguration) -> ForgeResult<Catalog> {
        let mut builder = Catalog::builder();

        for folder in config.source_folders() {
            let folder = normalize_folder(folder);
            let directory = resolve_folder(root, &folder);

            if !self.tree.is_dir(&directory) {
                debug!(folder = %folder, "Source folder not found, skipping");
                continue;
            }

            let mut added = 0usize;
            for child in self.tree.list_dir(&directory)? {
                if child.kind != EntryKind::File {
                    trace!(name = %child.name, kind = ?child.kind, "Skipping non-file");
                    continue;
                }
                if config.is_excluded(&child.name) {
                    debug!(name = %child.name, "Excluded");
                    continue;
                }
                let Some(category) = capabilities::classify(&child.name) else {
                    trace!(name = %child.name, "Unclassified, skipping");
                    continue;
                };

                let relative_path = if folder == ROOT_FOLDER {
                    child.name.clone()
                } else {
                    format!("{}/{}", folder, child.name)
                };
                let entry = SourceEntry::new(relative_path, directory.clone(), category);
                if builder.push(&folder, entry) {
                    added += 1;
                }
            }
            debug!(folder = %folder, files = added, "Scanned source folder");
        }

        let catalog = builder.build();
        info!(
            files = catalog.len(),
            include_dirs = catalog.include_directories().len(),
            "Discovery complete"
        );
        Ok(catalog)
    }
}

/// Forward slashes, no trailing separator, `.` for an empty folder.
fn normalize_folder(folder: &str) -> String {
    let folder = paths::to_forward_slash(folder);
    let trimmed = folder.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_FOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

fn resolve_folder(root: &Path, folder: &str) -> PathBuf {
    if folder == ROOT_FOLDER {
        root.to_path_buf()
    } else {
        root.join(folder)
    }
}
