//! Directory-shaped grouping of catalog entries.
//!
//! [`GroupMap`] is the flat partition (group key → entries). [`GroupTree`]
//! nests the non-root keys segment by segment. Both are built once from a
//! sorted [`Catalog`] and never mutated, and both use `BTreeMap` so iteration
//! order is the ascending key order regardless of how entries arrived.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{catalog::Catalog, source_entry::SourceEntry};

// ── GroupMap ─────────────────────────────────────────────────────────────────

/// Group key → entries. The root group is keyed by `""`.
///
/// Entry lists keep catalog order, i.e. normalized-path order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupMap {
    groups: BTreeMap<String, Vec<Arc<SourceEntry>>>,
}

impl GroupMap {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut groups: BTreeMap<String, Vec<Arc<SourceEntry>>> = BTreeMap::new();
        for entry in catalog.entries() {
            groups
                .entry(entry.group_key())
                .or_default()
                .push(Arc::clone(entry));
        }
        Self { groups }
    }

    pub fn get(&self, key: &str) -> Option<&[Arc<SourceEntry>]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Files directly under the project root.
    pub fn root_entries(&self) -> &[Arc<SourceEntry>] {
        self.get("").unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Arc<SourceEntry>])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// True when every entry sits in the root group.
    pub fn has_only_root(&self) -> bool {
        self.groups.keys().all(String::is_empty)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ── GroupTree ────────────────────────────────────────────────────────────────

/// One directory segment in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNode {
    /// The segment name, e.g. `core`.
    pub name: String,
    /// The full group key, e.g. `src/core`.
    pub path: String,
    pub children: BTreeMap<String, GroupNode>,
    /// Files whose group key is exactly `path`.
    pub entries: Vec<Arc<SourceEntry>>,
}

impl GroupNode {
    fn new(name: &str, path: String) -> Self {
        Self {
            name: name.to_string(),
            path,
            children: BTreeMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn children(&self) -> impl Iterator<Item = &GroupNode> {
        self.children.values()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nesting depth; top-level nodes are 0.
    pub fn depth(&self) -> usize {
        self.path.matches('/').count()
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a GroupNode>) {
        out.push(self);
        for child in self.children.values() {
            child.collect(out);
        }
    }
}

/// Nested view of the non-root groups. The root itself is implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupTree {
    roots: BTreeMap<String, GroupNode>,
}

impl GroupTree {
    pub fn from_groups(groups: &GroupMap) -> Self {
        let mut roots: BTreeMap<String, GroupNode> = BTreeMap::new();

        for (key, entries) in groups.iter() {
            let segments: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).collect();
            let Some((first, rest)) = segments.split_first() else {
                continue;
            };

            let mut path = (*first).to_string();
            let mut node = roots
                .entry((*first).to_string())
                .or_insert_with(|| GroupNode::new(first, path.clone()));
            for segment in rest {
                path.push('/');
                path.push_str(segment);
                node = node
                    .children
                    .entry((*segment).to_string())
                    .or_insert_with(|| GroupNode::new(segment, path.clone()));
            }
            node.entries.extend(entries.iter().cloned());
        }

        Self { roots }
    }

    /// Top-level nodes in ascending segment order.
    pub fn roots(&self) -> impl Iterator<Item = &GroupNode> {
        self.roots.values()
    }

    /// Every node, pre-order, children in ascending segment order.
    pub fn nodes(&self) -> Vec<&GroupNode> {
        let mut out = Vec::new();
        for root in self.roots.values() {
            root.collect(&mut out);
        }
        out
    }

    pub fn find(&self, path: &str) -> Option<&GroupNode> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let mut node = self.roots.get(segments.next()?)?;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{capabilities::classify, entities::catalog::Catalog};
    use std::path::PathBuf;

    fn catalog(paths: &[&str]) -> Catalog {
        let mut b = Catalog::builder();
        for p in paths {
            let folder = crate::domain::paths::parent_group_key(p);
            let folder = if folder.is_empty() { "." } else { folder };
            b.push(
                folder,
                SourceEntry::new(*p, PathBuf::from("/r"), classify(p).unwrap()),
            );
        }
        b.build()
    }

    #[test]
    fn root_files_live_in_map_not_tree() {
        let c = catalog(&["a.cpp", "core/b.h"]);
        let map = GroupMap::from_catalog(&c);
        let tree = GroupTree::from_groups(&map);

        assert_eq!(map.root_entries().len(), 1);
        assert_eq!(tree.nodes().len(), 1);
        assert_eq!(tree.nodes()[0].path, "core");
    }

    #[test]
    fn every_prefix_becomes_a_node() {
        let c = catalog(&["src/gfx/dx9/a.cpp", "src/b.h"]);
        let map = GroupMap::from_catalog(&c);
        let tree = GroupTree::from_groups(&map);

        let paths: Vec<_> = tree.nodes().iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["src", "src/gfx", "src/gfx/dx9"]);
        assert!(tree.find("src/gfx").unwrap().entries.is_empty());
        assert_eq!(tree.find("src/gfx/dx9").unwrap().entries.len(), 1);
        assert_eq!(tree.find("src").unwrap().entries.len(), 1);
        assert_eq!(tree.find("src/gfx/dx9").unwrap().depth(), 2);
    }

    #[test]
    fn children_in_ascending_order() {
        let c = catalog(&["z/a.cpp", "m/a.cpp", "a/a.cpp", "m/b/c.h"]);
        let tree = GroupTree::from_groups(&GroupMap::from_catalog(&c));
        let roots: Vec<_> = tree.roots().map(|n| n.name.as_str()).collect();
        assert_eq!(roots, vec!["a", "m", "z"]);
    }

    #[test]
    fn shape_independent_of_insertion_order() {
        let a = catalog(&["x/y/1.cpp", "x/2.cpp", "w/3.h"]);
        let b = catalog(&["w/3.h", "x/2.cpp", "x/y/1.cpp"]);
        assert_eq!(
            GroupTree::from_groups(&GroupMap::from_catalog(&a)),
            GroupTree::from_groups(&GroupMap::from_catalog(&b))
        );
    }

    #[test]
    fn each_entry_in_exactly_one_group() {
        let c = catalog(&["a.cpp", "x/b.cpp", "x/y/c.cpp", "x/y/d.h"]);
        let map = GroupMap::from_catalog(&c);
        let total: usize = map.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, c.len());
        assert!(!map.has_only_root());
    }
}
