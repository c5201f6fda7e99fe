use serde::Serialize;

use crate::domain::entities::{
    catalog::Catalog,
    grouping::{GroupMap, GroupTree},
};

/// Everything an emitter needs to know about the source tree.
///
/// Built once per target from the discovered catalog and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectModel {
    pub catalog: Catalog,
    pub groups: GroupMap,
    pub tree: GroupTree,
}

impl ProjectModel {
    pub fn build(catalog: Catalog) -> Self {
        let groups = GroupMap::from_catalog(&catalog);
        let tree = GroupTree::from_groups(&groups);
        Self {
            catalog,
            groups,
            tree,
        }
    }

    pub fn include_directories(&self) -> &[String] {
        self.catalog.include_directories()
    }
}
