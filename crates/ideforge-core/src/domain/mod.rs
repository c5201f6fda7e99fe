// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for ideforge.
//!
//! This module contains the canonical project model: classification,
//! grouping, identifiers and the configuration that drives them. All I/O is
//! handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Deterministic**: Every output is a pure function of its inputs
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod paths;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    catalog::{Catalog, CatalogBuilder},
    grouping::{GroupMap, GroupNode, GroupTree},
    identifier::{IdMode, IdentifiedEntry, Identifier, IdentifierResolver, SemanticKey},
    model::ProjectModel,
    project::{ProjectConfiguration, ProjectConfigurationBuilder},
    script::{Plan, PlannedTarget, ProjectScript, ScriptStep, SettingValue, SettingsPatch},
    source_entry::SourceEntry,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{FileCategory, Ide, Platform, ProjectKind};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn model(files: &[&str]) -> ProjectModel {
        let mut builder = Catalog::builder();
        for p in files {
            let folder = match paths::parent_group_key(p) {
                "" => ".",
                dir => dir,
            };
            builder.push(
                folder,
                SourceEntry::new(*p, PathBuf::from("/src"), capabilities::classify(p).unwrap()),
            );
        }
        ProjectModel::build(builder.build())
    }

    // ========================================================================
    // Grouping Scenarios
    // ========================================================================

    #[test]
    fn nested_folder_becomes_single_node() {
        let m = model(&["core/a.cpp", "core/b.h"]);

        for entry in m.catalog.entries() {
            assert_eq!(entry.group_key(), "core");
        }
        let nodes = m.tree.nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "core");
        assert_eq!(nodes[0].entries.len(), 2);
        assert!(m.groups.root_entries().is_empty());
    }

    #[test]
    fn every_group_key_prefix_exists_in_tree() {
        let m = model(&["a/b/c/1.cpp", "a/x/2.h", "d/3.c", "4.cpp"]);
        for key in m.groups.keys().filter(|k| !k.is_empty()) {
            let segments: Vec<&str> = key.split('/').collect();
            for i in 1..=segments.len() {
                let prefix = segments[..i].join("/");
                assert!(m.tree.find(&prefix).is_some(), "missing node {prefix}");
            }
        }
    }

    // ========================================================================
    // Identifier Scenarios
    // ========================================================================

    #[test]
    fn file_ids_are_project_independent_synthetic_ids_are_not() {
        let resolver = IdentifierResolver::new(IdMode::TruncatedContentHash);
        let alpha = model(&["x.cpp"]);
        let beta = model(&["x.cpp"]);

        let file_a = resolver.annotate(&alpha.catalog.entries()[0], |_| None);
        let file_b = resolver.annotate(&beta.catalog.entries()[0], |_| None);
        assert_eq!(file_a.identifier, file_b.identifier);

        let products_a = resolver.resolve(&SemanticKey::synthetic("Products", "Alpha"));
        let products_b = resolver.resolve(&SemanticKey::synthetic("Products", "Beta"));
        assert_ne!(products_a, products_b);
    }

    #[test]
    fn model_is_deterministic() {
        let a = model(&["z/1.cpp", "a/2.h", "m.cpp"]);
        let b = model(&["m.cpp", "a/2.h", "z/1.cpp"]);
        assert_eq!(a.catalog.entries(), b.catalog.entries());
        assert_eq!(a.groups, b.groups);
        assert_eq!(a.tree, b.tree);
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    #[test]
    fn script_plan_feeds_validator() {
        let script = ProjectScript::new(vec![ScriptStep::Generate(Ide::Vs2010)]);
        let plan = script.plan(&ProjectConfiguration::default()).unwrap();
        let target = &plan.targets[0];
        assert!(DomainValidator::validate_configuration(&target.configuration).is_ok());
        assert!(
            DomainValidator::validate_platform(target.ide, target.configuration.platform())
                .is_ok()
        );
    }
}
