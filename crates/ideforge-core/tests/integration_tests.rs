//! Integration tests for ideforge-core.
//!
//! These drive discovery and modeling through the public API with an
//! in-test source tree, then check the documented scenarios end to end.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ideforge_core::{
    application::{DirEntry, DiscoveryService, EntryKind, SourceTree},
    domain::{
        FileCategory, IdMode, Identifier, IdentifierResolver, ProjectConfiguration, ProjectModel,
        SemanticKey,
    },
    error::ForgeResult,
};

/// Directory path → children.
#[derive(Default)]
struct FixtureTree {
    dirs: BTreeMap<PathBuf, Vec<DirEntry>>,
}

impl FixtureTree {
    fn with_dir(mut self, path: &str, files: &[&str]) -> Self {
        self.dirs.insert(
            PathBuf::from(path),
            files.iter().map(|f| DirEntry::file(*f)).collect(),
        );
        self
    }
}

impl SourceTree for FixtureTree {
    fn list_dir(&self, path: &Path) -> ForgeResult<Vec<DirEntry>> {
        Ok(self.dirs.get(path).cloned().unwrap_or_default())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains_key(path)
    }
}

fn discover(tree: FixtureTree, root: &str, config: &ProjectConfiguration) -> ProjectModel {
    let service = DiscoveryService::new(Box::new(tree));
    ProjectModel::build(service.discover(Path::new(root), config).unwrap())
}

#[test]
fn round_trip_scenario() {
    let tree = FixtureTree::default().with_dir("/p", &["a.cpp", "b.h", "readme.txt", "notes.md"]);
    let config = ProjectConfiguration::builder()
        .name("demo")
        .source_folders(["."])
        .exclude(["readme.txt"])
        .build()
        .unwrap();

    let model = discover(tree, "/p", &config);

    let got: Vec<_> = model
        .catalog
        .entries()
        .iter()
        .map(|e| (e.relative_path(), e.category()))
        .collect();
    assert_eq!(
        got,
        vec![
            ("a.cpp", FileCategory::TranslationUnit),
            ("b.h", FileCategory::Header)
        ]
    );
    assert_eq!(model.include_directories(), &["."]);
    assert!(model.tree.is_empty());
    assert_eq!(model.groups.root_entries().len(), 2);
}

#[test]
fn nested_grouping_scenario() {
    let tree = FixtureTree::default().with_dir("/tmp/src/core", &["a.cpp", "b.h"]);
    let config = ProjectConfiguration::builder()
        .name("demo")
        .source_folders(["core"])
        .build()
        .unwrap();

    let model = discover(tree, "/tmp/src", &config);

    for entry in model.catalog.entries() {
        assert_eq!(entry.group_key(), "core");
    }
    let nodes = model.tree.nodes();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name, "core");
    let owned: Vec<_> = nodes[0].entries.iter().map(|e| e.relative_path()).collect();
    assert_eq!(owned, vec!["core/a.cpp", "core/b.h"]);
}

#[test]
fn naming_scenario() {
    let make = |name: &str| {
        let tree = FixtureTree::default().with_dir(&format!("/{name}"), &["x.cpp"]);
        let config = ProjectConfiguration::builder().name(name).build().unwrap();
        discover(tree, &format!("/{name}"), &config)
    };
    let alpha = make("Alpha");
    let beta = make("Beta");

    let resolver = IdentifierResolver::new(IdMode::TruncatedContentHash);
    let role = |c: FileCategory| (c == FileCategory::TranslationUnit).then_some("Sources");
    let a = resolver.annotate(&alpha.catalog.entries()[0], role);
    let b = resolver.annotate(&beta.catalog.entries()[0], role);
    assert_eq!(a.identifier, b.identifier);
    assert_eq!(a.category_identifier, b.category_identifier);

    let products = |project: &str| resolver.resolve(&SemanticKey::synthetic("Products", project));
    assert_ne!(products("Alpha"), products("Beta"));
}

#[test]
fn two_runs_produce_identical_models() {
    let build = || {
        let tree = FixtureTree::default()
            .with_dir("/p", &["main.cpp", "main.h", "app.rc"])
            .with_dir("/p/src", &["z.cpp", "a.hpp", "shader.hlsl"])
            .with_dir("/p/src/gfx", &["dx9.cpp"]);
        let config = ProjectConfiguration::builder()
            .name("demo")
            .source_folders([".", "src", "src/gfx"])
            .build()
            .unwrap();
        discover(tree, "/p", &config)
    };

    let first = build();
    let second = build();
    assert_eq!(first, second);

    let ids = |m: &ProjectModel| -> Vec<Identifier> {
        let resolver = IdentifierResolver::new(IdMode::NamespaceHash);
        m.catalog
            .entries()
            .iter()
            .map(|e| resolver.annotate(e, |_| None).identifier)
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn exclusion_and_classification() {
    let tree = FixtureTree::default().with_dir(
        "/p",
        &["Keep.CPP", "skip.h", "SKIP.c", "data.bin", "res.rsrc", "r.r"],
    );
    let config = ProjectConfiguration::builder()
        .name("demo")
        .exclude(["skip.h", "skip.c"])
        .build()
        .unwrap();

    let model = discover(tree, "/p", &config);
    let names: Vec<_> = model
        .catalog
        .entries()
        .iter()
        .map(|e| e.relative_path())
        .collect();
    assert_eq!(names, vec!["Keep.CPP", "r.r", "res.rsrc"]);
    assert!(
        model
            .catalog
            .by_category(&[FileCategory::MacResource])
            .all(|e| e.relative_path().starts_with('r'))
    );
}

#[test]
fn symlinks_are_never_cataloged() {
    let mut tree = FixtureTree::default().with_dir("/p", &["a.cpp"]);
    tree.dirs.get_mut(Path::new("/p")).unwrap().push(DirEntry {
        name: "linked.cpp".into(),
        kind: EntryKind::Symlink,
    });
    let config = ProjectConfiguration::builder().name("demo").build().unwrap();

    let model = discover(tree, "/p", &config);
    assert_eq!(model.catalog.len(), 1);
}

#[test]
fn model_and_configuration_serialize_for_display() {
    let tree = FixtureTree::default().with_dir("/p/core", &["a.cpp"]);
    let config = ProjectConfiguration::builder()
        .name("demo")
        .source_folders(["core"])
        .build()
        .unwrap();
    let model = discover(tree, "/p", &config);

    let config_json = serde_json::to_value(&config).unwrap();
    assert_eq!(config_json["name"], "demo");
    assert_eq!(config_json["kind"], "tool");
    assert_eq!(config_json["platform"], "windows");

    let model_json = serde_json::to_string(&model).unwrap();
    assert!(model_json.contains("core/a.cpp"));
    assert!(model_json.contains("translation-unit"));
}
