//! Implementation of the `ideforge inspect` command.
//!
//! Shows the configuration, catalog and identifiers a generator would see,
//! without writing anything.

use serde_json::json;
use tracing::instrument;

use ideforge_core::{
    application::{Inspection, PlanRequest},
    domain::IdMode,
};

use crate::{
    cli::{InspectArgs, InspectFormat, OutputFormat},
    commands::{build_service, resolve_root},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

const KEY_WIDTH: usize = 16;

#[instrument(skip_all)]
pub fn execute(args: InspectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.directory.as_deref())?;
    let service = build_service(config.generate.policy);

    let request = PlanRequest {
        scripts: args.file.iter().cloned().collect(),
        default_script: config.project.default_script.clone(),
        targets: Vec::new(),
    };
    let configuration = service.resolve_configuration(&root, &request)?;
    let inspection = service.inspect(&root, &configuration, IdMode::from(args.mode))?;

    if args.format == InspectFormat::Json || output.format() == OutputFormat::Json {
        output.json(&inspection_json(&inspection))?;
        return Ok(());
    }

    let cfg = &inspection.configuration;
    output.header(&format!("Project {}", cfg.name()))?;
    output.row("kind", cfg.kind().as_str(), KEY_WIDTH)?;
    output.row("platform", cfg.platform().as_str(), KEY_WIDTH)?;
    output.row("configurations", &cfg.configurations().join(", "), KEY_WIDTH)?;
    output.row("source folders", &cfg.source_folders().join(", "), KEY_WIDTH)?;
    if !cfg.defines().is_empty() {
        output.row("defines", &cfg.defines().join(", "), KEY_WIDTH)?;
    }
    if let Some(folder) = cfg.final_folder() {
        output.row("final folder", folder, KEY_WIDTH)?;
    }
    output.row("identifiers", inspection.mode.as_str(), KEY_WIDTH)?;

    output.print("")?;
    output.header(&format!("Files ({})", inspection.entries.len()))?;
    for entry in &inspection.entries {
        output.print(&format!(
            "  {}  {:<16}  {}",
            entry.identifier,
            entry.entry.category().as_str(),
            entry.entry.relative_path()
        ))?;
    }

    if !inspection.groups.is_empty() {
        output.print("")?;
        output.header(&format!("Groups ({})", inspection.groups.len()))?;
        for (path, id) in &inspection.groups {
            output.print(&format!("  {id}  {path}"))?;
        }
    }

    let includes = inspection.model.include_directories();
    if !includes.is_empty() {
        output.print("")?;
        output.header("Include directories")?;
        for dir in includes {
            output.print(&format!("  {dir}"))?;
        }
    }
    Ok(())
}

fn inspection_json(inspection: &Inspection) -> serde_json::Value {
    json!({
        "configuration": inspection.configuration,
        "mode": inspection.mode,
        "files": inspection.entries.iter().map(|e| json!({
            "path": e.entry.relative_path(),
            "category": e.entry.category(),
            "group": e.entry.group_key(),
            "identifier": e.identifier,
        })).collect::<Vec<_>>(),
        "groups": inspection.groups.iter().map(|(path, id)| json!({
            "path": path,
            "identifier": id,
        })).collect::<Vec<_>>(),
        "include_directories": inspection.model.include_directories(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ideforge_core::domain::{
        Catalog, IdentifierResolver, ProjectConfiguration, ProjectModel, SourceEntry, capabilities,
    };

    use super::*;

    #[test]
    fn json_carries_identifiers_and_groups() {
        let mut builder = Catalog::builder();
        builder.push(
            "core",
            SourceEntry::new(
                "core/a.cpp",
                PathBuf::from("/src/core"),
                capabilities::classify("a.cpp").unwrap(),
            ),
        );
        let model = ProjectModel::build(builder.build());
        let resolver = IdentifierResolver::new(IdMode::TruncatedContentHash);
        let entries = model
            .catalog
            .entries()
            .iter()
            .map(|e| resolver.annotate(e, |_| None))
            .collect::<Vec<_>>();
        let id = entries[0].identifier.clone();

        let inspection = Inspection {
            configuration: ProjectConfiguration::default(),
            mode: IdMode::TruncatedContentHash,
            model,
            entries,
            groups: vec![("core".into(), id.clone())],
        };

        let value = inspection_json(&inspection);
        assert_eq!(value["mode"], "truncated-content-hash");
        assert_eq!(value["files"][0]["path"], "core/a.cpp");
        assert_eq!(value["files"][0]["group"], "core");
        assert_eq!(value["files"][0]["identifier"], id.as_str());
        assert_eq!(value["groups"][0]["path"], "core");
    }
}
