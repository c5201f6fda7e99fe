//! Implementation of the `ideforge list` command.

use serde_json::json;

use ideforge_core::domain::capabilities::{IDE_REGISTRY, PLATFORM_REGISTRY};

use crate::{
    cli::{ListArgs, ListWhat, OutputFormat},
    commands::build_service,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    match args.what {
        ListWhat::Targets => list_targets(&output),
        ListWhat::Platforms => list_platforms(&output),
    }
}

fn list_targets(output: &OutputManager) -> CliResult<()> {
    let service = build_service(Default::default());

    if output.format() == OutputFormat::Json {
        let rows: Vec<_> = IDE_REGISTRY
            .iter()
            .map(|def| {
                json!({
                    "name": def.ide,
                    "display_name": def.display_name,
                    "code": def.code,
                    "mac_code": def.mac_code,
                    "supported": service.supports(def.ide),
                })
            })
            .collect();
        output.json(&rows)?;
        return Ok(());
    }

    output.header("Targets:")?;
    for def in IDE_REGISTRY {
        let status = if service.supports(def.ide) {
            "supported"
        } else {
            "not supported yet"
        };
        output.print(&format!(
            "  {:<12} {:<18} {:<4} {}",
            def.ide.as_str(),
            def.display_name,
            def.code,
            status
        ))?;
    }
    Ok(())
}

fn list_platforms(output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let rows: Vec<_> = PLATFORM_REGISTRY
            .iter()
            .map(|def| {
                json!({
                    "name": def.platform,
                    "code": def.code,
                    "vs_platforms": def.vs_platforms,
                })
            })
            .collect();
        output.json(&rows)?;
        return Ok(());
    }

    output.header("Platforms:")?;
    for def in PLATFORM_REGISTRY {
        let vs = if def.vs_platforms.is_empty() {
            "-".to_string()
        } else {
            def.vs_platforms.join(", ")
        };
        output.print(&format!(
            "  {:<10} {:<4} {}",
            def.platform.as_str(),
            def.code,
            vs
        ))?;
    }
    Ok(())
}
