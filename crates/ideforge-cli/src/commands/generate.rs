//! Implementation of the `ideforge generate` command.

use std::path::Path;

use serde_json::json;
use tracing::{debug, instrument};

use ideforge_core::application::{BatchPolicy, GenerationReport, PlanRequest};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    commands::{build_service, resolve_root},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `ideforge generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the project root and batch policy
/// 2. Resolve the plan (explicit scripts, default script, or flags)
/// 3. Run the batch
/// 4. Print the report; any failed target makes the command fail
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.directory.as_deref())?;
    let policy = if args.fail_fast {
        BatchPolicy::FailFast
    } else {
        config.generate.policy
    };

    let request = PlanRequest {
        scripts: args.files.clone(),
        default_script: config.project.default_script.clone(),
        targets: args.requested(),
    };
    debug!(
        root = %root.display(),
        scripts = request.scripts.len(),
        targets = request.targets.len(),
        ?policy,
        "Generate requested"
    );

    let service = build_service(policy);
    let plan = service.resolve_plan(&root, &request)?;
    let report = service.run(&root, &plan)?;

    if output.format() == OutputFormat::Json {
        output.json(&report_json(&root, &report))?;
    } else {
        print_report(&root, &report, &output)?;
    }

    match report.failed.first() {
        None => Ok(()),
        Some(first) => Err(CliError::BatchFailed {
            failed: report.failed.len(),
            total: report.total(),
            first: first.error.clone(),
        }),
    }
}

fn print_report(root: &Path, report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for item in &report.unrecognized {
        output.warning(&format!("Unrecognized script item '{item}' ignored"))?;
    }

    for target in &report.generated {
        output.success(&format!("{} ({})", target.project, target.ide))?;
        for file in &target.files {
            output.print(&format!("    {}", display_relative(root, file)))?;
        }
    }

    for target in &report.skipped {
        output.warning(&format!("{}: skipped, {}", target.ide, target.reason))?;
    }

    for target in &report.failed {
        output.error(&format!("{} ({}): {}", target.project, target.ide, target.error))?;
    }

    if report.total() > 1 {
        output.info(&format!(
            "{} generated, {} skipped, {} failed",
            report.generated.len(),
            report.skipped.len(),
            report.failed.len()
        ))?;
    }
    Ok(())
}

fn report_json(root: &Path, report: &GenerationReport) -> serde_json::Value {
    json!({
        "root": root.display().to_string(),
        "generated": report.generated.iter().map(|t| json!({
            "ide": t.ide,
            "project": t.project,
            "files": t.files.iter().map(|f| display_relative(root, f)).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
        "skipped": report.skipped.iter().map(|t| json!({
            "ide": t.ide,
            "reason": t.reason,
        })).collect::<Vec<_>>(),
        "failed": report.failed.iter().map(|t| json!({
            "ide": t.ide,
            "project": t.project,
            "error": t.error.to_string(),
        })).collect::<Vec<_>>(),
        "unrecognized": report.unrecognized,
    })
}

fn display_relative(root: &Path, file: &Path) -> String {
    file.strip_prefix(root).unwrap_or(file).display().to_string()
}
