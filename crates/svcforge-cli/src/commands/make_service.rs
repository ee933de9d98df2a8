//! Implementation of the `svcforge make-service` command.
//!
//! Responsibility: translate CLI arguments and configuration into a
//! `ServiceRequest` plus `ScaffoldSettings`, call the core scaffold service,
//! and display results. No naming rules live here.

use serde::Serialize;
use tracing::{info, instrument};

use svcforge_adapters::{LocalFilesystem, SimpleRenderer, stub_store};
use svcforge_core::application::{ScaffoldPlan, ScaffoldService, ServiceRequest};

use crate::{
    cli::MakeServiceArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `svcforge make-service` command.
///
/// Dispatch sequence:
/// 1. Resolve settings from config and `--root` / `--namespace`
/// 2. Select the stub store
/// 3. Plan (resolve + render); stop here on `--dry-run`
/// 4. Write the files and report each one
#[instrument(skip_all, fields(name = %args.name, interface = args.interface))]
pub fn execute(args: MakeServiceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Settings
    let settings = config.to_settings(args.root.as_deref(), args.namespace.as_deref())?;

    // 2. Adapters
    let store = stub_store::discover(config.stubs_dir(args.root.as_deref()));
    let service = ScaffoldService::new(
        store,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let request = ServiceRequest::new(args.name).with_interface(args.interface);

    // 3. Plan
    let plan = service.plan(&request, &settings)?;

    if args.dry_run {
        return show_plan(&plan, &output);
    }

    // 4. Write
    let report = service.execute(&plan)?;
    info!(class = %report.class_name, files = report.files.len(), "Service created");

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    for file in &report.files {
        output.file_written(&file.path, file.outcome)?;
    }
    for warning in &report.warnings {
        output.warning(warning)?;
    }

    Ok(())
}

#[derive(Serialize)]
struct PlannedFile<'a> {
    role: String,
    stub: String,
    path: &'a str,
}

fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let files: Vec<_> = plan
            .files
            .iter()
            .map(|f| PlannedFile {
                role: f.role.to_string(),
                stub: f.stub.to_string(),
                path: f.path.as_str(),
            })
            .collect();
        output.json(&files)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create {} in {}",
        plan.identity.class_name(),
        plan.identity.namespace()
    ))?;
    for file in &plan.files {
        output.print(&format!("  Would create: {}", file.path))?;
    }
    for warning in &plan.warnings {
        output.warning(warning)?;
    }
    Ok(())
}
