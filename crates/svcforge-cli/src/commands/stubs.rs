//! Implementation of `svcforge stubs list` and `svcforge stubs publish`.

use std::path::Path;

use tracing::instrument;

use svcforge_adapters::{BuiltinStubStore, LocalFilesystem, SimpleRenderer, stub_store};
use svcforge_core::application::TemplateService;

use crate::{
    cli::{ListFormat, StubsCommands},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct stubs subcommand.
pub fn execute(cmd: StubsCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        StubsCommands::List { format } => list(format, &config, &output),
        StubsCommands::Publish { dir } => publish(&dir, &output),
    }
}

fn list(format: ListFormat, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = TemplateService::new(
        stub_store::discover(config.stubs_dir(None)),
        Box::new(SimpleRenderer::new()),
    );
    let stubs = service.list()?;

    if format == ListFormat::Json || output.is_json() {
        output.json(&stubs)?;
        return Ok(());
    }

    output.header(&format!("Stubs (source: {})", service.location()))?;
    for stub in &stubs {
        output.print(&format!(
            "  {:<24} {}",
            stub.file_name,
            stub.placeholders
                .iter()
                .map(|p| format!("${p}$"))
                .collect::<Vec<_>>()
                .join(" ")
        ))?;
    }
    Ok(())
}

/// Publish always copies the built-in stubs, whatever store is active.
#[instrument(skip(output), fields(dir = %dir.display()))]
fn publish(dir: &Path, output: &OutputManager) -> CliResult<()> {
    let service = TemplateService::new(
        Box::new(BuiltinStubStore::new()),
        Box::new(SimpleRenderer::new()),
    );
    let published = service.publish(&LocalFilesystem::new(), dir)?;

    if output.is_json() {
        output.json(&published)?;
        return Ok(());
    }

    for stub in &published {
        output.file_written(&stub.path, stub.outcome)?;
    }
    output.info(&format!(
        "Set [stubs] path = \"{}\" in svcforge.toml to use them",
        dir.display()
    ))?;
    Ok(())
}
