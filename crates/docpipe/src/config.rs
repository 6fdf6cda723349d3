use std::path::PathBuf;

use anyhow::{Context, Result};
use docpipe_config::{Cli, GlobalArgs};
use docpipe_settings::PipelineSettings;

/// The settings file to load: `--config`, else `./docpipe.toml` if present.
fn settings_path(global: &GlobalArgs) -> Result<Option<PathBuf>> {
    if let Some(path) = &global.config {
        return Ok(Some(path.clone()));
    }
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    Ok(PipelineSettings::discover(&cwd))
}

pub(crate) fn load_settings(global: &GlobalArgs) -> Result<PipelineSettings> {
    let Some(path) = settings_path(global)? else {
        return Ok(PipelineSettings::default());
    };
    let settings = PipelineSettings::from_file(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// File settings with the subcommand's flags layered on top.
pub(crate) fn resolve(cli: &Cli) -> Result<PipelineSettings> {
    let mut settings = load_settings(&cli.global)?;
    cli.command.args().apply(cli.command.stage(), &mut settings);
    Ok(settings)
}
