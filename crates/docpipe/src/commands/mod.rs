pub(crate) mod analyze;
pub(crate) mod process;

use anyhow::Result;
use docpipe_config::Commands;
use docpipe_io::{MarkerFile, wait_until_ready};
use docpipe_settings::{PipelineSettings, Stage, StagePaths};

pub(crate) fn dispatch(command: &Commands, settings: &PipelineSettings) -> Result<()> {
    let no_wait = command.args().no_wait;
    match command {
        Commands::Analyze(_) => analyze::handle(settings, no_wait),
        Commands::Process(_) => process::handle(settings, no_wait),
    }
}

/// Block on the upstream marker unless `--no-wait` was given.
pub(crate) fn await_upstream(
    stage: Stage,
    paths: &StagePaths,
    settings: &PipelineSettings,
    no_wait: bool,
) -> Result<()> {
    if no_wait {
        tracing::debug!(stage = stage.name(), "not waiting for upstream marker");
        return Ok(());
    }
    let marker = MarkerFile::new(paths.awaited_marker(stage));
    wait_until_ready(&marker, settings.poll_interval())?;
    Ok(())
}
