//! # docpipe-config
//!
//! **Tier 4 (Configuration)**
//!
//! Clap definitions for the `docpipe` command line and the mapping of
//! parsed flags onto [`PipelineSettings`].
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Value enums and their defaults
//! * Applying flag overrides to settings
//!
//! ## What does NOT belong here
//! * Running stages
//! * Reading the TOML file (use docpipe-settings)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use docpipe_settings::{PipelineSettings, Stage};
use serde::{Deserialize, Serialize};

/// `docpipe` turns scraped pages into a corpus report, one stage at a time.
#[derive(Parser, Debug)]
#[command(name = "docpipe", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file (defaults to ./docpipe.toml when present).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Aggregate processed records into final_report.json.
    Analyze(StageArgs),
    /// Strip raw HTML pages into processed records.
    Process(StageArgs),
}

impl Commands {
    pub fn stage(&self) -> Stage {
        match self {
            Commands::Analyze(_) => Stage::Analyze,
            Commands::Process(_) => Stage::Process,
        }
    }

    pub fn args(&self) -> &StageArgs {
        match self {
            Commands::Analyze(args) | Commands::Process(args) => args,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct StageArgs {
    /// Root of the shared directory tree.
    #[arg(long, value_name = "DIR")]
    pub shared_dir: Option<PathBuf>,

    /// Directory the stage reads from.
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory the stage writes to.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory holding the stage completion markers.
    #[arg(long, value_name = "DIR")]
    pub status_dir: Option<PathBuf>,

    /// Milliseconds between readiness checks.
    #[arg(long, value_name = "N")]
    pub poll_interval_ms: Option<u64>,

    /// Start immediately instead of waiting for the upstream marker.
    #[arg(long)]
    pub no_wait: bool,
}

impl StageArgs {
    /// Layer these flags over settings loaded from file.
    pub fn apply(&self, stage: Stage, settings: &mut PipelineSettings) {
        if let Some(dir) = &self.shared_dir {
            settings.shared_dir = dir.clone();
        }
        if let Some(dir) = &self.input_dir {
            settings.set_input_dir(stage, dir.clone());
        }
        if let Some(dir) = &self.output_dir {
            settings.set_output_dir(stage, dir.clone());
        }
        if let Some(dir) = &self.status_dir {
            settings.status_dir = Some(dir.clone());
        }
        if let Some(ms) = self.poll_interval_ms {
            settings.poll_interval_ms = ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_format_defaults_to_text() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
