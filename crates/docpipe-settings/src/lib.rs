//! # docpipe-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings for the pipeline stages. The binary fills these from
//! `docpipe.toml` and then applies command-line overrides on top.
//!
//! ## What belongs here
//! * Directory layout of the shared tree and its defaults
//! * Poll interval and report table sizes
//! * Stage marker file names
//!
//! ## What does NOT belong here
//! * Clap parsing (use docpipe-config)
//! * Reading records or writing reports

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "docpipe.toml";

pub const FETCH_COMPLETE: &str = "fetch_complete.json";
pub const PROCESS_COMPLETE: &str = "process_complete.json";
pub const ANALYZE_COMPLETE: &str = "analyze_complete.json";
pub const REPORT_FILE_NAME: &str = "final_report.json";

pub const DEFAULT_SHARED_DIR: &str = "/shared";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// The stages this tool runs. Fetching is done elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Process,
    Analyze,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Process => "process",
            Stage::Analyze => "analyze",
        }
    }

    /// Marker written by the upstream stage.
    pub fn awaits(self) -> &'static str {
        match self {
            Stage::Process => FETCH_COMPLETE,
            Stage::Analyze => PROCESS_COMPLETE,
        }
    }

    /// Marker this stage writes when it finishes.
    pub fn completes(self) -> &'static str {
        match self {
            Stage::Process => PROCESS_COMPLETE,
            Stage::Analyze => ANALYZE_COMPLETE,
        }
    }
}

/// Settings shared by every stage.
///
/// Only `shared_dir` needs to be set in practice; the four stage
/// directories derive from it unless given explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineSettings {
    pub shared_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_dir: Option<PathBuf>,
    pub poll_interval_ms: u64,
    pub top_words: usize,
    pub top_ngrams: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            shared_dir: PathBuf::from(DEFAULT_SHARED_DIR),
            raw_dir: None,
            processed_dir: None,
            analysis_dir: None,
            status_dir: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            top_words: 100,
            top_ngrams: 100,
        }
    }
}

/// Input, output and status directories resolved for one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePaths {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub status_dir: PathBuf,
}

impl StagePaths {
    /// Marker this stage waits for.
    pub fn awaited_marker(&self, stage: Stage) -> PathBuf {
        self.status_dir.join(stage.awaits())
    }

    /// Marker this stage writes.
    pub fn completion_marker(&self, stage: Stage) -> PathBuf {
        self.status_dir.join(stage.completes())
    }
}

impl PipelineSettings {
    /// Parse settings from TOML text.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load settings from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// `docpipe.toml` in `dir`, if there is one.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.derived(&self.raw_dir, "raw")
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.derived(&self.processed_dir, "processed")
    }

    pub fn analysis_dir(&self) -> PathBuf {
        self.derived(&self.analysis_dir, "analysis")
    }

    pub fn status_dir(&self) -> PathBuf {
        self.derived(&self.status_dir, "status")
    }

    fn derived(&self, explicit: &Option<PathBuf>, leaf: &str) -> PathBuf {
        explicit
            .clone()
            .unwrap_or_else(|| self.shared_dir.join(leaf))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn stage_paths(&self, stage: Stage) -> StagePaths {
        let (input_dir, output_dir) = match stage {
            Stage::Process => (self.raw_dir(), self.processed_dir()),
            Stage::Analyze => (self.processed_dir(), self.analysis_dir()),
        };
        StagePaths {
            input_dir,
            output_dir,
            status_dir: self.status_dir(),
        }
    }

    /// Point a stage's input directory somewhere else.
    pub fn set_input_dir(&mut self, stage: Stage, dir: PathBuf) {
        match stage {
            Stage::Process => self.raw_dir = Some(dir),
            Stage::Analyze => self.processed_dir = Some(dir),
        }
    }

    /// Point a stage's output directory somewhere else.
    pub fn set_output_dir(&mut self, stage: Stage, dir: PathBuf) {
        match stage {
            Stage::Process => self.processed_dir = Some(dir),
            Stage::Analyze => self.analysis_dir = Some(dir),
        }
    }
}
