#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;

/// `docpipe` with a clean logging environment, run from `cwd`.
pub fn docpipe_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docpipe"));
    cmd.current_dir(cwd);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create `shared/<sub>` and return it.
pub fn stage_dir(shared: &Path, sub: &str) -> PathBuf {
    let dir = shared.join(sub);
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("reading {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap()
}

/// The two-document corpus used across the analysis scenarios.
pub fn write_scenario_records(processed: &Path) {
    fs::write(
        processed.join("doc1.json"),
        r#"{"source_file": "doc1.html", "text": "Cats chase mice. Mice run fast.",
            "statistics": {"word_count": 6, "sentence_count": 2, "paragraph_count": 1, "avg_word_length": 4.0}}"#,
    )
    .unwrap();
    fs::write(processed.join("doc2.json"), r#"{"text": "Dogs chase cats."}"#).unwrap();
}
