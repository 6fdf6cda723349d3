//! Report Emitter: atomic JSON writes and the report-then-marker sequence.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use docpipe_types::{CompletionMarker, CorpusReport};
use serde::Serialize;
use tempfile::NamedTempFile;

/// Write `value` as pretty JSON to `path` so readers never observe a
/// partial file.
///
/// The bytes go to a temporary file in the destination directory, are
/// synced, and the temporary file is then renamed over `path`.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, value)
            .with_context(|| format!("Failed to serialize {}", path.display()))?;
        writer.write_all(b"\n")?;
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Persist the report, then the completion marker.
///
/// The marker is only attempted once the report is fully on disk, so a
/// marker on disk always points at a complete report.
pub fn emit_report(
    report: &CorpusReport,
    report_path: &Path,
    marker_path: &Path,
    output_label: &str,
    timestamp: &str,
) -> Result<()> {
    write_json_atomic(report_path, report)?;
    tracing::info!(path = %report_path.display(), "report written");

    let marker = CompletionMarker {
        timestamp: timestamp.to_string(),
        output: output_label.to_string(),
    };
    write_json_atomic(marker_path, &marker)?;
    tracing::info!(path = %marker_path.display(), "completion marker written");
    Ok(())
}

/// How the marker refers to the report: relative to `root` when the report
/// lives under it, the full path otherwise.
pub fn output_label(root: &Path, report_path: &Path) -> String {
    match report_path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => report_path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_relative_to_root() {
        let label = output_label(
            Path::new("/shared"),
            Path::new("/shared/analysis/final_report.json"),
        );
        assert_eq!(label, "analysis/final_report.json");
    }

    #[test]
    fn label_falls_back_to_full_path() {
        let label = output_label(Path::new("/shared"), Path::new("/tmp/out/report.json"));
        assert_eq!(label, "/tmp/out/report.json");
    }
}
