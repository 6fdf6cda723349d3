//! Document Source: turns a directory of processed records into documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docpipe_types::{Document, DocumentStatistics};
use serde_json::Value;

/// A record that was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWarning {
    pub id: String,
    pub reason: String,
}

/// Result of one pass over the input directory.
#[derive(Debug, Clone, Default)]
pub struct SourceScan {
    /// Valid documents, ordered by id.
    pub documents: Vec<Document>,
    pub warnings: Vec<SourceWarning>,
}

/// Regular files in `dir` whose lower-cased name ends in `.{ext}`, sorted
/// by file name. A file named just `.json` matches `json`.
pub fn list_files_with_extension(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let suffix = format!(".{}", ext.to_ascii_lowercase());
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_ascii_lowercase();
        if name.ends_with(&suffix) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read every `*.json` record in `dir`.
///
/// Unreadable or malformed records are skipped; each one yields a
/// [`SourceWarning`] and a `warn` event. Only a failure to list the
/// directory itself is an error.
pub fn scan_documents(dir: &Path) -> Result<SourceScan> {
    let mut scan = SourceScan::default();

    for path in list_files_with_extension(dir, "json")? {
        let id = file_id(&path);
        match read_document(&path, &id) {
            Ok(doc) => scan.documents.push(doc),
            Err(reason) => {
                tracing::warn!(doc_id = %id, %reason, "skipping document");
                scan.warnings.push(SourceWarning { id, reason });
            }
        }
    }

    tracing::info!(
        documents = scan.documents.len(),
        skipped = scan.warnings.len(),
        dir = %dir.display(),
        "ingested documents"
    );
    Ok(scan)
}

fn file_id(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_document(path: &Path, id: &str) -> Result<Document, String> {
    let bytes = fs::read(path).map_err(|e| format!("unreadable: {e}"))?;
    let value: Value =
        serde_json::from_slice(&bytes).map_err(|e| format!("invalid JSON: {e}"))?;
    parse_record(id, &value)
}

/// Build a document from a decoded record.
///
/// `text` is required and must be a string. A `statistics` object that does
/// not fit [`DocumentStatistics`] is ignored rather than rejected.
pub fn parse_record(id: &str, value: &Value) -> Result<Document, String> {
    let Some(object) = value.as_object() else {
        return Err("record is not a JSON object".to_string());
    };
    let text = match object.get("text") {
        Some(Value::String(text)) => text,
        Some(_) => return Err("field `text` is not a string".to_string()),
        None => return Err("missing field `text`".to_string()),
    };

    let mut doc = Document::new(id, text.as_str());
    if let Some(stats) = object.get("statistics") {
        match serde_json::from_value::<DocumentStatistics>(stats.clone()) {
            Ok(stats) => doc = doc.with_statistics(stats),
            Err(err) => tracing::debug!(doc_id = %id, error = %err, "ignoring statistics"),
        }
    }
    Ok(doc)
}
