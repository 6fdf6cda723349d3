use std::fs;

use anyhow::Result;
use docpipe_corpus::utc_timestamp;
use docpipe_io::{list_files_with_extension, write_json_atomic};
use docpipe_markup::{decode_page, process_html, record_file_name};
use docpipe_settings::{PipelineSettings, Stage};
use docpipe_types::ProcessMarker;

use super::await_upstream;

pub(crate) fn handle(settings: &PipelineSettings, no_wait: bool) -> Result<()> {
    let stage = Stage::Process;
    let paths = settings.stage_paths(stage);
    await_upstream(stage, &paths, settings, no_wait)?;

    let pages = list_files_with_extension(&paths.input_dir, "html")?;
    tracing::info!(pages = pages.len(), dir = %paths.input_dir.display(), "processing pages");

    let mut processed_files = Vec::with_capacity(pages.len());
    for page in pages {
        let source_file = page
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = match fs::read(&page) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(doc_id = %source_file, reason = %err, "skipping page");
                continue;
            }
        };
        let html = decode_page(&bytes);

        let record = process_html(&source_file, &html, &utc_timestamp());
        let record_name = record_file_name(&source_file);
        let record_path = paths.output_dir.join(&record_name);
        write_json_atomic(&record_path, &record)?;
        tracing::info!(
            record = %record_name,
            words = record.statistics.word_count,
            "record written"
        );
        println!("{}", record_path.display());
        processed_files.push(record_name);
    }

    let marker = ProcessMarker {
        timestamp: utc_timestamp(),
        processed_files,
    };
    let marker_path = paths.completion_marker(stage);
    write_json_atomic(&marker_path, &marker)?;
    tracing::info!(
        path = %marker_path.display(),
        records = marker.processed_files.len(),
        "processing complete"
    );
    Ok(())
}
