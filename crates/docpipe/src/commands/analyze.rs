use anyhow::Result;
use docpipe_corpus::{ReportOptions, build_report, utc_timestamp};
use docpipe_io::{emit_report, output_label, scan_documents};
use docpipe_settings::{PipelineSettings, REPORT_FILE_NAME, Stage};

use super::await_upstream;

pub(crate) fn handle(settings: &PipelineSettings, no_wait: bool) -> Result<()> {
    let stage = Stage::Analyze;
    let paths = settings.stage_paths(stage);
    await_upstream(stage, &paths, settings, no_wait)?;

    let scan = scan_documents(&paths.input_dir)?;
    let options = ReportOptions {
        top_words: settings.top_words,
        top_ngrams: settings.top_ngrams,
    };
    let report = build_report(&scan.documents, &options);

    let report_path = paths.output_dir.join(REPORT_FILE_NAME);
    let marker_path = paths.completion_marker(stage);
    let label = output_label(&settings.shared_dir, &report_path);
    emit_report(&report, &report_path, &marker_path, &label, &utc_timestamp())?;

    tracing::info!(
        documents = report.documents_processed,
        skipped = scan.warnings.len(),
        total_words = report.total_words,
        unique_words = report.unique_words,
        "analysis complete"
    );
    println!("{}", report_path.display());
    Ok(())
}
