use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to read directory") {
        push_hint(
            &mut out,
            "Check that the stage input directory exists (`--input-dir` or `--shared-dir`).",
        );
    }

    if haystack.contains("no such file or directory") || haystack.contains("cannot find the path")
    {
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("permission denied") {
        push_hint(
            &mut out,
            "Make sure the output and status directories are writable by this user.",
        );
    }

    if haystack.contains("failed to create directory") || haystack.contains("not a directory") {
        push_hint(
            &mut out,
            "A regular file is in the way of an output directory; remove it or pass `--output-dir`.",
        );
    }

    if haystack.contains("failed to load settings")
        && (haystack.contains("parse") || haystack.contains("unknown field"))
    {
        push_hint(
            &mut out,
            "Check `docpipe.toml` syntax and key names (shared_dir, raw_dir, processed_dir, analysis_dir, status_dir, poll_interval_ms, top_words, top_ngrams).",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
