//! Repeated runs over the same documents must agree byte for byte,
//! apart from the processing timestamp.

use docpipe_corpus::{ReportOptions, build_report, build_report_at};
use docpipe_types::Document;

fn corpus() -> Vec<Document> {
    (0..12)
        .map(|i| {
            Document::new(
                format!("page_{i:02}.json"),
                format!(
                    "Topic {} appears here. Shared words repeat often! Item-{} is unique? Shared words.",
                    i % 3,
                    i
                ),
            )
        })
        .collect()
}

#[test]
fn same_documents_produce_identical_report_content() {
    let docs = corpus();
    let mut a = build_report(&docs, &ReportOptions::default());
    let mut b = build_report(&docs, &ReportOptions::default());
    a.processing_timestamp.clear();
    b.processing_timestamp.clear();
    assert_eq!(
        serde_json::to_vec_pretty(&a).unwrap(),
        serde_json::to_vec_pretty(&b).unwrap()
    );
}

#[test]
fn pinned_timestamp_reports_are_equal() {
    let docs = corpus();
    let a = build_report_at(&docs, &ReportOptions::default(), "fixed".to_string());
    let b = build_report_at(&docs, &ReportOptions::default(), "fixed".to_string());
    assert_eq!(a, b);
}

#[test]
fn top_word_ordering_snapshot() {
    let docs = vec![
        Document::new("doc1.json", "Cats chase mice. Mice run fast."),
        Document::new("doc2.json", "Dogs chase cats."),
    ];
    let report = build_report_at(&docs, &ReportOptions::default(), "fixed".to_string());
    let rendered = report
        .top_100_words
        .iter()
        .map(|r| format!("{}:{}", r.word, r.count))
        .collect::<Vec<_>>()
        .join(" ");
    insta::assert_snapshot!(rendered, @"cats:2 chase:2 mice:2 dogs:1 fast:1 run:1");
}

#[test]
fn document_order_changes_pairs_but_not_totals() {
    let docs = corpus();
    let mut reversed = docs.clone();
    reversed.reverse();
    let a = build_report_at(&docs, &ReportOptions::default(), "t".to_string());
    let b = build_report_at(&reversed, &ReportOptions::default(), "t".to_string());
    assert_eq!(a.total_words, b.total_words);
    assert_eq!(a.unique_words, b.unique_words);
    assert_eq!(a.top_100_words, b.top_100_words);
    assert_ne!(a.document_similarity, b.document_similarity);
}
