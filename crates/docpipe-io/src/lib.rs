//! # docpipe-io
//!
//! **Tier 3 (Adapters)**
//!
//! The file-system edges of a pipeline stage. Everything that touches the
//! shared directory tree lives here so the aggregation crates stay pure.
//!
//! ## What belongs here
//! * Enumerating and parsing per-document records ([`source`])
//! * Atomic JSON writes and the report/marker sequence ([`emit`])
//! * Waiting on a sibling stage's readiness signal ([`ready`])
//!
//! ## What does NOT belong here
//! * Statistics or tokenization
//! * Argument parsing or logging setup

pub mod emit;
pub mod ready;
pub mod source;

pub use emit::{emit_report, output_label, write_json_atomic};
pub use ready::{MarkerFile, Readiness, wait_until_ready, wait_until_ready_with};
pub use source::{SourceScan, SourceWarning, list_files_with_extension, scan_documents};
