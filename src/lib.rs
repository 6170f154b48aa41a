//! # Scour - JSON Anonymization Toolkit
//!
//! A unified library for scrubbing sensitive values out of JSON while
//! preserving structure, reducing JSON to type skeletons, and extracting
//! tagged payload strings from log-export arrays.
//!
//! ## Modules
//!
//! - **scrub**: Recursive value transformation (scrub/structure policies)
//!   and the string classifier that anonymizes leaf strings
//! - **rawstring**: Tagged-entry extraction from JSON arrays
//!
//! ## Quick Start
//!
//! ### Scrubbing
//!
//! ```rust
//! use scour::{Policy, ScrubConfig, Session, Transformer};
//! use serde_json::json;
//!
//! let input = json!({
//!     "email": "alice@corp.io",
//!     "attempts": 3,
//!     "note": "hello"
//! });
//!
//! let transformer = Transformer::new(ScrubConfig::default());
//! let mut session = Session::new();
//! let scrubbed = transformer.transform(&input, Policy::Scrub, &mut session);
//!
//! assert_eq!(scrubbed["email"], json!("user@example.com"));
//! assert_eq!(scrubbed["attempts"], json!(0));
//! assert_eq!(scrubbed["note"], json!("XXXXX"));
//! assert_eq!(session.counts.strings, 2);
//! ```
//!
//! ### Extraction
//!
//! ```rust
//! use scour::extract_tagged;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let export = json!([
//!     {"@rawstring": "payload one"},
//!     {"@rawstring": ""}
//! ]);
//!
//! let extraction = extract_tagged(&export)?;
//! assert_eq!(extraction.strings, vec!["payload one"]);
//! assert_eq!(extraction.total_seen, 2);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::BufRead;

pub mod error;
pub mod rawstring;
pub mod scrub;

// Re-export commonly used types for convenience
pub use error::Error;
pub use rawstring::{extract_tagged, Extraction, TAG_FIELD};
pub use scrub::{LeafCounts, Policy, ScrubConfig, Session, Transformer};

/// A line that could not be parsed as JSON and was skipped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line: usize,
    pub reason: String,
}

/// The outcome of one scrub/structure pass over line-delimited input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineReport {
    /// Non-blank lines seen, whether parsed or skipped
    pub total_lines: usize,

    /// Pretty-printed transformed values, one per successfully parsed line
    pub rendered: Vec<String>,

    /// Diagnostics for every malformed line
    pub skipped: Vec<SkippedLine>,

    /// Leaf composition of all values fed into the transformer
    pub counts: LeafCounts,
}

/// Main entry point: transform a stream of line-delimited JSON values.
///
/// Each non-blank line is parsed independently. Malformed lines are skipped
/// with a console warning and recorded in the report's `skipped` list; they
/// never abort the batch. One [`Session`] covers the whole stream, so
/// pseudonyms stay consistent and counters accumulate across lines.
pub fn process_lines<R: BufRead>(
    reader: R,
    policy: Policy,
    config: ScrubConfig,
) -> Result<LineReport> {
    let transformer = Transformer::new(config);
    let mut session = Session::new();
    let mut report = LineReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        report.total_lines += 1;

        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                let transformed = transformer.transform(&value, policy, &mut session);
                report
                    .rendered
                    .push(serde_json::to_string_pretty(&transformed)?);
            }
            Err(err) => {
                eprintln!("Warning: invalid JSON on line {}: {}", idx + 1, err);
                report.skipped.push(SkippedLine {
                    line: idx + 1,
                    reason: err.to_string(),
                });
            }
        }
    }

    report.counts = session.counts;
    Ok(report)
}
