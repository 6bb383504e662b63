//! # afk_trace
//!
//! Offline report generator for the AFK engine's shape enumeration
//! debug trace (the output produced when the engine is built with
//! `AFK_SHAPE_ENUM_DEBUG`). A trace is read in one forward pass, folded
//! into per-entity and per-shape-cell relations keyed by frame, and
//! summarized as a two-section text report:
//!
//! ```text
//! ENTITIES
//! ========
//!
//! Entity 0, 0, 0, 1, counter 5: Seen in 3 frames (75%)
//!
//! SHAPES
//! ======
//!
//! Entity 0, 0, 0, 1, counter 5, shape cell 1, 1, 1, 1, key 2: Cached 1 times (25%), Enqueued 2 times (50%)
//! ```
//!
//! Unrecognized lines are skipped silently; the only fatal condition is
//! an unreadable input stream. Report rows follow map key order, so a
//! given input always produces the same output from this crate; byte
//! identity with other consumers of the trace format is not a goal.
//!
//! ```
//! use afk_trace::TraceLog;
//!
//! let mut log = TraceLog::new();
//! log.observe_line("Now computing frame Frame 1");
//! log.observe_line("ASED: Enqueued entity: worldCell=Cell(0, 0, 0, scale 1), entity counter=5");
//! let report = afk_trace::generate_report(&log);
//! assert!(report.contains("Seen in 1 frames (100%)"));
//! ```

pub mod cell;
pub mod parser;
pub mod record;
pub mod report;
pub mod trace;

pub use cell::{Cell, KeyedCell};
pub use record::{EntityKey, ShapeKey, TraceRecord};
pub use report::{generate_report, summarize, EntityRow, ReportSummary, ShapeRow, StatusCount};
pub use trace::TraceLog;

/// Trace tool error
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// Reading an input stream failed. Fatal: no partial report is
    /// produced.
    #[error("failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One-call convenience: fold a sequence of lines and render the report.
pub fn report_from_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut log = TraceLog::new();
    for line in lines {
        log.observe_line(line.as_ref());
    }
    generate_report(&log)
}
