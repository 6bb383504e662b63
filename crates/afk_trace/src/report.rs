//! Aggregation and report formatting
//!
//! Pass 2 walks the recorded frame sequence (outer loop) against the
//! relations (inner loops) and compiles occurrence counts. A frame value
//! that appears twice in the sequence is revisited twice, so matching
//! observations count twice and the percentage denominator grows twice;
//! this mirrors the established tool behaviour and is relied on by its
//! consumers. Pass 3 is formatting only.

use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::{EntityKey, ShapeKey};
use crate::trace::TraceLog;

/// One ENTITIES report row.
#[derive(Debug, Clone, Serialize)]
pub struct EntityRow {
    pub entity: EntityKey,
    /// Frame-sequence entries at which this entity had an enqueue.
    pub frames_seen: u64,
    /// Share of the whole frame sequence; `None` when no frame marker
    /// was ever observed (empty denominator).
    pub percent: Option<f64>,
}

/// Occurrence count for one status of one (entity, shape cell) pair.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub frames_seen: u64,
    pub percent: Option<f64>,
}

/// One SHAPES report row.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeRow {
    pub entity: EntityKey,
    pub shape: ShapeKey,
    pub statuses: Vec<StatusCount>,
}

/// The aggregated report, in the order its rows are printed.
///
/// Rows follow map key order, so output is deterministic for a given
/// input within this tool. Byte-identical output versus other readers
/// of the same trace format is explicitly not promised.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Length of the recorded frame sequence, duplicate markers
    /// included. Denominator for every percentage.
    pub frames_observed: usize,
    pub entities: Vec<EntityRow>,
    pub shapes: Vec<ShapeRow>,
}

fn percent_of(count: u64, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(100.0 * count as f64 / denominator as f64)
    }
}

/// Compile occurrence counts from an accumulated trace (pass 2).
pub fn summarize(log: &TraceLog) -> ReportSummary {
    let frames = log.frames();

    let mut entity_counts: BTreeMap<EntityKey, u64> = BTreeMap::new();
    for frame in frames {
        for (entity, seen) in log.entity_enqueues() {
            if seen.contains(frame) {
                *entity_counts.entry(*entity).or_insert(0) += 1;
            }
        }
    }

    let mut shape_counts: BTreeMap<(EntityKey, ShapeKey), BTreeMap<String, u64>> = BTreeMap::new();
    for frame in frames {
        for (entity, shapes) in log.shape_enqueues() {
            for (shape, by_frame) in shapes {
                if let Some(status) = by_frame.get(frame) {
                    *shape_counts
                        .entry((*entity, *shape))
                        .or_default()
                        .entry(status.clone())
                        .or_insert(0) += 1;
                }
            }
        }
    }

    let entities: Vec<EntityRow> = entity_counts
        .into_iter()
        .map(|(entity, frames_seen)| EntityRow {
            entity,
            frames_seen,
            percent: percent_of(frames_seen, frames.len()),
        })
        .collect();

    let shapes: Vec<ShapeRow> = shape_counts
        .into_iter()
        .map(|((entity, shape), statuses)| ShapeRow {
            entity,
            shape,
            statuses: statuses
                .into_iter()
                .map(|(status, frames_seen)| StatusCount {
                    status,
                    frames_seen,
                    percent: percent_of(frames_seen, frames.len()),
                })
                .collect(),
        })
        .collect();

    log::info!(
        "aggregated {} frame markers into {} entity rows and {} shape rows",
        frames.len(),
        entities.len(),
        shapes.len()
    );

    ReportSummary {
        frames_observed: frames.len(),
        entities,
        shapes,
    }
}

struct Percent(Option<f64>);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "{}%", p),
            None => write!(f, "n/a"),
        }
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ENTITIES")?;
        writeln!(f, "========")?;
        writeln!(f)?;
        for row in &self.entities {
            writeln!(
                f,
                "Entity {}: Seen in {} frames ({})",
                row.entity,
                row.frames_seen,
                Percent(row.percent)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "SHAPES")?;
        writeln!(f, "======")?;
        writeln!(f)?;
        for row in &self.shapes {
            write!(f, "Entity {}, shape cell {}: ", row.entity, row.shape)?;
            for (i, status) in row.statuses.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(
                    f,
                    "{} {} times ({})",
                    status.status,
                    status.frames_seen,
                    Percent(status.percent)
                )?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// Generate the full text report from an accumulated trace.
pub fn generate_report(log: &TraceLog) -> String {
    summarize(log).to_string()
}
