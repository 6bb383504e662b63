//! Trace accumulation: one forward pass over input lines
//!
//! `TraceLog` owns every piece of state the report is computed from, so
//! one process can parse any number of independent traces without
//! leakage between them.

use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;

use crate::parser;
use crate::record::{EntityKey, ShapeKey, TraceRecord};
use crate::TraceError;

/// Everything observed in one forward pass over a trace.
#[derive(Debug, Default, Clone)]
pub struct TraceLog {
    /// Frame context for enqueue records: 0 before the first marker,
    /// then whatever the latest marker announced.
    current_frame: i64,
    /// Frame sequence exactly as encountered. One entry per marker
    /// line; duplicates are preserved, never deduplicated.
    frames: Vec<i64>,
    /// Entity presence per frame value.
    entity_enq: BTreeMap<EntityKey, BTreeSet<i64>>,
    /// Status per (entity, shape cell, frame value). A later record for
    /// the same triple overwrites the earlier status.
    shape_enq: BTreeMap<EntityKey, BTreeMap<ShapeKey, BTreeMap<i64, String>>>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line and fold it in. Returns whether the line was
    /// recognized; noise lines leave the log untouched.
    pub fn observe_line(&mut self, line: &str) -> bool {
        match parser::classify(line) {
            Some(record) => {
                self.observe(record);
                true
            }
            None => false,
        }
    }

    /// Fold one already-classified record into the log.
    pub fn observe(&mut self, record: TraceRecord) {
        match record {
            TraceRecord::FrameMarker(frame) => {
                log::trace!("frame marker: {}", frame);
                self.current_frame = frame;
                self.frames.push(frame);
            }
            TraceRecord::EntityEnqueue { entity } => {
                log::trace!("entity enqueued at frame {}: {}", self.current_frame, entity);
                self.entity_enq
                    .entry(entity)
                    .or_default()
                    .insert(self.current_frame);
            }
            TraceRecord::ShapeEnqueue { entity, shape, status } => {
                log::trace!(
                    "shape cell {} of entity {} at frame {}: {}",
                    shape,
                    entity,
                    self.current_frame,
                    status
                );
                self.shape_enq
                    .entry(entity)
                    .or_default()
                    .entry(shape)
                    .or_default()
                    .insert(self.current_frame, status);
            }
        }
    }

    /// Consume an entire stream, line by line. `source` names the input
    /// in the error if reading fails partway through.
    pub fn read_from<R: BufRead>(&mut self, source: &str, reader: R) -> Result<(), TraceError> {
        let mut recognized = 0usize;
        let mut total = 0usize;
        for line in reader.lines() {
            let line = line.map_err(|e| TraceError::Input {
                path: source.to_string(),
                source: e,
            })?;
            total += 1;
            if self.observe_line(&line) {
                recognized += 1;
            }
        }
        log::debug!("{}: {} of {} lines recognized", source, recognized, total);
        Ok(())
    }

    /// The recorded frame sequence, duplicates included.
    pub fn frames(&self) -> &[i64] {
        &self.frames
    }

    /// Frame values each entity was enqueued at.
    pub fn entity_enqueues(&self) -> &BTreeMap<EntityKey, BTreeSet<i64>> {
        &self.entity_enq
    }

    /// Status per frame value, per shape cell, per entity.
    pub fn shape_enqueues(&self) -> &BTreeMap<EntityKey, BTreeMap<ShapeKey, BTreeMap<i64, String>>> {
        &self.shape_enq
    }
}
