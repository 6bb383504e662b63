//! Line classification for the shape enumeration debug trace
//!
//! Three independent matchers, each recognizing one line shape anchored
//! at the start of the line. Trailing content after a full match is
//! tolerated, the same way the original trace consumers behaved. The
//! shapes are mutually exclusive by construction (each starts with a
//! distinct literal), so the order the matchers are tried in does not
//! matter.

use crate::cell::{Cell, KeyedCell};
use crate::record::{EntityKey, ShapeKey, TraceRecord};

/// Cursor over a line, consuming literals and integer captures.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Consume an exact literal, or fail the match.
    fn literal(&mut self, expected: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    /// Consume a signed decimal integer (optional leading `-`, at least
    /// one digit).
    fn int(&mut self) -> Option<i64> {
        let body = self.rest.strip_prefix('-').unwrap_or(self.rest);
        let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        let end = self.rest.len() - body.len() + digits;
        let (number, rest) = self.rest.split_at(end);
        let value = number.parse().ok()?;
        self.rest = rest;
        Some(value)
    }

    /// Consume a bare word token (ASCII alphanumerics and underscores,
    /// at least one character).
    fn word(&mut self) -> Option<&'a str> {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(word)
    }

    /// Consume a `Cell(x, y, z, scale s)` rendering.
    fn cell(&mut self) -> Option<Cell> {
        self.literal("Cell(")?;
        let x = self.int()?;
        self.literal(", ")?;
        let y = self.int()?;
        self.literal(", ")?;
        let z = self.int()?;
        self.literal(", scale ")?;
        let scale = self.int()?;
        self.literal(")")?;
        Some(Cell::new(x, y, z, scale))
    }

    /// Consume a `Cell(x, y, z, scale s, key k)` rendering.
    fn keyed_cell(&mut self) -> Option<KeyedCell> {
        self.literal("Cell(")?;
        let x = self.int()?;
        self.literal(", ")?;
        let y = self.int()?;
        self.literal(", ")?;
        let z = self.int()?;
        self.literal(", scale ")?;
        let scale = self.int()?;
        self.literal(", key ")?;
        let key = self.int()?;
        self.literal(")")?;
        Some(KeyedCell { cell: Cell::new(x, y, z, scale), key })
    }
}

/// `Now computing frame Frame <n>`
pub fn match_frame_marker(line: &str) -> Option<i64> {
    let mut s = Scanner::new(line);
    s.literal("Now computing frame Frame ")?;
    s.int()
}

/// `ASED: Enqueued entity: worldCell=Cell(...), entity counter=<c>`
pub fn match_entity_enqueue(line: &str) -> Option<EntityKey> {
    let mut s = Scanner::new(line);
    s.literal("ASED: Enqueued entity: worldCell=")?;
    let world_cell = s.cell()?;
    s.literal(", entity counter=")?;
    let counter = s.int()?;
    Some(EntityKey::new(world_cell, counter))
}

/// `ASED: Shape cell Cell(...) of entity: worldCell=Cell(...), entity counter=<c> <status>`
///
/// The owning entity is identified by the world-cell fields, not the
/// shape-cell fields.
pub fn match_shape_enqueue(line: &str) -> Option<(EntityKey, ShapeKey, String)> {
    let mut s = Scanner::new(line);
    s.literal("ASED: Shape cell ")?;
    let shape_cell = s.keyed_cell()?;
    s.literal(" of entity: worldCell=")?;
    let world_cell = s.cell()?;
    s.literal(", entity counter=")?;
    let counter = s.int()?;
    s.literal(" ")?;
    let status = s.word()?;
    Some((
        EntityKey::new(world_cell, counter),
        ShapeKey(shape_cell),
        status.to_string(),
    ))
}

/// Classify one trace line, or `None` for noise.
pub fn classify(line: &str) -> Option<TraceRecord> {
    if let Some(frame) = match_frame_marker(line) {
        return Some(TraceRecord::FrameMarker(frame));
    }
    if let Some(entity) = match_entity_enqueue(line) {
        return Some(TraceRecord::EntityEnqueue { entity });
    }
    if let Some((entity, shape, status)) = match_shape_enqueue(line) {
        return Some(TraceRecord::ShapeEnqueue { entity, shape, status });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_marker() {
        assert_eq!(match_frame_marker("Now computing frame Frame 42"), Some(42));
        assert_eq!(match_frame_marker("Now computing frame Frame -3"), Some(-3));
        assert_eq!(match_frame_marker("Now computing frame Frame"), None);
        assert_eq!(match_frame_marker("now computing frame Frame 1"), None);
    }

    #[test]
    fn test_frame_marker_not_anchored_at_end() {
        // Trailing content after the captured number is tolerated.
        assert_eq!(match_frame_marker("Now computing frame Frame 7 (vsync)"), Some(7));
    }

    #[test]
    fn test_entity_enqueue() {
        let key = match_entity_enqueue(
            "ASED: Enqueued entity: worldCell=Cell(1, -2, 3, scale 4), entity counter=5",
        )
        .unwrap();
        assert_eq!(key, EntityKey::new(Cell::new(1, -2, 3, 4), 5));
    }

    #[test]
    fn test_entity_enqueue_negative_counter() {
        let key = match_entity_enqueue(
            "ASED: Enqueued entity: worldCell=Cell(0, 0, 0, scale 1), entity counter=-9",
        )
        .unwrap();
        assert_eq!(key.counter, -9);
    }

    #[test]
    fn test_shape_enqueue() {
        let (entity, shape, status) = match_shape_enqueue(
            "ASED: Shape cell Cell(7, 8, 9, scale 2, key -11) of entity: \
             worldCell=Cell(1, 2, 3, scale 4), entity counter=6 Enqueued",
        )
        .unwrap();
        assert_eq!(entity, EntityKey::new(Cell::new(1, 2, 3, 4), 6));
        assert_eq!(shape, ShapeKey(KeyedCell::new(7, 8, 9, 2, -11)));
        assert_eq!(status, "Enqueued");
    }

    #[test]
    fn test_partial_pattern_is_noise() {
        // Missing the `scale` literal: not a match, not an error.
        assert_eq!(
            classify("ASED: Enqueued entity: worldCell=Cell(1, 2, 3, 4), entity counter=5"),
            None
        );
        // Missing the status word.
        assert_eq!(
            match_shape_enqueue(
                "ASED: Shape cell Cell(0, 0, 0, scale 1, key 1) of entity: \
                 worldCell=Cell(0, 0, 0, scale 1), entity counter=1 "
            ),
            None
        );
    }

    #[test]
    fn test_noise_lines() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("loading shader program 3"), None);
        assert_eq!(classify("ASED: something unrelated"), None);
    }

    #[test]
    fn test_classify_tags() {
        assert!(matches!(
            classify("Now computing frame Frame 1"),
            Some(TraceRecord::FrameMarker(1))
        ));
        assert!(matches!(
            classify("ASED: Enqueued entity: worldCell=Cell(0, 0, 0, scale 1), entity counter=5"),
            Some(TraceRecord::EntityEnqueue { .. })
        ));
        assert!(matches!(
            classify(
                "ASED: Shape cell Cell(0, 0, 0, scale 1, key 2) of entity: \
                 worldCell=Cell(0, 0, 0, scale 1), entity counter=5 Cached"
            ),
            Some(TraceRecord::ShapeEnqueue { .. })
        ));
    }
}
