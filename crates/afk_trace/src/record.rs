//! Parsed trace records and the keys they aggregate under

use core::fmt;

use serde::Serialize;

use crate::cell::{Cell, KeyedCell};

/// Identifies one enqueued entity occurrence: the world cell it was
/// bucketed under plus the entity counter the trace printed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntityKey {
    pub world_cell: Cell,
    pub counter: i64,
}

impl EntityKey {
    pub const fn new(world_cell: Cell, counter: i64) -> Self {
        Self { world_cell, counter }
    }
}

impl fmt::Display for EntityKey {
    /// Canonical report rendering: `x, y, z, scale, counter c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, counter {}",
            self.world_cell.x, self.world_cell.y, self.world_cell.z, self.world_cell.scale, self.counter
        )
    }
}

/// Identifies a shape cell within one entity's enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ShapeKey(pub KeyedCell);

impl fmt::Display for ShapeKey {
    /// Canonical report rendering: `x, y, z, scale, key k`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self.0.cell;
        write!(
            f,
            "{}, {}, {}, {}, key {}",
            cell.x, cell.y, cell.z, cell.scale, self.0.key
        )
    }
}

/// One recognized trace line, tagged by kind.
///
/// Lines that match none of the three shapes are noise and produce no
/// record at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceRecord {
    /// `Now computing frame Frame <n>` — sets the current frame context.
    FrameMarker(i64),
    /// `ASED: Enqueued entity: ...` — an entity enqueued this frame.
    EntityEnqueue { entity: EntityKey },
    /// `ASED: Shape cell ... of entity: ... <status>` — a shape cell
    /// enqueued for an entity, with the producer's outcome label.
    ShapeEnqueue {
        entity: EntityKey,
        shape: ShapeKey,
        status: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_key_display() {
        let key = EntityKey::new(Cell::new(0, -3, 7, 2), 15);
        assert_eq!(key.to_string(), "0, -3, 7, 2, counter 15");
    }

    #[test]
    fn test_shape_key_display() {
        let key = ShapeKey(KeyedCell::new(4, 5, 6, 1, 99));
        assert_eq!(key.to_string(), "4, 5, 6, 1, key 99");
    }
}
