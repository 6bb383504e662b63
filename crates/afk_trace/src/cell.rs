//! Cell coordinates as printed by the engine's debug trace
//!
//! The trace renders world cells as `Cell(x, y, z, scale s)` and shape
//! cells as `Cell(x, y, z, scale s, key k)`. Both forms appear verbatim
//! in the lines this crate parses.

use core::fmt;

use serde::Serialize;

/// A world cell: the spatial bucket an entity is enqueued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub scale: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64, z: i64, scale: i64) -> Self {
        Self { x, y, z, scale }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {}, {}, scale {})", self.x, self.y, self.z, self.scale)
    }
}

/// A shape cell: a keyed sub-cell within an entity's shape enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct KeyedCell {
    pub cell: Cell,
    pub key: i64,
}

impl KeyedCell {
    pub const fn new(x: i64, y: i64, z: i64, scale: i64, key: i64) -> Self {
        Self {
            cell: Cell::new(x, y, z, scale),
            key,
        }
    }
}

impl fmt::Display for KeyedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell({}, {}, {}, scale {}, key {})",
            self.cell.x, self.cell.y, self.cell.z, self.cell.scale, self.key
        )
    }
}
