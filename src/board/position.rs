use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Grid coordinates as assigned by the engine (1-based).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// A cell together with its board slot and coordinates.
///
/// Identity is `index`; `pos` is carried through untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub index: usize,
    pub pos: Pos,
    pub cell: Cell,
}

impl Position {
    pub fn new(index: usize, pos: Pos, cell: Cell) -> Self {
        Self { index, pos, cell }
    }

    /// Same slot and coordinates, different cell.
    pub fn with_cell(self, cell: Cell) -> Self {
        Self { cell, ..self }
    }
}
