//! Client-side board model.
//!
//! The board is an ordered list of [`Position`]s whose length is fixed for the
//! lifetime of one game. Updates arrive from the engine as sparse batches and
//! only ever touch the slots they name.

mod cell;
mod error;
mod position;

pub use cell::{Cell, CellState};
pub use error::BoardError;
pub use position::{Pos, Position};

/// Outcome of merging one batch of engine updates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Cells that left `Closed` in this batch.
    pub newly_revealed: usize,
    /// Updates that were dropped.
    pub rejected: Vec<BoardError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    positions: Vec<Position>,
}

impl Board {
    /// Build a board from the engine's layout.
    ///
    /// Slots are keyed by `index`, so the layout is ordered by it.
    pub fn new(mut positions: Vec<Position>) -> Self {
        positions.sort_by_key(|p| p.index);
        if positions.iter().enumerate().any(|(i, p)| p.index != i) {
            tracing::warn!(
                cells = positions.len(),
                "engine layout indices are not dense"
            );
        }
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The cell whose engine `index` matches, wherever it sits.
    pub fn get(&self, index: usize) -> Option<&Position> {
        self.slot(index).and_then(|slot| self.positions.get(slot))
    }

    fn slot(&self, index: usize) -> Option<usize> {
        self.positions
            .binary_search_by_key(&index, |p| p.index)
            .ok()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Looks up a slot by its engine coordinates.
    pub fn find(&self, pos: Pos) -> Option<&Position> {
        self.positions.iter().find(|p| p.pos == pos)
    }

    /// Widest column and row seen in the layout.
    pub fn dimensions(&self) -> (u8, u8) {
        self.positions.iter().fold((0, 0), |(w, h), p| {
            (w.max(p.pos.x), h.max(p.pos.y))
        })
    }

    /// Replace a single slot.
    ///
    /// Returns the previous cell state on success.
    pub fn set(&mut self, update: Position) -> Result<CellState, BoardError> {
        let len = self.positions.len();
        let slot = self
            .slot(update.index)
            .and_then(|slot| self.positions.get_mut(slot))
            .ok_or(BoardError::UnknownIndex {
                index: update.index,
                len,
            })?;

        let from = slot.cell.state;
        if !from.can_become(&update.cell.state) {
            return Err(BoardError::IllegalTransition {
                index: update.index,
                from,
                to: update.cell.state,
            });
        }

        // Coordinates stay as issued with the layout.
        slot.cell = update.cell;
        Ok(from)
    }

    /// Merge a batch of updates. Bad entries are dropped; the rest still apply.
    pub fn apply<'a, I>(&mut self, updates: I) -> ApplyReport
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut report = ApplyReport::default();
        for update in updates {
            match self.set(*update) {
                Ok(from) => {
                    if from.is_closed() && !update.cell.state.is_closed() {
                        report.newly_revealed += 1;
                    }
                }
                Err(err) => report.rejected.push(err),
            }
        }
        report
    }

    pub fn flagged_count(&self) -> usize {
        self.positions
            .iter()
            .filter(|p| p.cell.state.is_flagged())
            .count()
    }
}
