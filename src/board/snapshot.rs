use crate::board::mark::Mark;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One immutable board position.
///
/// Cells are stored row-major: indices 0..=2 are the top row,
/// 3..=5 the middle row and 6..=8 the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    cells: [Mark; CELL_COUNT],
}

impl Snapshot {
    /// The empty starting board.
    pub fn empty() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Mark at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// True when `index` is on the board and holds no mark.
    pub fn is_open(&self, index: usize) -> bool {
        self.get(index).is_some_and(Mark::is_empty)
    }

    /// A copy of this snapshot with `mark` placed at `index`.
    ///
    /// Out-of-range indices return an unchanged copy.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Snapshot {
        let mut cells = self.cells;
        if let Some(cell) = cells.get_mut(index) {
            *cell = mark;
        }
        Snapshot { cells }
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|mark| !mark.is_empty()).count()
    }
}
