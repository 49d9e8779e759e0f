use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Place the mover's mark on `index` of the current snapshot.
    /// Ignored when the cell is taken, off the board, or the game is decided.
    Move { index: usize },
    /// Show the board as it was after `step` moves. Ignored when out of range.
    JumpTo { step: usize },
}

impl Intent for GameIntent {}
