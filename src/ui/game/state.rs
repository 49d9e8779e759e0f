use std::fmt;

use crate::board::{evaluate, winning_line, Mark, MarkSymbols, Snapshot};
use crate::ui::mvi::UiState;

/// Full game state: every snapshot played so far and the one on display.
///
/// `history` is never empty and `step` always indexes into it. Who moves
/// next and who won are computed from these two fields on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(super) history: Vec<Snapshot>,
    pub(super) step: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState for GameState {}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::empty()],
            step: 0,
        }
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// The snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Player whose mark the next move places: player one on even steps.
    pub fn mover(&self) -> Mark {
        if self.step % 2 == 0 {
            Mark::PlayerOne
        } else {
            Mark::PlayerTwo
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        evaluate(self.current())
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(self.current())
    }

    pub fn is_decided(&self) -> bool {
        self.winner().is_some()
    }

    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.mover()),
        }
    }

    /// One selectable label per snapshot, oldest first.
    pub fn descriptors(&self) -> Vec<MoveDescriptor> {
        (0..self.history.len())
            .map(|step| match step {
                0 => MoveDescriptor::GameStart,
                n => MoveDescriptor::Move(n),
            })
            .collect()
    }
}

/// Status line shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Mark),
    NextPlayer(Mark),
}

impl Status {
    pub fn label(&self, symbols: &MarkSymbols) -> String {
        match self {
            Status::Winner(mark) => format!("Winner: {}", symbol_text(*mark, symbols)),
            Status::NextPlayer(mark) => format!("Next player: {}", symbol_text(*mark, symbols)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(&MarkSymbols::default()))
    }
}

fn symbol_text(mark: Mark, symbols: &MarkSymbols) -> String {
    mark.symbol(symbols).map(String::from).unwrap_or_default()
}

/// Label for one entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDescriptor {
    GameStart,
    Move(usize),
}

impl MoveDescriptor {
    /// History index this entry jumps to.
    pub fn step(&self) -> usize {
        match self {
            MoveDescriptor::GameStart => 0,
            MoveDescriptor::Move(step) => *step,
        }
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDescriptor::GameStart => f.write_str("Go to game start"),
            MoveDescriptor::Move(step) => write!(f, "Go to move #{step}"),
        }
    }
}
