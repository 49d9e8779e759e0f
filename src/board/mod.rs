//! Board model: marks, immutable snapshots and the winner evaluator.
//!
//! Everything here is pure data. Snapshots are never mutated in place;
//! placing a mark produces a new snapshot.

mod mark;
mod snapshot;
mod winner;

pub use mark::{Mark, MarkSymbols};
pub use snapshot::{Snapshot, CELL_COUNT};
pub use winner::{evaluate, winning_line, LINES};
