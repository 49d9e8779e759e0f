//! Game state machine: move history, current step and derived status.

mod intent;
mod reducer;
mod state;

pub use intent::GameIntent;
pub use reducer::GameReducer;
pub use state::{GameState, MoveDescriptor, Status};
