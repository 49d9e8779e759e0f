use serde::{Deserialize, Serialize};

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Mark {
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Display character for this mark, or `None` for an empty cell.
    pub fn symbol(self, symbols: &MarkSymbols) -> Option<char> {
        match self {
            Mark::Empty => None,
            Mark::PlayerOne => Some(symbols.player_one),
            Mark::PlayerTwo => Some(symbols.player_two),
        }
    }
}

/// Characters used to draw each player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkSymbols {
    #[serde(default = "default_player_one")]
    pub player_one: char,
    #[serde(default = "default_player_two")]
    pub player_two: char,
}

fn default_player_one() -> char {
    'X'
}

fn default_player_two() -> char {
    'O'
}

impl Default for MarkSymbols {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}
