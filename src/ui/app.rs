use crate::board::{MarkSymbols, CELL_COUNT};
use crate::ui::game::{GameIntent, GameReducer, GameState};
use crate::ui::layout::{move_list_capacity, scroll_into_view};
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Board,
    Moves,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    /// Board cell under the keyboard cursor.
    cursor: usize,
    /// Highlighted move-list entry; follows the current step after every accepted intent.
    move_selection: usize,
    /// First move-list entry drawn.
    move_scroll: usize,
    symbols: MarkSymbols,
    /// Game state (MVI pattern).
    game: GameState,
}

impl App {
    pub fn new(symbols: MarkSymbols) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Board,
            size: None,
            cursor: 0,
            move_selection: 0,
            move_scroll: 0,
            symbols,
            game: GameState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.move_selection = self.game.step();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
        self.sync_move_scroll();
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.sync_move_scroll();
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn symbols(&self) -> MarkSymbols {
        self.symbols
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < CELL_COUNT {
            self.cursor = index;
        }
    }

    /// Move the board cursor, wrapping within the row or column.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let row = (self.cursor / 3) as i32;
        let col = (self.cursor % 3) as i32;
        let row = (row + dy).rem_euclid(3);
        let col = (col + dx).rem_euclid(3);
        self.cursor = (row * 3 + col) as usize;
    }

    pub fn move_selection(&self) -> usize {
        self.move_selection
    }

    pub fn step_move_selection(&mut self, direction: i32) {
        let len = self.game.history().len();
        let current = self.move_selection.min(len - 1);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };

        self.move_selection = next;
        self.sync_move_scroll();
    }

    pub fn select_first_move(&mut self) {
        self.move_selection = 0;
        self.sync_move_scroll();
    }

    pub fn select_last_move(&mut self) {
        self.move_selection = self.game.history().len() - 1;
        self.sync_move_scroll();
    }

    pub fn move_scroll(&self) -> usize {
        self.move_scroll
    }

    /// Scroll the move list so the selection (move-list focus) or the
    /// current step (board focus) stays on screen.
    fn sync_move_scroll(&mut self) {
        let Some((cols, rows)) = self.size else {
            return;
        };
        let anchor = match self.focus {
            Focus::Moves => self.move_selection,
            Focus::Board => self.game.step(),
        };
        self.move_scroll = scroll_into_view(
            self.move_scroll,
            anchor,
            self.game.history().len(),
            move_list_capacity(Rect::new(0, 0, cols, rows)),
        );
    }

    /// A cell was clicked or chosen from the keyboard.
    ///
    /// Returns `false` when the game ignored it (taken cell, decided game,
    /// off-board index).
    pub fn activate_cell(&mut self, index: usize) -> bool {
        let mover = self.game.mover();
        if !self.dispatch_game(GameIntent::Move { index }) {
            tracing::trace!(index, "move ignored");
            return false;
        }

        tracing::debug!(index, mover = ?mover, step = self.game.step(), "move played");
        if let Some(winner) = self.game.winner() {
            tracing::info!(
                winner = ?winner,
                moves = self.game.step(),
                filled = self.game.current().filled(),
                "game decided"
            );
        }
        true
    }

    /// A move-list entry was clicked or chosen from the keyboard.
    pub fn select_history_entry(&mut self, step: usize) -> bool {
        if !self.dispatch_game(GameIntent::JumpTo { step }) {
            tracing::trace!(step, "history jump ignored");
            return false;
        }

        tracing::debug!(step, moves = self.game.history().len() - 1, "jumped in history");
        true
    }

    /// Dispatch an intent to the game reducer. Returns whether the state changed.
    fn dispatch_game(&mut self, intent: GameIntent) -> bool {
        let before = self.game.clone();
        dispatch_mvi!(self, game, GameReducer, intent);
        if self.game == before {
            return false;
        }
        self.move_selection = self.game.step();
        self.sync_move_scroll();
        true
    }
}
