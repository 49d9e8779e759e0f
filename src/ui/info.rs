use crate::board::MarkSymbols;
use crate::ui::game::{GameState, Status};
use crate::ui::layout::{history_rows, panel_inner};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GRID_LINE, HEADER_TEXT, STATUS_OK};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Status line and move list for the current game.
pub struct InfoPanel<'a> {
    state: &'a GameState,
    symbols: MarkSymbols,
    selection: usize,
    focused: bool,
    scroll: usize,
}

impl<'a> InfoPanel<'a> {
    pub fn new(state: &'a GameState, symbols: MarkSymbols) -> Self {
        Self {
            state,
            symbols,
            selection: 0,
            focused: false,
            scroll: 0,
        }
    }

    /// Highlight move-list entry `selection` when `focused`.
    pub fn selection(mut self, selection: usize, focused: bool) -> Self {
        self.selection = selection;
        self.focused = focused;
        self
    }

    /// Start the move list at entry `scroll`.
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for InfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused { FOCUS_BORDER } else { GRID_LINE };
        Block::default()
            .title(Span::styled(" Game ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .render(area, buf);

        let inner = panel_inner(area);
        if inner.is_empty() {
            return;
        }

        let status = self.state.status();
        let status_style = match status {
            Status::Winner(_) => Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            Status::NextPlayer(_) => Style::default().fg(HEADER_TEXT),
        };
        Paragraph::new(Line::styled(status.label(&self.symbols), status_style)).render(
            Rect {
                height: 1,
                ..inner
            },
            buf,
        );

        let descriptors = self.state.descriptors();
        for (step, row) in history_rows(inner, self.scroll, descriptors.len()) {
            let descriptor = descriptors[step];
            let marker = if step == self.state.step() { ">" } else { " " };
            let mut style = Style::default().fg(HEADER_TEXT);
            if step == self.state.step() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if self.focused && step == self.selection {
                style = style.bg(ACTIVE_HIGHLIGHT);
            }
            Paragraph::new(Line::styled(
                format!("{marker} {:>2}. {descriptor}", step + 1),
                style,
            ))
            .render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::game::{GameIntent, GameReducer};
    use crate::ui::mvi::Reducer;

    fn rows(buf: &Buffer) -> Vec<String> {
        (buf.area.y..buf.area.bottom())
            .map(|y| {
                (buf.area.x..buf.area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn shows_status_and_one_row_per_snapshot() {
        let state = [0, 4]
            .into_iter()
            .fold(GameState::new(), |state, index| {
                GameReducer::reduce(state, GameIntent::Move { index })
            });
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        InfoPanel::new(&state, MarkSymbols::default()).render(area, &mut buf);

        let text = rows(&buf);
        assert!(text[1].contains("Next player: X"));
        assert!(text[3].contains(" 1. Go to game start"));
        assert!(text[4].contains(" 2. Go to move #1"));
        assert!(text[5].contains(">  3. Go to move #2"));
        assert!(!text[6].contains("Go to"));
    }

    #[test]
    fn scrolled_list_starts_at_offset() {
        let state = [0, 1, 2, 4, 3]
            .into_iter()
            .fold(GameState::new(), |state, index| {
                GameReducer::reduce(state, GameIntent::Move { index })
            });
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        InfoPanel::new(&state, MarkSymbols::default())
            .scroll(4)
            .render(area, &mut buf);

        let text = rows(&buf);
        assert!(text[3].contains("   5. Go to move #4"));
        assert!(text[4].contains(">  6. Go to move #5"));
        assert!(!text.iter().any(|row| row.contains("Go to game start")));
    }

    #[test]
    fn winner_replaces_next_player() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::new(), |state, index| {
                GameReducer::reduce(state, GameIntent::Move { index })
            });
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        InfoPanel::new(&state, MarkSymbols::default()).render(area, &mut buf);
        assert!(rows(&buf)[1].contains("Winner: X"));
    }
}
