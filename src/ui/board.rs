//! Board and cell widgets.
//!
//! Both are pure projections: they receive the marks to draw and hold no
//! state. Activation goes the other way through [`crate::ui::input`], which
//! maps keys and clicks to cell indices using the same layout.

use crate::board::{Mark, MarkSymbols, Snapshot};
use crate::ui::layout::{board_cells, panel_inner};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GRID_LINE, PLAYER_ONE, PLAYER_TWO};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// A single square showing one mark.
pub struct CellView {
    mark: Mark,
    symbols: MarkSymbols,
    selected: bool,
    winning: bool,
}

impl CellView {
    pub fn new(mark: Mark, symbols: MarkSymbols) -> Self {
        Self {
            mark,
            symbols,
            selected: false,
            winning: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn winning(mut self, winning: bool) -> Self {
        self.winning = winning;
        self
    }
}

impl Widget for CellView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(FOCUS_BORDER).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(GRID_LINE)
        };
        let mut style = match self.mark {
            Mark::Empty => Style::default(),
            Mark::PlayerOne => Style::default().fg(PLAYER_ONE).add_modifier(Modifier::BOLD),
            Mark::PlayerTwo => Style::default().fg(PLAYER_TWO).add_modifier(Modifier::BOLD),
        };
        if self.winning {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }
        let text = self
            .mark
            .symbol(&self.symbols)
            .map(String::from)
            .unwrap_or_default();

        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

/// The 3x3 grid of [`CellView`]s for one snapshot.
pub struct BoardView<'a> {
    snapshot: &'a Snapshot,
    symbols: MarkSymbols,
    cursor: Option<usize>,
    winning_line: Option<[usize; 3]>,
}

impl<'a> BoardView<'a> {
    pub fn new(snapshot: &'a Snapshot, symbols: MarkSymbols) -> Self {
        Self {
            snapshot,
            symbols,
            cursor: None,
            winning_line: None,
        }
    }

    /// Highlight the cell under the keyboard cursor. `None` when the board is unfocused.
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn winning_line(mut self, line: Option<[usize; 3]>) -> Self {
        self.winning_line = line;
        self
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.cursor.is_some() {
            FOCUS_BORDER
        } else {
            GRID_LINE
        };
        Block::default()
            .title(Span::styled(" Board ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .render(area, buf);

        for (index, cell_area) in board_cells(panel_inner(area)).into_iter().enumerate() {
            if cell_area.is_empty() {
                continue;
            }
            let mark = self.snapshot.get(index).unwrap_or_default();
            CellView::new(mark, self.symbols)
                .selected(self.cursor == Some(index))
                .winning(self.winning_line.is_some_and(|line| line.contains(&index)))
                .render(cell_area, buf);
        }
    }
}
