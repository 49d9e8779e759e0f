use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// `step` is the move on display, `moves` the number of moves recorded.
    pub fn widget(&self, step: usize, moves: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let position = if step == moves {
            format!("Move {step} of {moves}")
        } else {
            format!("Move {step} of {moves} (rewound)")
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Tic-Tac-Toe", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(position, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
