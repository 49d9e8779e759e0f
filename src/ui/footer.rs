use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BOARD_HINTS: &[(&str, &str)] = &[
    ("1-9", "Play"),
    ("Arrows+Enter", "Select"),
    ("Tab", "Moves"),
    ("Q", "Quit"),
];

const MOVES_HINTS: &[(&str, &str)] = &[
    ("Up/Down", "Browse"),
    ("Enter", "Jump"),
    ("1-9", "Play"),
    ("Tab", "Board"),
    ("Q", "Quit"),
];

/// Bottom bar: key hints for the focused panel, version on the right.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, focus: Focus) -> Paragraph<'static> {
        let hints = match focus {
            Focus::Board => BOARD_HINTS,
            Focus::Moves => MOVES_HINTS,
        };
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", separator_style));
                used += 3;
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {action}"), text_style));
            used += key.chars().count() + action.chars().count() + 2;
        }

        let version = format!("v{VERSION} ");
        let inner_width = usize::from(area.width.saturating_sub(2));
        let padding = inner_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
