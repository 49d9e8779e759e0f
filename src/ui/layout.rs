//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Position, Rect};

use crate::board::CELL_COUNT;

pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;

const BOARD_PANEL_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_PANEL_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const PANEL_GAP: u16 = 1;
/// Status line plus one blank line above the move list.
const MOVE_LIST_OFFSET: u16 = 2;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the board panel (left) and the game info panel (right).
pub fn body_panels(body: Rect) -> (Rect, Rect) {
    let board_width = BOARD_PANEL_WIDTH.min(body.width);
    let board = Rect {
        x: body.x,
        y: body.y,
        width: board_width,
        height: BOARD_PANEL_HEIGHT.min(body.height),
    };
    let info_x = (body.x + board_width + PANEL_GAP).min(body.right());
    let info = Rect {
        x: info_x,
        y: body.y,
        width: body.right().saturating_sub(info_x),
        height: body.height,
    };
    (board, info)
}

/// Area inside a one-cell border.
pub fn panel_inner(panel: Rect) -> Rect {
    Rect {
        x: panel.x.saturating_add(1).min(panel.right()),
        y: panel.y.saturating_add(1).min(panel.bottom()),
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    }
}

/// Rectangles of the nine cells, row-major, clipped to `inner`.
pub fn board_cells(inner: Rect) -> [Rect; CELL_COUNT] {
    std::array::from_fn(|index| {
        let col = (index % 3) as u16;
        let row = (index / 3) as u16;
        Rect {
            x: inner.x.saturating_add(col * CELL_WIDTH),
            y: inner.y.saturating_add(row * CELL_HEIGHT),
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        }
        .intersection(inner)
    })
}

/// Number of move-list rows that fit inside the info panel's inner area.
pub fn history_capacity(inner: Rect) -> usize {
    usize::from(inner.height.saturating_sub(MOVE_LIST_OFFSET))
}

/// Rows for entries `offset..count`, stopping at the bottom of `inner`.
///
/// Each row is paired with the history step it shows.
pub fn history_rows(inner: Rect, offset: usize, count: usize) -> Vec<(usize, Rect)> {
    let first = inner.y.saturating_add(MOVE_LIST_OFFSET);
    (offset..count)
        .zip(0..history_capacity(inner))
        .filter_map(|(step, row)| {
            let y = first.checked_add(u16::try_from(row).ok()?)?;
            Some((
                step,
                Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                },
            ))
        })
        .collect()
}

/// Move-list rows visible on a full terminal screen of size `area`.
pub fn move_list_capacity(area: Rect) -> usize {
    let (_, body, _) = layout_regions(area);
    let (_, info) = body_panels(body);
    history_capacity(panel_inner(info))
}

/// Smallest change to `offset` that keeps `anchor` inside a window of
/// `visible` rows over `count` entries.
pub fn scroll_into_view(offset: usize, anchor: usize, count: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let offset = if anchor < offset {
        anchor
    } else if anchor >= offset + visible {
        anchor + 1 - visible
    } else {
        offset
    };
    offset.min(count.saturating_sub(visible))
}

/// Cell rectangles for a full terminal screen of size `area`.
pub fn screen_cells(area: Rect) -> [Rect; CELL_COUNT] {
    let (_, body, _) = layout_regions(area);
    let (board, _) = body_panels(body);
    board_cells(panel_inner(board))
}

/// Board index under the screen position `(x, y)`.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    screen_cells(area)
        .iter()
        .position(|cell| cell.contains(position))
}

/// Move-list entry under the screen position `(x, y)`, for a list of
/// `count` entries scrolled down by `offset`.
pub fn history_entry_at(
    area: Rect,
    x: u16,
    y: u16,
    offset: usize,
    count: usize,
) -> Option<usize> {
    let (_, body, _) = layout_regions(area);
    let (_, info) = body_panels(body);
    let position = Position::new(x, y);
    history_rows(panel_inner(info), offset, count)
        .into_iter()
        .find(|(_, row)| row.contains(position))
        .map(|(step, _)| step)
}
