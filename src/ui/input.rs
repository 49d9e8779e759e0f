use crate::ui::app::{App, Focus};
use crate::ui::layout::{cell_at, history_entry_at};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode delivers Ctrl+C as a key, not SIGINT. Ctrl+Q falls under 'q'.
    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'C'));
    if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | 'Q')) {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_focus();
        return;
    }

    // Digits address cells directly, whatever has focus.
    if let KeyCode::Char(ch @ '1'..='9') = key.code {
        let index = ch as usize - '1' as usize;
        app.set_cursor(index);
        app.activate_cell(index);
        return;
    }

    match app.focus() {
        Focus::Board => match key.code {
            KeyCode::Left => app.move_cursor(-1, 0),
            KeyCode::Right => app.move_cursor(1, 0),
            KeyCode::Up => app.move_cursor(0, -1),
            KeyCode::Down => app.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.activate_cell(app.cursor());
            }
            _ => {}
        },
        Focus::Moves => match key.code {
            KeyCode::Up => app.step_move_selection(-1),
            KeyCode::Down => app.step_move_selection(1),
            KeyCode::Home => app.select_first_move(),
            KeyCode::End => app.select_last_move(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.select_history_entry(app.move_selection());
            }
            _ => {}
        },
    }
}

/// Left clicks on a cell play it; left clicks on a move-list row jump to it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };
    let screen = Rect::new(0, 0, cols, rows);

    if let Some(index) = cell_at(screen, mouse.column, mouse.row) {
        app.set_cursor(index);
        app.activate_cell(index);
        return;
    }

    let entries = app.game().history().len();
    if let Some(step) =
        history_entry_at(screen, mouse.column, mouse.row, app.move_scroll(), entries)
    {
        app.select_history_entry(step);
    }
}
