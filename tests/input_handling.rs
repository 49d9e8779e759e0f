use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tictactoe::board::{Mark, MarkSymbols};
use tictactoe::ui::app::{App, Focus};
use tictactoe::ui::input::{handle_key, handle_mouse};
use tictactoe::ui::layout::{body_panels, history_rows, layout_regions, panel_inner, screen_cells};

const COLS: u16 = 80;
const ROWS: u16 = 24;

fn make_app() -> App {
    let mut app = App::new(MarkSymbols::default());
    app.on_resize(COLS, ROWS);
    app
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

#[test]
fn digit_keys_play_matching_cell() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('5')));
    handle_key(&mut app, press(KeyCode::Char('1')));
    let snapshot = app.game().current();
    assert_eq!(snapshot.get(4), Some(Mark::PlayerOne));
    assert_eq!(snapshot.get(0), Some(Mark::PlayerTwo));
    assert_eq!(app.cursor(), 0);
}

#[test]
fn arrows_and_enter_play_cursor_cell() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Right));
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.cursor(), 4);
    assert_eq!(app.game().current().get(4), Some(Mark::PlayerOne));
}

#[test]
fn key_release_is_ignored() {
    let mut app = make_app();
    let mut key = press(KeyCode::Char('3'));
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(app.game().history().len(), 1);
}

#[test]
fn tab_switches_to_move_list_navigation() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('1')));
    handle_key(&mut app, press(KeyCode::Char('2')));
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Moves);

    handle_key(&mut app, press(KeyCode::Up));
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.game().step(), 1);
    assert_eq!(app.game().history().len(), 3);

    handle_key(&mut app, press(KeyCode::Home));
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.game().step(), 0);
}

#[test]
fn arrows_in_move_list_do_not_move_board_cursor() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Tab));
    handle_key(&mut app, press(KeyCode::Down));
    assert_eq!(app.cursor(), 0);
}

#[test]
fn q_and_escape_quit() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits() {
    let mut app = make_app();
    let mut key = press(KeyCode::Char('c'));
    key.modifiers = KeyModifiers::CONTROL;
    handle_key(&mut app, key);
    assert!(app.should_quit());
}

#[test]
fn plain_c_does_not_quit() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('c')));
    assert!(!app.should_quit());
}

#[test]
fn taken_cell_keeps_move_list_selection() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('1')));
    handle_key(&mut app, press(KeyCode::Char('2')));
    handle_key(&mut app, press(KeyCode::Tab));
    handle_key(&mut app, press(KeyCode::Home));
    handle_key(&mut app, press(KeyCode::Char('1')));
    assert_eq!(app.move_selection(), 0);
    assert_eq!(app.game().history().len(), 3);
}

#[test]
fn clicking_a_cell_plays_it() {
    let mut app = make_app();
    let cells = screen_cells(Rect::new(0, 0, COLS, ROWS));
    let target = cells[6];
    handle_mouse(&mut app, click(target.x + 1, target.y + 1));
    assert_eq!(app.game().current().get(6), Some(Mark::PlayerOne));
    assert_eq!(app.cursor(), 6);
}

#[test]
fn clicking_a_history_row_jumps() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('1')));
    handle_key(&mut app, press(KeyCode::Char('9')));

    let (_, body, _) = layout_regions(Rect::new(0, 0, COLS, ROWS));
    let (_, info) = body_panels(body);
    let (step, row) = history_rows(panel_inner(info), 0, 3)[0];
    assert_eq!(step, 0);
    handle_mouse(&mut app, click(row.x + 2, row.y));
    assert_eq!(app.game().step(), 0);
    assert_eq!(app.game().history().len(), 3);
}

#[test]
fn right_click_and_empty_space_are_ignored() {
    let mut app = make_app();
    let target = screen_cells(Rect::new(0, 0, COLS, ROWS))[0];
    let mut event = click(target.x + 1, target.y + 1);
    event.kind = MouseEventKind::Down(MouseButton::Right);
    handle_mouse(&mut app, event);
    handle_mouse(&mut app, click(COLS - 1, 1));
    assert_eq!(app.game().history().len(), 1);
}

#[test]
fn click_before_first_resize_is_ignored() {
    let mut app = App::new(MarkSymbols::default());
    handle_mouse(&mut app, click(3, 5));
    assert_eq!(app.game().history().len(), 1);
}

#[test]
fn clicks_on_scrolled_move_list_hit_the_drawn_entry() {
    let mut app = App::new(MarkSymbols::default());
    app.on_resize(COLS, 18);
    for key in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        handle_key(&mut app, press(KeyCode::Char(key)));
    }
    assert_eq!(app.move_scroll(), 2);

    let (_, body, _) = layout_regions(Rect::new(0, 0, COLS, 18));
    let (_, info) = body_panels(body);
    let (step, row) = history_rows(panel_inner(info), app.move_scroll(), 10)[0];
    assert_eq!(step, 2);
    handle_mouse(&mut app, click(row.x + 2, row.y));
    assert_eq!(app.game().step(), 2);
}
