use crate::ui::app::{App, Focus};
use crate::ui::board::BoardView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::info::InfoPanel;
use crate::ui::layout::{body_panels, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let game = app.game();

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(game.step(), game.history().len() - 1),
        header,
    );

    frame.render_widget(Clear, body);
    let (board, info) = body_panels(body);
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    frame.render_widget(
        BoardView::new(game.current(), app.symbols())
            .cursor(cursor)
            .winning_line(game.winning_line()),
        board,
    );
    frame.render_widget(
        InfoPanel::new(game, app.symbols())
            .selection(app.move_selection(), app.focus() == Focus::Moves)
            .scroll(app.move_scroll()),
        info,
    );

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.focus()), footer);
}
