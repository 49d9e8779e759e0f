use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Runs the game until the player quits or a termination signal arrives.
pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(config.symbols);
    let events = EventHandler::new(tick_rate)?;
    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Shutdown) => {
                tracing::info!("termination signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("input thread stopped");
                break;
            }
        }
    }

    tracing::info!(
        moves = app.game().history().len() - 1,
        winner = ?app.game().winner(),
        "session ended"
    );
    drop(events);
    drop(guard);
    Ok(())
}
