use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// OS signal received (SIGTERM, SIGINT, SIGHUP)
    Shutdown,
}

/// Polls the terminal on a background thread and forwards events in order.
///
/// The main loop is the only consumer, so every event is handled to
/// completion before the next one is read.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let signaled = Arc::new(AtomicBool::new(false));
        for signal in [SIGTERM, SIGINT, SIGHUP] {
            signal_hook::flag::register(signal, Arc::clone(&signaled))?;
        }

        let thread_stop = Arc::clone(&stop);
        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || poll_loop(tx, tick_rate, thread_stop, signaled))?;

        Ok(Self { rx, stop })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn poll_loop(
    tx: Sender<AppEvent>,
    tick_rate: Duration,
    stop: Arc<AtomicBool>,
    signaled: Arc<AtomicBool>,
) {
    let mut last_tick = Instant::now();
    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }

        if signaled.swap(false, Ordering::Relaxed) && tx.send(AppEvent::Shutdown).is_err() {
            break;
        }

        // Short poll timeout so the stop flag is checked frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match event::poll(timeout).and_then(|ready| {
            if ready {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        }) {
            Ok(Some(Event::Key(key))) => tx.send(AppEvent::Key(key)),
            Ok(Some(Event::Mouse(mouse))) => tx.send(AppEvent::Mouse(mouse)),
            Ok(Some(Event::Resize(cols, rows))) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "failed to read terminal event");
                break;
            }
        };
        if forwarded.is_err() {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
