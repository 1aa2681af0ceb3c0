//! Terminal setup, teardown, and the tick/event loop.

mod app;
mod views;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use ordo_core::RuleCatalog;
use ordo_ritual::RitualConfig;
use ordo_speech::SpeechEngine;

use app::App;

/// How long the event poll waits before the next engine tick.
const TICK: Duration = Duration::from_millis(50);

/// Launch the full-screen oracle.
pub fn run(
    catalog: RuleCatalog,
    speech: Box<dyn SpeechEngine>,
    config: RitualConfig,
) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = App::new(catalog, speech, config);
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main loop: tick the engine, draw, then wait for input with a timeout so
/// the timers keep running while the keyboard is quiet.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        app.tick(Instant::now());

        terminal
            .draw(|frame| views::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(TICK).map_err(|e| format!("event error: {e}"))? {
            match event::read().map_err(|e| format!("event error: {e}"))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }
}
