//! Mystica TUI - the tarot salon's front-of-house terminal app
//!
//! A Ratatui front end for browsing the salon's readings, testimonials
//! and FAQ, and for sending contact and reservation requests.

mod app;
mod backend;
mod config;
mod format;
mod state;
mod ui;

use anyhow::Result;
use app::{App, AppEvent};
use backend::SimulatedBackend;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mystica_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, Arc::new(SimulatedBackend::new()), events_tx);
    let result = run_app(&mut terminal, &mut app, events_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut events_rx: mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        // Terminal size feeds the reveal and scroll calculations
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        let now = Instant::now();
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while an animation is running (16ms = ~60fps),
        // normal polling (100ms) otherwise
        let poll_duration = if app.is_animating(now) {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
                Event::Resize(_width, _height) => {
                    // Recalculated on the next loop iteration
                }
                _ => {}
            }
        }

        // Apply completed submissions
        while let Ok(event) = events_rx.try_recv() {
            app.handle_event(event);
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
