//! Apply TUI - multi-step job application wizard for the terminal
//!
//! A Ratatui-based TUI that walks an applicant through a desktop (three
//! step) or mobile (four step) application form and submits it.

mod app;
mod config;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::{CliArgs, Settings, TuiConfig, VARIANT_ENV};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use submission::SimulatedBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apply_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => TuiConfig::load_from(path)?,
        None => TuiConfig::load()?,
    };
    let env_variant = std::env::var(VARIANT_ENV).ok();
    let (width, _) = crossterm::terminal::size().unwrap_or((80, 24));
    let settings = Settings::resolve(&cli, env_variant.as_deref(), &config, width);
    tracing::debug!(?settings, "resolved settings");

    let backend = Arc::new(SimulatedBackend::new(settings.submit_delay));
    tracing::debug!(
        delay_ms = backend.delay().as_millis() as u64,
        "using simulated submission backend"
    );
    let mut app = App::new(&settings, backend);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

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
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;

        // Update hero animation if active
        let in_intro = app.in_intro();
        if in_intro {
            app.update_intro(term_size.height);
        }

        // Collect submission results and expire toasts
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling during animation or while a submission is in flight (16ms = ~60fps)
        let poll_duration = if in_intro || app.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
