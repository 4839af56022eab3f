//! Terminal front end: numbered action menu over the queue and reserve

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tetrs_reserve::input::KeyBindings;
use tetrs_reserve::manager::{Action, ActionManager};
use tetrs_reserve::settings::Settings;
use tetrs_reserve::ui::{self, StatusMessage};
use tracing_subscriber::EnvFilter;

/// Get the app temp directory, creating it if needed
fn temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("tetrs-reserve");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    let settings = Settings::load();

    // Setup tracing to a log file; the terminal belongs to the UI
    let log_dir = temp_dir();
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.session.log_filter));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    tracing::info!(
        "TETRS Reserve starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    if !Settings::exists() {
        // First run: write the defaults out so they can be edited
        if let Err(e) = settings.save() {
            tracing::warn!("Could not write default settings: {}", e);
        }
    }

    let bindings = KeyBindings::from_settings(&settings);
    let mut manager = match settings.session.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            ActionManager::with_seed(seed)
        }
        None => ActionManager::from_entropy(),
    };

    // Setup terminal; raw mode is undone even if the rest of setup fails
    enable_raw_mode()?;
    let result = with_restore(
        || execute!(stdout(), EnterAlternateScreen),
        || {
            let backend = CrosstermBackend::new(stdout());
            let mut terminal = Terminal::new(backend)?;
            terminal.clear()?;
            run_app(&mut terminal, &mut manager, &bindings)
        },
        || {
            disable_raw_mode()?;
            execute!(stdout(), LeaveAlternateScreen)
        },
    );

    if let Err(e) = &result {
        tracing::error!("Session ended with error: {}", e);
    }

    tracing::info!("Session produced {} pieces", manager.next_id());
    println!("\n{}", manager.summary());
    println!("\n🦀 Thanks for playing TETRS Reserve! 🦀");

    result
}

/// Run `enter` then `body`, and always run `leave` afterwards.
/// The first error wins.
fn with_restore<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> io::Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = enter().and_then(|()| body());
    let restored = leave();
    let value = result?;
    restored?;
    Ok(value)
}

/// Menu loop: one key press, at most one action, then redraw
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    manager: &mut ActionManager,
    bindings: &KeyBindings,
) -> io::Result<()> {
    let mut status: Option<StatusMessage> = None;

    loop {
        terminal.draw(|frame| ui::render_session(frame, manager, bindings, status.as_ref()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        status = match bindings.action_for(key) {
            Some(Action::Quit) => {
                tracing::info!("Quit requested");
                return Ok(());
            }
            Some(action) => Some(match manager.execute(action) {
                Ok(outcome) => StatusMessage::Info(outcome.describe()),
                Err(e) => StatusMessage::Error(format!("{} failed: {}", action.label(), e)),
            }),
            None => {
                tracing::debug!("Invalid choice {:?}", key.code);
                Some(StatusMessage::Error(
                    "Invalid option, please try again".to_string(),
                ))
            }
        };
    }
}
