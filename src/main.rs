use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use setlist::app::cli::Args;
use setlist::app::config::{AppConfig, UserConfig};
use setlist::app::events::AppEvent;
use setlist::app::{inputs, App};
use setlist::artwork::ArtworkLoader;
use setlist::library::LibrarySource;
use setlist::player::SessionPlayer;
use setlist::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Logs go to a daily file; stdout belongs to the TUI.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = AppConfig::get_log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Logging disabled: cannot create {}: {}", log_dir.display(), e);
        return None;
    }
    let appender = tracing_appender::rolling::daily(&log_dir, "setlist.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SETLIST_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
    Some(guard)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    // Leave raw mode before any panic report is printed.
    let report_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        report_hook(info);
    }));

    let args = Args::parse();

    if args.generate_config {
        println!("{}", toml::to_string_pretty(&UserConfig::default())?);
        return Ok(());
    }

    let _log_guard = configure_logging();

    let (config, mut state) = AppConfig::load();
    let library_path = args
        .library
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.library_path));

    let mut missing_library = false;
    let library = match LibrarySource::load(&library_path) {
        Ok(library) => library,
        Err(e) if e.is_not_found() => {
            tracing::warn!(path = %library_path.display(), "no library file, starting empty");
            missing_library = true;
            LibrarySource::default()
        }
        Err(e) => return Err(e).context("loading library"),
    };

    if let Some(id) = args.playlist {
        state.last_playlist_id = Some(id);
    }

    let mut app = App::new(library, Box::new(SessionPlayer::new()), config, &state);
    if missing_library {
        app.show_toast(&format!("No library at {}", library_path.display()));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app).await;

    restore_terminal();
    terminal.show_cursor()?;
    app.persistent_state().save();

    if let Err(ref e) = result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Tick Task (toast expiry)
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    let client = reqwest::Client::builder()
        .user_agent(concat!("setlist/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_default();
    let loader = ArtworkLoader::new(client);

    while app.is_running {
        // 3. One fetch task per cover we have not seen yet
        for uri in app.pending_artwork() {
            let loader = loader.clone();
            let tx_art = tx.clone();
            tokio::spawn(async move {
                let state = loader.load(&uri).await;
                let _ = tx_art.send(AppEvent::ArtworkLoaded(uri, state)).await;
            });
        }

        terminal.draw(|f| ui::ui(f, app))?;

        match rx.recv().await {
            Some(AppEvent::Input(event)) => inputs::handle_event(event, app),
            Some(AppEvent::ArtworkLoaded(uri, state)) => app.set_artwork(uri, state),
            Some(AppEvent::Tick) => app.on_tick(),
            None => break,
        }
    }

    Ok(())
}
