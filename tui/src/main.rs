//! AutoAI predictive maintenance demo: interactive Ratatui TUI
//!
//! Six pages behind one header: Home, Live Dashboard, Voice Agent,
//! Manufacturing, Security & UEBA and Innovation. The voice agent replays a
//! scripted conversation and acknowledges anything typed into the composer
//! after a short delay. See `ui.rs` for the layout.

mod app;
mod ui;

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Instant,
};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use autoai_catalog::Catalog;
use autoai_config::Settings;
use autoai_contracts::error::{AutoAiError, AutoAiResult};
use autoai_contracts::page::Page;
use autoai_core::{Shell, SystemClock};

use crate::app::App;
use crate::ui::ui;

#[derive(Parser)]
#[command(name = "autoai-tui")]
#[command(about = "Interactive AutoAI predictive maintenance demo")]
struct Args {
    /// Settings file (TOML). Built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page to open on (landing, dashboard, voice-agent, manufacturing,
    /// security, innovation). Overrides the settings file.
    #[arg(long)]
    page: Option<String>,

    /// Write logs here. The terminal is in raw mode, so nothing is logged
    /// unless a file is given.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn open_log_file(path: &Path) -> AutoAiResult<File> {
    File::create(path).map_err(|e| AutoAiError::ConfigError {
        reason: format!("failed to open log file '{}': {}", path.display(), e),
    })
}

fn init_logging(path: &Path) -> AutoAiResult<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

/// Apply `--page`. An unknown id is an `UnknownPage` error.
fn override_start_page(settings: &mut Settings, page: Option<&str>) -> AutoAiResult<()> {
    if let Some(id) = page {
        settings.shell.initial_page = id.parse::<Page>()?;
    }
    Ok(())
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn run(args: Args) -> AutoAiResult<()> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Fail on bad settings before the terminal is touched.
    let mut settings = Settings::load(args.config.as_deref())?;
    override_start_page(&mut settings, args.page.as_deref())?;
    let catalog = Catalog::builtin();

    let mut status = None;
    match autoai_verify::verify_catalog(&catalog) {
        Ok(report) if report.passed => {}
        Ok(report) => {
            warn!(failures = report.failures.len(), "catalog verification failed");
            status = Some(format!("catalog check: {}", report.summary()));
        }
        Err(e) => {
            warn!(error = %e, "catalog verification could not run");
            status = Some(format!("catalog check: {}", e));
        }
    }

    let shell = Shell::new(catalog, &settings, Arc::new(SystemClock))?;
    let mut app = App::new(shell);
    app.status = status;
    info!(page = app.shell.current_page().id(), "starting");

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(panic);
    }));

    let mut terminal = setup_terminal()?;
    let tick = settings.shell.tick();

    let outcome = (|| -> AutoAiResult<()> {
        loop {
            terminal.draw(|f| ui(f, &app))?;

            // Wake for the next key, tick or pending reply, whichever is first.
            if event::poll(app.poll_timeout(tick, Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && app.handle_key(key) {
                        return Ok(());
                    }
                }
            }
            app.shell.poll_replies();
        }
    })();

    app.shell.shutdown();
    restore_terminal(&mut terminal)?;
    info!("stopped");
    outcome
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("autoai-tui error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_flag_overrides_settings() {
        let mut settings = Settings::default();
        override_start_page(&mut settings, Some("security")).unwrap();
        assert_eq!(settings.shell.initial_page, Page::Security);

        override_start_page(&mut settings, None).unwrap();
        assert_eq!(settings.shell.initial_page, Page::Security);
    }

    #[test]
    fn unknown_page_flag_is_rejected() {
        let mut settings = Settings::default();
        match override_start_page(&mut settings, Some("garage")) {
            Err(AutoAiError::UnknownPage { name }) => assert_eq!(name, "garage"),
            other => panic!("expected UnknownPage, got {:?}", other),
        }
        assert_eq!(settings.shell.initial_page, Page::Landing);
    }

    #[test]
    fn unwritable_log_file_names_the_path() {
        let path = Path::new("/nonexistent-autoai-dir/tui.log");
        match open_log_file(path) {
            Err(AutoAiError::ConfigError { reason }) => {
                assert!(reason.contains("failed to open log file"));
                assert!(reason.contains("/nonexistent-autoai-dir/tui.log"));
            }
            other => panic!("expected ConfigError, got {:?}", other.map(|_| ())),
        }
    }
}
