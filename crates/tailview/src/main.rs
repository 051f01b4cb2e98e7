use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    Terminal,
};
use tailview_config::AppConfig;
use tailview_core::{MonotonicClock, RefreshPolicy};

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod keybindings;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::{Action, GlobalAction, LogViewerAction};
use middleware::{
    KeyboardMiddleware, LogTailMiddleware, LoggingMiddleware, NavigationMiddleware,
    OpenFileMiddleware, TextInputMiddleware,
};
use state::AppState;
use store::Store;
use views::LogViewerView;

/// Follow a growing log file in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Log file to open on start
    file: Option<PathBuf>,

    /// Seconds between automatic refreshes (0.1 - 5.0)
    #[arg(short, long)]
    interval: Option<f64>,

    /// Start with automatic refresh switched off
    #[arg(long)]
    manual: bool,

    /// Hide the line number gutter
    #[arg(long)]
    no_line_numbers: bool,

    /// Cut long lines instead of wrapping them
    #[arg(long)]
    no_wrap: bool,

    /// Read the configuration from this file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Command line flags win over the configuration file
    fn apply(&self, config: &mut AppConfig) {
        if let Some(interval) = self.interval {
            config.refresh_interval_secs = interval;
        }
        if self.manual {
            config.auto_refresh = false;
        }
        if self.no_line_numbers {
            config.show_line_numbers = false;
        }
        if self.no_wrap {
            config.wrap_lines = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_file = logger::init()?;
    log::info!("Starting tailview, logging to {}", log_file.display());

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    args.apply(&mut config);
    log::debug!("Effective config: {:?}", config);

    let policy = RefreshPolicy::new(config.auto_refresh, config.refresh_interval());
    let tick_rate = config.tick_rate();

    let mut store = Store::new(AppState::new(config));

    // Middleware executes in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(TextInputMiddleware::new()));
    store.add_middleware(Box::new(OpenFileMiddleware::new()));
    store.add_middleware(Box::new(LogTailMiddleware::new(
        policy,
        Box::new(MonotonicClock::new()),
    )));

    if let Some(file) = args.file {
        store.dispatch(Action::LogViewer(LogViewerAction::Open(file)));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:?}", err);
    }
    log::info!("Exiting tailview");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        let (_, height) = LogViewerView::content_size(area);
        if store.state().log_viewer.visible_height != height {
            store.dispatch(Action::LogViewer(LogViewerAction::SetVisibleHeight(height)));
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        store.dispatch(Action::Global(GlobalAction::Tick));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["tailview", "--manual", "--no-wrap", "-i", "0.5", "app.log"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(args.file, Some(PathBuf::from("app.log")));
        assert!(!config.auto_refresh);
        assert!(!config.wrap_lines);
        assert!(config.show_line_numbers);
        assert_eq!(config.refresh_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["tailview"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config, AppConfig::default());
        assert_eq!(args.file, None);
    }
}
