//! Log Tail Middleware
//!
//! Owns the [`LogTailer`] and performs all file I/O. It drives the refresh
//! schedule on every `Tick`, executes the tailing actions of the log viewer
//! and publishes the results back into the store:
//!
//! - `StatusUpdated` whenever path, read position, file stat, cleared flag or
//!   refresh policy changed
//! - `ContentUpdated` whenever the buffered content changed, flagged as a
//!   reset unless the new text continues the previously published one
//!
//! Refresh failures are reported in the status bar once per transition, so a
//! missing file does not flood the history on every interval.

use std::sync::Arc;

use tailview_core::{
    Clock, FileProbe, FsProbe, LogTailer, ReadOutcome, RefreshPolicy, TailError,
};

use crate::actions::{Action, GlobalAction, LogViewerAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, TailStatus};

/// Interval step for the +/- hotkeys
const INTERVAL_STEP_MS: i64 = 100;

pub struct LogTailMiddleware {
    tailer: LogTailer,
    clock: Box<dyn Clock>,
    /// Live stat for the file info header, independent of the read cursor
    probe: FsProbe,
    published_status: Option<TailStatus>,
    published_revision: Option<u64>,
    published_text: Arc<str>,
    /// Open or clear happened since the last publish
    pending_reset: bool,
    /// A missing file was already reported
    warned_missing: bool,
}

impl LogTailMiddleware {
    pub fn new(policy: RefreshPolicy, clock: Box<dyn Clock>) -> Self {
        Self {
            tailer: LogTailer::with_policy(policy),
            clock,
            probe: FsProbe,
            published_status: None,
            published_revision: None,
            published_text: Arc::from(""),
            pending_reset: false,
            warned_missing: false,
        }
    }

    fn handle_log_viewer(&mut self, action: &LogViewerAction, dispatcher: &Dispatcher) -> bool {
        match action {
            LogViewerAction::Open(path) => {
                self.warned_missing = false;
                self.pending_reset = true;
                let result = self.tailer.open(path);
                self.report(result, "open", true, dispatcher);
            }
            LogViewerAction::Clear => {
                self.tailer.clear();
                self.pending_reset = true;
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    "Display cleared, the next refresh reloads the file",
                    "clear",
                )));
            }
            LogViewerAction::Refresh => {
                let result = self.tailer.refresh();
                self.report(result, "refresh", true, dispatcher);
            }
            LogViewerAction::ToggleAutoRefresh => {
                let enabled = !self.tailer.policy().auto_refresh;
                let result = self.tailer.set_auto_refresh(enabled, self.clock.now());

                let message = if enabled {
                    format!(
                        "Auto refresh every {:.1}s",
                        self.tailer.policy().interval.as_secs_f64()
                    )
                } else {
                    "Manual refresh, press r to refresh".to_string()
                };
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    message,
                    "auto refresh",
                )));

                if let Some(result) = result {
                    self.report(result, "auto refresh", false, dispatcher);
                }
            }
            LogViewerAction::IncreaseInterval | LogViewerAction::DecreaseInterval => {
                let delta = if matches!(action, LogViewerAction::IncreaseInterval) {
                    INTERVAL_STEP_MS
                } else {
                    -INTERVAL_STEP_MS
                };
                self.tailer.adjust_interval(delta);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    format!(
                        "Refresh interval {:.1}s",
                        self.tailer.policy().interval.as_secs_f64()
                    ),
                    "interval",
                )));
            }
            _ => return false,
        }
        true
    }

    /// Turn the result of a refresh into status bar messages
    ///
    /// `explicit` is set for user-triggered refreshes, which always get
    /// feedback. Scheduled ones only report state transitions.
    fn report(
        &mut self,
        result: Result<ReadOutcome, TailError>,
        source: &str,
        explicit: bool,
        dispatcher: &Dispatcher,
    ) {
        match result {
            Ok(outcome) => {
                if self.warned_missing {
                    self.warned_missing = false;
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        "Log file is available again",
                        source,
                    )));
                } else if explicit {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                        describe_outcome(&outcome),
                        source,
                    )));
                }
            }
            Err(e) if e.is_idle() => {
                if explicit {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                        "Please open a log file first (press o)",
                        source,
                    )));
                }
            }
            Err(e) => {
                if explicit || !self.warned_missing {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                        e.to_string(),
                        source,
                    )));
                }
                self.warned_missing = e.is_missing();
            }
        }
    }

    fn current_status(&self) -> TailStatus {
        let path = self.tailer.path().map(|p| p.to_path_buf());
        let file = path.as_deref().and_then(|p| self.probe.probe(p));

        TailStatus {
            path,
            offset: self.tailer.offset(),
            file,
            cleared: self.tailer.is_cleared(),
            policy: self.tailer.policy(),
        }
    }

    /// Push status and content changes into the store
    fn publish(&mut self, dispatcher: &Dispatcher) {
        let status = self.current_status();
        if self.published_status.as_ref() != Some(&status) {
            self.published_status = Some(status.clone());
            dispatcher.dispatch(Action::LogViewer(LogViewerAction::StatusUpdated(status)));
        }

        let revision = self.tailer.revision();
        if self.published_revision != Some(revision) {
            self.published_revision = Some(revision);

            // An append also moves the mtime, so the reader reloads the whole
            // file; the view only resets when the old text is not a prefix
            let text: Arc<str> = Arc::from(self.tailer.text());
            let continues = text.starts_with(&*self.published_text);
            let reset = std::mem::take(&mut self.pending_reset) || !continues;
            self.published_text = Arc::clone(&text);

            dispatcher.dispatch(Action::LogViewer(LogViewerAction::ContentUpdated {
                text,
                line_count: self.tailer.line_count(),
                reset,
            }));
        }
    }
}

fn describe_outcome(outcome: &ReadOutcome) -> String {
    match outcome {
        ReadOutcome::Emptied => "Log file is empty".to_string(),
        ReadOutcome::Unchanged => "No new content".to_string(),
        ReadOutcome::Appended(bytes) => format!("{} new bytes", bytes.len()),
        ReadOutcome::Reloaded(bytes) => format!("Loaded {} bytes", bytes.len()),
    }
}

impl Middleware for LogTailMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let handled = match action {
            Action::Global(GlobalAction::Tick) => {
                if let Some(result) = self.tailer.tick(self.clock.now()) {
                    self.report(result, "auto refresh", false, dispatcher);
                }
                // The file info header follows the file even without a refresh
                true
            }
            Action::LogViewer(action) => self.handle_log_viewer(action, dispatcher),
            _ => false,
        };

        if handled {
            self.publish(dispatcher);
        }

        true
    }
}
