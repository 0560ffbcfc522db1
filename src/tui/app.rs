//! TUI application main module
//!
//! Owns the terminal and the event loop; all decisions are delegated to
//! [`AppState`].

use crate::config::Config;
use crate::tui::event::{EventPoll, TuiEvent, disable_bracketed_paste, enable_bracketed_paste};
use crate::tui::state::AppState;
use crate::tui::ui::render;
use crate::wizard::{HelpRequestSink, Step};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tracing::info;

/// TUI application
#[derive(Debug)]
pub struct TuiApp<S> {
    /// Terminal
    pub terminal: DefaultTerminal,
    /// Event poller
    pub event_poll: EventPoll,
    /// Application state
    pub state: AppState,
    /// Where help requests go
    sink: S,
    /// Log path
    log_path: Option<PathBuf>,
}

impl<S: HelpRequestSink> TuiApp<S> {
    /// Take over the terminal and start at the welcome screen
    pub fn new(config: &Config, sink: S) -> std::io::Result<Self> {
        let terminal = ratatui::init();
        if let Err(e) = enable_bracketed_paste() {
            ratatui::restore();
            return Err(e);
        }

        Ok(Self {
            terminal,
            event_poll: EventPoll::new(config.tick_rate()),
            state: AppState::new(config.show_links),
            sink,
            log_path: None,
        })
    }

    /// Set log path
    pub fn set_log_path(&mut self, path: PathBuf) {
        self.log_path = Some(path);
    }

    /// Run until the user confirms leaving, then restore the terminal.
    ///
    /// Returns the step the session ended on.
    pub fn run(&mut self) -> std::io::Result<Step> {
        let result = self.event_loop();

        let _ = disable_bracketed_paste();
        ratatui::restore();

        let last_step = self.state.current_step();
        info!(
            %last_step,
            log_file = ?self.log_path.as_ref().map(|p| p.display().to_string()),
            "Interactive session ended"
        );
        result.map(|_| last_step)
    }

    fn event_loop(&mut self) -> std::io::Result<()> {
        render(&mut self.terminal, &mut self.state)?;

        loop {
            match self.event_poll.next() {
                TuiEvent::None => continue,
                event => {
                    if self.state.handle_event(event, &mut self.sink) {
                        return Ok(());
                    }
                }
            }
            render(&mut self.terminal, &mut self.state)?;
        }
    }
}
