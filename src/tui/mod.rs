//! Ratatui terminal UI
//!
//! Keyboard-driven front end for the wizard.

pub mod app;
pub mod components;
pub mod display;
pub mod event;
pub mod labels;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::TuiApp;
pub use display::{StepSummary, step_summaries, write_screen, write_step_list};
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, FocusState, Focusable, InputState, Selectable, Status};
pub use theme::{Theme, theme};
pub use ui::{draw, render};
