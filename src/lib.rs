//! Health Jobs Portal - a guided wizard for refugees looking for work in the
//! NHS and Social Care
//!
//! The library provides:
//! - The wizard core: steps, form data, screen content and the transition table
//! - A pluggable submission seam for help requests
//! - A keyboard-driven terminal front end built on Ratatui
//! - Text and JSON printing of screen content for non-interactive use

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod tui;
pub mod wizard;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use i18n::{Language, init_locale};
pub use tui::TuiApp;
pub use wizard::{
    Ack, FormData, HelpRequestSink, LoggedSink, Step, SubmitError, WizardController,
};
