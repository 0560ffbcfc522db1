//! Per-screen renderers

pub mod categories;
pub mod exit;
pub mod help_form;
pub mod info;
pub mod welcome;
