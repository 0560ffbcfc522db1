//! Wizard steps
//!
//! A step names the screen currently on display. Steps are not ordered; the
//! only fixed point is the initial `welcome` screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Landing screen collecting email and profession
    #[default]
    Welcome,
    /// Branch point listing every career path
    Categories,
    /// Health Care Assistants / Support Workers
    EntryHca,
    /// Domestics / Porters
    EntryDomestic,
    /// Administrators
    EntryAdmin,
    /// Nurses
    Nursing,
    /// Allied Health Professionals
    Ahp,
    /// Doctors
    Medical,
    /// Dentists
    Dental,
    /// Request-help contact form
    HelpForm,
}

impl Step {
    /// Every step, in display order
    pub const ALL: [Step; 10] = [
        Step::Welcome,
        Step::Categories,
        Step::EntryHca,
        Step::EntryDomestic,
        Step::EntryAdmin,
        Step::Nursing,
        Step::Ahp,
        Step::Medical,
        Step::Dental,
        Step::HelpForm,
    ];

    /// Informational screens reachable from `categories`
    pub const LEAVES: [Step; 7] = [
        Step::EntryHca,
        Step::EntryDomestic,
        Step::EntryAdmin,
        Step::Nursing,
        Step::Ahp,
        Step::Medical,
        Step::Dental,
    ];

    /// Canonical kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::Categories => "categories",
            Step::EntryHca => "entry-hca",
            Step::EntryDomestic => "entry-domestic",
            Step::EntryAdmin => "entry-admin",
            Step::Nursing => "nursing",
            Step::Ahp => "ahp",
            Step::Medical => "medical",
            Step::Dental => "dental",
            Step::HelpForm => "help-form",
        }
    }

    /// Whether this is a leaf (informational) screen
    pub fn is_leaf(&self) -> bool {
        Self::LEAVES.contains(self)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
