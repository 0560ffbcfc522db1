//! Wizard core
//!
//! Steps, form data, static screen content, the view/transition table and the
//! controller that owns a session's state. Nothing in here touches the
//! terminal.

pub mod content;
pub mod controller;
pub mod form;
pub mod step;
pub mod submit;
pub mod view;

pub use content::{Body, Link, RenderedScreen, ScreenContent, Section, content};
pub use controller::{Outcome, WizardController};
pub use form::{EnumOption, FieldKind, FieldUpdate, FormData, FormField, HelpNeeded, InterestedJob};
pub use step::Step;
pub use submit::{Ack, HelpRequestSink, LoggedSink, SubmitError};
pub use view::{Action, ActionGroup, ActionKind, ActionRole, Gate, View, view};
