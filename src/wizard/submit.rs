//! Help-request submission seam
//!
//! The wizard does not know where a help request goes. It hands the form to a
//! [`HelpRequestSink`] and reports back whatever acknowledgement or error the
//! sink returns.

use crate::wizard::form::{EnumOption, FormData, FormField};
use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::info;

/// Acknowledgement of a received help request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    /// Reference the user can quote
    pub reference: String,
    /// When the sink accepted the request
    pub received_at: DateTime<Local>,
}

/// Reasons a submission did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Help request is incomplete, missing: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("Help request rejected: {0}")]
    Rejected(String),

    #[error("Help request service unavailable: {0}")]
    Unavailable(String),
}

impl SubmitError {
    /// Build an `Incomplete` error from the missing fields
    pub fn incomplete(missing: &[FormField]) -> Self {
        SubmitError::Incomplete(missing.iter().map(|f| f.name()).collect())
    }
}

/// Destination of completed help requests
pub trait HelpRequestSink {
    fn submit_help_request(&mut self, form: &FormData) -> Result<Ack, SubmitError>;
}

/// Sink that records a structured log event and nothing else.
///
/// Only the job category, help type and the names of filled fields are
/// logged; contact details never reach the log.
#[derive(Debug, Default)]
pub struct LoggedSink {
    received: u32,
}

impl LoggedSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HelpRequestSink for LoggedSink {
    fn submit_help_request(&mut self, form: &FormData) -> Result<Ack, SubmitError> {
        self.received += 1;
        let received_at = Local::now();
        let reference = format!(
            "HR-{}-{:03}",
            received_at.format("%Y%m%d%H%M%S"),
            self.received
        );

        info!(
            %reference,
            job = form.interested_job.map(|j| j.as_str()).unwrap_or_default(),
            help = form.help_needed.map(|h| h.as_str()).unwrap_or_default(),
            fields = ?form.filled_field_names(),
            "Help request received"
        );

        Ok(Ack {
            reference,
            received_at,
        })
    }
}

/// Sink keeping every submitted form, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub forms: Vec<FormData>,
    pub fail_with: Option<SubmitError>,
}

#[cfg(test)]
impl HelpRequestSink for RecordingSink {
    fn submit_help_request(&mut self, form: &FormData) -> Result<Ack, SubmitError> {
        if let Some(err) = self.fail_with.clone() {
            return Err(err);
        }
        self.forms.push(form.clone());
        Ok(Ack {
            reference: format!("TEST-{}", self.forms.len()),
            received_at: Local::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_sink_numbers_references() {
        let mut sink = LoggedSink::new();
        let form = FormData::new();
        let first = sink.submit_help_request(&form).unwrap();
        let second = sink.submit_help_request(&form).unwrap();
        assert!(first.reference.starts_with("HR-"));
        assert!(first.reference.ends_with("-001"));
        assert!(second.reference.ends_with("-002"));
    }

    #[test]
    fn test_incomplete_message_lists_fields() {
        let err = SubmitError::incomplete(&[FormField::Mobile, FormField::Consent]);
        assert_eq!(
            err.to_string(),
            "Help request is incomplete, missing: mobile, consent"
        );
    }
}
