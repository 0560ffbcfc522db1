//! Wizard controller
//!
//! Sole owner of the current step and the form. All transitions are plain
//! methods on an explicitly passed value, so the whole state machine can be
//! exercised without a terminal.

use crate::wizard::form::{FieldUpdate, FormData};
use crate::wizard::submit::{Ack, HelpRequestSink, SubmitError};
use crate::wizard::view::{Action, ActionKind, Gate, View, view};
use crate::wizard::Step;
use tracing::{debug, info, warn};

/// Result of activating an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The step changed (or was re-entered)
    Moved { from: Step, to: Step },
    /// The action's gate is closed; nothing happened
    Blocked(Gate),
    /// The sink accepted the help request
    Submitted(Ack),
    /// The sink refused the help request
    SubmitFailed(SubmitError),
}

/// Current step plus accumulated form data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardController {
    current_step: Step,
    form: FormData,
}

impl WizardController {
    /// Fresh session at `welcome` with an empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// View for the current step
    pub fn view(&self) -> View {
        view(self.current_step)
    }

    /// Move to any step. The form is left untouched.
    pub fn go_to(&mut self, step: Step) {
        let from = self.current_step;
        self.current_step = step;
        if from != step {
            info!(%from, to = %step, "Step changed");
        }
    }

    /// Replace a single form field. No validation happens here.
    pub fn set_field(&mut self, update: FieldUpdate) {
        debug!(field = update.field().name(), "Field updated");
        self.form.apply(update);
    }

    /// "Get Started" enablement on the welcome screen
    pub fn can_advance(&self) -> bool {
        self.form.can_get_started()
    }

    /// "Submit Help Request" enablement on the help form
    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    /// Hand the form to `sink` if the submit gate is open.
    ///
    /// Neither the step nor the form changes, whatever the outcome.
    pub fn submit(&self, sink: &mut dyn HelpRequestSink) -> Result<Ack, SubmitError> {
        let missing = self.form.missing_for_submit();
        if !missing.is_empty() {
            return Err(SubmitError::incomplete(&missing));
        }

        match sink.submit_help_request(&self.form) {
            Ok(ack) => {
                info!(reference = %ack.reference, "Help request submitted");
                Ok(ack)
            }
            Err(e) => {
                warn!(error = %e, "Help request submission failed");
                Err(e)
            }
        }
    }

    /// Activate a button, honouring its gate
    pub fn activate(&mut self, action: &Action, sink: &mut dyn HelpRequestSink) -> Outcome {
        if let Some(gate) = action.gate.filter(|g| !g.is_open(&self.form)) {
            debug!(
                ?gate,
                missing = ?gate.missing(&self.form),
                step = %self.current_step,
                "Action blocked by gate"
            );
            return Outcome::Blocked(gate);
        }

        match action.kind {
            ActionKind::GoTo(to) => {
                let from = self.current_step;
                self.go_to(to);
                Outcome::Moved { from, to }
            }
            ActionKind::Submit => match self.submit(sink) {
                Ok(ack) => Outcome::Submitted(ack),
                Err(e) => Outcome::SubmitFailed(e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::{FormField, HelpNeeded, InterestedJob};
    use crate::wizard::submit::RecordingSink;

    fn fill_contact_details(wizard: &mut WizardController) {
        wizard.set_field(FieldUpdate::FullName("J Doe".into()));
        wizard.set_field(FieldUpdate::Mobile("0700000000".into()));
        wizard.set_field(FieldUpdate::Address("1 Road".into()));
        wizard.set_field(FieldUpdate::PostCode("AB1 2CD".into()));
        wizard.set_field(FieldUpdate::InterestedJob(Some(InterestedJob::Nurse)));
        wizard.set_field(FieldUpdate::HelpNeeded(Some(HelpNeeded::Cv)));
    }

    fn action_to(wizard: &WizardController, target: Step) -> &'static Action {
        wizard
            .view()
            .actions()
            .find(|a| a.target() == Some(target))
            .unwrap()
    }

    #[test]
    fn test_go_to_is_total_and_keeps_form() {
        let mut wizard = WizardController::new();
        wizard.set_field(FieldUpdate::Email("a@b.com".into()));
        let form = wizard.form().clone();

        for from in Step::ALL {
            for to in Step::ALL {
                wizard.go_to(from);
                wizard.go_to(to);
                assert_eq!(wizard.current_step(), to);
                assert_eq!(wizard.form(), &form);
            }
        }
    }

    #[test]
    fn test_go_to_is_idempotent() {
        let mut once = WizardController::new();
        once.go_to(Step::Categories);
        let mut twice = WizardController::new();
        twice.go_to(Step::Categories);
        twice.go_to(Step::Categories);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_scenario_fresh_session() {
        let wizard = WizardController::new();
        assert_eq!(wizard.current_step(), Step::Welcome);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_scenario_full_walkthrough() {
        let mut sink = RecordingSink::default();
        let mut wizard = WizardController::new();

        // Scenario 2
        wizard.set_field(FieldUpdate::Email("a@b.com".into()));
        wizard.set_field(FieldUpdate::Profession("Nurse".into()));
        assert!(wizard.can_advance());
        wizard.go_to(Step::Categories);
        assert_eq!(wizard.current_step(), Step::Categories);

        // Scenario 3
        wizard.go_to(Step::Nursing);
        assert_eq!(wizard.current_step(), Step::Nursing);
        wizard.go_to(Step::HelpForm);
        assert_eq!(wizard.current_step(), Step::HelpForm);
        assert_eq!(wizard.form().email, "a@b.com");
        assert_eq!(wizard.form().profession, "Nurse");

        // Scenario 4
        fill_contact_details(&mut wizard);
        assert!(!wizard.can_submit());
        wizard.set_field(FieldUpdate::Consent(true));
        assert!(wizard.can_submit());

        // Scenario 5
        let before = wizard.form().clone();
        wizard.go_to(Step::HelpForm);
        wizard.go_to(Step::Categories);
        assert_eq!(wizard.current_step(), Step::Categories);
        assert_eq!(wizard.form(), &before);
        assert!(sink.forms.is_empty());

        wizard.go_to(Step::HelpForm);
        assert!(wizard.submit(&mut sink).is_ok());
        assert_eq!(sink.forms, vec![before]);
    }

    #[test]
    fn test_activate_respects_get_started_gate() {
        let mut sink = RecordingSink::default();
        let mut wizard = WizardController::new();
        let get_started = action_to(&wizard, Step::Categories);

        assert_eq!(
            wizard.activate(get_started, &mut sink),
            Outcome::Blocked(Gate::GetStarted)
        );
        assert_eq!(wizard.current_step(), Step::Welcome);

        wizard.set_field(FieldUpdate::Email("a@b.com".into()));
        wizard.set_field(FieldUpdate::Profession("Porter".into()));
        assert_eq!(
            wizard.activate(get_started, &mut sink),
            Outcome::Moved {
                from: Step::Welcome,
                to: Step::Categories
            }
        );
    }

    #[test]
    fn test_submit_blocked_without_consent() {
        let mut sink = RecordingSink::default();
        let mut wizard = WizardController::new();
        wizard.go_to(Step::HelpForm);
        fill_contact_details(&mut wizard);

        let submit = wizard
            .view()
            .actions()
            .find(|a| a.kind == ActionKind::Submit)
            .unwrap();
        assert_eq!(
            wizard.activate(submit, &mut sink),
            Outcome::Blocked(Gate::SubmitHelp)
        );
        assert!(sink.forms.is_empty());
        assert_eq!(
            wizard.submit(&mut sink),
            Err(SubmitError::Incomplete(vec![FormField::Consent.name()]))
        );
    }

    #[test]
    fn test_submit_keeps_step_and_form() {
        let mut sink = RecordingSink::default();
        let mut wizard = WizardController::new();
        wizard.go_to(Step::HelpForm);
        fill_contact_details(&mut wizard);
        wizard.set_field(FieldUpdate::Consent(true));
        let before = wizard.clone();

        let submit = wizard.view().actions().next().unwrap();
        match wizard.activate(submit, &mut sink) {
            Outcome::Submitted(ack) => assert_eq!(ack.reference, "TEST-1"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_submit_reports_sink_failure() {
        let mut sink = RecordingSink {
            fail_with: Some(SubmitError::Unavailable("offline".into())),
            ..Default::default()
        };
        let mut wizard = WizardController::new();
        wizard.go_to(Step::HelpForm);
        fill_contact_details(&mut wizard);
        wizard.set_field(FieldUpdate::Consent(true));

        let submit = wizard.view().actions().next().unwrap();
        assert_eq!(
            wizard.activate(submit, &mut sink),
            Outcome::SubmitFailed(SubmitError::Unavailable("offline".into()))
        );
        assert_eq!(wizard.current_step(), Step::HelpForm);
    }
}
