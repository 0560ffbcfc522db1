//! Application state and keyboard handling
//!
//! Everything here is independent of the terminal, so whole keyboard sessions
//! can be replayed in tests against a [`HelpRequestSink`].

use crate::tui::event::TuiEvent;
use crate::tui::state::{FocusState, InputState, Selectable};
use crate::wizard::{
    Action, EnumOption, FieldKind, FieldUpdate, FormField, HelpRequestSink, Outcome, Step,
    WizardController,
};
use ratatui::widgets::ListState;

/// Lines moved by PageUp/PageDown
pub const SCROLL_PAGE: u16 = 5;

/// A control that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focusable {
    Field(FormField),
    Action(&'static Action),
}

/// Footer message left by the last activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Help request accepted under this reference
    Submitted(String),
    /// Help request refused by the sink
    Failed(String),
}

/// Terminal front end state
#[derive(Debug)]
pub struct AppState {
    pub wizard: WizardController,
    pub focus: FocusState,
    /// Edit buffer mirroring the focused text field
    pub input: InputState,
    /// First visible content line
    pub scroll: u16,
    pub status: Option<Status>,
    /// Exit confirmation is showing
    pub confirm_exit: bool,
    pub show_links: bool,
    /// Render state of the controls list
    pub controls_list: ListState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AppState {
    pub fn new(show_links: bool) -> Self {
        let mut state = Self {
            wizard: WizardController::new(),
            focus: FocusState::default(),
            input: InputState::new(),
            scroll: 0,
            status: None,
            confirm_exit: false,
            show_links,
            controls_list: ListState::default(),
        };
        state.enter_step();
        state
    }

    pub fn current_step(&self) -> Step {
        self.wizard.current_step()
    }

    /// Fields of the current view followed by its actions
    pub fn focusables(&self) -> Vec<Focusable> {
        let view = self.wizard.view();
        view.fields
            .iter()
            .copied()
            .map(Focusable::Field)
            .chain(view.actions().map(Focusable::Action))
            .collect()
    }

    pub fn focused(&self) -> Option<Focusable> {
        self.focus
            .selected()
            .and_then(|i| self.focusables().get(i).copied())
    }

    /// Handle one event. Returns `true` when the user confirmed leaving.
    pub fn handle_event(&mut self, event: TuiEvent, sink: &mut dyn HelpRequestSink) -> bool {
        if self.confirm_exit {
            return self.handle_exit_confirm(event);
        }

        match event {
            TuiEvent::CtrlC => self.confirm_exit = true,
            TuiEvent::Tab | TuiEvent::Down => self.move_focus(true),
            TuiEvent::BackTab | TuiEvent::Up => self.move_focus(false),
            TuiEvent::PageDown => self.scroll = self.scroll.saturating_add(SCROLL_PAGE),
            TuiEvent::PageUp => self.scroll = self.scroll.saturating_sub(SCROLL_PAGE),
            TuiEvent::Escape => match self.wizard.view().back_action() {
                Some(back) => self.activate(back, sink),
                None => self.confirm_exit = true,
            },
            event => match self.focused() {
                Some(Focusable::Field(field)) => self.edit_field(field, event),
                Some(Focusable::Action(action)) => {
                    if matches!(event, TuiEvent::Enter | TuiEvent::Char(' ')) {
                        self.activate(action, sink);
                    }
                }
                None => {}
            },
        }
        false
    }

    fn handle_exit_confirm(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Char('y') | TuiEvent::Char('Y') | TuiEvent::CtrlC => true,
            TuiEvent::Char('n') | TuiEvent::Char('N') | TuiEvent::Escape => {
                self.confirm_exit = false;
                false
            }
            _ => false,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        if forward {
            self.focus.next();
        } else {
            self.focus.prev();
        }
        self.sync_input();
    }

    /// Activate a button and record the outcome. A closed gate leaves the
    /// screen untouched.
    pub fn activate(&mut self, action: &Action, sink: &mut dyn HelpRequestSink) {
        match self.wizard.activate(action, sink) {
            Outcome::Moved { .. } => self.enter_step(),
            Outcome::Blocked(_) => {}
            Outcome::Submitted(ack) => self.status = Some(Status::Submitted(ack.reference)),
            Outcome::SubmitFailed(e) => self.status = Some(Status::Failed(e.to_string())),
        }
    }

    /// Reset per-screen state after a step change
    fn enter_step(&mut self) {
        self.focus = FocusState::with_count(self.focusables().len());
        self.controls_list = ListState::default();
        self.scroll = 0;
        self.status = None;
        self.sync_input();
    }

    /// Load the focused text field into the edit buffer
    fn sync_input(&mut self) {
        self.input = match self.focused() {
            Some(Focusable::Field(field)) => {
                InputState::with_value(self.wizard.form().text(field).unwrap_or_default())
            }
            _ => InputState::new(),
        };
    }

    fn edit_field(&mut self, field: FormField, event: TuiEvent) {
        match field.kind() {
            FieldKind::Text => self.edit_text(field, event),
            FieldKind::JobSelect => {
                let current = self.wizard.form().interested_job;
                if let Some(next) = cycle(current, &event) {
                    self.set_field(FieldUpdate::InterestedJob(next));
                }
            }
            FieldKind::HelpSelect => {
                let current = self.wizard.form().help_needed;
                if let Some(next) = cycle(current, &event) {
                    self.set_field(FieldUpdate::HelpNeeded(next));
                }
            }
            FieldKind::Checkbox => {
                if matches!(event, TuiEvent::Enter | TuiEvent::Char(' ')) {
                    let consent = !self.wizard.form().consent;
                    self.set_field(FieldUpdate::Consent(consent));
                }
            }
        }
    }

    fn edit_text(&mut self, field: FormField, event: TuiEvent) {
        match event {
            TuiEvent::Enter => {
                self.move_focus(true);
                return;
            }
            TuiEvent::Char(c) => self.input.insert_char(c),
            TuiEvent::Paste(text) => self.input.insert_str(&text),
            TuiEvent::Backspace => self.input.delete_before_cursor(),
            TuiEvent::Delete => self.input.delete_after_cursor(),
            TuiEvent::Left => {
                self.input.move_cursor_left();
                return;
            }
            TuiEvent::Right => {
                self.input.move_cursor_right();
                return;
            }
            TuiEvent::Home => {
                self.input.move_cursor_to_start();
                return;
            }
            TuiEvent::End => {
                self.input.move_cursor_to_end();
                return;
            }
            _ => return,
        }

        if self.wizard.form().text(field) == Some(self.input.value()) {
            return;
        }
        if let Some(update) = FieldUpdate::text(field, self.input.value()) {
            self.set_field(update);
        }
    }

    fn set_field(&mut self, update: FieldUpdate) {
        self.wizard.set_field(update);
    }
}

/// Next value of a select for a key press, `None` if the key does not cycle
fn cycle<E: EnumOption>(current: Option<E>, event: &TuiEvent) -> Option<Option<E>> {
    match event {
        TuiEvent::Right | TuiEvent::Enter | TuiEvent::Char(' ') => Some(E::cycle_next(current)),
        TuiEvent::Left => Some(E::cycle_prev(current)),
        _ => None,
    }
}

/// Type a string into the focused field, for tests
#[cfg(test)]
pub(crate) fn type_text(state: &mut AppState, sink: &mut dyn HelpRequestSink, text: &str) {
    for c in text.chars() {
        state.handle_event(TuiEvent::Char(c), sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{HelpNeeded, InterestedJob, SubmitError};
    use crate::wizard::submit::RecordingSink;

    fn focus_on(state: &mut AppState, target: Focusable) {
        let index = state
            .focusables()
            .iter()
            .position(|f| *f == target)
            .unwrap();
        state.focus.select(index);
        state.sync_input();
    }

    fn focus_action(state: &mut AppState, label: &str) {
        let action = state
            .focusables()
            .into_iter()
            .find(|f| matches!(f, Focusable::Action(a) if a.label == label))
            .unwrap();
        focus_on(state, action);
    }

    fn start(sink: &mut RecordingSink) -> AppState {
        let mut state = AppState::new(true);
        type_text(&mut state, sink, "amal@example.org");
        state.handle_event(TuiEvent::Tab, sink);
        type_text(&mut state, sink, "Nurse");
        state.handle_event(TuiEvent::Tab, sink);
        state.handle_event(TuiEvent::Enter, sink);
        state
    }

    #[test]
    fn test_welcome_typing_fills_fields() {
        let mut sink = RecordingSink::default();
        let mut state = AppState::new(true);
        assert_eq!(state.focused(), Some(Focusable::Field(FormField::Email)));

        type_text(&mut state, &mut sink, "a@b.co");
        state.handle_event(TuiEvent::Backspace, &mut sink);
        assert_eq!(state.wizard.form().email, "a@b.c");

        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.focused(), Some(Focusable::Field(FormField::Profession)));
        state.handle_event(TuiEvent::Paste("Porter\n".into()), &mut sink);
        assert_eq!(state.wizard.form().profession, "Porter");
    }

    #[test]
    fn test_get_started_blocked_until_filled() {
        let mut sink = RecordingSink::default();
        let mut state = AppState::new(true);
        type_text(&mut state, &mut sink, "a@b.com");
        focus_action(&mut state, "action_get_started");

        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.current_step(), Step::Welcome);
        assert_eq!(state.status, None);
        assert!(matches!(state.focused(), Some(Focusable::Action(_))));

        focus_on(&mut state, Focusable::Field(FormField::Profession));
        type_text(&mut state, &mut sink, "Doctor");

        state.handle_event(TuiEvent::Tab, &mut sink);
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.current_step(), Step::Categories);
    }

    #[test]
    fn test_blocked_action_stays_inert_after_edits() {
        let mut sink = RecordingSink::default();
        let mut state = AppState::new(true);
        type_text(&mut state, &mut sink, "a");
        focus_action(&mut state, "action_get_started");
        state.handle_event(TuiEvent::Enter, &mut sink);

        focus_on(&mut state, Focusable::Field(FormField::Email));
        state.handle_event(TuiEvent::End, &mut sink);
        state.handle_event(TuiEvent::Backspace, &mut sink);
        assert_eq!(state.wizard.form().email, "");
        assert_eq!(state.status, None);

        focus_action(&mut state, "action_get_started");
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.current_step(), Step::Welcome);
        assert_eq!(state.status, None);
    }

    #[test]
    fn test_start_reaches_categories_and_focus_resets() {
        let mut sink = RecordingSink::default();
        let state = start(&mut sink);
        assert_eq!(state.current_step(), Step::Categories);
        assert_eq!(state.focus.selected(), Some(0));
        assert!(matches!(
            state.focused(),
            Some(Focusable::Action(a)) if a.target() == Some(Step::EntryHca)
        ));
    }

    #[test]
    fn test_escape_walks_back_then_asks_to_exit() {
        let mut sink = RecordingSink::default();
        let mut state = start(&mut sink);

        focus_action(&mut state, "action_dental");
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.current_step(), Step::Dental);

        state.handle_event(TuiEvent::Escape, &mut sink);
        assert_eq!(state.current_step(), Step::Categories);
        state.handle_event(TuiEvent::Escape, &mut sink);
        assert_eq!(state.current_step(), Step::Welcome);
        assert_eq!(state.wizard.form().profession, "Nurse");

        assert!(!state.handle_event(TuiEvent::Escape, &mut sink));
        assert!(state.confirm_exit);
        assert!(!state.handle_event(TuiEvent::Char('n'), &mut sink));
        assert!(!state.confirm_exit);

        state.handle_event(TuiEvent::CtrlC, &mut sink);
        assert!(state.handle_event(TuiEvent::Char('y'), &mut sink));
    }

    #[test]
    fn test_paging_scrolls_and_step_change_resets() {
        let mut sink = RecordingSink::default();
        let mut state = start(&mut sink);
        focus_action(&mut state, "action_ahp");
        state.handle_event(TuiEvent::Enter, &mut sink);

        state.handle_event(TuiEvent::PageDown, &mut sink);
        state.handle_event(TuiEvent::PageDown, &mut sink);
        state.handle_event(TuiEvent::PageUp, &mut sink);
        assert_eq!(state.scroll, SCROLL_PAGE);

        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.current_step(), Step::HelpForm);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_help_form_by_keyboard() {
        let mut sink = RecordingSink::default();
        let mut state = start(&mut sink);
        focus_action(&mut state, "action_need_help");
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.current_step(), Step::HelpForm);
        assert_eq!(state.focused(), Some(Focusable::Field(FormField::FullName)));

        for value in ["Amal Haddad", "07700900123", "1 High Street", "M1 1AA"] {
            type_text(&mut state, &mut sink, value);
            state.handle_event(TuiEvent::Tab, &mut sink);
        }
        // Email and profession carry over from welcome
        assert_eq!(state.input.value(), "amal@example.org");
        state.handle_event(TuiEvent::Tab, &mut sink);
        state.handle_event(TuiEvent::Tab, &mut sink);

        assert_eq!(state.focused(), Some(Focusable::Field(FormField::InterestedJob)));
        state.handle_event(TuiEvent::Left, &mut sink);
        assert_eq!(state.wizard.form().interested_job, Some(InterestedJob::Dentist));
        state.handle_event(TuiEvent::Right, &mut sink);
        assert_eq!(state.wizard.form().interested_job, Some(InterestedJob::Hca));

        state.handle_event(TuiEvent::Tab, &mut sink);
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.wizard.form().help_needed, Some(HelpNeeded::Application));

        state.handle_event(TuiEvent::Tab, &mut sink);
        focus_action(&mut state, "action_submit");
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.status, None);
        assert!(sink.forms.is_empty());

        focus_on(&mut state, Focusable::Field(FormField::Consent));
        state.handle_event(TuiEvent::Char(' '), &mut sink);
        assert!(state.wizard.form().consent);

        focus_action(&mut state, "action_submit");
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert_eq!(state.status, Some(Status::Submitted("TEST-1".into())));
        assert_eq!(state.current_step(), Step::HelpForm);
        assert_eq!(sink.forms[0].mobile, "07700900123");
        assert_eq!(sink.forms[0].post_code, "M1 1AA");
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut sink = RecordingSink::default();
        let mut state = AppState::new(false);
        for update in [
            FieldUpdate::FullName("A".into()),
            FieldUpdate::Mobile("1".into()),
            FieldUpdate::Address("B".into()),
            FieldUpdate::PostCode("C".into()),
            FieldUpdate::InterestedJob(Some(InterestedJob::Admin)),
            FieldUpdate::HelpNeeded(Some(HelpNeeded::Cv)),
            FieldUpdate::Consent(true),
        ] {
            state.wizard.set_field(update);
        }
        state.wizard.go_to(Step::HelpForm);
        state.enter_step();

        sink.fail_with = Some(SubmitError::Unavailable("offline".into()));
        focus_action(&mut state, "action_submit");
        state.handle_event(TuiEvent::Enter, &mut sink);
        assert!(matches!(&state.status, Some(Status::Failed(msg)) if msg.contains("offline")));
    }
}
