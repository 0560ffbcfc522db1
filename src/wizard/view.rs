//! View selection
//!
//! `view(step)` is total: every step maps to its content, the form fields it
//! edits, and the actions (buttons) it offers. The actions are the wizard's
//! transition table.

use crate::wizard::content::{ScreenContent, content};
use crate::wizard::form::{FormData, FormField};
use crate::wizard::Step;

/// Precondition guarding an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Email and profession filled in
    GetStarted,
    /// Contact details, job, help type and consent filled in
    SubmitHelp,
}

impl Gate {
    pub fn is_open(&self, form: &FormData) -> bool {
        match self {
            Gate::GetStarted => form.can_get_started(),
            Gate::SubmitHelp => form.can_submit(),
        }
    }

    /// Fields keeping the gate closed
    pub fn missing(&self, form: &FormData) -> Vec<FormField> {
        match self {
            Gate::GetStarted => [FormField::Email, FormField::Profession]
                .into_iter()
                .filter(|f| !form.is_filled(*f))
                .collect(),
            Gate::SubmitHelp => form.missing_for_submit(),
        }
    }
}

/// What an action does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    GoTo(Step),
    Submit,
}

/// Visual/keyboard role of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRole {
    /// Main forward action of the screen
    Primary,
    /// One of several choices at a branch point
    Choice,
    /// Navigates back; bound to Escape
    Back,
}

/// Button offered by a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    /// Translation key for the button label
    pub label: &'static str,
    pub gate: Option<Gate>,
    pub role: ActionRole,
}

impl Action {
    const fn go(target: Step, label: &'static str, role: ActionRole) -> Self {
        Self {
            kind: ActionKind::GoTo(target),
            label,
            gate: None,
            role,
        }
    }

    /// Whether the action may be activated with the given form
    pub fn is_enabled(&self, form: &FormData) -> bool {
        self.gate.is_none_or(|gate| gate.is_open(form))
    }

    /// Target step for navigation actions
    pub fn target(&self) -> Option<Step> {
        match self.kind {
            ActionKind::GoTo(step) => Some(step),
            ActionKind::Submit => None,
        }
    }
}

/// Related actions shown together, with an optional heading and caption
#[derive(Debug, Clone, Copy)]
pub struct ActionGroup {
    pub heading: Option<&'static str>,
    pub caption: Option<&'static str>,
    pub actions: &'static [Action],
}

/// Everything a front end needs to draw one step
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub step: Step,
    pub content: &'static ScreenContent,
    pub fields: &'static [FormField],
    pub groups: &'static [ActionGroup],
}

impl View {
    /// Actions in display order
    pub fn actions(&self) -> impl Iterator<Item = &'static Action> + 'static {
        let groups: &'static [ActionGroup] = self.groups;
        groups.iter().flat_map(|g| g.actions.iter())
    }

    /// First back action, if any
    pub fn back_action(&self) -> Option<&'static Action> {
        self.actions().find(|a| a.role == ActionRole::Back)
    }

    /// Steps reachable from this view
    pub fn targets(&self) -> Vec<Step> {
        self.actions().filter_map(Action::target).collect()
    }
}

const NO_FIELDS: &[FormField] = &[];

const WELCOME_FIELDS: &[FormField] = &[FormField::Email, FormField::Profession];

const HELP_FORM_FIELDS: &[FormField] = &[
    FormField::FullName,
    FormField::Mobile,
    FormField::Address,
    FormField::PostCode,
    FormField::Email,
    FormField::Profession,
    FormField::InterestedJob,
    FormField::HelpNeeded,
    FormField::Consent,
];

const GET_STARTED: Action = Action {
    kind: ActionKind::GoTo(Step::Categories),
    label: "action_get_started",
    gate: Some(Gate::GetStarted),
    role: ActionRole::Primary,
};

const SUBMIT: Action = Action {
    kind: ActionKind::Submit,
    label: "action_submit",
    gate: Some(Gate::SubmitHelp),
    role: ActionRole::Primary,
};

const BACK_TO_CATEGORIES: Action =
    Action::go(Step::Categories, "action_back_categories", ActionRole::Back);

static WELCOME_GROUPS: [ActionGroup; 1] = [ActionGroup {
    heading: None,
    caption: None,
    actions: &[GET_STARTED],
}];

static CATEGORY_GROUPS: [ActionGroup; 4] = [
    ActionGroup {
        heading: Some("group_entry_heading"),
        caption: Some("group_entry_caption"),
        actions: &[
            Action::go(Step::EntryHca, "action_hca", ActionRole::Choice),
            Action::go(Step::EntryDomestic, "action_domestic", ActionRole::Choice),
            Action::go(Step::EntryAdmin, "action_admin", ActionRole::Choice),
        ],
    },
    ActionGroup {
        heading: Some("group_clinical_heading"),
        caption: Some("group_clinical_caption"),
        actions: &[
            Action::go(Step::Nursing, "action_nursing", ActionRole::Choice),
            Action::go(Step::Ahp, "action_ahp", ActionRole::Choice),
        ],
    },
    ActionGroup {
        heading: Some("group_medical_heading"),
        caption: Some("group_medical_caption"),
        actions: &[
            Action::go(Step::Medical, "action_medical", ActionRole::Choice),
            Action::go(Step::Dental, "action_dental", ActionRole::Choice),
        ],
    },
    ActionGroup {
        heading: None,
        caption: None,
        actions: &[
            Action::go(Step::HelpForm, "action_need_help", ActionRole::Primary),
            Action::go(Step::Welcome, "action_back_welcome", ActionRole::Back),
        ],
    },
];

static LEAF_GROUPS: [ActionGroup; 1] = [ActionGroup {
    heading: None,
    caption: None,
    actions: &[
        Action::go(Step::HelpForm, "action_get_help_job", ActionRole::Primary),
        BACK_TO_CATEGORIES,
    ],
}];

static HELP_FORM_GROUPS: [ActionGroup; 1] = [ActionGroup {
    heading: None,
    caption: None,
    actions: &[SUBMIT, BACK_TO_CATEGORIES],
}];

/// View for a step
pub fn view(step: Step) -> View {
    let (fields, groups): (&'static [FormField], &'static [ActionGroup]) = match step {
        Step::Welcome => (WELCOME_FIELDS, &WELCOME_GROUPS[..]),
        Step::Categories => (NO_FIELDS, &CATEGORY_GROUPS[..]),
        Step::HelpForm => (HELP_FORM_FIELDS, &HELP_FORM_GROUPS[..]),
        Step::EntryHca
        | Step::EntryDomestic
        | Step::EntryAdmin
        | Step::Nursing
        | Step::Ahp
        | Step::Medical
        | Step::Dental => (NO_FIELDS, &LEAF_GROUPS[..]),
    };

    View {
        step,
        content: content(step),
        fields,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_step_has_an_outbound_action() {
        for step in Step::ALL {
            assert!(view(step).actions().next().is_some(), "{} is absorbing", step);
        }
    }

    #[test]
    fn test_welcome_transitions() {
        let v = view(Step::Welcome);
        assert_eq!(v.targets(), vec![Step::Categories]);
        assert_eq!(v.fields, &[FormField::Email, FormField::Profession]);
        assert!(v.back_action().is_none());
        let get_started = v.actions().next().unwrap();
        assert_eq!(get_started.gate, Some(Gate::GetStarted));
    }

    #[test]
    fn test_categories_branches() {
        let v = view(Step::Categories);
        let targets = v.targets();
        for step in Step::LEAVES {
            assert!(targets.contains(&step), "missing {}", step);
        }
        assert!(targets.contains(&Step::HelpForm));
        assert_eq!(v.groups.iter().filter(|g| g.heading.is_some()).count(), 3);
        assert_eq!(v.back_action().and_then(Action::target), Some(Step::Welcome));
    }

    #[test]
    fn test_leaves_offer_help_and_categories() {
        for step in Step::LEAVES {
            let v = view(step);
            assert_eq!(v.targets(), vec![Step::HelpForm, Step::Categories]);
            assert!(v.fields.is_empty());
            assert!(v.actions().all(|a| a.gate.is_none()));
        }
    }

    #[test]
    fn test_help_form_offers_submit_and_back() {
        let v = view(Step::HelpForm);
        let kinds: Vec<_> = v.actions().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![ActionKind::Submit, ActionKind::GoTo(Step::Categories)]
        );
        assert_eq!(v.fields.len(), 9);
    }

    #[test]
    fn test_gated_action_enablement() {
        let mut form = FormData::new();
        assert!(!GET_STARTED.is_enabled(&form));
        assert!(!SUBMIT.is_enabled(&form));
        assert!(BACK_TO_CATEGORIES.is_enabled(&form));
        form.email = "a@b.com".into();
        form.profession = "Nurse".into();
        assert!(GET_STARTED.is_enabled(&form));
    }

    #[test]
    fn test_gate_reports_missing_fields() {
        let mut form = FormData::new();
        form.profession = "Porter".into();
        assert_eq!(Gate::GetStarted.missing(&form), vec![FormField::Email]);

        form.consent = true;
        let missing = Gate::SubmitHelp.missing(&form);
        assert!(missing.contains(&FormField::FullName));
        assert!(!missing.contains(&FormField::Consent));
        assert!(!missing.contains(&FormField::Profession));
    }
}
