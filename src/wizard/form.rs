//! Help-request form data
//!
//! The two enumerations (`InterestedJob`, `HelpNeeded`) are defined once here
//! and referenced by both the input surface and the submit gate.

use serde::{Deserialize, Serialize};

/// Shared behaviour of the single-select enumerations
pub trait EnumOption: Copy + PartialEq + Sized + 'static {
    /// All variants in display order
    fn variants() -> &'static [Self];

    /// Stable wire value
    fn as_str(&self) -> &'static str;

    /// Translation key for the display label
    fn label_key(&self) -> &'static str;

    /// Index within `variants()`
    fn to_index(&self) -> usize {
        Self::variants()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    /// Variant at `index`, wrapping
    fn from_index(index: usize) -> Self {
        let variants = Self::variants();
        variants[index % variants.len()]
    }

    /// Next option; an unset select starts at the first variant
    fn cycle_next(current: Option<Self>) -> Option<Self> {
        Some(match current {
            Some(v) => Self::from_index(v.to_index() + 1),
            None => Self::from_index(0),
        })
    }

    /// Previous option; an unset select starts at the last variant
    fn cycle_prev(current: Option<Self>) -> Option<Self> {
        let count = Self::variants().len();
        Some(match current {
            Some(v) => Self::from_index(v.to_index() + count - 1),
            None => Self::from_index(count - 1),
        })
    }
}

/// Job category the user is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestedJob {
    Hca,
    Domestic,
    Admin,
    Nurse,
    Ahp,
    Doctor,
    Dentist,
}

impl EnumOption for InterestedJob {
    fn variants() -> &'static [Self] {
        &[
            InterestedJob::Hca,
            InterestedJob::Domestic,
            InterestedJob::Admin,
            InterestedJob::Nurse,
            InterestedJob::Ahp,
            InterestedJob::Doctor,
            InterestedJob::Dentist,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            InterestedJob::Hca => "hca",
            InterestedJob::Domestic => "domestic",
            InterestedJob::Admin => "admin",
            InterestedJob::Nurse => "nurse",
            InterestedJob::Ahp => "ahp",
            InterestedJob::Doctor => "doctor",
            InterestedJob::Dentist => "dentist",
        }
    }

    fn label_key(&self) -> &'static str {
        match self {
            InterestedJob::Hca => "job_hca",
            InterestedJob::Domestic => "job_domestic",
            InterestedJob::Admin => "job_admin",
            InterestedJob::Nurse => "job_nurse",
            InterestedJob::Ahp => "job_ahp",
            InterestedJob::Doctor => "job_doctor",
            InterestedJob::Dentist => "job_dentist",
        }
    }
}

/// Kind of help requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpNeeded {
    Application,
    Interview,
    Cv,
    Registration,
    General,
}

impl EnumOption for HelpNeeded {
    fn variants() -> &'static [Self] {
        &[
            HelpNeeded::Application,
            HelpNeeded::Interview,
            HelpNeeded::Cv,
            HelpNeeded::Registration,
            HelpNeeded::General,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            HelpNeeded::Application => "application",
            HelpNeeded::Interview => "interview",
            HelpNeeded::Cv => "cv",
            HelpNeeded::Registration => "registration",
            HelpNeeded::General => "general",
        }
    }

    fn label_key(&self) -> &'static str {
        match self {
            HelpNeeded::Application => "help_application",
            HelpNeeded::Interview => "help_interview",
            HelpNeeded::Cv => "help_cv",
            HelpNeeded::Registration => "help_registration",
            HelpNeeded::General => "help_general",
        }
    }
}

/// Value type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// `InterestedJob` select
    JobSelect,
    /// `HelpNeeded` select
    HelpSelect,
    /// Boolean checkbox
    Checkbox,
}

/// Form field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    Profession,
    FullName,
    Address,
    PostCode,
    Mobile,
    InterestedJob,
    HelpNeeded,
    Consent,
}

impl FormField {
    /// All fields
    pub const ALL: [FormField; 9] = [
        FormField::Email,
        FormField::Profession,
        FormField::FullName,
        FormField::Address,
        FormField::PostCode,
        FormField::Mobile,
        FormField::InterestedJob,
        FormField::HelpNeeded,
        FormField::Consent,
    ];

    /// Fields the submit gate requires (consent is checked separately)
    pub const REQUIRED_FOR_SUBMIT: [FormField; 6] = [
        FormField::FullName,
        FormField::Mobile,
        FormField::Address,
        FormField::PostCode,
        FormField::InterestedJob,
        FormField::HelpNeeded,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::InterestedJob => FieldKind::JobSelect,
            FormField::HelpNeeded => FieldKind::HelpSelect,
            FormField::Consent => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Translation key for the field label
    pub fn label_key(&self) -> &'static str {
        match self {
            FormField::Email => "field_email",
            FormField::Profession => "field_profession",
            FormField::FullName => "field_full_name",
            FormField::Address => "field_address",
            FormField::PostCode => "field_post_code",
            FormField::Mobile => "field_mobile",
            FormField::InterestedJob => "field_interested_job",
            FormField::HelpNeeded => "field_help_needed",
            FormField::Consent => "field_consent",
        }
    }

    /// Field name as used in the form record
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Profession => "profession",
            FormField::FullName => "fullName",
            FormField::Address => "address",
            FormField::PostCode => "postCode",
            FormField::Mobile => "mobile",
            FormField::InterestedJob => "interestedJob",
            FormField::HelpNeeded => "helpNeeded",
            FormField::Consent => "consent",
        }
    }
}

/// Replacement of exactly one field with a value of the field's type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Email(String),
    Profession(String),
    FullName(String),
    Address(String),
    PostCode(String),
    Mobile(String),
    InterestedJob(Option<InterestedJob>),
    HelpNeeded(Option<HelpNeeded>),
    Consent(bool),
}

impl FieldUpdate {
    /// Build an update for a text field. Returns `None` for non-text fields.
    pub fn text(field: FormField, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        Some(match field {
            FormField::Email => FieldUpdate::Email(value),
            FormField::Profession => FieldUpdate::Profession(value),
            FormField::FullName => FieldUpdate::FullName(value),
            FormField::Address => FieldUpdate::Address(value),
            FormField::PostCode => FieldUpdate::PostCode(value),
            FormField::Mobile => FieldUpdate::Mobile(value),
            _ => return None,
        })
    }

    /// Field this update targets
    pub fn field(&self) -> FormField {
        match self {
            FieldUpdate::Email(_) => FormField::Email,
            FieldUpdate::Profession(_) => FormField::Profession,
            FieldUpdate::FullName(_) => FormField::FullName,
            FieldUpdate::Address(_) => FormField::Address,
            FieldUpdate::PostCode(_) => FormField::PostCode,
            FieldUpdate::Mobile(_) => FormField::Mobile,
            FieldUpdate::InterestedJob(_) => FormField::InterestedJob,
            FieldUpdate::HelpNeeded(_) => FormField::HelpNeeded,
            FieldUpdate::Consent(_) => FormField::Consent,
        }
    }
}

/// Data accumulated across the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub email: String,
    pub profession: String,
    pub full_name: String,
    pub address: String,
    pub post_code: String,
    pub mobile: String,
    pub interested_job: Option<InterestedJob>,
    pub help_needed: Option<HelpNeeded>,
    pub consent: bool,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field, leaving every other field untouched
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Profession(v) => self.profession = v,
            FieldUpdate::FullName(v) => self.full_name = v,
            FieldUpdate::Address(v) => self.address = v,
            FieldUpdate::PostCode(v) => self.post_code = v,
            FieldUpdate::Mobile(v) => self.mobile = v,
            FieldUpdate::InterestedJob(v) => self.interested_job = v,
            FieldUpdate::HelpNeeded(v) => self.help_needed = v,
            FieldUpdate::Consent(v) => self.consent = v,
        }
    }

    /// Text value of a text field
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Email => Some(&self.email),
            FormField::Profession => Some(&self.profession),
            FormField::FullName => Some(&self.full_name),
            FormField::Address => Some(&self.address),
            FormField::PostCode => Some(&self.post_code),
            FormField::Mobile => Some(&self.mobile),
            _ => None,
        }
    }

    /// Whether the field holds a non-empty value
    pub fn is_filled(&self, field: FormField) -> bool {
        match field {
            FormField::InterestedJob => self.interested_job.is_some(),
            FormField::HelpNeeded => self.help_needed.is_some(),
            FormField::Consent => self.consent,
            text => self.text(text).is_some_and(|v| !v.is_empty()),
        }
    }

    /// "Get Started" gate: email and profession present
    pub fn can_get_started(&self) -> bool {
        self.is_filled(FormField::Email) && self.is_filled(FormField::Profession)
    }

    /// "Submit Help Request" gate
    pub fn can_submit(&self) -> bool {
        self.missing_for_submit().is_empty()
    }

    /// Fields still blocking the submit gate, consent included
    pub fn missing_for_submit(&self) -> Vec<FormField> {
        FormField::REQUIRED_FOR_SUBMIT
            .into_iter()
            .chain(std::iter::once(FormField::Consent))
            .filter(|f| !self.is_filled(*f))
            .collect()
    }

    /// Names of filled fields, for logging without values
    pub fn filled_field_names(&self) -> Vec<&'static str> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.is_filled(*f))
            .map(|f| f.name())
            .collect()
    }
}
