//! Localised labels for form values
//!
//! Maps field and option values to stable translation keys instead of relying
//! on `Debug` output.

use crate::wizard::{EnumOption, FieldKind, FormData, FormField};
use rust_i18n::t;
use std::borrow::Cow;

/// Field label, with the required marker for fields the submit gate checks
pub fn field_label(field: FormField, mark_required: bool) -> String {
    let label = t!(field.label_key());
    let required =
        FormField::REQUIRED_FOR_SUBMIT.contains(&field) || field == FormField::Consent;
    if mark_required && required {
        format!("{} {}", label, t!("required_marker"))
    } else {
        label.into_owned()
    }
}

/// Label of a select value, or its placeholder when unset
pub fn option_label<E: EnumOption>(
    value: Option<E>,
    placeholder_key: &'static str,
) -> Cow<'static, str> {
    match value {
        Some(v) => t!(v.label_key()),
        None => t!(placeholder_key),
    }
}

/// Checkbox glyph
pub fn checkbox_label(checked: bool) -> Cow<'static, str> {
    if checked {
        t!("checkbox_checked")
    } else {
        t!("checkbox_unchecked")
    }
}

/// Display value of a non-text field
pub fn choice_value(field: FormField, form: &FormData) -> Cow<'static, str> {
    match field.kind() {
        FieldKind::JobSelect => option_label(form.interested_job, "select_job_placeholder"),
        FieldKind::HelpSelect => option_label(form.help_needed, "select_help_placeholder"),
        FieldKind::Checkbox => checkbox_label(form.consent),
        FieldKind::Text => Cow::Owned(form.text(field).unwrap_or_default().to_string()),
    }
}
