//! Non-interactive output for `--show` and `--list`

use crate::error::Result;
use crate::wizard::{RenderedScreen, Step, content, view};
use rust_i18n::t;
use serde::Serialize;
use std::io::Write;

/// One line of `--list`
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    pub step: Step,
    pub title: String,
    /// Career information screen
    pub leaf: bool,
}

/// Every step with its localised title, in wizard order
pub fn step_summaries() -> Vec<StepSummary> {
    Step::ALL
        .into_iter()
        .map(|step| StepSummary {
            step,
            title: t!(content(step).title).into_owned(),
            leaf: step.is_leaf(),
        })
        .collect()
}

/// Button as printed by `--show`
#[derive(Debug, Clone, Serialize)]
pub struct RenderedAction {
    pub label: String,
    /// Destination step; absent for submit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Step>,
    /// Whether a form precondition guards the button
    pub gated: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ScreenOutput {
    #[serde(flatten)]
    screen: RenderedScreen,
    actions: Vec<RenderedAction>,
}

fn screen_output(step: Step, show_links: bool) -> ScreenOutput {
    let view = view(step);
    let mut screen = view.content.resolve(step);
    if !show_links {
        screen.links.clear();
    }

    ScreenOutput {
        screen,
        actions: view
            .actions()
            .map(|a| RenderedAction {
                label: t!(a.label).into_owned(),
                target: a.target(),
                gated: a.gate.is_some(),
            })
            .collect(),
    }
}

/// Write the step list as aligned text or JSON
pub fn write_step_list<W: Write>(out: &mut W, json: bool) -> Result<()> {
    let steps = step_summaries();
    if json {
        serde_json::to_writer_pretty(&mut *out, &steps)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = steps.iter().map(|s| s.step.as_str().len()).max().unwrap_or(0);
    for summary in &steps {
        writeln!(out, "{:width$}  {}", summary.step.as_str(), summary.title)?;
    }
    Ok(())
}

/// Write one screen's content and buttons as text or JSON
pub fn write_screen<W: Write>(out: &mut W, step: Step, show_links: bool, json: bool) -> Result<()> {
    let output = screen_output(step, show_links);
    if json {
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    let screen = &output.screen;
    writeln!(out, "{}", screen.title)?;
    writeln!(out, "{}", screen.description)?;

    for section in &screen.sections {
        writeln!(out)?;
        writeln!(out, "{}", section.heading)?;
        if let Some(ref paragraph) = section.paragraph {
            writeln!(out, "  {}", paragraph)?;
        }
        for bullet in &section.bullets {
            writeln!(out, "  • {}", bullet)?;
        }
    }

    if !screen.links.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", t!("links_heading"))?;
        for link in &screen.links {
            writeln!(out, "  • {}: {}", link.label, link.url)?;
        }
    }

    writeln!(out)?;
    for action in &output.actions {
        match action.target {
            Some(target) => writeln!(out, "  [ {} ] → {}", action.label, target)?,
            None => writeln!(out, "  [ {} ]", action.label)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(step: Step, show_links: bool, json: bool) -> String {
        let mut out = Vec::new();
        write_screen(&mut out, step, show_links, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_names_every_step() {
        rust_i18n::set_locale("en");
        let mut out = Vec::new();
        write_step_list(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), Step::ALL.len());
        assert!(text.lines().any(|l| l.starts_with("entry-hca") && l.ends_with("Support Workers")));
    }

    #[test]
    fn test_list_json_is_parseable() {
        let mut out = Vec::new();
        write_step_list(&mut out, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let steps = value.as_array().unwrap();
        assert_eq!(steps.len(), 10);
        assert_eq!(steps[0]["step"], "welcome");
        assert_eq!(steps[9]["step"], "help-form");
        assert_eq!(steps[3]["leaf"], true);
    }

    #[test]
    fn test_show_text_includes_sections_links_and_buttons() {
        rust_i18n::set_locale("en");
        let text = render(Step::Dental, true, false);
        assert!(text.starts_with("Dentists\n"));
        assert!(text.contains("Key Responsibilities"));
        assert!(text.contains("  • Managing dental emergencies"));
        assert!(text.contains("https://www.gdc-uk.org"));
        assert!(text.contains("[ Get Help Finding This Job ] → help-form"));

        let without_links = render(Step::Dental, false, false);
        assert!(!without_links.contains("https://"));
    }

    #[test]
    fn test_show_json_has_actions() {
        let json = render(Step::HelpForm, true, true);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["step"], "help-form");
        let actions = value["actions"].as_array().unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0]["gated"], true);
        assert!(actions[0].get("target").is_none());
        assert_eq!(actions[1]["target"], "categories");
    }
}
