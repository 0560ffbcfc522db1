//! Common UI components module
//!
//! Reusable pieces shared by the screens: the three-panel frame, the generic
//! content renderer and the focusable controls list.

use crate::tui::labels::{choice_value, field_label};
use crate::tui::state::{AppState, Focusable, Status};
use crate::tui::theme::{HIGHLIGHT_SYMBOL, theme};
use crate::wizard::{Action, Body, FieldKind, FormField, ScreenContent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Paragraph, Wrap},
};
use rust_i18n::t;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Three-panel layout: header, body, footer
pub fn three_panel_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area)
}

/// Render a centered title block with border
pub fn render_title_block(title: &str, frame: &mut Frame, area: Rect) {
    let title_line = Line::from(format!(" {} ", title))
        .centered()
        .style(theme().title());

    let block = Block::bordered()
        .title(title_line)
        .border_type(BorderType::Rounded)
        .border_style(theme().border())
        .style(theme().normal());

    frame.render_widget(block, area);
}

/// Render bottom hint text
pub fn render_hint(hint: &str, frame: &mut Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme().hint())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

/// Footer: the last activation's status if any, otherwise the key hint
pub fn render_footer(state: &AppState, hint: &str, frame: &mut Frame, area: Rect) {
    let (text, style) = match &state.status {
        Some(Status::Submitted(reference)) => (
            t!("submit_ok", reference = reference).into_owned(),
            theme().success(),
        ),
        Some(Status::Failed(error)) => (
            t!("submit_failed", error = error).into_owned(),
            theme().error(),
        ),
        None => return render_hint(hint, frame, area),
    };

    let status = Paragraph::new(text)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}

/// Wrap by display width
pub fn wrap_lines(value: &str, max_width: usize) -> Vec<Line<'static>> {
    if max_width == 0 {
        return vec![Line::from(String::new())];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in value.chars() {
        if ch == '\n' {
            lines.push(Line::from(current));
            current = String::new();
            current_width = 0;
            continue;
        }

        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width && !current.is_empty() {
            lines.push(Line::from(current));
            current = String::new();
            current_width = 0;
        }

        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

/// Wrap `value` behind a prefix, indenting continuation lines to match
fn prefixed_lines(prefix: &str, value: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    let indent = prefix.width();
    wrap_lines(value, width.saturating_sub(indent))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 {
                prefix.to_string()
            } else {
                " ".repeat(indent)
            };
            let mut spans = vec![Span::raw(lead)];
            spans.extend(line.spans);
            Line::from(spans).style(style)
        })
        .collect()
}

/// Resolve a content record into wrapped lines
pub fn content_lines(
    content: &ScreenContent,
    show_links: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = wrap_lines(&t!(content.description), width)
        .into_iter()
        .map(|l| l.style(theme().hint().add_modifier(Modifier::ITALIC)))
        .collect();

    for section in content.sections {
        lines.push(Line::default());
        lines.push(Line::from(t!(section.heading).into_owned()).style(theme().heading()));
        match section.body {
            Body::Paragraph(key) => lines.extend(
                wrap_lines(&t!(key), width)
                    .into_iter()
                    .map(|l| l.style(theme().normal())),
            ),
            Body::Bullets(items) => {
                for item in items {
                    lines.extend(prefixed_lines("  • ", &t!(*item), width, theme().normal()));
                }
            }
        }
    }

    if show_links && !content.links.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(t!("links_heading").into_owned()).style(theme().heading()));
        for link in content.links {
            lines.extend(prefixed_lines("  • ", &t!(link.label), width, theme().normal()));
            lines.extend(prefixed_lines("    ", link.url, width, theme().link()));
        }
    }

    lines
}

/// Bordered, scrollable content pane. Clamps `state.scroll` to the content.
pub fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme().border());
    let inner = block.inner(area);

    let content = state.wizard.view().content;
    let lines = content_lines(content, state.show_links, inner.width as usize);

    let max_scroll = lines.len().saturating_sub(inner.height as usize);
    let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
    state.scroll = state.scroll.min(max_scroll);

    let block = if max_scroll > 0 {
        let position = format!(" {}/{} ", state.scroll, max_scroll);
        block.title_bottom(Line::from(position).right_aligned().style(theme().hint()))
    } else {
        block
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme().normal())
        .scroll((state.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Controls list items and the list index of the focused control
pub struct Controls {
    pub items: Vec<ListItem<'static>>,
    pub selected: Option<usize>,
}

impl Controls {
    /// Rows needed to show every item inside a border
    pub fn height(&self) -> u16 {
        let rows: usize = self.items.iter().map(ListItem::height).sum();
        u16::try_from(rows + 2).unwrap_or(u16::MAX)
    }
}

/// Build the controls of the current view: fields, then grouped buttons
pub fn controls(state: &AppState, width: usize, mark_required: bool) -> Controls {
    let view = state.wizard.view();
    let form = state.wizard.form();
    let focused = state.focused();
    let width = width.saturating_sub(HIGHLIGHT_SYMBOL.width());

    let mut items = Vec::new();
    let mut selected = None;

    for &field in view.fields {
        let is_focused = focused == Some(Focusable::Field(field));
        if is_focused {
            selected = Some(items.len());
        }
        let text = field_text(state, field, is_focused, mark_required);
        let style = if is_focused {
            theme().selected()
        } else {
            theme().normal()
        };
        items.push(ListItem::new(wrap_lines(&text, width)).style(style));
    }

    for group in view.groups {
        if !items.is_empty() {
            items.push(ListItem::new(Line::default()));
        }
        if let Some(heading) = group.heading {
            let heading = Line::from(t!(heading).into_owned());
            items.push(ListItem::new(heading).style(theme().heading()));
        }
        if let Some(caption) = group.caption {
            items.push(ListItem::new(wrap_lines(&t!(caption), width)).style(theme().hint()));
        }
        for action in group.actions {
            let is_focused = focused == Some(Focusable::Action(action));
            if is_focused {
                selected = Some(items.len());
            }
            items.push(button(action, action.is_enabled(form), is_focused, width));
        }
    }

    Controls { items, selected }
}

fn field_text(state: &AppState, field: FormField, is_focused: bool, mark_required: bool) -> String {
    let label = field_label(field, mark_required);
    let form = state.wizard.form();
    match field.kind() {
        FieldKind::Text if is_focused => {
            let (left, right) = state.input.split_at_cursor();
            format!("{}: [{}|{}]", label, left, right)
        }
        FieldKind::Text => format!("{}: {}", label, form.text(field).unwrap_or_default()),
        FieldKind::JobSelect | FieldKind::HelpSelect if is_focused => {
            format!("{}: ◀ {} ▶", label, choice_value(field, form))
        }
        FieldKind::JobSelect | FieldKind::HelpSelect => {
            format!("{}: {}", label, choice_value(field, form))
        }
        FieldKind::Checkbox => format!("{} {}", choice_value(field, form), label),
    }
}

fn button(action: &Action, enabled: bool, is_focused: bool, width: usize) -> ListItem<'static> {
    let text = format!("[ {} ]", t!(action.label));
    let style = match (is_focused, enabled) {
        (true, true) => theme().selected(),
        (true, false) => theme().selected().add_modifier(Modifier::DIM),
        (false, true) => theme().normal().add_modifier(Modifier::BOLD),
        (false, false) => theme().disabled(),
    };
    ListItem::new(wrap_lines(&text, width)).style(style)
}

/// Bordered list of the current view's controls, scrolled to the focus
pub fn render_controls(frame: &mut Frame, area: Rect, state: &mut AppState, controls: Controls) {
    let list = List::new(controls.items)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .style(theme().normal())
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    state.controls_list.select(controls.selected);
    frame.render_stateful_widget(list, area, &mut state.controls_list);
}

/// Content pane above a controls pane sized to fit, leaving the content at
/// least `min_content` rows
pub fn content_and_controls(
    frame: &mut Frame,
    body: Rect,
    state: &mut AppState,
    min_content: u16,
    mark_required: bool,
) {
    let inner_width = body.width.saturating_sub(2) as usize;
    let controls = controls(state, inner_width, mark_required);
    let height = controls
        .height()
        .min(body.height.saturating_sub(min_content));

    let [content_area, controls_area] =
        Layout::vertical([Constraint::Min(min_content), Constraint::Length(height)]).areas(body);

    render_content(frame, content_area, state);
    render_controls(frame, controls_area, state, controls);
}
