//! Career path chooser

use crate::tui::components::{
    controls, render_controls, render_footer, render_title_block, three_panel_layout, wrap_lines,
};
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    widgets::Paragraph,
};
use rust_i18n::t;

/// The description sits on top; the grouped buttons take the rest and scroll
/// with the focus.
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);

    let content = state.wizard.view().content;
    render_title_block(&t!(content.title), frame, header);

    let description = wrap_lines(&t!(content.description), body.width as usize);
    let description_height = u16::try_from(description.len() + 1).unwrap_or(u16::MAX);
    let [description_area, list_area] = Layout::vertical([
        Constraint::Length(description_height),
        Constraint::Min(3),
    ])
    .areas(body);

    frame.render_widget(
        Paragraph::new(description).style(theme().hint().add_modifier(Modifier::ITALIC)),
        description_area,
    );

    let controls = controls(state, list_area.width.saturating_sub(2) as usize, false);
    render_controls(frame, list_area, state, controls);

    render_footer(state, &t!("hint_categories"), frame, footer);
}
