//! Help request form

use crate::tui::components::{
    content_and_controls, render_footer, render_title_block, three_panel_layout,
};
use crate::tui::state::AppState;
use ratatui::{Frame, layout::Rect};
use rust_i18n::t;

/// Fields get as much room as they need; the explanatory text above them
/// scrolls. Fields checked by the submit gate carry a required marker and
/// the footer reports the submission result.
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);

    let content = state.wizard.view().content;
    render_title_block(&t!(content.title), frame, header);
    content_and_controls(frame, body, state, 4, true);
    render_footer(state, &t!("hint_help_form"), frame, footer);
}
