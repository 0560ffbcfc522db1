//! Career information screens
//!
//! All seven job categories share this renderer; only their content records
//! differ.

use crate::tui::components::{
    content_and_controls, render_footer, render_title_block, three_panel_layout,
};
use crate::tui::state::AppState;
use ratatui::{Frame, layout::Rect};
use rust_i18n::t;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);

    let content = state.wizard.view().content;
    render_title_block(&t!(content.title), frame, header);
    content_and_controls(frame, body, state, 3, false);
    render_footer(state, &t!("hint_info"), frame, footer);
}
