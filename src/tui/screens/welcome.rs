//! Welcome screen: portal introduction plus email and profession

use crate::tui::components::{
    content_and_controls, render_footer, render_title_block, three_panel_layout,
};
use crate::tui::state::AppState;
use ratatui::{Frame, layout::Rect};
use rust_i18n::t;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let [header, body, footer] = three_panel_layout(area);

    let title = format!("{} · {}", t!("app_title"), t!("welcome_title"));
    render_title_block(&title, frame, header);
    content_and_controls(frame, body, state, 6, false);
    render_footer(state, &t!("hint_welcome"), frame, footer);
}
