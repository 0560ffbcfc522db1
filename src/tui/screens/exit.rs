//! Exit confirmation

use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use rust_i18n::t;

/// Draw the confirmation as a centred popup over the current screen
pub fn draw(frame: &mut Frame, area: Rect) {
    let [row] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(row);

    let confirm_text = Paragraph::new(t!("exit_confirm"))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().warning()),
        )
        .style(theme().warning())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(confirm_text, popup);
}
