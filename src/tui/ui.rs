//! Rendering entry point
//!
//! Dispatches to the renderer of the current step and overlays the exit
//! confirmation when it is showing.

use crate::tui::screens::{categories, exit, help_form, info, welcome};
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use crate::wizard::Step;
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

fn set_background(area: Rect, buf: &mut Buffer) {
    let style = Style::new().bg(theme().bg);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut(Position { x, y }) {
                cell.set_style(style);
            }
        }
    }
}

/// Render the whole application
pub fn render(terminal: &mut DefaultTerminal, state: &mut AppState) -> std::io::Result<()> {
    terminal.draw(|frame| draw(frame, state))?;
    Ok(())
}

/// Draw one frame
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    set_background(area, frame.buffer_mut());

    match state.current_step() {
        Step::Welcome => welcome::draw(frame, area, state),
        Step::Categories => categories::draw(frame, area, state),
        Step::HelpForm => help_form::draw(frame, area, state),
        Step::EntryHca
        | Step::EntryDomestic
        | Step::EntryAdmin
        | Step::Nursing
        | Step::Ahp
        | Step::Medical
        | Step::Dental => info::draw(frame, area, state),
    }

    if state.confirm_exit {
        exit::draw(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::TuiEvent;
    use crate::tui::state::{Status, app::type_text};
    use crate::wizard::submit::RecordingSink;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_every_step_renders() {
        rust_i18n::set_locale("en");
        for step in Step::ALL {
            let mut state = AppState::new(true);
            state.wizard.go_to(step);
            for (width, height) in [(100, 40), (40, 12), (10, 4)] {
                let text = screen_text(&mut state, width, height);
                assert!(!text.trim().is_empty(), "{} drew nothing", step);
            }
        }
    }

    #[test]
    fn test_welcome_shows_fields_and_typed_text() {
        rust_i18n::set_locale("en");
        let mut sink = RecordingSink::default();
        let mut state = AppState::new(true);
        type_text(&mut state, &mut sink, "amal@example.org");

        let text = screen_text(&mut state, 100, 30);
        assert!(text.contains("Refugee Health Jobs Portal"));
        assert!(text.contains("Email: [amal@example.org|]"));
        assert!(text.contains("Profession:"));
        assert!(text.contains("[ Get Started → ]"));
    }

    #[test]
    fn test_categories_show_every_career_button() {
        rust_i18n::set_locale("en");
        let mut state = AppState::new(true);
        state.wizard.go_to(Step::Categories);
        let text = screen_text(&mut state, 100, 40);
        for label in ["Entry Level Jobs", "Nurses", "Dentists", "Need Help? Get Support"] {
            assert!(text.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_leaf_scroll_is_clamped() {
        rust_i18n::set_locale("en");
        let mut sink = RecordingSink::default();
        let mut state = AppState::new(true);
        state.wizard.go_to(Step::Medical);
        for _ in 0..100 {
            state.handle_event(TuiEvent::PageDown, &mut sink);
        }
        let text = screen_text(&mut state, 80, 20);
        assert!(state.scroll < 100);
        assert!(text.contains("[ ← Back to Categories ]"));
    }

    #[test]
    fn test_help_form_footer_status() {
        rust_i18n::set_locale("en");
        let mut state = AppState::new(true);
        state.wizard.go_to(Step::HelpForm);
        state.status = Some(Status::Submitted("HR-1".into()));
        let text = screen_text(&mut state, 120, 40);
        assert!(text.contains("Your reference is HR-1"));
        assert!(text.contains("Full Name *"));
    }

    #[test]
    fn test_blocked_get_started_keeps_hint_footer() {
        rust_i18n::set_locale("en");
        let mut sink = RecordingSink::default();
        let mut state = AppState::new(true);
        state.handle_event(TuiEvent::Tab, &mut sink);
        state.handle_event(TuiEvent::Tab, &mut sink);
        state.handle_event(TuiEvent::Enter, &mut sink);

        let text = screen_text(&mut state, 100, 30);
        assert_eq!(state.current_step(), Step::Welcome);
        assert!(text.contains("Esc Quit"));
        assert!(!text.contains("Still needed"));
    }

    #[test]
    fn test_exit_popup_overlays_screen() {
        rust_i18n::set_locale("en");
        let mut state = AppState::new(true);
        state.confirm_exit = true;
        let text = screen_text(&mut state, 100, 30);
        assert!(text.contains("Leave the portal?"));
    }
}
