//! Terminal front end state

pub mod app;
pub mod input;
pub mod selection;

pub use app::{AppState, Focusable, SCROLL_PAGE, Status};
pub use input::InputState;
pub use selection::{FocusState, Selectable};
