//! TUI widgets for Emojistory

pub mod input;
pub mod status_bar;
pub mod story;

pub use input::InputWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
pub use story::StoryWidget;
