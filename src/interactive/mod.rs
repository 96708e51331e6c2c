//! Interactive TUI interface

mod app;
mod picker;
mod rendering;

pub use app::{App, Message, MessageStyle, Tui, run_app, run_picker, with_terminal};
pub use picker::{Choice, Picker};
