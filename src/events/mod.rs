//! Event handling for the application.
//!
//! This module converts terminal input into application events.

mod handler;

pub use handler::EventHandler;

/// An application event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(crossterm::event::KeyEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// Periodic tick, emitted when no input arrived within the tick rate.
    Tick,
    /// The application should quit.
    Quit,
}
