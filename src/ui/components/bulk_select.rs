//! Bulk-selection input component.
//!
//! The affordance attached to the Title column header: a two-state machine
//! that is either closed (nothing rendered) or open (an inline numeric
//! input). Submitting a positive count asks the application to select the
//! first N accumulated records; submitting zero or an empty buffer is a
//! no-op and the input stays open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// Longest count the buffer accepts. Nine digits always fit in a usize.
const MAX_DIGITS: usize = 9;

/// Actions produced by the bulk-selection input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    /// Submit was pressed with the given pending count.
    Submit(usize),
    /// The input was dismissed without submitting.
    Dismissed,
}

/// The bulk-selection input state.
///
/// The pending count survives close/reopen, matching the behavior of the
/// header affordance it implements.
#[derive(Debug, Clone, Default)]
pub struct BulkSelectInput {
    /// Whether the input is visible.
    open: bool,
    /// The digits typed so far.
    buffer: String,
}

impl BulkSelectInput {
    /// Create a new, closed input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the input is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle between closed and open.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the input.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// The pending count. An empty or unparsable buffer counts as zero.
    pub fn count(&self) -> usize {
        self.buffer.parse().unwrap_or(0)
    }

    /// Handle keyboard input while open.
    ///
    /// Digits edit the pending count; Enter submits it; Esc dismisses the
    /// input. Whether a submit actually closes the input is the caller's
    /// decision (only positive counts do).
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<BulkAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT)
                if c.is_ascii_digit() =>
            {
                if self.buffer.len() < MAX_DIGITS {
                    self.buffer.push(c);
                }
                None
            }
            (KeyCode::Backspace, _) => {
                self.buffer.pop();
                None
            }
            (KeyCode::Enter, _) => Some(BulkAction::Submit(self.count())),
            (KeyCode::Esc, _) => {
                self.close();
                Some(BulkAction::Dismissed)
            }
            _ => None,
        }
    }

    /// Render the input as a small overlay anchored under the Title header.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.open {
            return;
        }

        let width = 30.min(area.width);
        let popup = Rect {
            x: area.x + 5.min(area.width.saturating_sub(width)),
            y: area.y + 1,
            width,
            height: 3,
        }
        .intersection(area);
        if popup.height < 3 {
            // Terminal too small to place the input under the header row.
            return;
        }

        let display = if self.buffer.is_empty() {
            "Enter rows".to_string()
        } else {
            self.buffer.clone()
        };
        let style = if self.buffer.is_empty() {
            theme.dim_style()
        } else {
            theme.accent_style()
        };

        let block = Block::default()
            .title(" Select first N rows ")
            .borders(Borders::ALL)
            .border_style(theme.accent_style());

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(display).style(style).block(block), popup);

        let cursor_x = popup.x + 1 + self.buffer.len() as u16;
        if cursor_x < popup.x + popup.width - 1 {
            frame.set_cursor_position(Position::new(cursor_x, popup.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_closed() {
        let input = BulkSelectInput::new();
        assert!(!input.is_open());
        assert_eq!(input.count(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        assert!(input.is_open());
        input.toggle();
        assert!(!input.is_open());
    }

    #[test]
    fn test_digit_input() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        assert_eq!(input.handle_input(key(KeyCode::Char('4'))), None);
        assert_eq!(input.handle_input(key(KeyCode::Char('2'))), None);
        assert_eq!(input.count(), 42);
    }

    #[test]
    fn test_non_digit_ignored() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        input.handle_input(key(KeyCode::Char('x')));
        input.handle_input(key(KeyCode::Char('-')));
        assert_eq!(input.count(), 0);
    }

    #[test]
    fn test_backspace() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        input.handle_input(key(KeyCode::Char('1')));
        input.handle_input(key(KeyCode::Char('0')));
        input.handle_input(key(KeyCode::Backspace));
        assert_eq!(input.count(), 1);
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        assert_eq!(input.handle_input(key(KeyCode::Backspace)), None);
        assert_eq!(input.count(), 0);
    }

    #[test]
    fn test_submit_emits_pending_count() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        input.handle_input(key(KeyCode::Char('7')));
        assert_eq!(
            input.handle_input(key(KeyCode::Enter)),
            Some(BulkAction::Submit(7))
        );
        // The component leaves closing to the caller.
        assert!(input.is_open());
    }

    #[test]
    fn test_submit_empty_buffer_is_zero() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        assert_eq!(
            input.handle_input(key(KeyCode::Enter)),
            Some(BulkAction::Submit(0))
        );
    }

    #[test]
    fn test_esc_dismisses_and_closes() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        assert_eq!(
            input.handle_input(key(KeyCode::Esc)),
            Some(BulkAction::Dismissed)
        );
        assert!(!input.is_open());
    }

    #[test]
    fn test_count_survives_close_and_reopen() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        input.handle_input(key(KeyCode::Char('5')));
        input.toggle();
        input.toggle();
        assert_eq!(input.count(), 5);
    }

    #[test]
    fn test_buffer_length_capped() {
        let mut input = BulkSelectInput::new();
        input.toggle();
        for _ in 0..15 {
            input.handle_input(key(KeyCode::Char('9')));
        }
        assert_eq!(input.count(), 999_999_999);
    }
}
