//! Theme and styling configuration.
//!
//! One static theme struct instead of ad-hoc inline styles at every call
//! site; views take a `&Theme` and pick named colors from it.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application.
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Highlight color for the cursor row.
    pub highlight: Color,
    /// Column header color.
    pub header: Color,
    /// Checked-row foreground.
    pub selected: Color,
    /// Dimmed text (hints, borders, empty cells).
    pub dim: Color,
    /// Accent color for the title bar and active affordances.
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            highlight: Color::Cyan,
            header: Color::Yellow,
            selected: Color::Green,
            dim: Color::DarkGray,
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    /// Style for ordinary table rows.
    pub fn row_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for the table header row.
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the cursor row.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for checked rows.
    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.selected)
    }

    /// Style for dimmed text.
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Style for accented text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}
