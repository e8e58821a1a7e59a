//! Artwork table view.
//!
//! Renders the current page of the catalog as a table with a checkbox
//! column and translates key presses into view actions. The view never
//! holds record data itself; it reads the catalog state at render time and
//! reports user intent back to the application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::CatalogState;
use crate::ui::theme::Theme;

/// Column width hints, in terminal cells: checkbox, title, place of origin,
/// artist, start date, end date.
const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(4),
    Constraint::Length(40),
    Constraint::Length(22),
    Constraint::Length(50),
    Constraint::Length(10),
    Constraint::Length(10),
];

/// Actions the browse view can request from the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// Navigate to the given zero-based page.
    PageChange(usize),
    /// Toggle the checkbox of the row at this index on the current page.
    ToggleRow(usize),
    /// Toggle the header checkbox (all rows on the current page).
    ToggleVisible,
    /// Toggle the bulk-selection input attached to the Title header.
    ToggleBulkInput,
    /// Refetch the current page.
    Refresh,
    /// Open the artwork at this row index in a web browser.
    OpenArtwork(usize),
}

/// The artwork table view.
pub struct BrowseView {
    /// Cursor row within the current page.
    cursor: usize,
    /// Table widget state.
    table_state: TableState,
}

impl BrowseView {
    /// Create a new browse view.
    pub fn new() -> Self {
        Self {
            cursor: 0,
            table_state: TableState::default(),
        }
    }

    /// The cursor row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor back to the first row.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Handle keyboard input.
    ///
    /// Cursor movement is handled internally; anything that touches catalog
    /// or selection state is returned as a [`BrowseAction`].
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        row_count: usize,
        current_page: usize,
        total_pages: u64,
    ) -> Option<BrowseAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => {
                if self.cursor + 1 < row_count {
                    self.cursor += 1;
                }
                None
            }
            (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.cursor = 0;
                None
            }
            (KeyCode::Char('G'), KeyModifiers::SHIFT | KeyModifiers::NONE) => {
                self.cursor = row_count.saturating_sub(1);
                None
            }
            (KeyCode::Char('h') | KeyCode::Left, KeyModifiers::NONE) => {
                if current_page > 0 {
                    Some(BrowseAction::PageChange(current_page - 1))
                } else {
                    None
                }
            }
            (KeyCode::Char('l') | KeyCode::Right, KeyModifiers::NONE) => {
                if (current_page as u64 + 1) < total_pages {
                    Some(BrowseAction::PageChange(current_page + 1))
                } else {
                    None
                }
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) if row_count > 0 => {
                Some(BrowseAction::ToggleRow(self.cursor))
            }
            (KeyCode::Char('a'), KeyModifiers::NONE) if row_count > 0 => {
                Some(BrowseAction::ToggleVisible)
            }
            (KeyCode::Char('b'), KeyModifiers::NONE) => Some(BrowseAction::ToggleBulkInput),
            (KeyCode::Char('r'), KeyModifiers::NONE) => Some(BrowseAction::Refresh),
            (KeyCode::Char('o'), KeyModifiers::NONE) if row_count > 0 => {
                Some(BrowseAction::OpenArtwork(self.cursor))
            }
            _ => None,
        }
    }

    /// Render the artwork table.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        catalog: &CatalogState,
        bulk_open: bool,
        theme: &Theme,
    ) {
        let artworks = catalog.artworks();

        // The page can shrink under the cursor (refresh, page change).
        self.cursor = self.cursor.min(artworks.len().saturating_sub(1));
        self.table_state.select(if artworks.is_empty() {
            None
        } else {
            Some(self.cursor)
        });

        let all_visible_selected =
            !artworks.is_empty() && artworks.iter().all(|a| catalog.is_selected(a.id));
        let title_header = if bulk_open {
            Line::from(vec![
                Span::styled("Title ", theme.header_style()),
                Span::styled("[b:close]", theme.accent_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled("Title ", theme.header_style()),
                Span::styled("[b:select N]", theme.dim_style()),
            ])
        };

        let header = Row::new(vec![
            Cell::from(if all_visible_selected { "[x]" } else { "[ ]" }),
            Cell::from(title_header),
            Cell::from("Place of Origin"),
            Cell::from("Artist"),
            Cell::from("Start Date"),
            Cell::from("End Date"),
        ])
        .style(theme.header_style())
        .height(1);

        let rows = artworks.iter().map(|artwork| {
            let checked = catalog.is_selected(artwork.id);
            let checkbox = if checked { "[x]" } else { "[ ]" };
            let row = Row::new(vec![
                Cell::from(checkbox),
                Cell::from(artwork.title().to_string()),
                Cell::from(artwork.place_of_origin().to_string()),
                Cell::from(artwork.artist_display().lines().next().unwrap_or("").to_string()),
                Cell::from(artwork.date_start_display()),
                Cell::from(artwork.date_end_display()),
            ]);
            if checked {
                row.style(theme.selected_style())
            } else {
                row.style(theme.row_style())
            }
        });

        let table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.dim_style())
                    .title(" Artworks "),
            )
            .highlight_style(theme.highlight_style())
            .highlight_symbol("» ")
            .column_spacing(1);

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    /// Render the paginator/status line.
    pub fn render_status_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        catalog: &CatalogState,
        theme: &Theme,
    ) {
        let total_pages = catalog.total_pages().max(1);
        let status = Line::from(vec![
            Span::styled(
                format!(" Page {}/{} ", catalog.current_page() + 1, total_pages),
                theme.accent_style(),
            ),
            Span::styled(
                format!("· {} artworks · {} selected ", catalog.total(), catalog.selected_count()),
                theme.dim_style(),
            ),
            Span::styled(
                "  j/k move · h/l page · space check · a check page · b select N · o open · r refresh · ? help",
                theme.dim_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), area);
    }
}

impl Default for BrowseView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_page() {
        let mut view = BrowseView::new();
        assert_eq!(view.handle_input(key(KeyCode::Char('j')), 3, 0, 10), None);
        assert_eq!(view.cursor(), 1);
        view.handle_input(key(KeyCode::Char('k')), 3, 0, 10);
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_cursor_bounded_by_row_count() {
        let mut view = BrowseView::new();
        for _ in 0..10 {
            view.handle_input(key(KeyCode::Char('j')), 3, 0, 10);
        }
        assert_eq!(view.cursor(), 2);
    }

    #[test]
    fn test_cursor_up_at_top_stays() {
        let mut view = BrowseView::new();
        view.handle_input(key(KeyCode::Char('k')), 3, 0, 10);
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_first_and_last_row() {
        let mut view = BrowseView::new();
        view.handle_input(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            10,
            0,
            10,
        );
        assert_eq!(view.cursor(), 9);
        view.handle_input(key(KeyCode::Char('g')), 10, 0, 10);
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_next_page_action() {
        let mut view = BrowseView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('l')), 10, 0, 10),
            Some(BrowseAction::PageChange(1))
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Right), 10, 3, 10),
            Some(BrowseAction::PageChange(4))
        );
    }

    #[test]
    fn test_next_page_bounded_by_total_pages() {
        let mut view = BrowseView::new();
        assert_eq!(view.handle_input(key(KeyCode::Char('l')), 10, 9, 10), None);
    }

    #[test]
    fn test_prev_page_action() {
        let mut view = BrowseView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('h')), 10, 2, 10),
            Some(BrowseAction::PageChange(1))
        );
    }

    #[test]
    fn test_prev_page_bounded_at_zero() {
        let mut view = BrowseView::new();
        assert_eq!(view.handle_input(key(KeyCode::Left), 10, 0, 10), None);
    }

    #[test]
    fn test_space_toggles_cursor_row() {
        let mut view = BrowseView::new();
        view.handle_input(key(KeyCode::Char('j')), 5, 0, 10);
        assert_eq!(
            view.handle_input(key(KeyCode::Char(' ')), 5, 0, 10),
            Some(BrowseAction::ToggleRow(1))
        );
    }

    #[test]
    fn test_space_on_empty_page_is_noop() {
        let mut view = BrowseView::new();
        assert_eq!(view.handle_input(key(KeyCode::Char(' ')), 0, 0, 0), None);
    }

    #[test]
    fn test_toggle_visible_action() {
        let mut view = BrowseView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('a')), 5, 0, 10),
            Some(BrowseAction::ToggleVisible)
        );
    }

    #[test]
    fn test_bulk_input_toggle_action() {
        let mut view = BrowseView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('b')), 0, 0, 0),
            Some(BrowseAction::ToggleBulkInput)
        );
    }

    #[test]
    fn test_refresh_action() {
        let mut view = BrowseView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('r')), 5, 2, 10),
            Some(BrowseAction::Refresh)
        );
    }

    #[test]
    fn test_open_artwork_action() {
        let mut view = BrowseView::new();
        view.handle_input(key(KeyCode::Char('j')), 5, 0, 10);
        assert_eq!(
            view.handle_input(key(KeyCode::Char('o')), 5, 0, 10),
            Some(BrowseAction::OpenArtwork(1))
        );
    }

    #[test]
    fn test_reset_cursor() {
        let mut view = BrowseView::new();
        view.handle_input(key(KeyCode::Char('j')), 5, 0, 10);
        view.reset_cursor();
        assert_eq!(view.cursor(), 0);
    }
}
