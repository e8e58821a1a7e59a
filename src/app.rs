//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: all catalog
//! and selection data lives in one explicit state record ([`CatalogState`])
//! whose fields change only through named transition functions, and every
//! input flows through [`App::update`].

use tracing::{debug, error, info, trace, warn};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::types::{Artwork, ArtworksPage};
use crate::config::Settings;
use crate::events::Event;
use crate::tasks::ApiMessage;
use crate::ui::{BrowseAction, BrowseView, BulkAction, BulkSelectInput, Theme};

/// The current view/screen state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Browsing the artwork table.
    #[default]
    Browse,
    /// Help screen is displayed.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The catalog and selection state record.
///
/// Four pieces of fetch- and selection-derived state with an explicit
/// transition function for each way they may change. The record also
/// carries the pending-fetch signal, so there is exactly one path from a
/// page-change event to a network request.
#[derive(Debug, Clone)]
pub struct CatalogState {
    /// Records per page, for paginator arithmetic.
    page_size: u32,
    /// The zero-based page the paginator points at.
    current_page: usize,
    /// Total record count as reported by the API.
    total: u64,
    /// The current page's records.
    artworks: Vec<Artwork>,
    /// Every record returned this session, in arrival order. Append-only;
    /// revisiting a page appends a duplicate run.
    accumulated: Vec<Artwork>,
    /// The checked records, identified by artwork id.
    selected: Vec<Artwork>,
    /// A page index waiting to be fetched by the runtime.
    pending_fetch: Option<usize>,
}

impl CatalogState {
    /// Create an empty catalog state.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            current_page: 0,
            total: 0,
            artworks: Vec::new(),
            accumulated: Vec::new(),
            selected: Vec::new(),
            pending_fetch: None,
        }
    }

    /// The zero-based current page index.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total record count across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages the paginator offers.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as u64)
    }

    /// The current page's records.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// The record at a row index on the current page.
    pub fn artwork_at(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    /// Every record fetched this session, in arrival order.
    pub fn accumulated(&self) -> &[Artwork] {
        &self.accumulated
    }

    /// The checked records.
    pub fn selected(&self) -> &[Artwork] {
        &self.selected
    }

    /// Number of checked records.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether the record with this id is checked.
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.iter().any(|a| a.id == id)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Point the paginator at a page and mark it for fetching.
    pub fn request_page(&mut self, page: usize) {
        self.current_page = page;
        self.pending_fetch = Some(page);
    }

    /// Mark the current page for refetching.
    ///
    /// The response will append a duplicate run to the accumulation; that
    /// is accepted behavior, not a bug.
    pub fn request_refresh(&mut self) {
        self.pending_fetch = Some(self.current_page);
    }

    /// Take the pending fetch request, if any.
    ///
    /// The runtime drains this once per loop iteration and spawns exactly
    /// one fetch per recorded request.
    pub fn take_pending_fetch(&mut self) -> Option<usize> {
        self.pending_fetch.take()
    }

    /// Apply a successfully fetched page.
    ///
    /// Replaces the current page's records and the total count, and appends
    /// the page's records to the accumulation. `current_page` is untouched:
    /// when overlapping fetches resolve out of request order the last
    /// response wins and the paginator is not corrected retroactively.
    pub fn apply_page(&mut self, fetched: ArtworksPage) {
        self.total = fetched.pagination.total;
        self.artworks = fetched.data;
        self.accumulated.extend(self.artworks.iter().cloned());
    }

    /// Replace the selection wholesale.
    pub fn set_selection(&mut self, selection: Vec<Artwork>) {
        self.selected = selection;
    }

    /// Toggle the checkbox of one row on the current page.
    pub fn toggle_row(&mut self, index: usize) {
        let Some(artwork) = self.artworks.get(index) else {
            return;
        };
        let mut selection = self.selected.clone();
        if self.is_selected(artwork.id) {
            let id = artwork.id;
            selection.retain(|a| a.id != id);
        } else {
            selection.push(artwork.clone());
        }
        self.set_selection(selection);
    }

    /// Toggle the header checkbox: check every row on the current page, or
    /// uncheck them all if every one is already checked.
    pub fn toggle_visible(&mut self) {
        let all_selected = !self.artworks.is_empty()
            && self.artworks.iter().all(|a| self.is_selected(a.id));

        let mut selection = self.selected.clone();
        if all_selected {
            selection.retain(|s| !self.artworks.iter().any(|a| a.id == s.id));
        } else {
            for artwork in &self.artworks {
                if !selection.iter().any(|s| s.id == artwork.id) {
                    selection.push(artwork.clone());
                }
            }
        }
        self.set_selection(selection);
    }

    /// Replace the selection with the first `n` accumulated records, in
    /// accumulation order, without deduplication.
    pub fn select_first(&mut self, n: usize) {
        let n = n.min(self.accumulated.len());
        let selection = self.accumulated[..n].to_vec();
        self.set_selection(selection);
    }
}

/// The main application struct that holds all state.
pub struct App {
    /// The current view state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// The catalog and selection state record.
    catalog: CatalogState,
    /// The artwork table view.
    browse: BrowseView,
    /// The bulk-selection input attached to the Title header.
    bulk: BulkSelectInput,
    /// Application settings.
    settings: Settings,
    /// Color theme.
    theme: Theme,
}

impl App {
    /// Create a new application instance.
    ///
    /// The initial page is marked for fetching immediately; the runtime
    /// issues the request on its first loop iteration.
    pub fn new(settings: Settings, initial_page: usize) -> Self {
        debug!(initial_page, "Creating new application instance");

        let mut catalog = CatalogState::new(settings.page_size);
        catalog.request_page(initial_page);

        Self {
            state: AppState::Browse,
            should_quit: false,
            catalog,
            browse: BrowseView::new(),
            bulk: BulkSelectInput::new(),
            settings,
            theme: Theme::default(),
        }
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Get a reference to the catalog state.
    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Whether the bulk-selection input is open.
    pub fn is_bulk_input_open(&self) -> bool {
        self.bulk.is_open()
    }

    /// Take the pending fetch request, if any.
    pub fn take_pending_fetch(&mut self) -> Option<usize> {
        self.catalog.take_pending_fetch()
    }

    /// Handle a message from a background task.
    ///
    /// Fetch failures are logged and swallowed here: no error state is
    /// modeled and the previous page's data stays on screen.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::PageFetched { page, result } => match result {
                Ok(fetched) => {
                    if page != self.catalog.current_page() {
                        debug!(
                            page,
                            current = self.catalog.current_page(),
                            "Applying out-of-order page response"
                        );
                    }
                    info!(page, records = fetched.data.len(), "Page fetched");
                    self.catalog.apply_page(fetched);
                }
                Err(e) => {
                    error!(page, error = %e, "Failed to fetch artworks page");
                }
            },
        }
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.should_quit = true;
                self.state = AppState::Exiting;
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
                // Terminal resize is handled automatically by ratatui
            }
            Event::Tick => {
                // Nothing animates; fetch results arrive over the task
                // channel, not on ticks.
            }
        }
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Quit on Ctrl+C (always works)
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) =
            (key_event.code, key_event.modifiers)
        {
            self.should_quit = true;
            self.state = AppState::Exiting;
            return;
        }

        // The bulk-selection input captures all input while open
        if self.bulk.is_open() {
            if let Some(action) = self.bulk.handle_input(key_event) {
                match action {
                    BulkAction::Submit(count) => self.submit_bulk_selection(count),
                    BulkAction::Dismissed => {
                        debug!("Bulk-selection input dismissed");
                    }
                }
            }
            return;
        }

        match self.state {
            AppState::Browse => {
                match (key_event.code, key_event.modifiers) {
                    (KeyCode::Char('q'), KeyModifiers::NONE) => {
                        self.should_quit = true;
                        self.state = AppState::Exiting;
                        return;
                    }
                    (KeyCode::Char('?'), KeyModifiers::NONE) => {
                        self.state = AppState::Help;
                        return;
                    }
                    _ => {}
                }

                let row_count = self.catalog.artworks().len();
                let current_page = self.catalog.current_page();
                let total_pages = self.catalog.total_pages();
                if let Some(action) =
                    self.browse
                        .handle_input(key_event, row_count, current_page, total_pages)
                {
                    self.handle_browse_action(action);
                }
            }
            AppState::Help => {
                // Escape, 'q' or '?' to close help
                if matches!(key_event.code, KeyCode::Esc)
                    || (matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('?'))
                        && key_event.modifiers == KeyModifiers::NONE)
                {
                    self.state = AppState::Browse;
                }
            }
            AppState::Exiting => {
                // No input handling while exiting
            }
        }
    }

    /// Handle an action requested by the browse view.
    fn handle_browse_action(&mut self, action: BrowseAction) {
        match action {
            BrowseAction::PageChange(page) => {
                debug!(page, "Page change requested");
                self.catalog.request_page(page);
                self.browse.reset_cursor();
            }
            BrowseAction::ToggleRow(index) => {
                self.catalog.toggle_row(index);
            }
            BrowseAction::ToggleVisible => {
                self.catalog.toggle_visible();
            }
            BrowseAction::ToggleBulkInput => {
                self.bulk.toggle();
            }
            BrowseAction::Refresh => {
                info!(page = self.catalog.current_page(), "Refreshing current page");
                self.catalog.request_refresh();
            }
            BrowseAction::OpenArtwork(index) => {
                if let Some(artwork) = self.catalog.artwork_at(index) {
                    let url = self.settings.artwork_web_url(artwork.id);
                    info!(id = artwork.id, url = %url, "Opening artwork in browser");
                    if let Err(e) = open::that_detached(&url) {
                        warn!(error = %e, "Failed to open browser");
                    }
                }
            }
        }
    }

    /// Apply a submitted bulk-selection count.
    ///
    /// A positive count replaces the selection with the first `count`
    /// accumulated records and closes the input; zero leaves everything
    /// unchanged and the input open.
    fn submit_bulk_selection(&mut self, count: usize) {
        if count == 0 {
            debug!("Bulk selection submitted without a count, ignoring");
            return;
        }
        info!(count, "Bulk-selecting first records");
        self.catalog.select_first(count);
        self.bulk.close();
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Footer/Status bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);

        // The bulk-selection input overlays the table near the Title header
        if self.state == AppState::Browse {
            self.bulk.render(frame, chunks[1], &self.theme);
        }
    }

    /// Render the application header.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("ArtTable")
            .style(self.theme.accent_style())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(title, area);
    }

    /// Render the main content area based on current state.
    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.state {
            AppState::Browse | AppState::Exiting => {
                self.browse
                    .render(frame, area, &self.catalog, self.bulk.is_open(), &self.theme);
            }
            AppState::Help => {
                let paragraph = Paragraph::new(self.render_help_view())
                    .block(Block::default().borders(Borders::NONE))
                    .alignment(Alignment::Center);
                frame.render_widget(paragraph, area);
            }
        }
    }

    /// Render the footer/status bar.
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        match self.state {
            AppState::Browse | AppState::Exiting => {
                self.browse
                    .render_status_bar(frame, area, &self.catalog, &self.theme);
            }
            AppState::Help => {
                let footer = Line::styled(
                    " Press Esc or q to close this help screen",
                    self.theme.dim_style(),
                );
                frame.render_widget(Paragraph::new(footer), area);
            }
        }
    }

    /// Render help view content.
    fn render_help_view(&self) -> Vec<Line<'static>> {
        vec![
            Line::raw(""),
            Line::styled("Help", self.theme.accent_style()),
            Line::raw(""),
            Line::styled("Global:", self.theme.header_style()),
            Line::raw("  Ctrl+C  - Quit application"),
            Line::raw("  ?       - Show this help"),
            Line::raw("  q       - Quit application"),
            Line::raw(""),
            Line::styled("Artwork table:", self.theme.header_style()),
            Line::raw("  j / ↓   - Move down"),
            Line::raw("  k / ↑   - Move up"),
            Line::raw("  g / G   - First / last row"),
            Line::raw("  h / ←   - Previous page"),
            Line::raw("  l / →   - Next page"),
            Line::raw("  Space   - Check/uncheck row"),
            Line::raw("  a       - Check/uncheck all rows on the page"),
            Line::raw("  b       - Select first N fetched artworks"),
            Line::raw("  o       - Open artwork in browser"),
            Line::raw("  r       - Refetch current page"),
            Line::raw(""),
            Line::styled("Select first N:", self.theme.header_style()),
            Line::raw("  0-9     - Edit count"),
            Line::raw("  Enter   - Apply (count must be positive)"),
            Line::raw("  Esc     - Dismiss"),
        ]
    }
}
