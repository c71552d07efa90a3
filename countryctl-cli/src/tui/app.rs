//! Core application state and screen management

use std::sync::Arc;
use std::time::Duration;

use countryctl_core::{CountryBrowser, CountrySource, LoadMessage};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;
use tracing::debug;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Welcome page with a single link
    #[default]
    Landing,
    /// Country search and card grid
    Browser,
}

/// Card grid geometry for the current terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    /// Cards per row
    pub columns: usize,
    /// Rows of cards that fit on screen
    pub visible_rows: usize,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            columns: 1,
            visible_rows: 1,
        }
    }
}

/// Main application state
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Mounted browser, present only while the browser screen is showing
    pub browser: Option<CountryBrowser>,
    /// First visible row of cards
    pub scroll_offset: usize,
    /// Grid geometry, updated on every frame
    pub grid: GridMetrics,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Digit grouping separator for populations
    pub separator: char,
    source: Arc<dyn CountrySource>,
    debounce: Duration,
    load_tx: UnboundedSender<LoadMessage>,
    next_generation: u64,
}

impl App {
    /// Create a new App instance on the landing screen
    pub fn new(
        source: Arc<dyn CountrySource>,
        debounce: Duration,
        separator: char,
        load_tx: UnboundedSender<LoadMessage>,
    ) -> Self {
        Self {
            screen: Screen::Landing,
            browser: None,
            scroll_offset: 0,
            grid: GridMetrics::default(),
            should_quit: false,
            separator,
            source,
            debounce,
            load_tx,
            next_generation: 1,
        }
    }

    /// Navigate to the browser, mounting a fresh instance (starts the fetch)
    pub fn open_browser(&mut self) {
        let generation = self.next_generation;
        self.next_generation += 1;

        self.browser = Some(CountryBrowser::mount(
            generation,
            Arc::clone(&self.source),
            self.debounce,
            self.load_tx.clone(),
        ));
        self.screen = Screen::Browser;
        self.scroll_offset = 0;
    }

    /// Navigate back to the landing page, unmounting the browser
    pub fn close_browser(&mut self) {
        self.browser = None;
        self.screen = Screen::Landing;
        self.scroll_offset = 0;
    }

    /// Route a finished load to the mounted browser
    pub fn handle_load(&mut self, message: LoadMessage) {
        match self.browser.as_mut() {
            Some(browser) => {
                browser.handle_load(message);
            }
            None => debug!(
                generation = message.generation,
                "Load finished after browser was closed"
            ),
        }
    }

    /// Apply any due debounced search. Resets scrolling when the filter changes.
    pub fn tick(&mut self, now: Instant) {
        if let Some(browser) = self.browser.as_mut() {
            if browser.state_mut().tick(now) {
                self.scroll_offset = 0;
            }
        }
    }

    /// When the next debounced search becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.browser
            .as_ref()
            .and_then(|browser| browser.state().next_deadline())
    }

    /// Number of card rows for the current filter
    pub fn total_rows(&self) -> usize {
        let cards = self
            .browser
            .as_ref()
            .map(|browser| browser.state().filtered().len())
            .unwrap_or(0);
        cards.div_ceil(self.grid.columns.max(1))
    }

    /// Largest useful scroll offset
    pub fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.grid.visible_rows)
    }

    /// Scroll the grid down by `rows`
    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = (self.scroll_offset + rows).min(self.max_scroll());
    }

    /// Scroll the grid up by `rows`
    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    /// Update grid geometry, keeping the scroll offset in range
    pub fn set_grid(&mut self, grid: GridMetrics) {
        self.grid = grid;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }
}
