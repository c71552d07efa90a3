//! Country browser state and fetch lifecycle
//!
//! [`BrowserState`] is the synchronous part: the fetched list, the raw and
//! debounced search text, and the loading/error flags that decide what gets
//! rendered. [`CountryBrowser`] wraps it with the one-shot fetch task that
//! runs per mount and is cancelled when the browser is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::country::Country;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::filter::filter_countries;
use crate::source::CountrySource;

/// What the browser should display, in precedence order
#[derive(Debug, PartialEq, Eq)]
pub enum BrowserView<'a> {
    /// Fetch still pending
    Loading,
    /// Fetch failed; nothing else is shown
    Error(&'a str),
    /// Non-empty filtered list
    Grid(Vec<&'a Country>),
    /// Nothing matched the search; carries the raw search text
    NoResults { query: &'a str },
}

/// Search and load state for one mounted browser
#[derive(Debug)]
pub struct BrowserState {
    countries: Arc<[Country]>,
    search: String,
    debounced: String,
    loading: bool,
    error: Option<String>,
    debouncer: Debouncer<String>,
}

impl BrowserState {
    /// Fresh state: empty list, loading, no error
    pub fn new(debounce: Duration) -> Self {
        Self {
            countries: Arc::from(Vec::new()),
            search: String::new(),
            debounced: String::new(),
            loading: true,
            error: None,
            debouncer: Debouncer::new(debounce),
        }
    }

    /// Apply the result of the initial load
    pub fn finish_load(&mut self, result: Result<Vec<Country>>) {
        match result {
            Ok(countries) => {
                info!(count = countries.len(), "Country list loaded");
                self.countries = Arc::from(countries);
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "Failed to load country list");
                self.error = Some(err.user_message());
            }
        }
        self.loading = false;
    }

    /// Replace the raw search text (one keystroke)
    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text == self.search {
            return;
        }
        self.search = text;
        if self.search == self.debounced {
            // Back to what the filter already shows
            self.debouncer.cancel();
        } else {
            self.debouncer.schedule(self.search.clone(), now);
        }
    }

    /// Append a typed character
    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut text = self.search.clone();
        text.push(c);
        self.set_search(text, now);
    }

    /// Remove the last character
    pub fn pop_char(&mut self, now: Instant) {
        let mut text = self.search.clone();
        if text.pop().is_some() {
            self.set_search(text, now);
        }
    }

    /// Clear button: reset raw text, debounced like any other edit
    pub fn clear_search(&mut self, now: Instant) {
        self.set_search(String::new(), now);
    }

    /// Commit the debounced search text if its quiet period is over.
    ///
    /// Returns true when the applied filter changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(value) if value != self.debounced => {
                debug!(query = %value, "Search applied");
                self.debounced = value;
                true
            }
            _ => false,
        }
    }

    /// When the next debounced value becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Countries matching the debounced search text
    pub fn filtered(&self) -> Vec<&Country> {
        filter_countries(&self.countries, &self.debounced)
    }

    /// Decide what to render
    pub fn view(&self) -> BrowserView<'_> {
        if self.loading {
            return BrowserView::Loading;
        }
        if let Some(error) = &self.error {
            return BrowserView::Error(error);
        }

        let filtered = self.filtered();
        if filtered.is_empty() {
            BrowserView::NoResults {
                query: &self.search,
            }
        } else {
            BrowserView::Grid(filtered)
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Raw text as typed
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Text the filter currently uses
    pub fn debounced_search(&self) -> &str {
        &self.debounced
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Result of a mount's fetch, tagged with the mount it belongs to
#[derive(Debug)]
pub struct LoadMessage {
    pub generation: u64,
    pub result: Result<Vec<Country>>,
}

/// A mounted country browser.
///
/// Construction spawns exactly one fetch. Dropping the browser cancels that
/// fetch; anything it still manages to report is ignored by generation.
#[derive(Debug)]
pub struct CountryBrowser {
    generation: u64,
    state: BrowserState,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CountryBrowser {
    /// Mount a browser and start its fetch. Must run inside a tokio runtime.
    pub fn mount(
        generation: u64,
        source: Arc<dyn CountrySource>,
        debounce: Duration,
        tx: mpsc::UnboundedSender<LoadMessage>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        debug!(generation, source = %source.describe(), "Mounting country browser");

        let task = tokio::spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => return,
                result = source.fetch_all() => result,
            };
            if token.is_cancelled() {
                return;
            }
            if tx.send(LoadMessage { generation, result }).is_err() {
                debug!(generation, "Browser gone before load finished");
            }
        });

        Self {
            generation,
            state: BrowserState::new(debounce),
            cancel,
            task: Some(task),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a load result. Returns false if it belongs to another mount.
    pub fn handle_load(&mut self, message: LoadMessage) -> bool {
        if message.generation != self.generation || self.cancel.is_cancelled() {
            debug!(
                expected = self.generation,
                got = message.generation,
                "Dropping stale load result"
            );
            return false;
        }
        self.state.finish_load(message.result);
        self.task = None;
        true
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BrowserState {
        &mut self.state
    }
}

impl Drop for CountryBrowser {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
