//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::time::Instant;

use super::app::{App, Screen};

/// Rows moved by PageUp/PageDown when the grid height is unknown
const PAGE_FALLBACK: usize = 5;

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Follow the landing page link
    OpenBrowser,
    /// Leave the browser (unmounts it)
    CloseBrowser,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> HandleResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return HandleResult::Continue;
    }

    // Global quit shortcut
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return HandleResult::Quit;
    }

    match app.screen {
        Screen::Landing => handle_landing(key),
        Screen::Browser => handle_browser(app, key, now),
    }
}

/// Landing page: one link, one way out
fn handle_landing(key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
            HandleResult::OpenBrowser
        }
        KeyCode::Char('q') | KeyCode::Esc => HandleResult::Quit,
        _ => HandleResult::Continue,
    }
}

/// Browser: the search box always has focus, so printable keys are text
fn handle_browser(app: &mut App, key: KeyEvent, now: Instant) -> HandleResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => HandleResult::CloseBrowser,

        // Clear button
        KeyCode::Char('u') | KeyCode::Char('l') if ctrl => {
            if let Some(browser) = app.browser.as_mut() {
                browser.state_mut().clear_search(now);
            }
            HandleResult::Continue
        }

        KeyCode::Char(c) if !ctrl && !alt => {
            if let Some(browser) = app.browser.as_mut() {
                browser.state_mut().push_char(c, now);
            }
            HandleResult::Continue
        }

        KeyCode::Backspace => {
            if let Some(browser) = app.browser.as_mut() {
                browser.state_mut().pop_char(now);
            }
            HandleResult::Continue
        }

        // Grid scrolling
        KeyCode::Down => {
            app.scroll_down(1);
            HandleResult::Continue
        }
        KeyCode::Up => {
            app.scroll_up(1);
            HandleResult::Continue
        }
        KeyCode::PageDown => {
            app.scroll_down(page_size(app));
            HandleResult::Continue
        }
        KeyCode::PageUp => {
            app.scroll_up(page_size(app));
            HandleResult::Continue
        }
        KeyCode::Home => {
            app.scroll_offset = 0;
            HandleResult::Continue
        }
        KeyCode::End => {
            app.scroll_offset = app.max_scroll();
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

fn page_size(app: &App) -> usize {
    if app.grid.visible_rows > 1 {
        app.grid.visible_rows
    } else {
        PAGE_FALLBACK
    }
}
