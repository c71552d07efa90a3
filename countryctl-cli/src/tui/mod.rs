//! Country browser TUI
//!
//! Two screens:
//! - Landing page with a single link into the browser
//! - Country browser: debounced search box, clear shortcut and a
//!   responsive card grid, mounted fresh every time it is opened

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use terminal::run;
