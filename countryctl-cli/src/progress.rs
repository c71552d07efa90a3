//! Fetch progress feedback for non-interactive commands
//!
//! Spinners are suppressed when:
//! - `--quiet` is passed
//! - `COUNTRYCTL_QUIET=1` is set
//! - stderr is not a TTY (piped output)

use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static QUIET_MODE: OnceLock<bool> = OnceLock::new();

/// Decide quiet mode once at startup
pub fn init_quiet_mode(quiet_flag: bool) {
    let is_quiet = quiet_flag
        || std::env::var("COUNTRYCTL_QUIET").map(|v| v == "1").unwrap_or(false)
        || !std::io::stderr().is_terminal();

    QUIET_MODE.set(is_quiet).ok();
}

pub fn is_quiet() -> bool {
    *QUIET_MODE.get().unwrap_or(&true)
}

/// Spinner shown while a fetch is in flight; silent in quiet mode
pub struct FetchProgress {
    bar: Option<ProgressBar>,
}

impl FetchProgress {
    pub fn start(msg: impl Into<String>) -> Self {
        if is_quiet() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(msg.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// Finish with a ✓ line
    pub fn success(self, msg: impl Into<String>) {
        self.finish(format!("✓ {}", msg.into()));
    }

    /// Finish with a ✗ line
    pub fn failure(self, msg: impl Into<String>) {
        self.finish(format!("✗ {}", msg.into()));
    }

    fn finish(self, line: String) {
        if let Some(bar) = self.bar {
            if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
                bar.set_style(style);
            }
            bar.finish_with_message(line);
        }
    }
}
