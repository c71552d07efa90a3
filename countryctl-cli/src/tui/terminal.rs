//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use countryctl_core::{Config, CountrySource, LoadMessage};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::Instant;
use tracing::{debug, info};

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// Longest time we block waiting for input, so load results show up promptly
const MAX_POLL: Duration = Duration::from_millis(100);

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI application. Must be called from inside a tokio runtime.
pub fn run(config: &Config, source: Arc<dyn CountrySource>) -> Result<()> {
    let (load_tx, mut load_rx) = mpsc::unbounded_channel();
    let mut app = App::new(
        source,
        config.debounce(),
        config.display.thousands_separator,
        load_tx,
    );

    let mut terminal = init_terminal()?;
    info!("TUI started");

    let result = run_loop(&mut terminal, &mut app, &mut load_rx);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;
    info!("TUI stopped");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    load_rx: &mut UnboundedReceiver<LoadMessage>,
) -> Result<()> {
    loop {
        // Deliver finished fetches
        while let Ok(message) = load_rx.try_recv() {
            app.handle_load(message);
        }

        // Apply debounced search
        app.tick(Instant::now());

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        app.set_grid(ui::grid_metrics(ui::browser_layout(area).content));

        terminal.draw(|frame| ui::render(frame, app))?;

        let timeout = poll_timeout(app.next_deadline(), Instant::now());
        if let Some(event) = poll_event(timeout)? {
            match event {
                Event::Key(key) => match handle_key(app, key, Instant::now()) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                    HandleResult::OpenBrowser => {
                        debug!("Opening country browser");
                        app.open_browser();
                    }
                    HandleResult::CloseBrowser => {
                        debug!("Closing country browser");
                        app.close_browser();
                    }
                },
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Wait no longer than the next debounce deadline
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(MAX_POLL),
        None => MAX_POLL,
    }
}
