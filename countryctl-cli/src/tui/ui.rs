//! UI rendering using ratatui

use countryctl_core::{group_digits, BrowserView, Country};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{App, GridMetrics, Screen};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for borders and hints
const SECONDARY: Color = Color::DarkGray;
/// Heading color
const HEADING: Color = Color::Blue;
/// Error text
const ERROR: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Card height including borders: flag, name, region, population
pub const CARD_HEIGHT: u16 = 6;

/// Areas of the browser screen
#[derive(Debug, Clone, Copy)]
pub struct BrowserLayout {
    pub title: Rect,
    pub search: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the screen for the browser
pub fn browser_layout(area: Rect) -> BrowserLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Search input + clear
            Constraint::Min(1),    // Grid / messages
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    BrowserLayout {
        title: chunks[0],
        search: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

/// Cards per row for a given width (1 up to 4 as the terminal widens)
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=89 => 2,
        90..=119 => 3,
        _ => 4,
    }
}

/// Grid geometry for the content area
pub fn grid_metrics(content: Rect) -> GridMetrics {
    GridMetrics {
        columns: grid_columns(content.width),
        visible_rows: ((content.height / CARD_HEIGHT) as usize).max(1),
    }
}

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen {
        Screen::Landing => render_landing(frame, area),
        Screen::Browser => render_browser(frame, app, area),
    }
}

/// Welcome text and the single link
fn render_landing(frame: &mut Frame, area: Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .split(area);

    let text = Text::from(vec![
        Line::from(Span::styled(
            "Welcome to the Country Info App",
            Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Go to Country Information ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Enter to open · q to quit", Style::default().fg(DIM))),
    ]);

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical[1]);
}

fn render_browser(frame: &mut Frame, app: &App, area: Rect) {
    let layout = browser_layout(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Country Information",
        Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(SECONDARY)),
    );
    frame.render_widget(title, layout.title);

    let Some(browser) = app.browser.as_ref() else {
        return;
    };
    let state = browser.state();

    render_search(frame, state.search(), layout.search);

    match state.view() {
        BrowserView::Loading => render_message(
            frame,
            layout.content,
            "Loading countries...",
            Style::default().fg(ACCENT),
        ),
        BrowserView::Error(message) => {
            render_message(frame, layout.content, message, Style::default().fg(ERROR))
        }
        BrowserView::Grid(countries) => render_grid(frame, app, &countries, layout.content),
        BrowserView::NoResults { query } => render_message(
            frame,
            layout.content,
            &format!("No countries found matching \"{}\"", query),
            Style::default().fg(Color::Gray),
        ),
    }

    let counts = if state.is_loading() || state.error().is_some() {
        String::new()
    } else {
        format!(
            "{} of {} countries",
            state.filtered().len(),
            state.countries().len()
        )
    };
    render_status_bar(frame, &counts, layout.status);
}

/// Search input with the clear button on its right
fn render_search(frame: &mut Frame, search: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(13)])
        .split(area);

    let content = if search.is_empty() {
        Line::from(Span::styled("Search for a country...", Style::default().fg(DIM)))
    } else {
        Line::from(vec![
            Span::raw(search.to_string()),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ])
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .title(" Search ")
            .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(input, chunks[0]);

    let clear = Paragraph::new(Line::from(Span::styled(
        "Clear ^U",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(clear, chunks[1]);
}

/// Single centered message filling the content area
fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    let paragraph = Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, vertical[1]);
}

/// Responsive card grid, scrolled by whole rows
fn render_grid(frame: &mut Frame, app: &App, countries: &[&Country], area: Rect) {
    let metrics = grid_metrics(area);
    let columns = metrics.columns;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); metrics.visible_rows])
        .split(area);

    let rows = countries.chunks(columns).skip(app.scroll_offset);
    for (row, row_area) in rows.zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (country, cell) in row.iter().zip(cells.iter()) {
            render_card(frame, country, app.separator, *cell);
        }
    }
}

/// One country card
fn render_card(frame: &mut Frame, country: &Country, separator: char, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", country.code))
        .title_style(Style::default().fg(SECONDARY))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let text = Text::from(vec![
        Line::from(Span::styled(
            format!("⚑ {}", country.flag_url),
            Style::default().fg(DIM),
        )),
        Line::from(Span::styled(
            country.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Region: ", Style::default().fg(Color::Gray)),
            Span::raw(country.region.clone()),
        ]),
        Line::from(vec![
            Span::styled("Population: ", Style::default().fg(Color::Gray)),
            Span::raw(group_digits(country.population, separator)),
        ]),
    ]);

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Key hints on the left, counts on the right
fn render_status_bar(frame: &mut Frame, counts: &str, area: Rect) {
    let hints = "Esc back · ^U clear · ↑↓ scroll · ^C quit";
    let width = area.width as usize;
    let used = hints.chars().count() + counts.chars().count();
    let padding = width.saturating_sub(used + 2);

    let line = Line::from(vec![
        Span::styled(format!(" {}", hints), Style::default().fg(DIM)),
        Span::raw(" ".repeat(padding)),
        Span::styled(format!("{} ", counts), Style::default().fg(ACCENT)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use countryctl_core::{CountryError, LoadMessage, StaticCountrySource};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn france() -> Country {
        Country {
            code: "FRA".to_string(),
            name: "France".to_string(),
            region: "Europe".to_string(),
            population: 67_000_000,
            flag_url: "fr.svg".to_string(),
        }
    }

    fn make_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel::<LoadMessage>();
        let source = Arc::new(StaticCountrySource::new(Vec::new()));
        App::new(source, Duration::from_millis(300), ',', tx)
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn load(app: &mut App, result: countryctl_core::Result<Vec<Country>>) {
        app.browser
            .as_mut()
            .unwrap()
            .state_mut()
            .finish_load(result);
    }

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(60), 2);
        assert_eq!(grid_columns(100), 3);
        assert_eq!(grid_columns(200), 4);
    }

    #[test]
    fn test_grid_metrics_never_zero_rows() {
        let metrics = grid_metrics(Rect::new(0, 0, 80, 3));
        assert_eq!(metrics.visible_rows, 1);
        assert_eq!(metrics.columns, 2);
    }

    #[tokio::test]
    async fn test_landing_renders_link() {
        let app = make_app();
        let screen = draw(&app);
        assert!(screen.contains("Welcome to the Country Info App"));
        assert!(screen.contains("Go to Country Information"));
    }

    #[tokio::test]
    async fn test_loading_renders_only_indicator() {
        let mut app = make_app();
        app.open_browser();

        let screen = draw(&app);
        assert!(screen.contains("Loading countries..."));
        assert!(!screen.contains("Population:"));
        assert!(!screen.contains("Failed to fetch"));
    }

    #[tokio::test]
    async fn test_grid_renders_card() {
        let mut app = make_app();
        app.open_browser();
        load(&mut app, Ok(vec![france()]));

        let screen = draw(&app);
        assert!(screen.contains("France"));
        assert!(screen.contains("fr.svg"));
        assert!(screen.contains("Region: Europe"));
        assert!(screen.contains("Population: 67,000,000"));
        assert!(screen.contains("1 of 1 countries"));
        assert!(!screen.contains("Loading"));
    }

    #[tokio::test]
    async fn test_custom_separator_in_card() {
        let mut app = make_app();
        app.separator = '.';
        app.open_browser();
        load(&mut app, Ok(vec![france()]));

        assert!(draw(&app).contains("Population: 67.000.000"));
    }

    #[tokio::test]
    async fn test_error_renders_message_only() {
        let mut app = make_app();
        app.open_browser();
        load(
            &mut app,
            Err(CountryError::Status {
                url: "http://x".to_string(),
                status: 500,
            }),
        );

        let screen = draw(&app);
        assert!(screen.contains("Failed to fetch countries. Please try again later."));
        assert!(!screen.contains("Population:"));
        assert!(!screen.contains("Loading"));
    }

    #[tokio::test]
    async fn test_no_results_quotes_raw_search() {
        let mut app = make_app();
        app.open_browser();
        load(&mut app, Ok(vec![france()]));

        let now = Instant::now();
        app.browser
            .as_mut()
            .unwrap()
            .state_mut()
            .set_search("zzz", now);
        app.tick(now + Duration::from_millis(300));

        let screen = draw(&app);
        assert!(screen.contains("No countries found matching \"zzz\""));
        assert!(!screen.contains("Population:"));
    }
}
