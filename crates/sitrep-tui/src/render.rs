//! Pure view/render functions for the TUI.
//!
//! Functions here take state by immutable reference and draw to a ratatui
//! Frame. Never mutate state, never return effects. Line builders are split
//! out of the drawing functions so tests can assert on content without a
//! terminal.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sitrep_core::catalog::ServiceRecord;
use sitrep_core::rollup::Rollup;
use sitrep_core::status::{Status, Tone};
use sitrep_core::timefmt;

use crate::state::{AppState, Screen};
use crate::text::truncate_with_ellipsis;

/// Height of the dashboard header (title, subtitle, live line).
const HEADER_HEIGHT: u16 = 4;

/// Height of one service card including its border.
const CARD_HEIGHT: u16 = 9;

/// Height of the summary tile row including borders.
const SUMMARY_HEIGHT: u16 = 4;

/// Minimum terminal width for the two-column card grid.
const TWO_COLUMN_MIN_WIDTH: u16 = 76;

/// Minimum terminal width for the three-column card grid.
const THREE_COLUMN_MIN_WIDTH: u16 = 116;

/// Size of the welcome screen's alert box.
const ALERT_WIDTH: u16 = 44;
const ALERT_HEIGHT: u16 = 5;

/// Title of the placeholder welcome alert.
const WELCOME_TITLE: &str = "sitrep is ready";

/// Renders the selected screen to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    match state.screen {
        Screen::Dashboard => render_dashboard(state, frame),
        Screen::Welcome => render_welcome(frame),
    }
}

fn render_dashboard(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(SUMMARY_HEIGHT),
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    render_cards(state, frame, chunks[1]);
    render_summary(&state.records, frame, chunks[2]);
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            state.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.subtitle.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        live_line(state.now, state.tick_count),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// The live indicator: pulsing dot, label, and the absolute clock readout.
fn live_line(now: DateTime<Utc>, tick_count: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            pulse_dot(true, tick_count).to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" Live  "),
        Span::styled(
            timefmt::clock_readout(now),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Badge dot glyph. Pulsing statuses alternate on tick parity so the page
/// visibly changes every second; steady statuses keep the filled dot.
fn pulse_dot(pulses: bool, tick_count: u64) -> char {
    if pulses && tick_count % 2 == 1 {
        '○'
    } else {
        '●'
    }
}

/// Card columns for the given terminal width (1, 2, or 3).
fn grid_columns(width: u16) -> usize {
    if width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

fn render_cards(state: &AppState, frame: &mut Frame, area: Rect) {
    let columns = grid_columns(area.width);
    let row_count = state.records.len().div_ceil(columns);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); row_count])
        .split(area);

    for (row_records, row_area) in state.records.chunks(columns).zip(row_areas.iter()) {
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (record, card_area) in row_records.iter().zip(column_areas.iter()) {
            render_card(record, state.now, state.tick_count, frame, *card_area);
        }
    }
}

fn render_card(
    record: &ServiceRecord,
    now: DateTime<Utc>,
    tick_count: u64,
    frame: &mut Frame,
    area: Rect,
) {
    let title_width = area.width.saturating_sub(4) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(
            " {} ",
            truncate_with_ellipsis(&record.name, title_width)
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = card_lines(record, now, tick_count, inner.width as usize);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Body lines for one service card: description, status badge, metrics,
/// and the relative check time.
fn card_lines(
    record: &ServiceRecord,
    now: DateTime<Utc>,
    tick_count: u64,
    width: usize,
) -> Vec<Line<'static>> {
    let badge_color = tone_color(record.status.tone());

    vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&record.description, width),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                pulse_dot(record.status.pulses(), tick_count).to_string(),
                Style::default().fg(badge_color),
            ),
            Span::raw(" "),
            Span::styled(
                record.status.label(),
                Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Uptime ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                record.uptime.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Response ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                record.response_time.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "Last checked: {}",
                timefmt::relative_time(record.last_checked, now)
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn render_summary(records: &[ServiceRecord], frame: &mut Frame, area: Rect) {
    // Recomputed from the records on every render, never cached.
    let rollup = Rollup::tally(records);
    let tiles = Status::headline();

    let tile_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tiles.len() as u32); tiles.len()])
        .split(area);

    for (status, tile_area) in tiles.iter().zip(tile_areas.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(*tile_area);
        frame.render_widget(block, *tile_area);

        let lines = summary_tile_lines(*status, rollup.count(*status));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

/// Count over label, colored by the status tone.
fn summary_tile_lines(status: Status, count: usize) -> Vec<Line<'static>> {
    let color = tone_color(status.tone());
    vec![
        Line::from(Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(status.label(), Style::default().fg(color))),
    ]
}

fn render_welcome(frame: &mut Frame) {
    let popup = centered_rect(frame.area(), ALERT_WIDTH, ALERT_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    frame.render_widget(
        Paragraph::new(welcome_lines()).alignment(Alignment::Center),
        inner,
    );
}

/// The success alert: check mark, title, quit hint.
fn welcome_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                "✓ ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(WELCOME_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "press q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Terminal color for a status tone.
fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Ok => Color::Green,
        Tone::Warn => Color::Yellow,
        Tone::Crit => Color::Red,
        Tone::Info => Color::Blue,
        Tone::Muted => Color::DarkGray,
    }
}

/// Centers a fixed-size box inside `area`, clamped to its bounds.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use sitrep_core::catalog;

    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 15, 45, 7).unwrap()
    }

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(75), 1);
        assert_eq!(grid_columns(76), 2);
        assert_eq!(grid_columns(115), 2);
        assert_eq!(grid_columns(116), 3);
        assert_eq!(grid_columns(200), 3);
    }

    #[test]
    fn test_card_lines_content() {
        let now = fixed_now();
        let records = catalog::builtin(now);
        let lines = card_lines(&records[0], now, 0, 60);

        assert_eq!(line_text(&lines[0]), "Main API routing service");
        assert_eq!(line_text(&lines[2]), "● Operational");
        assert_eq!(line_text(&lines[4]), "Uptime 99.9%   Response 45ms");
        assert_eq!(line_text(&lines[6]), "Last checked: 2 minutes ago");
    }

    /// Card body plus the border fits the fixed card height exactly.
    #[test]
    fn test_card_lines_fill_card_height() {
        let now = fixed_now();
        let records = catalog::builtin(now);
        let lines = card_lines(&records[0], now, 0, 60);
        assert_eq!(lines.len() as u16 + 2, CARD_HEIGHT);
    }

    /// The relative age follows the clock value, not wall time.
    #[test]
    fn test_card_lines_age_follows_clock() {
        let now = fixed_now();
        let records = catalog::builtin(now);
        let later = now + Duration::seconds(90);

        let lines = card_lines(&records[1], now, 0, 60);
        assert_eq!(line_text(&lines[6]), "Last checked: 1 minutes ago");

        let lines = card_lines(&records[1], later, 0, 60);
        assert_eq!(line_text(&lines[6]), "Last checked: 2 minutes ago");
    }

    /// Pulsing badges alternate their dot on tick parity.
    #[test]
    fn test_badge_pulses_on_tick_parity() {
        let now = fixed_now();
        let records = catalog::builtin(now);

        let even = card_lines(&records[0], now, 0, 60);
        let odd = card_lines(&records[0], now, 1, 60);
        assert_eq!(line_text(&even[2]), "● Operational");
        assert_eq!(line_text(&odd[2]), "○ Operational");
    }

    /// Maintenance badges hold a steady dot.
    #[test]
    fn test_maintenance_badge_does_not_pulse() {
        let now = fixed_now();
        let records = catalog::builtin(now);

        let even = card_lines(&records[5], now, 0, 60);
        let odd = card_lines(&records[5], now, 1, 60);
        assert_eq!(line_text(&even[2]), "● Maintenance");
        assert_eq!(line_text(&odd[2]), "● Maintenance");
    }

    #[test]
    fn test_live_line_shows_clock_readout() {
        let text = line_text(&live_line(fixed_now(), 0));
        assert!(text.contains("Live"));
        assert!(text.contains("Aug 23, 2026, 3:45:07 PM"));
    }

    /// Two renders within one tick of each other show different live dots,
    /// which is what makes the page visibly live.
    #[test]
    fn test_live_line_differs_across_adjacent_ticks() {
        let now = fixed_now();
        assert_ne!(
            line_text(&live_line(now, 4)),
            line_text(&live_line(now, 5))
        );
    }

    #[test]
    fn test_summary_tile_lines() {
        let lines = summary_tile_lines(Status::Operational, 3);
        assert_eq!(line_text(&lines[0]), "3");
        assert_eq!(line_text(&lines[1]), "Operational");
    }

    #[test]
    fn test_welcome_lines_show_success_alert() {
        let lines = welcome_lines();
        assert_eq!(line_text(&lines[0]), "✓ sitrep is ready");
        assert_eq!(line_text(&lines[2]), "press q to quit");
    }

    #[test]
    fn test_centered_rect_centers_and_clamps() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 44, 5);
        assert_eq!(rect, Rect::new(28, 17, 44, 5));

        // Larger than the area: clamps instead of overflowing.
        let tiny = Rect::new(0, 0, 20, 3);
        let rect = centered_rect(tiny, 44, 5);
        assert!(rect.width <= tiny.width);
        assert!(rect.height <= tiny.height);
    }
}
