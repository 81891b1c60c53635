//! Trip form screen rendering
//!
//! Renders the planning form: the destination selector populated from the
//! catalog, the duration input, the trip-type preference selector, and the
//! result panel once a submission has been made.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, FormField};
use crate::plan::TripPreference;
use crate::ui::render_result;

/// Color scheme for the form screen
mod colors {
    use ratatui::style::Color;

    /// Section headers
    pub const HEADER: Color = Color::Cyan;
    /// Primary text
    pub const PRIMARY: Color = Color::White;
    /// Secondary/dimmed text
    pub const SECONDARY: Color = Color::Gray;
    /// Focused field and selected option
    pub const FOCUSED: Color = Color::Yellow;
}

/// Builds the bordered block for a form field, highlighted when focused
fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(colors::FOCUSED)
    } else {
        Style::default().fg(colors::SECONDARY)
    };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Formats the visible window of destination options around the selection
///
/// Returns (label, is_selected) pairs in catalog order, clipped to fit the
/// given number of rows.
fn destination_rows(app: &App, rows: usize) -> Vec<(String, bool)> {
    let count = app.destination_count();
    if count == 0 || rows == 0 {
        return Vec::new();
    }

    // Keep the selection inside the visible window.
    let start = if app.selected_index >= rows {
        app.selected_index + 1 - rows
    } else {
        0
    };

    app.catalog
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(index, destination)| (destination.name.clone(), index == app.selected_index))
        .collect()
}

/// Renders the header bar with the ambient backdrop reference
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Trip Planner",
        Style::default()
            .fg(colors::HEADER)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(image) = &app.backdrop_image {
        lines.push(Line::from(Span::styled(
            format!("~ {} ~", image),
            Style::default().fg(colors::SECONDARY),
        )));
    }

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Renders the destination selector
fn render_destinations(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == FormField::Destination;
    let block = field_block("Destination", focused);

    let inner_rows = area.height.saturating_sub(2) as usize;
    let rows = destination_rows(app, inner_rows);

    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled(
            "(no destinations available)",
            Style::default().fg(colors::SECONDARY),
        ))]
    } else {
        rows.into_iter()
            .map(|(name, selected)| {
                if selected {
                    Line::from(Span::styled(
                        format!("> {}", name),
                        Style::default()
                            .fg(colors::FOCUSED)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {}", name),
                        Style::default().fg(colors::PRIMARY),
                    ))
                }
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the duration input field
fn render_duration(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == FormField::Duration;
    let block = field_block("Duration (days)", focused);

    let content = if app.duration_input.is_empty() && !focused {
        Span::styled("enter days", Style::default().fg(colors::SECONDARY))
    } else {
        let cursor = if focused { "_" } else { "" };
        Span::styled(
            format!("{}{}", app.duration_input, cursor),
            Style::default().fg(colors::PRIMARY),
        )
    };

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

/// Renders the trip-type preference selector
fn render_trip_type(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == FormField::TripType;
    let block = field_block("Trip Type", focused);

    let label = app.preference.label();
    let style = if app.preference == TripPreference::Any {
        Style::default().fg(colors::SECONDARY)
    } else {
        Style::default().fg(colors::PRIMARY)
    };

    let content = Line::from(Span::styled(format!("< {} >", label), style));
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Renders the key hint footer
fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        "Tab: switch field | Up/Down: change | Enter: plan trip | Esc: quit",
        Style::default().fg(colors::SECONDARY),
    )));
    frame.render_widget(hints, area);
}

/// Renders the form view
///
/// The result panel occupies the lower half once it has been revealed;
/// before the first submission the form fills the frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, result_area) = if app.result_revealed() {
        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        (halves[0], Some(halves[1]))
    } else {
        (area, None)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(form_area);

    render_header(frame, app, chunks[0]);
    render_destinations(frame, app, chunks[1]);
    render_duration(frame, app, chunks[2]);
    render_trip_type(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);

    if let Some(result_area) = result_area {
        render_result(frame, app, result_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Catalog, Destination, TripType};

    fn named(name: &str) -> Destination {
        Destination {
            name: name.to_string(),
            image: "x.jpg".to_string(),
            description: String::new(),
            recommendations: Vec::new(),
            trip_type: TripType::Scenic,
        }
    }

    fn app_with_names(names: &[&str]) -> App {
        let catalog = Catalog::new(names.iter().map(|&n| named(n)).collect());
        App::with_catalog(catalog)
    }

    #[test]
    fn test_destination_rows_catalog_order_and_selection() {
        let app = app_with_names(&["Paris", "Rome", "Tokyo"]);
        let rows = destination_rows(&app, 10);
        assert_eq!(
            rows,
            vec![
                ("Paris".to_string(), true),
                ("Rome".to_string(), false),
                ("Tokyo".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_destination_rows_empty_catalog() {
        let app = App::with_catalog(Catalog::empty());
        assert!(destination_rows(&app, 10).is_empty());
    }

    #[test]
    fn test_destination_rows_window_follows_selection() {
        let mut app = app_with_names(&["A", "B", "C", "D"]);
        app.selected_index = 3;
        let rows = destination_rows(&app, 2);
        assert_eq!(
            rows,
            vec![("C".to_string(), false), ("D".to_string(), true)]
        );
    }
}
