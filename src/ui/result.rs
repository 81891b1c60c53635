//! Result panel rendering
//!
//! Renders the trip plan produced by a successful submission, or the
//! validation error text when a submission failed. Both outcomes share the
//! same panel.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::plan::{PlanError, TripPlan};

/// Heading shown above a successful plan
const RESULT_HEADING: &str = "Your Trip Plan:";

/// Formats a validation failure as the panel's full text.
pub fn error_text(error: &PlanError) -> String {
    format!("Error: {}", error)
}

/// Builds the text lines for a successful plan, image reference first.
fn plan_lines(plan: &TripPlan) -> Vec<String> {
    let mut lines = vec![format!("[Image: {}]", plan.image)];
    lines.extend(plan.lines());
    lines
}

/// Renders the result panel into the given area
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(RESULT_HEADING)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = match &app.result {
        Some(Ok(plan)) => plan_lines(plan)
            .into_iter()
            .map(|text| Line::from(Span::styled(text, Style::default().fg(Color::White))))
            .collect(),
        Some(Err(error)) => vec![Line::from(Span::styled(
            error_text(error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))],
        None => Vec::new(),
    };

    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TripType;

    #[test]
    fn test_error_text_matches_rendered_form() {
        assert_eq!(
            error_text(&PlanError::InvalidDuration),
            "Error: Invalid duration. Please enter a valid number of days."
        );
        assert_eq!(
            error_text(&PlanError::InvalidDestination),
            "Error: Invalid destination selection."
        );
    }

    #[test]
    fn test_plan_lines_lead_with_image_reference() {
        let plan = TripPlan {
            name: "Paris".to_string(),
            image: "paris.jpg".to_string(),
            duration_days: 3,
            description: "City of light".to_string(),
            recommendations: "Eiffel Tower, Louvre".to_string(),
            trip_type: TripType::Romantic,
            advisory: "Enjoy romantic dinners, take a boat ride on the Seine.",
        };

        let lines = plan_lines(&plan);
        assert_eq!(lines[0], "[Image: paris.jpg]");
        assert_eq!(lines[1], "Destination: Paris");
        assert_eq!(lines[2], "Duration: 3 days");
        assert_eq!(
            lines.last().unwrap(),
            "Trip Recommendations: Enjoy romantic dinners, take a boat ride on the Seine."
        );
    }
}
