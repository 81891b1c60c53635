//! Trip planning logic
//!
//! This module contains the submission-side logic of the planner: input
//! validation, destination resolution, the advisory lookup table, and trip
//! plan assembly. Everything here is pure over the catalog and the request,
//! with no terminal or I/O dependency.

use thiserror::Error;

use crate::data::{Catalog, TripType};

/// Advisory sentence used when the destination's category is not in the
/// lookup table
pub const FALLBACK_ADVISORY: &str = "Explore the destination at your own pace.";

/// Errors surfaced in the result panel when a submission fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The duration input is not a positive integer
    #[error("Invalid duration. Please enter a valid number of days.")]
    InvalidDuration,

    /// The selected index is not a valid catalog position
    #[error("Invalid destination selection.")]
    InvalidDestination,
}

/// Trip-type preference selectable in the form
///
/// The neutral default is `Any`. The preference is captured with the
/// submission but is not consulted when deriving the advisory sentence;
/// only the destination's own category is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripPreference {
    /// No preference
    #[default]
    Any,
    Romantic,
    Cultural,
    CityExploration,
    Historical,
    Scenic,
    Adventure,
    Luxury,
    Relaxation,
}

impl TripPreference {
    /// Returns a slice containing all preference options, neutral first.
    pub fn all() -> &'static [TripPreference] {
        &[
            TripPreference::Any,
            TripPreference::Romantic,
            TripPreference::Cultural,
            TripPreference::CityExploration,
            TripPreference::Historical,
            TripPreference::Scenic,
            TripPreference::Adventure,
            TripPreference::Luxury,
            TripPreference::Relaxation,
        ]
    }

    /// Returns a human-readable display label for the preference.
    pub fn label(&self) -> &'static str {
        match self {
            TripPreference::Any => "Any",
            TripPreference::Romantic => "Romantic",
            TripPreference::Cultural => "Cultural",
            TripPreference::CityExploration => "City Exploration",
            TripPreference::Historical => "Historical",
            TripPreference::Scenic => "Scenic",
            TripPreference::Adventure => "Adventure",
            TripPreference::Luxury => "Luxury",
            TripPreference::Relaxation => "Relaxation",
        }
    }

    /// Parses user input into a TripPreference.
    ///
    /// Matching is case-insensitive; "city" is accepted as an alias for
    /// City Exploration. Returns `None` if the input doesn't match any
    /// option.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<TripPreference> {
        match s.to_lowercase().trim() {
            "any" => Some(TripPreference::Any),
            "romantic" => Some(TripPreference::Romantic),
            "cultural" => Some(TripPreference::Cultural),
            "city" | "city exploration" => Some(TripPreference::CityExploration),
            "historical" => Some(TripPreference::Historical),
            "scenic" => Some(TripPreference::Scenic),
            "adventure" => Some(TripPreference::Adventure),
            "luxury" => Some(TripPreference::Luxury),
            "relaxation" => Some(TripPreference::Relaxation),
            _ => None,
        }
    }
}

/// A trip plan submission, built from the form fields at submission time
///
/// Ephemeral: validated and consumed by [`plan_trip`], never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Selected catalog index from the destination selector
    pub destination_index: usize,
    /// Raw duration input as typed by the user
    pub duration_input: String,
    /// Trip-type preference at submission time (not used in derivation)
    pub preference: TripPreference,
}

/// A successfully derived trip plan, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPlan {
    /// Destination name
    pub name: String,
    /// Image reference for display and the ambient backdrop
    pub image: String,
    /// Requested duration in days
    pub duration_days: i64,
    /// Destination description
    pub description: String,
    /// Recommendations joined into a single comma-separated string
    pub recommendations: String,
    /// The destination's own category
    pub trip_type: TripType,
    /// Advisory sentence derived from the category
    pub advisory: &'static str,
}

impl TripPlan {
    /// Returns the labeled result lines in render order.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Destination: {}", self.name),
            format!("Duration: {} days", self.duration_days),
            format!("Description: {}", self.description),
            format!("Recommendations: {}", self.recommendations),
            format!("Trip Type: {}", self.trip_type.label()),
            format!("Trip Recommendations: {}", self.advisory),
        ]
    }
}

/// Returns the fixed advisory sentence for a destination category.
///
/// Unrecognized or missing categories map to [`FALLBACK_ADVISORY`].
pub fn advisory(trip_type: &TripType) -> &'static str {
    match trip_type {
        TripType::Romantic => "Enjoy romantic dinners, take a boat ride on the Seine.",
        TripType::Cultural => "Visit museums, explore historical sites.",
        TripType::CityExploration => "Explore the city, visit landmarks.",
        TripType::Historical => "Visit historical sites, learn about the past.",
        TripType::Scenic => "Enjoy scenic views, relax by the waterfront.",
        TripType::Adventure => "Go on outdoor adventures, explore nature.",
        TripType::Luxury => "Indulge in luxury experiences, stay in upscale hotels.",
        TripType::Relaxation => "Relax on the beach, get spa treatments.",
        TripType::Other(_) => FALLBACK_ADVISORY,
    }
}

/// Parses the duration field into a day count.
///
/// The input must parse as an integer strictly greater than zero.
pub fn parse_duration(input: &str) -> Result<i64, PlanError> {
    let days: i64 = input.trim().parse().map_err(|_| PlanError::InvalidDuration)?;
    if days <= 0 {
        return Err(PlanError::InvalidDuration);
    }
    Ok(days)
}

/// Joins recommendation snippets into a single display string, preserving
/// catalog order.
pub fn join_recommendations(recommendations: &[String]) -> String {
    recommendations.join(", ")
}

/// Validates a submission and derives the trip plan.
///
/// Validation rules, first failure wins:
/// 1. The duration must parse as an integer `> 0`, else
///    [`PlanError::InvalidDuration`].
/// 2. The index must be a valid catalog position, else
///    [`PlanError::InvalidDestination`].
pub fn plan_trip(catalog: &Catalog, request: &TripRequest) -> Result<TripPlan, PlanError> {
    let duration_days = parse_duration(&request.duration_input)?;

    let destination = catalog
        .get(request.destination_index)
        .ok_or(PlanError::InvalidDestination)?;

    Ok(TripPlan {
        name: destination.name.clone(),
        image: destination.image.clone(),
        duration_days,
        description: destination.description.clone(),
        recommendations: join_recommendations(&destination.recommendations),
        trip_type: destination.trip_type.clone(),
        advisory: advisory(&destination.trip_type),
    })
}
