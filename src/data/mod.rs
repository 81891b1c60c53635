//! Core data models for the trip planner
//!
//! This module contains the data types used throughout the application
//! for representing destinations and the loaded destination catalog.

pub mod catalog;

pub use catalog::{CatalogClient, CatalogError, CatalogSource};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A destination entry from the catalog
///
/// Created once per catalog entry at load time and never mutated afterward.
/// Owned exclusively by the [`Catalog`] it was loaded into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Human-readable name of the destination
    pub name: String,
    /// URL or path to an image resource for the destination
    pub image: String,
    /// Short description shown in the trip plan
    pub description: String,
    /// Ordered recommendation snippets for the destination
    pub recommendations: Vec<String>,
    /// Category label for the destination
    #[serde(rename = "tripType", default)]
    pub trip_type: TripType,
}

/// Trip category labels
///
/// The catalog stores these as free-form strings; anything outside the fixed
/// set deserializes to [`TripType::Other`] and keeps the raw label. A missing
/// field deserializes to `Other` with an empty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TripType {
    Romantic,
    Cultural,
    CityExploration,
    Historical,
    Scenic,
    Adventure,
    Luxury,
    Relaxation,
    /// Unrecognized or missing category label
    Other(String),
}

impl TripType {
    /// Returns a slice containing all known category variants.
    pub fn all_known() -> &'static [TripType] {
        &[
            TripType::Romantic,
            TripType::Cultural,
            TripType::CityExploration,
            TripType::Historical,
            TripType::Scenic,
            TripType::Adventure,
            TripType::Luxury,
            TripType::Relaxation,
        ]
    }

    /// Returns the display label for the category.
    ///
    /// For `Other` this is the raw label as it appeared in the catalog.
    pub fn label(&self) -> &str {
        match self {
            TripType::Romantic => "Romantic",
            TripType::Cultural => "Cultural",
            TripType::CityExploration => "City Exploration",
            TripType::Historical => "Historical",
            TripType::Scenic => "Scenic",
            TripType::Adventure => "Adventure",
            TripType::Luxury => "Luxury",
            TripType::Relaxation => "Relaxation",
            TripType::Other(label) => label,
        }
    }
}

impl Default for TripType {
    fn default() -> Self {
        TripType::Other(String::new())
    }
}

impl From<String> for TripType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Romantic" => TripType::Romantic,
            "Cultural" => TripType::Cultural,
            "City Exploration" => TripType::CityExploration,
            "Historical" => TripType::Historical,
            "Scenic" => TripType::Scenic,
            "Adventure" => TripType::Adventure,
            "Luxury" => TripType::Luxury,
            "Relaxation" => TripType::Relaxation,
            _ => TripType::Other(label),
        }
    }
}

impl From<TripType> for String {
    fn from(trip_type: TripType) -> Self {
        trip_type.label().to_string()
    }
}

/// The loaded destination catalog
///
/// An ordered sequence of destinations, indexed positionally in source order.
/// Populated exactly once at startup and read-only afterward.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
    /// When the catalog was loaded
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Creates a catalog from destinations in source order.
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            loaded_at: Utc::now(),
        }
    }

    /// Creates an empty catalog, used before load completes or after a
    /// failed load.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of destinations in the catalog.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true if the catalog holds no destinations.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Returns the destination at the given catalog index, if valid.
    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.destinations.get(index)
    }

    /// Iterates the destinations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}
