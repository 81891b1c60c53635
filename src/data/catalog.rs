//! Destination catalog loader
//!
//! This module provides functionality to fetch the destination catalog from a
//! static source (a local JSON file or a URL) and parse it into the catalog
//! used by the rest of the application.

use std::path::PathBuf;

use reqwest::Client;
use thiserror::Error;

use super::{Catalog, Destination};

/// Default catalog location, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "destinations.json";

/// Where the destination catalog is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON file on disk
    File(PathBuf),
    /// A static JSON resource served over HTTP
    Url(String),
}

impl CatalogSource {
    /// Interprets a CLI argument as a catalog source.
    ///
    /// Strings with an `http://` or `https://` scheme become URL sources;
    /// everything else is treated as a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            CatalogSource::Url(arg.to_string())
        } else {
            CatalogSource::File(PathBuf::from(arg))
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::File(PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

/// Errors that can occur when loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Reading the catalog file failed
    #[error("Failed to read catalog file: {0}")]
    ReadFailed(#[from] std::io::Error),

    /// Failed to parse the catalog JSON
    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for fetching the destination catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogClient {
    client: Client,
    source: CatalogSource,
}

impl CatalogClient {
    /// Create a new CatalogClient reading from the default catalog path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new CatalogClient for the given source
    pub fn with_source(source: CatalogSource) -> Self {
        Self {
            client: Client::new(),
            source,
        }
    }

    /// Returns the source this client loads from.
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Fetch and parse the destination catalog
    ///
    /// Retrieves the raw JSON from the configured source and parses it into
    /// a [`Catalog`], preserving source order.
    ///
    /// # Returns
    /// * `Ok(Catalog)` - The parsed catalog
    /// * `Err(CatalogError)` - If retrieval or parsing fails
    pub async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        let text = match &self.source {
            CatalogSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                response.text().await?
            }
            CatalogSource::File(path) => tokio::fs::read_to_string(path).await?,
        };

        let destinations: Vec<Destination> = serde_json::from_str(&text)?;
        Ok(Catalog::new(destinations))
    }
}
