/// Data structures and traits for loading the show catalog.
///
/// This module provides structures to represent shows and their episodes
/// as delivered by the upstream catalog service, the errors a load can end
/// in, and the trait implemented by catalog providers.
mod cached;
mod tvmaze;
mod tvmaze_types;

pub use cached::CatalogLoader;
pub use tvmaze::{DEFAULT_BASE_URL, TvMazeProvider};

use crate::filter::{episode_label, format_code};
use std::fmt;
use thiserror::Error;

/// Stable identifier of a show in the upstream catalog.
pub type ShowId = u64;

/// Identifier of an episode, unique within its show.
pub type EpisodeId = u64;

/// Fallback text for absent numeric show details.
const NOT_AVAILABLE: &str = "N/A";

/// Errors that can occur while talking to a catalog provider.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request to the catalog service failed at the transport level
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The catalog service answered with a non-success status
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Failed to parse the service's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// Which collection a failed load was fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadContext {
    Shows,
    Episodes,
}

impl fmt::Display for LoadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadContext::Shows => f.write_str("shows"),
            LoadContext::Episodes => f.write_str("episodes"),
        }
    }
}

/// A user-displayable load failure.
///
/// Every failure of a single load is terminal for that load. The message is
/// what gets shown in the pane that was loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load {context}: {message}")]
pub struct LoadError {
    /// The collection that failed to load
    pub context: LoadContext,
    /// Human-readable cause
    pub message: String,
}

impl LoadError {
    pub fn new(context: LoadContext, source: &CatalogError) -> Self {
        Self {
            context,
            message: source.to_string(),
        }
    }
}

/// Image references for a show or episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    /// Medium sized image URL
    pub medium: Option<String>,
    /// Full size image URL
    pub original: Option<String>,
}

/// A show from the catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: ShowId,
    pub name: String,
    /// HTML summary, may be absent
    pub summary: Option<String>,
    pub genres: Vec<String>,
    /// Status label such as "Running" or "Ended"
    pub status: String,
    /// Average rating
    pub rating: Option<f64>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    pub image: Option<Image>,
}

impl Show {
    /// The summary, or the empty string when absent.
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }

    pub fn rating_label(&self) -> String {
        self.rating
            .map(|rating| rating.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn runtime_label(&self) -> String {
        self.runtime
            .map(|minutes| format!("{} min", minutes))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn genres_label(&self) -> String {
        self.genres.join(", ")
    }

    /// The medium image URL, or the empty string when there is none.
    pub fn image_url(&self) -> &str {
        image_url(self.image.as_ref())
    }
}

/// A single episode of a show. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: EpisodeId,
    /// The episode title
    pub name: String,
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season (0 for unnumbered specials)
    pub number: u32,
    /// HTML summary, may be absent
    pub summary: Option<String>,
    /// Canonical page of the episode
    pub url: String,
    pub image: Option<Image>,
}

impl Episode {
    /// The season/episode code, e.g. `S01E02`.
    pub fn code(&self) -> String {
        format_code(self.season, self.number)
    }

    /// The display label, e.g. `Pilot - S01E01`.
    pub fn label(&self) -> String {
        episode_label(&self.name, self.season, self.number)
    }

    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }

    pub fn image_url(&self) -> &str {
        image_url(self.image.as_ref())
    }
}

fn image_url(image: Option<&Image>) -> &str {
    image
        .and_then(|image| image.medium.as_deref())
        .unwrap_or_default()
}

/// Trait for catalog providers that can fetch shows and episodes.
///
/// Implementors issue exactly one request per call. Retrying, caching and
/// ordering are the caller's business.
pub trait CatalogProvider {
    /// Fetches the full list of shows in the service's native order.
    fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError>;

    /// Fetches all episodes of one show, in the service's native order.
    ///
    /// # Arguments
    ///
    /// * `show_id` - Identifier of the show whose episodes are requested
    fn fetch_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>, CatalogError>;
}
