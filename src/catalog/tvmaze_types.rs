/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format of the TVMaze `/shows`
/// and `/shows/{id}/episodes` endpoints. Fields not listed here are ignored.
use serde::Deserialize;

/// A show entry from the `/shows` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    /// Show name (may be null for incomplete catalog entries)
    pub name: Option<String>,
    /// HTML summary (may be null)
    pub summary: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub status: Option<String>,
    pub rating: Option<TvMazeRating>,
    /// Runtime in minutes (null for shows with varying runtimes)
    pub runtime: Option<u32>,
    pub image: Option<TvMazeImage>,
}

/// The rating object of a show; `average` is null for unrated shows.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeRating {
    pub average: Option<f64>,
}

/// Image links for a show or an episode.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

/// A single episode from the episodes endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
    /// Episode summary in HTML format (may be null)
    pub summary: Option<String>,
    #[serde(default)]
    pub url: String,
    pub image: Option<TvMazeImage>,
}
