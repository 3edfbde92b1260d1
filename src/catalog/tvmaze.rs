/// TVMaze catalog provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeImage, TvMazeShow};
use super::{CatalogError, CatalogProvider, Episode, Image, Show, ShowId};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Base URL of the public TVMaze API.
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Fallback for shows and episodes without a name.
const UNKNOWN_NAME: &str = "Unknown";

/// Catalog provider for the TVMaze API.
///
/// This provider fetches the show index from `/shows` and the episode list
/// of a single show from `/shows/{id}/episodes`.
pub struct TvMazeProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeProvider {
    /// Creates a new TVMaze provider instance talking to the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a provider talking to a different TVMaze-compatible host.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a single GET request and decodes the JSON body.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "TVMaze request");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        // Ensure request was successful
        check_status(response.status())?;

        response
            .json()
            .map_err(|e| CatalogError::ParseError(e.to_string()))
    }

    fn convert_image(image: Option<TvMazeImage>) -> Option<Image> {
        image.map(|image| Image {
            medium: image.medium,
            original: image.original,
        })
    }

    /// Converts a TVMaze show to our internal Show structure.
    fn convert_show(show: TvMazeShow) -> Show {
        Show {
            id: show.id,
            name: show.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            summary: show.summary,
            genres: show.genres,
            status: show.status.unwrap_or_default(),
            rating: show.rating.and_then(|rating| rating.average),
            runtime: show.runtime,
            image: Self::convert_image(show.image),
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(episode: TvMazeEpisode) -> Episode {
        Episode {
            id: episode.id,
            name: episode.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            season: episode.season,
            number: episode.number.unwrap_or(0),
            summary: episode.summary,
            url: episode.url,
            image: Self::convert_image(episode.image),
        }
    }
}

/// Maps a non-success HTTP status to a catalog error
fn check_status(status: reqwest::StatusCode) -> Result<(), CatalogError> {
    if status.is_success() {
        return Ok(());
    }

    Err(CatalogError::HttpStatus {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

impl Default for TvMazeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for TvMazeProvider {
    fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError> {
        let shows: Vec<TvMazeShow> = self.get_json("/shows")?;
        Ok(shows.into_iter().map(Self::convert_show).collect())
    }

    fn fetch_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>, CatalogError> {
        let episodes: Vec<TvMazeEpisode> =
            self.get_json(&format!("/shows/{}/episodes", show_id))?;
        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}
