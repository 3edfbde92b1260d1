//! Cache-backed catalog loader
//!
//! This module wraps a catalog provider with the session episode cache and
//! turns provider failures into user-displayable load errors.

use super::{CatalogProvider, Episode, LoadContext, LoadError, Show, ShowId};
use crate::cache::EpisodeCache;
use tracing::{debug, info, warn};

/// Loads shows and episodes, caching episode lists per show
///
/// Show lists are returned sorted by name (case-insensitive, ascending).
/// Episode lists keep the provider's native order and are fetched at most
/// once per show on success; failed fetches leave the cache untouched so a
/// later request retries.
pub struct CatalogLoader<P>
where
    P: CatalogProvider,
{
    /// The underlying catalog provider
    provider: P,
    /// Episode lists already fetched this session
    cache: EpisodeCache,
}

impl<P> CatalogLoader<P>
where
    P: CatalogProvider,
{
    /// Creates a new loader with an empty cache wrapping the given provider
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use show_browser::{CatalogLoader, TvMazeProvider};
    ///
    /// let loader = CatalogLoader::new(TvMazeProvider::new());
    /// let shows = loader.load_shows().unwrap();
    /// ```
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: EpisodeCache::new(),
        }
    }

    /// Fetches all shows, sorted by lowercase name
    pub fn load_shows(&self) -> Result<Vec<Show>, LoadError> {
        let mut shows = self.provider.fetch_shows().map_err(|e| {
            warn!(error = %e, "show list request failed");
            LoadError::new(LoadContext::Shows, &e)
        })?;

        sort_shows(&mut shows);
        info!(count = shows.len(), "loaded shows");

        Ok(shows)
    }

    /// Returns the episodes of a show, from cache when available
    pub fn load_episodes(&mut self, show_id: ShowId) -> Result<Vec<Episode>, LoadError> {
        if let Some(episodes) = self.cache.get(show_id) {
            debug!(show_id, "episode cache hit");
            return Ok(episodes.clone());
        }
        debug!(show_id, "episode cache miss");

        let episodes = self.provider.fetch_episodes(show_id).map_err(|e| {
            warn!(show_id, error = %e, "episode list request failed");
            LoadError::new(LoadContext::Episodes, &e)
        })?;

        info!(show_id, count = episodes.len(), "loaded episodes");
        self.cache.put(show_id, episodes.clone());

        Ok(episodes)
    }

    pub fn cache(&self) -> &EpisodeCache {
        &self.cache
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

/// Sorts shows by name, case-insensitive and stable
fn sort_shows(shows: &mut [Show]) {
    shows.sort_by_cached_key(|show| show.name.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::catalog::test_support::{episode, show};
    use std::cell::Cell;

    /// Provider serving fixed data and counting requests
    struct FakeProvider {
        shows: Vec<Show>,
        episodes: Vec<Episode>,
        fail: Cell<bool>,
        show_requests: Cell<usize>,
        episode_requests: Cell<usize>,
    }

    impl FakeProvider {
        fn new(shows: Vec<Show>, episodes: Vec<Episode>) -> Self {
            Self {
                shows,
                episodes,
                fail: Cell::new(false),
                show_requests: Cell::new(0),
                episode_requests: Cell::new(0),
            }
        }

        fn failure(&self) -> Result<(), CatalogError> {
            if self.fail.get() {
                Err(CatalogError::RequestError("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl CatalogProvider for FakeProvider {
        fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError> {
            self.show_requests.set(self.show_requests.get() + 1);
            self.failure()?;
            Ok(self.shows.clone())
        }

        fn fetch_episodes(&self, _show_id: ShowId) -> Result<Vec<Episode>, CatalogError> {
            self.episode_requests.set(self.episode_requests.get() + 1);
            self.failure()?;
            Ok(self.episodes.clone())
        }
    }

    #[test]
    fn test_shows_sorted_case_insensitively() {
        let provider = FakeProvider::new(
            vec![
                show(1, "zoo", &[], None),
                show(2, "Alpha", &[], None),
                show(3, "beta", &[], None),
                show(4, "alpha", &[], None),
            ],
            Vec::new(),
        );
        let loader = CatalogLoader::new(provider);

        let names: Vec<String> = loader
            .load_shows()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        // Equal keys keep their service order
        assert_eq!(names, vec!["Alpha", "alpha", "beta", "zoo"]);
    }

    #[test]
    fn test_show_failure_is_shows_load_error() {
        let provider = FakeProvider::new(Vec::new(), Vec::new());
        provider.fail.set(true);
        let loader = CatalogLoader::new(provider);

        let error = loader.load_shows().unwrap_err();
        assert_eq!(error.context, LoadContext::Shows);
        assert_eq!(error.message, "Request failed: connection refused");
    }

    #[test]
    fn test_episodes_keep_native_order() {
        let episodes = vec![
            episode(3, "Later", 2, 1),
            episode(1, "Pilot", 1, 1),
            episode(2, "Second", 1, 2),
        ];
        let mut loader = CatalogLoader::new(FakeProvider::new(Vec::new(), episodes.clone()));

        assert_eq!(loader.load_episodes(82).unwrap(), episodes);
    }

    #[test]
    fn test_second_load_hits_cache() {
        let episodes = vec![episode(1, "Pilot", 1, 1)];
        let mut loader = CatalogLoader::new(FakeProvider::new(Vec::new(), episodes.clone()));

        assert!(loader.cache().get(82).is_none());
        let first = loader.load_episodes(82).unwrap();
        let second = loader.load_episodes(82).unwrap();

        assert_eq!(first, episodes);
        assert_eq!(second, episodes);
        assert_eq!(loader.cache().get(82), Some(&episodes));
        assert_eq!(loader.provider().episode_requests.get(), 1);

        // A different show is a separate entry
        loader.load_episodes(83).unwrap();
        assert_eq!(loader.provider().episode_requests.get(), 2);
        assert_eq!(loader.cache().len(), 2);
    }

    #[test]
    fn test_failed_fetch_does_not_populate_cache() {
        let mut loader =
            CatalogLoader::new(FakeProvider::new(Vec::new(), vec![episode(1, "Pilot", 1, 1)]));
        loader.provider().fail.set(true);

        let error = loader.load_episodes(82).unwrap_err();
        assert_eq!(error.context, LoadContext::Episodes);
        assert!(loader.cache().get(82).is_none());

        // Retrying after the failure fetches again and caches
        loader.provider().fail.set(false);
        assert_eq!(loader.load_episodes(82).unwrap().len(), 1);
        assert_eq!(loader.provider().episode_requests.get(), 2);
        assert!(loader.cache().contains(82));
    }
}
