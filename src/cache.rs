//! Cache storage module
//!
//! This module provides the session-lifetime result cache. Entries are keyed
//! by show identifier, populated lazily and never invalidated or evicted, as
//! the upstream catalog is treated as immutable for the length of a session.

use crate::catalog::{Episode, ShowId};
use std::collections::HashMap;

/// An in-memory key-value store keyed by show identifier
///
/// There is no TTL, no eviction and no size bound. A key holds at most one
/// entry; storing under an existing key replaces the previous value.
#[derive(Debug)]
pub struct CacheStorage<T> {
    entries: HashMap<ShowId, T>,
}

/// The cache of episode lists, one entry per show.
pub type EpisodeCache = CacheStorage<Vec<Episode>>;

impl<T> CacheStorage<T> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value for the given show, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use show_browser::EpisodeCache;
    ///
    /// let cache = EpisodeCache::new();
    /// assert!(cache.get(82).is_none());
    /// ```
    pub fn get(&self, show_id: ShowId) -> Option<&T> {
        self.entries.get(&show_id)
    }

    /// Stores a value for the given show, replacing any previous entry
    pub fn put(&mut self, show_id: ShowId, value: T) {
        self.entries.insert(show_id, value);
    }

    pub fn contains(&self, show_id: ShowId) -> bool {
        self.entries.contains_key(&show_id)
    }

    /// Number of shows with a cached entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for CacheStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
