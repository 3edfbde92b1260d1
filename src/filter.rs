//! Filter engine
//!
//! Pure, non-mutating filtering of show and episode collections. Every call
//! works on the full collection it is given and preserves its order, so
//! recomputing a view never depends on a previous result.

use crate::catalog::{Episode, Show};
use std::fmt;

/// Active filter criteria
///
/// Both criteria narrow conjunctively. An absent or empty keyword and an
/// absent selector each skip their test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring to search for
    pub keyword: Option<String>,
    /// Exact episode identifier, compared in its string form
    pub episode_id: Option<String>,
}

impl FilterCriteria {
    /// Criteria matching everything
    pub fn none() -> Self {
        Self::default()
    }

    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            episode_id: None,
        }
    }

    pub fn with_episode_id(mut self, episode_id: impl Into<String>) -> Self {
        self.episode_id = Some(episode_id.into());
        self
    }

    /// The keyword lowercased, or `None` when it is absent or empty
    fn needle(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_lowercase)
    }

    pub fn is_empty(&self) -> bool {
        self.needle().is_none() && self.episode_id.is_none()
    }
}

/// Items the filter engine knows how to match
pub trait Filterable {
    /// Whether the item matches a keyword that is already lowercase
    fn matches_keyword(&self, needle: &str) -> bool;

    /// Whether the item matches an exact id selector
    ///
    /// Items without a selectable id accept every selector.
    fn matches_selector(&self, _selector: &str) -> bool {
        true
    }
}

impl Filterable for Show {
    fn matches_keyword(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .genres
                .iter()
                .any(|genre| genre.to_lowercase().contains(needle))
            || self.summary_text().to_lowercase().contains(needle)
    }
}

impl Filterable for Episode {
    fn matches_keyword(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.summary_text().to_lowercase().contains(needle)
            || self.code().to_lowercase().contains(needle)
    }

    fn matches_selector(&self, selector: &str) -> bool {
        self.id.to_string() == selector
    }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn matches_keyword(&self, needle: &str) -> bool {
        (**self).matches_keyword(needle)
    }

    fn matches_selector(&self, selector: &str) -> bool {
        (**self).matches_selector(selector)
    }
}

/// What a count summary is counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Shows,
    Episodes,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Shows => f.write_str("shows"),
            ItemKind::Episodes => f.write_str("episodes"),
        }
    }
}

/// Filtered count against the full loaded collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSummary {
    pub shown: usize,
    pub total: usize,
    pub kind: ItemKind,
}

impl fmt::Display for CountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Displaying {} of {} {}", self.shown, self.total, self.kind)
    }
}

/// The result of a filter operation
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a, T> {
    /// Matching items, in collection order
    pub items: Vec<&'a T>,
    pub summary: CountSummary,
}

/// Filters a collection by the given criteria
///
/// # Arguments
///
/// * `collection` - The full collection currently loaded
/// * `criteria` - Active criteria; empty criteria keep every item
/// * `kind` - What the count summary should call the items
pub fn filter<'a, T: Filterable>(
    collection: &'a [T],
    criteria: &FilterCriteria,
    kind: ItemKind,
) -> FilteredView<'a, T> {
    let needle = criteria.needle();
    let selector = criteria.episode_id.as_deref();

    let items: Vec<&T> = collection
        .iter()
        .filter(|item| selector.is_none_or(|selector| item.matches_selector(selector)))
        .filter(|item| {
            needle
                .as_deref()
                .is_none_or(|needle| item.matches_keyword(needle))
        })
        .collect();

    FilteredView {
        summary: CountSummary {
            shown: items.len(),
            total: collection.len(),
            kind,
        },
        items,
    }
}

/// Filters shows by keyword; the id selector does not apply to shows
pub fn filter_shows<'a>(shows: &'a [Show], keyword: &str) -> FilteredView<'a, Show> {
    filter(shows, &FilterCriteria::keyword(keyword), ItemKind::Shows)
}

pub fn filter_episodes<'a>(
    episodes: &'a [Episode],
    criteria: &FilterCriteria,
) -> FilteredView<'a, Episode> {
    filter(episodes, criteria, ItemKind::Episodes)
}

/// Formats a season/episode code such as `S01E02`
///
/// Both numbers are padded to a minimum width of two digits; wider numbers
/// are kept whole.
pub fn format_code(season: u32, number: u32) -> String {
    format!("S{:02}E{:02}", season, number)
}

/// Formats an episode display label such as `Pilot - S01E01`
pub fn episode_label(name: &str, season: u32, number: u32) -> String {
    format!("{} - {}", name, format_code(season, number))
}

/// Label of the selector entry that clears the episode selector
pub const ALL_EPISODES_LABEL: &str = "All Episodes";

/// One entry of the episode selector dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    /// Selector value, `None` for the "All Episodes" entry
    pub value: Option<String>,
    pub label: String,
}

/// Builds the selector entries for an episode list
///
/// The first entry clears the selector; the others follow the episode order.
pub fn selector_options(episodes: &[Episode]) -> Vec<SelectorOption> {
    std::iter::once(SelectorOption {
        value: None,
        label: ALL_EPISODES_LABEL.to_string(),
    })
    .chain(episodes.iter().map(|episode| SelectorOption {
        value: Some(episode.id.to_string()),
        label: episode.label(),
    }))
    .collect()
}
