//! ShowBrowser - Browse and filter the TVMaze show catalog
//!
//! This library provides the core of a show/episode browser: loading shows
//! and episodes from the catalog service, caching episode lists for the
//! session, filtering both lists by keyword or episode selector, and
//! coordinating all of it for a presentation layer.
//!
//! # Examples
//!
//! ```no_run
//! use show_browser::{CatalogLoader, TerminalAdapter, TvMazeProvider, UiEvent, ViewController};
//!
//! let loader = CatalogLoader::new(TvMazeProvider::new());
//! let mut view = ViewController::new(loader, TerminalAdapter::new());
//!
//! view.start();
//! view.handle(UiEvent::ShowSearchChanged("drama".to_string()));
//! view.handle(UiEvent::ShowSelected(82));
//! ```

mod cache;
mod catalog;
mod filter;
mod presentation;
mod view_controller;

pub use cache::{CacheStorage, EpisodeCache};
pub use catalog::{
    CatalogError, CatalogLoader, CatalogProvider, DEFAULT_BASE_URL, Episode, EpisodeId, Image,
    LoadContext, LoadError, Show, ShowId, TvMazeProvider,
};
pub use filter::{
    ALL_EPISODES_LABEL, CountSummary, FilterCriteria, Filterable, FilteredView, ItemKind,
    SelectorOption, episode_label, filter, filter_episodes, filter_shows, format_code,
    selector_options,
};
pub use presentation::{Pane, PresentationAdapter, TerminalAdapter, episode_card, show_card};
pub use view_controller::{UiEvent, ViewController, ViewState};
