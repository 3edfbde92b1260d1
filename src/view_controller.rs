//! View controller
//!
//! Owns the session state (show list, episode cache, current episodes and
//! active criteria) and sequences loader, filter engine and presentation
//! adapter in response to the initial load and to inbound UI events.

use crate::catalog::{CatalogLoader, CatalogProvider, Episode, LoadError, Show, ShowId};
use crate::filter::{FilterCriteria, filter_episodes, filter_shows, selector_options};
use crate::presentation::{Pane, PresentationAdapter};
use tracing::{debug, warn};

/// Where the browser currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing loaded yet
    Idle,
    LoadingShows,
    /// Show list loaded and on screen
    ShowsReady,
    /// The show list failed to load; only a fresh session recovers
    LoadError(LoadError),
    LoadingEpisodes(ShowId),
    EpisodesReady(ShowId),
    EpisodesError { show_id: ShowId, error: LoadError },
}

impl ViewState {
    fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "Idle",
            ViewState::LoadingShows => "LoadingShows",
            ViewState::ShowsReady => "ShowsReady",
            ViewState::LoadError(_) => "LoadError",
            ViewState::LoadingEpisodes(_) => "LoadingEpisodes",
            ViewState::EpisodesReady(_) => "EpisodesReady",
            ViewState::EpisodesError { .. } => "EpisodesError",
        }
    }
}

/// Events sent by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A show was picked from the show list
    ShowSelected(ShowId),
    /// The show search text changed
    ShowSearchChanged(String),
    /// The episode keyword or selector changed
    ///
    /// The criteria are applied as given. Clearing the selector when a new
    /// keyword is typed is up to the sender.
    EpisodeFilterChanged(FilterCriteria),
    /// Return from the episode pane to the show list
    BackToShows,
}

impl UiEvent {
    fn name(&self) -> &'static str {
        match self {
            UiEvent::ShowSelected(_) => "ShowSelected",
            UiEvent::ShowSearchChanged(_) => "ShowSearchChanged",
            UiEvent::EpisodeFilterChanged(_) => "EpisodeFilterChanged",
            UiEvent::BackToShows => "BackToShows",
        }
    }
}

/// Coordinates one browsing session
///
/// Constructed at session start and dropped at session end; all state lives
/// in its fields. The show list is fetched once per session.
pub struct ViewController<P, A>
where
    P: CatalogProvider,
    A: PresentationAdapter,
{
    loader: CatalogLoader<P>,
    adapter: A,
    state: ViewState,
    shows: Vec<Show>,
    show_keyword: String,
    current_episodes: Vec<Episode>,
    episode_criteria: FilterCriteria,
}

impl<P, A> ViewController<P, A>
where
    P: CatalogProvider,
    A: PresentationAdapter,
{
    pub fn new(loader: CatalogLoader<P>, adapter: A) -> Self {
        Self {
            loader,
            adapter,
            state: ViewState::Idle,
            shows: Vec::new(),
            show_keyword: String::new(),
            current_episodes: Vec::new(),
            episode_criteria: FilterCriteria::none(),
        }
    }

    /// Loads the show list; does nothing once a load has been attempted
    pub fn start(&mut self) {
        if self.state != ViewState::Idle {
            debug!(state = self.state.name(), "show list already requested");
            return;
        }

        self.state = ViewState::LoadingShows;
        self.adapter.switch_pane(Pane::Shows);
        self.adapter.show_loading(Pane::Shows);

        match self.loader.load_shows() {
            Ok(shows) => {
                self.shows = shows;
                self.state = ViewState::ShowsReady;
                self.render_shows();
            }
            Err(error) => {
                self.adapter.show_error(Pane::Shows, &error.to_string());
                self.state = ViewState::LoadError(error);
            }
        }
    }

    /// Applies an inbound UI event
    ///
    /// Events that make no sense in the current state are logged and dropped.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::ShowSelected(show_id) if self.state == ViewState::ShowsReady => {
                self.load_episodes(show_id);
            }
            UiEvent::ShowSearchChanged(keyword) if self.state == ViewState::ShowsReady => {
                self.show_keyword = keyword;
                self.render_shows();
            }
            UiEvent::EpisodeFilterChanged(criteria)
                if matches!(self.state, ViewState::EpisodesReady(_)) =>
            {
                self.episode_criteria = criteria;
                self.render_episodes();
            }
            UiEvent::BackToShows
                if matches!(
                    self.state,
                    ViewState::EpisodesReady(_) | ViewState::EpisodesError { .. }
                ) =>
            {
                self.state = ViewState::ShowsReady;
                self.adapter.switch_pane(Pane::Shows);
                self.render_shows();
            }
            event => {
                warn!(
                    state = self.state.name(),
                    event = event.name(),
                    "ignoring event not valid in current state"
                );
            }
        }
    }

    fn load_episodes(&mut self, show_id: ShowId) {
        self.state = ViewState::LoadingEpisodes(show_id);
        self.current_episodes.clear();
        self.episode_criteria = FilterCriteria::none();
        self.adapter.switch_pane(Pane::Episodes);
        self.adapter.show_loading(Pane::Episodes);

        match self.loader.load_episodes(show_id) {
            Ok(episodes) => {
                self.current_episodes = episodes;
                self.state = ViewState::EpisodesReady(show_id);
                self.adapter
                    .populate_selector(&selector_options(&self.current_episodes));
                self.render_episodes();
            }
            Err(error) => {
                self.adapter.show_error(Pane::Episodes, &error.to_string());
                self.state = ViewState::EpisodesError { show_id, error };
            }
        }
    }

    fn render_shows(&mut self) {
        let view = filter_shows(&self.shows, &self.show_keyword);
        self.adapter.render_shows(&view.items, &view.summary);
    }

    fn render_episodes(&mut self) {
        let view = filter_episodes(&self.current_episodes, &self.episode_criteria);
        self.adapter.render_episodes(&view.items, &view.summary);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The full show list, sorted by name
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// The full episode list of the open show
    pub fn current_episodes(&self) -> &[Episode] {
        &self.current_episodes
    }

    pub fn show_keyword(&self) -> &str {
        &self.show_keyword
    }

    pub fn episode_criteria(&self) -> &FilterCriteria {
        &self.episode_criteria
    }

    pub fn loader(&self) -> &CatalogLoader<P> {
        &self.loader
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }
}
