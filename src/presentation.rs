//! Presentation adapter interface
//!
//! The core hands finished views to a [`PresentationAdapter`] and never
//! knows how items end up on screen. This module also ships the plain-text
//! adapter used by the terminal front end.

use crate::catalog::{Episode, Show};
use crate::filter::{CountSummary, SelectorOption};

/// The two panes of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Shows,
    Episodes,
}

/// Rendering callbacks invoked by the view controller
///
/// Implementors own all markup and styling. Each call replaces whatever the
/// addressed pane showed before.
pub trait PresentationAdapter {
    /// Shows a loading indicator in the given pane
    fn show_loading(&mut self, pane: Pane);

    /// Renders a (possibly filtered) show list with its count summary
    fn render_shows(&mut self, shows: &[&Show], summary: &CountSummary);

    /// Renders a (possibly filtered) episode list with its count summary
    fn render_episodes(&mut self, episodes: &[&Episode], summary: &CountSummary);

    /// Fills the episode selector with the entries of the loaded episode list
    fn populate_selector(&mut self, options: &[SelectorOption]);

    /// Replaces the content of a pane with an error message
    fn show_error(&mut self, pane: Pane, message: &str);

    /// Makes the given pane the visible one
    fn switch_pane(&mut self, pane: Pane);
}

/// Converts an HTML summary to trimmed plain text
fn plain_text(html: &str) -> String {
    nanohtml2text::html2text(html).trim().to_string()
}

/// Renders a show as a plain-text card
pub fn show_card(show: &Show) -> String {
    let mut card = format!("[{}] {}\n", show.id, show.name);

    let summary = plain_text(show.summary_text());
    if !summary.is_empty() {
        card.push_str(&format!("    {}\n", summary));
    }
    card.push_str(&format!("    Genres: {}\n", show.genres_label()));
    card.push_str(&format!("    Status: {}\n", show.status));
    card.push_str(&format!("    Rating: {}\n", show.rating_label()));
    card.push_str(&format!("    Runtime: {}\n", show.runtime_label()));
    if !show.image_url().is_empty() {
        card.push_str(&format!("    Image: {}\n", show.image_url()));
    }

    card
}

/// Renders an episode as a plain-text card
pub fn episode_card(episode: &Episode) -> String {
    let mut card = format!("[{}] {}\n", episode.id, episode.label());

    let summary = plain_text(episode.summary_text());
    if !summary.is_empty() {
        card.push_str(&format!("    {}\n", summary));
    }
    if !episode.url.is_empty() {
        card.push_str(&format!("    {}\n", episode.url));
    }

    card
}

/// Adapter printing every view to standard output
#[derive(Debug, Default)]
pub struct TerminalAdapter {
    /// Pane currently on screen
    visible: Option<Pane>,
}

impl TerminalAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_pane(&self) -> Option<Pane> {
        self.visible
    }
}

impl PresentationAdapter for TerminalAdapter {
    fn show_loading(&mut self, pane: Pane) {
        match pane {
            Pane::Shows => println!("Loading shows..."),
            Pane::Episodes => println!("Loading episodes..."),
        }
    }

    fn render_shows(&mut self, shows: &[&Show], summary: &CountSummary) {
        println!("\n=== Shows ===\n");
        for show in shows {
            println!("{}", show_card(show));
        }
        println!("{}", summary);
    }

    fn render_episodes(&mut self, episodes: &[&Episode], summary: &CountSummary) {
        println!("\n=== Episodes ===\n");
        for episode in episodes {
            println!("{}", episode_card(episode));
        }
        println!("{}", summary);
    }

    fn populate_selector(&mut self, options: &[SelectorOption]) {
        println!("{} selectable episode(s)", options.len().saturating_sub(1));
    }

    fn show_error(&mut self, pane: Pane, message: &str) {
        let label = match pane {
            Pane::Shows => "shows",
            Pane::Episodes => "episodes",
        };
        eprintln!("Error ({}): {}", label, message);
    }

    fn switch_pane(&mut self, pane: Pane) {
        self.visible = Some(pane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Image;
    use crate::catalog::test_support::{episode, show};

    #[test]
    fn test_show_card() {
        let show = Show {
            rating: Some(8.9),
            runtime: Some(30),
            image: Some(Image {
                medium: Some("https://img/5.jpg".to_string()),
                original: None,
            }),
            ..show(5, "Friends", &["Comedy", "Romance"], Some("<p>Six <b>friends</b>.</p>"))
        };
        let card = show_card(&show);

        assert!(card.starts_with("[5] Friends\n"));
        assert!(card.contains("friends"));
        assert!(!card.contains("<p>"));
        assert!(!card.contains("<b>"));
        assert!(card.contains("Genres: Comedy, Romance"));
        assert!(card.contains("Rating: 8.9"));
        assert!(card.contains("Runtime: 30 min"));
        assert!(card.contains("Image: https://img/5.jpg"));
        assert!(card.ends_with("Image: https://img/5.jpg\n"));
    }

    #[test]
    fn test_show_card_fallbacks() {
        let card = show_card(&show(6, "Bare", &[], None));
        assert!(card.contains("Rating: N/A"));
        assert!(card.contains("Runtime: N/A"));
        assert!(!card.contains("Image:"));
        assert_eq!(
            card,
            "[6] Bare\n    Genres: \n    Status: Ended\n    Rating: N/A\n    Runtime: N/A\n"
        );
    }

    #[test]
    fn test_episode_card() {
        let mut pilot = episode(1, "Pilot", 1, 1);
        pilot.summary = Some("<p>It begins.</p>".to_string());
        let card = episode_card(&pilot);

        assert!(card.starts_with("[1] Pilot - S01E01\n"));
        assert!(card.contains("It begins"));
        assert!(!card.contains("<p>"));
        assert!(card.contains("https://www.tvmaze.com/episodes/1"));
    }

    #[test]
    fn test_terminal_adapter_tracks_pane() {
        let mut adapter = TerminalAdapter::new();
        assert_eq!(adapter.visible_pane(), None);
        adapter.switch_pane(Pane::Episodes);
        assert_eq!(adapter.visible_pane(), Some(Pane::Episodes));
    }
}
