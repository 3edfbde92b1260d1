use clap::Parser;
use dialoguer::Input;
use show_browser::{
    CatalogLoader, DEFAULT_BASE_URL, FilterCriteria, TerminalAdapter, TvMazeProvider, UiEvent,
    ViewController, ViewState,
};
use std::process;
use tracing_subscriber::EnvFilter;

/// Browse TV shows and their episodes from the TVMaze catalog
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the TVMaze-compatible catalog service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// A line typed at the prompt
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Search the visible list
    Search(String),
    /// Open the episodes of a show
    Open(u64),
    /// Select a single episode, `None` for all episodes
    Pick(Option<String>),
    Back,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "open" | "o" => rest
                .parse()
                .map(Command::Open)
                .map_err(|_| format!("Not a show id: '{}'", rest)),
            "pick" | "p" => match rest {
                "" | "all" => Ok(Command::Pick(None)),
                id => Ok(Command::Pick(Some(id.to_string()))),
            },
            "back" | "b" => Ok(Command::Back),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command: '{}' (try 'help')", other)),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <text>   filter the visible list (empty text clears it)");
    println!("  open <show id>  list the episodes of a show");
    println!("  pick <ep id>    show a single episode ('pick all' shows every episode)");
    println!("  back            return to the show list");
    println!("  quit            leave");
}

/// Translates a command into the event for the current view
///
/// A new episode keyword clears the episode selector; picking an episode
/// keeps the active keyword.
fn to_event<P, A>(view: &ViewController<P, A>, command: Command) -> Option<UiEvent>
where
    P: show_browser::CatalogProvider,
    A: show_browser::PresentationAdapter,
{
    let in_episodes = matches!(
        view.state(),
        ViewState::EpisodesReady(_) | ViewState::EpisodesError { .. }
    );

    match command {
        Command::Search(text) if in_episodes => {
            Some(UiEvent::EpisodeFilterChanged(FilterCriteria::keyword(text)))
        }
        Command::Search(text) => Some(UiEvent::ShowSearchChanged(text)),
        Command::Open(show_id) => Some(UiEvent::ShowSelected(show_id)),
        Command::Pick(episode_id) => Some(UiEvent::EpisodeFilterChanged(FilterCriteria {
            keyword: view.episode_criteria().keyword.clone(),
            episode_id,
        })),
        Command::Back => Some(UiEvent::BackToShows),
        Command::Help | Command::Quit => None,
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let loader = CatalogLoader::new(TvMazeProvider::with_base_url(&cli.base_url));
    let mut view = ViewController::new(loader, TerminalAdapter::new());

    view.start();
    if let ViewState::LoadError(_) = view.state() {
        process::exit(1);
    }
    print_help();

    loop {
        let line = match Input::<String>::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(e) => {
                eprintln!("\nError reading input: {}", e);
                process::exit(1);
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(command) => {
                if let Some(event) = to_event(&view, command) {
                    view.handle(event);
                }
            }
            Err(message) => eprintln!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use show_browser::{
        CatalogError, CatalogProvider, CountSummary, Episode, Pane, PresentationAdapter,
        SelectorOption, Show, ShowId,
    };

    struct OneShowCatalog;

    impl CatalogProvider for OneShowCatalog {
        fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError> {
            Ok(vec![Show {
                id: 1,
                name: "Pilots".to_string(),
                summary: None,
                genres: Vec::new(),
                status: "Ended".to_string(),
                rating: None,
                runtime: None,
                image: None,
            }])
        }

        fn fetch_episodes(&self, _show_id: ShowId) -> Result<Vec<Episode>, CatalogError> {
            Ok((1..=6)
                .map(|n| Episode {
                    id: n,
                    name: format!("Pilot {}", n),
                    season: 1,
                    number: n as u32,
                    summary: None,
                    url: String::new(),
                    image: None,
                })
                .collect())
        }
    }

    struct Silent;

    impl PresentationAdapter for Silent {
        fn show_loading(&mut self, _pane: Pane) {}
        fn render_shows(&mut self, _shows: &[&Show], _summary: &CountSummary) {}
        fn render_episodes(&mut self, _episodes: &[&Episode], _summary: &CountSummary) {}
        fn populate_selector(&mut self, _options: &[SelectorOption]) {}
        fn show_error(&mut self, _pane: Pane, _message: &str) {}
        fn switch_pane(&mut self, _pane: Pane) {}
    }

    fn run(view: &mut ViewController<OneShowCatalog, Silent>, line: &str) {
        let command = Command::parse(line).unwrap();
        if let Some(event) = to_event(view, command) {
            view.handle(event);
        }
    }

    #[test]
    fn test_keyword_clears_selector_and_pick_keeps_keyword() {
        let mut view = ViewController::new(CatalogLoader::new(OneShowCatalog), Silent);
        view.start();
        run(&mut view, "open 1");

        run(&mut view, "pick 5");
        assert_eq!(view.episode_criteria(), &FilterCriteria::none().with_episode_id("5"));

        run(&mut view, "search pil");
        assert_eq!(view.episode_criteria(), &FilterCriteria::keyword("pil"));

        run(&mut view, "pick 5");
        assert_eq!(
            view.episode_criteria(),
            &FilterCriteria::keyword("pil").with_episode_id("5")
        );

        run(&mut view, "pick all");
        assert_eq!(view.episode_criteria(), &FilterCriteria::keyword("pil"));
    }

    #[test]
    fn test_search_targets_visible_pane() {
        let mut view = ViewController::new(CatalogLoader::new(OneShowCatalog), Silent);
        view.start();

        run(&mut view, "search pil");
        assert_eq!(view.show_keyword(), "pil");
        assert!(view.episode_criteria().is_empty());

        run(&mut view, "open 1");
        run(&mut view, "search 3");
        assert_eq!(view.show_keyword(), "pil");
        assert_eq!(view.episode_criteria(), &FilterCriteria::keyword("3"));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("search  breaking bad "),
            Ok(Command::Search("breaking bad".to_string()))
        );
        assert_eq!(Command::parse("s"), Ok(Command::Search(String::new())));
        assert_eq!(Command::parse("open 82"), Ok(Command::Open(82)));
        assert_eq!(Command::parse("pick 4952"), Ok(Command::Pick(Some("4952".to_string()))));
        assert_eq!(Command::parse("pick all"), Ok(Command::Pick(None)));
        assert_eq!(Command::parse("back"), Ok(Command::Back));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("open abc").is_err());
        assert!(Command::parse("dance").is_err());
    }
}
