use anyhow::Context;
use clap::Parser;
use cityweather_core::{Config, HttpBackend, SearchSession};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather search")]
pub struct Cli {
    /// Search text: a place name, optionally followed by a comma and a
    /// region qualifier, e.g. "Paris, FR". Omit to get an interactive
    /// search prompt.
    pub query: Option<String>,

    /// Override the backend endpoint from the config file.
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        tracing::debug!(endpoint = %config.endpoint, "using weather backend");

        let backend = HttpBackend::new(&config);
        let mut session = SearchSession::new(Box::new(backend));

        match self.query {
            Some(text) => search_once(&mut session, &config, &text).await,
            None => interactive(&mut session, &config).await,
        }
    }
}

/// One search cycle with a redraw at each state change: after dispatch
/// (loading indicator up) and after completion (report or error).
async fn run_search(session: &mut SearchSession, config: &Config, text: &str) {
    let pending = session.dispatch(text);
    println!("{}\n", view::render(session, config));

    session.resolve(pending).await;
    println!("{}\n", view::render(session, config));
}

async fn search_once(
    session: &mut SearchSession,
    config: &Config,
    text: &str,
) -> anyhow::Result<()> {
    if !session.can_search(text) {
        anyhow::bail!("Nothing to search for: the query is empty");
    }

    run_search(session, config, text).await;
    Ok(())
}

async fn interactive(session: &mut SearchSession, config: &Config) -> anyhow::Result<()> {
    loop {
        let input = inquire::Text::new("Search:")
            .with_placeholder(view::SEARCH_PLACEHOLDER)
            .with_help_message("place[, region]; empty input exits")
            .prompt_skippable()
            .context("Failed to read search input")?;

        let Some(text) = input else { break };

        // Empty input leaves the trigger disabled; here that means exit.
        if !session.can_search(&text) {
            break;
        }

        run_search(session, config, &text).await;
    }

    Ok(())
}
