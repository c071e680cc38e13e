//! hn-search entry point.
//!
//! Searches Hacker News and prints the accumulated, sorted results.
//! Logging goes to stderr so stdout only carries results.

use anyhow::{Context, Result};
use clap::Parser;
use hnsearch_client::{HnClient, HnConfig, SearchSession, SearchTransport};
use hnsearch_core::{AppConfig, SortKey, SortState};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

mod render;
mod repl;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Query to search for (defaults to the configured default query)
    query: Option<String>,

    /// Sort key: NONE, TITLE, AUTHOR, URL or POINTS
    #[arg(short, long, default_value = "NONE", value_parser = parse_sort_key)]
    sort: SortKey,

    /// Reverse the sorted order once more
    #[arg(short, long)]
    reverse: bool,

    /// Number of pages to accumulate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Print hits as JSON instead of a table
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Start an interactive session after the first search
    #[arg(short, long)]
    interactive: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn parse_sort_key(s: &str) -> Result<SortKey, hnsearch_core::Error> {
    s.parse()
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let Args { query, sort, reverse, pages, json, interactive, log_json } = Args::parse();
    init_tracing(log_json);

    let config = AppConfig::load().context("loading configuration")?;
    let client = HnClient::new(HnConfig::from(&config)).context("building search client")?;

    let query = query.unwrap_or_else(|| config.default_query.clone());
    tracing::info!(query = %query, base_url = %config.base_url, "starting hn-search");

    let mut session = SearchSession::new(client, query);
    session.set_sort(SortState::new(sort, reverse));

    eprintln!("Loading...");
    session.start().await?;
    load_pages(&mut session, pages).await?;

    let mut stdout = tokio::io::stdout();

    if interactive {
        stdout.write_all(repl::screen(&session).as_bytes()).await?;
        let stdin = BufReader::new(tokio::io::stdin());
        repl::run(&mut session, stdin, &mut stdout).await?;
    } else if json {
        let rendered = render::render_json(&session.view())?;
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    } else {
        stdout.write_all(repl::screen(&session).as_bytes()).await?;
    }

    stdout.flush().await?;
    Ok(())
}

/// Load more pages until `pages` are on record or a page comes back empty.
async fn load_pages<T: SearchTransport>(session: &mut SearchSession<T>, pages: u32) -> Result<()> {
    for _ in 1..pages {
        let before = session.current().map(|entry| entry.len()).unwrap_or(0);
        eprintln!("Loading...");
        let entry = session.load_more().await?;
        if entry.len() == before {
            tracing::debug!(page = entry.last_page(), "empty page, stopping");
            break;
        }
    }
    Ok(())
}
