//! Command-line interface for the sift search gateway.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use comfy_table::Table;
use tracing_subscriber::EnvFilter;

use sift_config::{CONFIG_FILENAME, Config};
use sift_search::{Page, ReindexReport, Reindexer, SearchParams, Searcher};
use sift_solr::SolrClient;
use sift_store::StoreClient;

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Search gateway - query translation and index maintenance")]
/// Top-level CLI options.
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    config: PathBuf,

    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `sift` subcommands.
enum Commands {
    /// Search one object kind in the configured database
    Search {
        /// Object kind: role, node, client, environment, or a data-bag name
        kind: String,

        /// Query string
        #[arg(default_value = "*:*")]
        query: String,

        /// Page offset
        #[arg(long, default_value = "0")]
        start: usize,

        /// Page size (defaults to the configured rows)
        #[arg(long)]
        rows: Option<usize>,

        /// Sort specification
        #[arg(long)]
        sort: Option<String>,

        /// Print the raw JSON page instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rebuild the index for the configured database from the document store
    Reindex,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Search {
            kind,
            query,
            start,
            rows,
            sort,
            json,
        } => cmd_search(&config, kind, query, start, rows, sort, json),
        Commands::Reindex => cmd_reindex(&config),
    }
}

/// Builds the two transport clients from configuration.
fn transports(config: &Config) -> Result<(SolrClient, StoreClient), ExitCode> {
    let index = match SolrClient::new(&config.index.url, config.index.timeout()) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("error: {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    let store = match StoreClient::new(&config.store.url, config.store.timeout()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    Ok((index, store))
}

/// Implements `sift search`.
fn cmd_search(
    config: &Config,
    kind: String,
    query: String,
    start: usize,
    rows: Option<usize>,
    sort: Option<String>,
    json: bool,
) -> ExitCode {
    let (index, store) = match transports(config) {
        Ok(clients) => clients,
        Err(code) => return code,
    };

    let mut params = SearchParams::for_kind(kind);
    params.q = query;
    params.start = start;
    params.rows = rows.unwrap_or(config.search.rows);
    if let Some(sort) = sort {
        params.sort = sort;
    }

    let searcher = Searcher::new(&index, &store, &config.database);
    let page = match searcher.search(&params) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&page) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("error: could not render results: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_page(&page);
    }

    ExitCode::SUCCESS
}

/// Renders one result page as a table plus a paging summary.
fn print_page(page: &Page) {
    if page.objects.is_empty() {
        println!("No results.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["id", "object"]);
        for object in &page.objects {
            let body = serde_json::to_string(&object.body).unwrap_or_default();
            table.add_row(vec![object.id.clone(), truncate(&body, 72)]);
        }
        println!("{table}");
    }

    println!(
        "rows: {}  start: {}  total: {}",
        page.objects.len(),
        page.start,
        page.total
    );
}

/// Truncates a string to `max` characters, marking elision.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max).collect();
    truncated.push('…');
    truncated
}

/// Implements `sift reindex`.
fn cmd_reindex(config: &Config) -> ExitCode {
    let (index, store) = match transports(config) {
        Ok(clients) => clients,
        Err(code) => return code,
    };

    let reindexer = Reindexer::new(&index, &store, &config.database);
    let report = match reindexer.rebuild() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: reindex failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    print_report(&report);
    ExitCode::SUCCESS
}

/// Renders the per-kind reindex report verbatim.
fn print_report(report: &ReindexReport) {
    let mut table = Table::new();
    table.set_header(vec!["kind", "outcome"]);
    for (kind, outcome) in report.iter() {
        table.add_row(vec![kind.to_string(), outcome.to_string()]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("abc", 5), "abc");
    }

    #[test]
    fn truncate_marks_elision() {
        assert_eq!(truncate("abcdef", 3), "abc…");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("ééé", 2), "éé…");
    }
}
