// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkfind::records::{self, LoadError};
use linkfind::{all_categories, all_tags, best_field, search_with, Field, Record, SearchOptions};

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// One line of `search --json` output.
#[derive(Serialize)]
struct JsonResult<'a> {
    score: f64,
    field: Option<Field>,
    record: &'a Record,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            category,
            tag,
            threshold,
            limit,
            json,
        } => {
            let mut options = SearchOptions::new()
                .category(category)
                .tag(tag)
                .threshold(threshold);
            options.limit = limit;
            run_search(&file, &query, &options, json)
        }
        Commands::Categories { file } => {
            load(&file).map(|records| print_lines(&all_categories(&records)))
        }
        Commands::Tags { file } => load(&file).map(|records| print_lines(&all_tags(&records))),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warn, raised to info/debug by `-v`/`-vv`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load(file: &str) -> Result<Vec<Record>, LoadError> {
    let records = records::from_path(file)?;
    info!(file, count = records.len(), "loaded records");
    Ok(records)
}

fn run_search(
    file: &str,
    query: &str,
    options: &SearchOptions,
    json: bool,
) -> Result<(), LoadError> {
    let records = load(file)?;
    let results = search_with(&records, query, options);

    if json {
        for result in &results {
            let line = JsonResult {
                score: result.score,
                field: best_field(query, result.record).map(|(field, _)| field),
                record: result.record,
            };
            println!("{}", serde_json::to_string(&line)?);
        }
        return Ok(());
    }

    for (rank, result) in results.iter().enumerate() {
        let field = best_field(query, result.record).map(|(field, _)| field);
        display::result_row(rank + 1, result, field);
    }
    display::summary(&format!(
        "{} of {} links matched",
        results.len(),
        records.len()
    ));
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
