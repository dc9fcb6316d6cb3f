// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the linkfind command-line interface.
//!
//! Three subcommands over a JSON file of links: `search` ranks records against
//! a query, `categories` and `tags` list the filter vocabularies.

pub mod display;

use clap::{Parser, Subcommand};
use linkfind::DEFAULT_THRESHOLD;

#[derive(Parser)]
#[command(
    name = "linkfind",
    about = "Typo-tolerant search over a JSON collection of links",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON file of links and display ranked results
    Search {
        /// JSON file: an array of links, or an object with a `links` array
        file: String,

        /// Search query (empty lists every link that passes the filters)
        #[arg(default_value = "")]
        query: String,

        /// Only links in this exact category ("all" disables the filter)
        #[arg(short, long, default_value = "")]
        category: String,

        /// Only links carrying this tag (case and accents ignored)
        #[arg(short, long, default_value = "")]
        tag: String,

        /// Minimum score a link needs to be listed, in [0, 1]
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print one JSON object per result instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the categories used in a JSON file of links
    Categories {
        /// JSON file of links
        file: String,
    },

    /// List the tags used in a JSON file of links (lower-cased)
    Tags {
        /// JSON file of links
        file: String,
    },
}
