//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the battlenet binary.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::region::{Locale, Region};

/// Battle.net API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "battlenet", about = "Battle.net API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a summary.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log requests to stderr.
    #[arg(long, short, global = true, default_value = "false")]
    pub verbose: bool,

    /// Region to query instead of BATTLENET_REGION.
    #[arg(long, global = true)]
    pub region: Option<Region>,

    /// Locale of localized strings, e.g. en_GB.
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Only fetch if modified after this RFC 3339 timestamp.
    #[arg(long, global = true)]
    pub since: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a character profile.
    Character {
        /// Realm name or slug.
        realm: String,

        /// Character name.
        name: String,

        /// Comma separated optional sections, e.g. stats,items.
        #[arg(long)]
        fields: Option<String>,
    },

    /// Get a guild profile.
    Guild {
        /// Realm name or slug.
        realm: String,

        /// Guild name.
        name: String,

        /// Comma separated optional sections, e.g. members,news.
        #[arg(long)]
        fields: Option<String>,
    },

    /// Show realm status.
    Realms {
        /// Realm slugs to show (all realms when omitted).
        realms: Vec<String>,
    },

    /// GET any path below the wow API and print the raw JSON.
    Get {
        /// Resource path, e.g. data/character/races.
        path: String,

        /// Extra query parameter as key=value. Repeatable.
        #[arg(long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,

        /// Request this URL instead of composing one.
        #[arg(long)]
        url: Option<String>,
    },
}

/// Parse a `key=value` argument.
fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{arg}'"))
}
