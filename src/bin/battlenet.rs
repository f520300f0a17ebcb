//! Battle.net API CLI binary.
//!
//! A command-line interface for the World of Warcraft community API.

use battlenet::cli::{Cli, Command};
use battlenet::fields::parse_fields;
use battlenet::output::PrettyPrint;
use battlenet::{
    Character, CharacterField, CharacterId, Client, Fetched, Get, Guild, GuildField, GuildId,
    Parameters, RealmStatus, RequestOptions,
};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    // --region replaces BATTLENET_REGION
    let client = match Client::from_env_with_region("wow", cli.region) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: BATTLENET_REGION must be one of us, eu, kr, tw");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, cli: Cli) -> battlenet::Result<()> {
    let mut options = RequestOptions::new();
    if let Some(locale) = cli.locale {
        options = options.locale(locale);
    }
    if let Some(since) = cli.since {
        options = options.if_modified_since(since);
    }

    match cli.command {
        Command::Character {
            realm,
            name,
            fields,
        } => {
            if let Some(fields) = fields {
                options = options.fields(parse_fields::<CharacterField>(&fields)?);
            }
            let character =
                Character::get(client, CharacterId::new(realm, name), options).await?;
            output_single(character, cli.json)
        }
        Command::Guild {
            realm,
            name,
            fields,
        } => {
            if let Some(fields) = fields {
                options = options.fields(parse_fields::<GuildField>(&fields)?);
            }
            let guild = Guild::get(client, GuildId::new(realm, name), options).await?;
            output_single(guild, cli.json)
        }
        Command::Realms { realms } => {
            let status = RealmStatus::get(client, realms, options).await?;
            output_realms(status, cli.json)
        }
        Command::Get { path, params, url } => {
            options = options.parameters(params.into_iter().collect::<Parameters>());
            if let Some(url) = url {
                options = options.full_url(url);
            }
            match client.get::<serde_json::Value>(&path, options).await? {
                Fetched::Data(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                Fetched::NotModified => println!("not modified"),
            }
            Ok(())
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(
    fetched: Fetched<T>,
    json: bool,
) -> battlenet::Result<()> {
    match fetched {
        Fetched::Data(item) if json => println!("{}", serde_json::to_string_pretty(&item)?),
        Fetched::Data(item) => println!("{}", item.pretty_print()),
        Fetched::NotModified => println!("not modified"),
    }
    Ok(())
}

fn output_realms(fetched: Fetched<RealmStatus>, json: bool) -> battlenet::Result<()> {
    let status = match fetched {
        Fetched::Data(status) => status,
        Fetched::NotModified => {
            println!("not modified");
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status.realms)?);
    } else {
        let rows: Vec<RealmRow> = status.realms.iter().map(RealmRow::from).collect();
        println!("{}", Table::new(rows));
        let offline = status.offline().count();
        println!("\n{} realms ({} offline)", status.realms.len(), offline);
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct RealmRow {
    name: String,
    #[tabled(rename = "type")]
    realm_type: String,
    status: String,
    population: String,
}

impl From<&battlenet::Realm> for RealmRow {
    fn from(r: &battlenet::Realm) -> Self {
        Self {
            name: r.name.clone(),
            realm_type: r.realm_type.clone(),
            status: if r.status {
                "up".to_string()
            } else {
                "down".to_string()
            },
            population: r.population.clone().unwrap_or_default(),
        }
    }
}
