// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use notion_sdk::api::{DatabaseQuery, NotionClient, SearchRequest};
use notion_sdk::config::{ClientConfig, Command, CommandLineInput};
use notion_sdk::logging::{init_logging, LoggingConfig};
use notion_sdk::types::NotionId;
use serde::Serialize;

/// Runs one subcommand and prints its result as JSON on stdout.
async fn execute(client: &NotionClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Search { query, limit } => {
            let mut request = SearchRequest::new(query);
            if let Some(limit) = limit {
                request = request.limit(limit);
            }
            let results = client.search().run(&request).await?;
            log::info!("Search returned {} objects", results.len());
            print_json(&results)
        }
        Command::Users => print_json(&client.users().list().await?),
        Command::Me => print_json(&client.users().me().await?),
        Command::Page { id } => {
            let page = client.pages().get(&parse_id(&id)?).await?;
            log::info!("Retrieved page '{}'", page.title().unwrap_or_default());
            print_json(&page)
        }
        Command::Database { id } => {
            let database = client.databases().get(&parse_id(&id)?).await?;
            log::info!(
                "Retrieved database '{}' with {} properties",
                database.title_text(),
                database.properties.len()
            );
            print_json(&database)
        }
        Command::Query { id, filter, limit } => {
            let mut query = DatabaseQuery::new();
            if let Some(filter) = filter {
                let value = serde_json::from_str(&filter).context("--filter is not valid JSON")?;
                query = query.raw_filter(value);
            }
            if let Some(limit) = limit {
                query = query.limit(limit);
            }
            print_json(&client.databases().query(&parse_id(&id)?, &query).await?)
        }
        Command::Children { id, limit } => {
            print_json(&client.blocks().children(&parse_id(&id)?, limit).await?)
        }
        Command::Comments { id } => print_json(&client.comments().list(&parse_id(&id)?).await?),
    }
}

fn parse_id(input: &str) -> anyhow::Result<NotionId> {
    NotionId::parse(input).with_context(|| format!("'{}' is not a Notion URL or ID", input))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    let mut logging = LoggingConfig::from_env()?;
    if cli.verbose {
        logging = logging.with_level(LevelFilter::Debug);
    }
    init_logging(&logging)?;

    let client = NotionClient::new(ClientConfig::from_env()?)?;
    execute(&client, cli.command).await
}
