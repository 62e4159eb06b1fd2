// src/config.rs
use crate::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_SECS, NOTION_API_BASE_URL, NOTION_API_VERSION,
};
use crate::error::AppError;
use crate::types::{ApiKey, ValidatedUrl};
use clap::{Parser, Subcommand};
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search pages and databases shared with the integration
    Search {
        query: String,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List all users of the workspace
    Users,
    /// Show the bot user owning the token
    Me,
    /// Retrieve a page (URL or ID)
    Page { id: String },
    /// Retrieve a database (URL or ID)
    Database { id: String },
    /// Query a database, optionally with a JSON filter object
    Query {
        id: String,
        /// Filter object, e.g. '{"property": "Done", "checkbox": {"equals": true}}'
        #[arg(long)]
        filter: Option<String>,
        /// Maximum number of pages
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List the children of a block or page
    Children {
        id: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List the comments on a block or page
    Comments { id: String },
}

/// Connection settings of a [`crate::NotionClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub base_url: ValidatedUrl,
    pub notion_version: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuration against the public API.
    pub fn new(api_key: ApiKey) -> Result<Self, AppError> {
        Ok(Self {
            api_key,
            base_url: ValidatedUrl::parse(NOTION_API_BASE_URL)?,
            notion_version: NOTION_API_VERSION.to_string(),
            timeout: None,
        })
    }

    /// Reads `NOTION_API_KEY`, and optionally `NOTION_BASE_URL` and
    /// `NOTION_TIMEOUT_SECS`, from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key_str = lookup(ENV_API_KEY).ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable not set", ENV_API_KEY))
        })?;

        let mut config = Self::new(ApiKey::new(api_key_str)?)?;

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(ValidatedUrl::parse(&base_url)?);
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                AppError::MissingConfiguration(format!(
                    "{} must be a whole number of seconds, got {:?}: {}",
                    ENV_TIMEOUT_SECS, timeout, e
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: ValidatedUrl) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "secret_abcdefghijklmnopqrstuvwxyz";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_to_public_api() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, KEY)])).unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.notion.com/v1");
        assert_eq!(config.notion_version, "2022-06-28");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_KEY, KEY),
            (ENV_BASE_URL, "http://127.0.0.1:8080/v1"),
            (ENV_TIMEOUT_SECS, "30"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/v1");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, KEY)])).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("secret_abc..."));
        assert!(!debug.contains(KEY));
    }

    #[test]
    fn missing_or_invalid_values_are_reported() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[])),
            Err(AppError::MissingConfiguration(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, "not-a-key")])),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, KEY), (ENV_TIMEOUT_SECS, "soon")])),
            Err(AppError::MissingConfiguration(_))
        ));
    }

    #[test]
    fn parses_query_command() {
        let cli = CommandLineInput::parse_from([
            "notion-sdk",
            "-v",
            "query",
            "bc1211cae3f14939ae345260b16f627c",
            "--filter",
            r#"{"property":"Done","checkbox":{"equals":true}}"#,
            "--limit",
            "5",
        ]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Query {
                id: "bc1211cae3f14939ae345260b16f627c".to_string(),
                filter: Some(r#"{"property":"Done","checkbox":{"equals":true}}"#.to_string()),
                limit: Some(5),
            }
        );
    }
}
