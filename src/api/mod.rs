// src/api/mod.rs
//! Notion API interaction.
//!
//! [`NotionClient`] owns the HTTP transport and hands out one borrowed
//! handle per endpoint group:
//!
//! ```no_run
//! # async fn run() -> Result<(), notion_sdk::AppError> {
//! use notion_sdk::api::{DatabaseQuery, NotionClient};
//! use notion_sdk::filter::Checkbox;
//! use notion_sdk::types::NotionId;
//!
//! let client = NotionClient::from_env()?;
//! let id = NotionId::parse("bc1211cae3f14939ae345260b16f627c")?;
//! let open = client
//!     .databases()
//!     .query(&id, &DatabaseQuery::new().filter(Checkbox::new("Done").equals(false)))
//!     .await?;
//! println!("{} open tasks", open.len());
//! # Ok(())
//! # }
//! ```

pub mod blocks;
pub mod client;
pub mod comments;
pub mod databases;
pub mod pages;
pub mod pagination;
pub mod parser;
pub mod search;
pub mod users;

pub use blocks::Blocks;
pub use client::NotionHttpClient;
pub use comments::Comments;
pub use databases::{DatabaseQuery, Databases};
pub use pages::Pages;
pub use pagination::PaginatedResponse;
pub use search::{ObjectType, Search, SearchRequest};
pub use users::Users;

use crate::config::ClientConfig;
use crate::error::AppError;

/// Entry point to the Notion API.
#[derive(Clone)]
pub struct NotionClient {
    http: NotionHttpClient,
}

impl NotionClient {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        log::debug!("Creating client for {}", config.base_url);
        Ok(Self {
            http: NotionHttpClient::new(&config)?,
        })
    }

    /// Builds a client from `NOTION_API_KEY` and the optional overrides.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn pages(&self) -> Pages<'_> {
        Pages::new(&self.http)
    }

    pub fn databases(&self) -> Databases<'_> {
        Databases::new(&self.http)
    }

    pub fn blocks(&self) -> Blocks<'_> {
        Blocks::new(&self.http)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.http)
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments::new(&self.http)
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(&self.http)
    }
}
