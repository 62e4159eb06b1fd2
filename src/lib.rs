// src/lib.rs
//! notion-sdk: a typed client for the Notion API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Filters** — `Filter`, the property families, `and` / `or`, `Sort`
//! - **API client** — `NotionClient` and its endpoint groups
//! - **Domain model** — `Page`, `Database`, `Block`, `Comment`, `User`, etc.
//! - **Domain types** — `NotionId`, `ApiKey`, `ValidatedUrl`, colors
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `ClientConfig`, `LoggingConfig`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::ClientConfig;
pub use crate::logging::{init_logging, LoggingConfig};

// --- API Client ---
pub use crate::api::{DatabaseQuery, NotionClient, ObjectType, SearchRequest};

// --- Filters ---
pub use crate::filter::{and, or, Compound, Direction, Filter, Sort};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockKind, Comment, Database, NewComment, NewDatabase, NewPage, NotionObject, Page,
    Parent, PropertySchema, PropertyValue, RichText, User,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, NotionId, ValidatedUrl};
