use thiserror::Error;

mod colors;
mod domain_types;
mod ids;

pub use colors::*;
pub use domain_types::*;
pub use ids::*;

/// Local, synchronous usage errors.
///
/// Every variant is raised at construction time, before any request is made,
/// and names the offending value together with the accepted set where one exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Color {value:?} is not supported, expected one of: {}", supported.join(", "))]
    InvalidColor {
        value: String,
        supported: Vec<&'static str>,
    },

    #[error("Timestamp {value:?} is not supported, expected one of: {}", supported.join(", "))]
    InvalidTimestamp {
        value: String,
        supported: Vec<&'static str>,
    },

    #[error("Array condition {value:?} is not supported, expected one of: {}", supported.join(", "))]
    InvalidArrayCondition {
        value: String,
        supported: Vec<&'static str>,
    },

    #[error("Language {0:?} is not supported by code blocks")]
    InvalidLanguage(String),

    #[error("Filter on {target:?} has no condition attached")]
    IncompleteFilter { target: String },

    #[error("Block type {0} does not support {1}")]
    UnsupportedCapability(&'static str, &'static str),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },
}
