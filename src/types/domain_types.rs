// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// API key for Notion API authentication
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if !key.starts_with("secret_") && !key.starts_with("ntn_") {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key must start with 'secret_' or 'ntn_'".to_string(),
            });
        }

        if key.len() < 20 {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key is too short".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First ten characters followed by `...`
    fn redacted(&self) -> String {
        let visible: String = self.0.chars().take(10).collect();
        format!("{}...", visible)
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}

/// Validated http(s) URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl Serialize for ValidatedUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidatedUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Joins an API endpoint path onto this base URL.
    pub fn join_endpoint(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.0.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_validation() {
        assert!(ApiKey::new("secret_abcdefghijklmnopqrstuvwxyz").is_ok());
        assert!(ApiKey::new("ntn_abcdefghijklmnopqrstuvwxyz").is_ok());
        assert!(matches!(
            ApiKey::new(""),
            Err(ValidationError::InvalidApiKey { reason }) if reason.contains("empty")
        ));
        assert!(matches!(
            ApiKey::new("invalid_abcdefghijklmnopqrstuvwxyz"),
            Err(ValidationError::InvalidApiKey { reason }) if reason.contains("must start with")
        ));
        assert!(matches!(
            ApiKey::new("secret_short"),
            Err(ValidationError::InvalidApiKey { reason }) if reason.contains("too short")
        ));
    }

    #[test]
    fn api_key_display_redacts_value() {
        let key = ApiKey::new("secret_supersecretkey123456").unwrap();
        let display = format!("{}", key);
        assert_eq!(display, "secret_sup...");
        assert!(!display.contains("supersecretkey"));
    }

    #[test]
    fn api_key_redaction_counts_characters() {
        let key = ApiKey::new("ntn_aéééééééééééééé").unwrap();
        assert_eq!(key.to_string(), "ntn_aéééééé...");
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("secret_supersecretkey123456").unwrap();
        assert_eq!(format!("{:?}", key), r#"ApiKey("secret_sup...")"#);
    }

    #[test]
    fn url_join_endpoint() {
        let base = ValidatedUrl::parse("https://api.notion.com/v1").unwrap();
        assert_eq!(
            base.join_endpoint("users/me"),
            "https://api.notion.com/v1/users/me"
        );

        let local = ValidatedUrl::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(local.join_endpoint("/search"), "http://127.0.0.1:8080/search");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            ValidatedUrl::parse("ftp://example.com"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }
}
