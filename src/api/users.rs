// src/api/users.rs
use super::client::NotionHttpClient;
use crate::error::AppError;
use crate::model::User;
use crate::types::NotionId;
use reqwest::Method;
use serde_json::Map;

/// User endpoints.
pub struct Users<'a> {
    http: &'a NotionHttpClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(http: &'a NotionHttpClient) -> Self {
        Self { http }
    }

    pub async fn get(&self, id: &NotionId) -> Result<User, AppError> {
        self.http.get(&format!("users/{}", id)).await
    }

    /// All members and bots of the workspace. Guests are not listed.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.http
            .paginate(Method::GET, "users", Map::new(), Vec::new(), None)
            .await
    }

    /// The bot user that owns the API key.
    pub async fn me(&self) -> Result<User, AppError> {
        self.http.get("users/me").await
    }
}
