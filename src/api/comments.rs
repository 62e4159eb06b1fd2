// src/api/comments.rs
use super::client::NotionHttpClient;
use crate::error::AppError;
use crate::model::{Comment, NewComment};
use crate::types::NotionId;
use reqwest::Method;
use serde_json::Map;

/// Comment endpoints.
pub struct Comments<'a> {
    http: &'a NotionHttpClient,
}

impl<'a> Comments<'a> {
    pub(crate) fn new(http: &'a NotionHttpClient) -> Self {
        Self { http }
    }

    /// Unresolved comments on a page or block, oldest first.
    pub async fn list(&self, block_id: &NotionId) -> Result<Vec<Comment>, AppError> {
        self.http
            .paginate(
                Method::GET,
                "comments",
                Map::new(),
                vec![("block_id".to_string(), block_id.to_string())],
                None,
            )
            .await
    }

    pub async fn create(&self, comment: &NewComment) -> Result<Comment, AppError> {
        self.http.post("comments", comment).await
    }

    /// Always fails: the API has no endpoint for removing comments.
    pub async fn delete(&self, id: &NotionId) -> Result<Comment, AppError> {
        Err(AppError::Unsupported(format!("deleting comment {}", id)))
    }
}
