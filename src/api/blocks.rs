// src/api/blocks.rs
use super::client::NotionHttpClient;
use super::pagination::PaginatedResponse;
use crate::error::AppError;
use crate::model::Block;
use crate::types::NotionId;
use reqwest::Method;
use serde_json::{json, Map, Value};

/// Block endpoints. Pages are blocks too, so page ids work for children.
pub struct Blocks<'a> {
    http: &'a NotionHttpClient,
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(http: &'a NotionHttpClient) -> Self {
        Self { http }
    }

    pub async fn get(&self, id: &NotionId) -> Result<Block, AppError> {
        self.http.get(&format!("blocks/{}", id)).await
    }

    /// Direct children of a block, in document order.
    pub async fn children(&self, id: &NotionId, limit: Option<usize>) -> Result<Vec<Block>, AppError> {
        self.http
            .paginate(
                Method::GET,
                &format!("blocks/{}/children", id),
                Map::new(),
                Vec::new(),
                limit,
            )
            .await
    }

    /// Appends `children` after the last child of `id` and returns the
    /// created blocks.
    pub async fn append_children(&self, id: &NotionId, children: &[Block]) -> Result<Vec<Block>, AppError> {
        let children = children
            .iter()
            .map(Block::to_json)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Appending {} blocks to {}", children.len(), id);
        let response: PaginatedResponse<Block> = self
            .http
            .patch(&format!("blocks/{}/children", id), &json!({ "children": children }))
            .await?;
        Ok(response.results)
    }

    /// Updates the content of a block, e.g. `{"to_do": {"checked": true}}`.
    pub async fn update(&self, id: &NotionId, changes: &Value) -> Result<Block, AppError> {
        self.http.patch(&format!("blocks/{}", id), changes).await
    }

    /// Archives the block.
    pub async fn delete(&self, id: &NotionId) -> Result<Block, AppError> {
        self.update(id, &json!({ "archived": true })).await
    }
}
