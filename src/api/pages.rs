// src/api/pages.rs
use super::client::NotionHttpClient;
use crate::error::AppError;
use crate::model::{NewPage, Page};
use crate::types::{NotionId, ValidationError};
use serde_json::{json, Value};

/// Page endpoints.
pub struct Pages<'a> {
    http: &'a NotionHttpClient,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(http: &'a NotionHttpClient) -> Self {
        Self { http }
    }

    pub async fn get(&self, id: &NotionId) -> Result<Page, AppError> {
        self.http.get(&format!("pages/{}", id)).await
    }

    /// Creates a page; the page must have a parent.
    pub async fn create(&self, page: &NewPage) -> Result<Page, AppError> {
        if page.parent().is_none() {
            return Err(ValidationError::EmptyField("parent").into());
        }
        let body = page.to_json()?;
        self.http.post("pages", &body).await
    }

    /// Updates page properties, icon, cover or archived state.
    ///
    /// The API cannot move pages, so a `parent` in `changes` is ignored by
    /// the server.
    pub async fn update(&self, id: &NotionId, changes: &Value) -> Result<Page, AppError> {
        if changes.get("parent").is_some() {
            log::warn!("The parent of page {} cannot be changed through the API", id);
        }
        self.http.patch(&format!("pages/{}", id), changes).await
    }

    /// Archives the page. Archived pages can be restored from the trash.
    pub async fn delete(&self, id: &NotionId) -> Result<Page, AppError> {
        self.update(id, &json!({ "archived": true })).await
    }
}
