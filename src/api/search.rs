// src/api/search.rs
use super::client::NotionHttpClient;
use crate::error::AppError;
use crate::filter::Direction;
use crate::model::NotionObject;
use reqwest::Method;
use serde_json::{json, Map, Value};

/// Restricts search results to one kind of object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Page,
    Database,
}

impl ObjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Database => "database",
        }
    }
}

/// Search over titles of pages and databases shared with the integration.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    query: String,
    object_type: Option<ObjectType>,
    direction: Option<Direction>,
    limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn only(mut self, object_type: ObjectType) -> Self {
        self.object_type = Some(object_type);
        self
    }

    /// Orders results by last edit time.
    pub fn sort(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.body())
    }

    fn body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("query".to_string(), Value::String(self.query.clone()));
        if let Some(direction) = self.direction {
            body.insert(
                "sort".to_string(),
                json!({ "direction": direction, "timestamp": "last_edited_time" }),
            );
        }
        if let Some(object_type) = self.object_type {
            body.insert(
                "filter".to_string(),
                json!({ "property": "object", "value": object_type.as_str() }),
            );
        }
        body
    }
}

/// The search endpoint.
pub struct Search<'a> {
    http: &'a NotionHttpClient,
}

impl<'a> Search<'a> {
    pub(crate) fn new(http: &'a NotionHttpClient) -> Self {
        Self { http }
    }

    pub async fn run(&self, request: &SearchRequest) -> Result<Vec<NotionObject>, AppError> {
        self.http
            .paginate(Method::POST, "search", request.body(), Vec::new(), request.limit)
            .await
    }
}
