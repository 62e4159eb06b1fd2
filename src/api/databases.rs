// src/api/databases.rs
use super::client::NotionHttpClient;
use crate::error::AppError;
use crate::filter::{Filter, Sort};
use crate::model::{Database, NewDatabase, Page};
use crate::types::NotionId;
use reqwest::Method;
use serde_json::{json, Map, Value};

/// Filter, sorts and result limit of a database query.
///
/// ```
/// use notion_sdk::api::DatabaseQuery;
/// use notion_sdk::filter::{Checkbox, Direction, Number, Sort};
///
/// let query = DatabaseQuery::new()
///     .filter(Checkbox::new("Done").equals(false) & Number::new("Points").greater_than(3))
///     .sort(Sort::property("Points", Direction::Descending))
///     .limit(20);
/// let body = query.to_json().unwrap();
/// assert_eq!(body["sorts"][0]["direction"], "descending");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatabaseQuery {
    filter: Option<QueryFilter>,
    sorts: Vec<Sort>,
    limit: Option<usize>,
}

#[derive(Debug, Clone)]
enum QueryFilter {
    Built(Filter),
    Raw(Value),
}

impl DatabaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(QueryFilter::Built(filter.into()));
        self
    }

    /// Uses an already rendered filter object as is.
    pub fn raw_filter(mut self, filter: Value) -> Self {
        self.filter = Some(QueryFilter::Raw(filter));
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Request body without pagination fields.
    pub fn to_json(&self) -> Result<Value, AppError> {
        Ok(Value::Object(self.body()?))
    }

    fn body(&self) -> Result<Map<String, Value>, AppError> {
        let mut body = Map::new();
        match &self.filter {
            Some(QueryFilter::Built(filter)) => {
                body.insert("filter".to_string(), filter.to_json()?);
            }
            Some(QueryFilter::Raw(value)) => {
                body.insert("filter".to_string(), value.clone());
            }
            None => {}
        }
        if !self.sorts.is_empty() {
            body.insert(
                "sorts".to_string(),
                Value::Array(self.sorts.iter().map(Sort::to_json).collect()),
            );
        }
        Ok(body)
    }
}

/// Database endpoints.
pub struct Databases<'a> {
    http: &'a NotionHttpClient,
}

impl<'a> Databases<'a> {
    pub(crate) fn new(http: &'a NotionHttpClient) -> Self {
        Self { http }
    }

    pub async fn get(&self, id: &NotionId) -> Result<Database, AppError> {
        self.http.get(&format!("databases/{}", id)).await
    }

    /// Pages of the database matching `query`, following all cursors.
    pub async fn query(&self, id: &NotionId, query: &DatabaseQuery) -> Result<Vec<Page>, AppError> {
        let body = query.body()?;
        log::info!(
            "Querying database {} ({} sorts, filtered: {})",
            id,
            query.sorts.len(),
            query.filter.is_some()
        );
        self.http
            .paginate(
                Method::POST,
                &format!("databases/{}/query", id),
                body,
                Vec::new(),
                query.limit,
            )
            .await
    }

    pub async fn create(&self, database: &NewDatabase) -> Result<Database, AppError> {
        self.http.post("databases", database).await
    }

    /// Updates title, description or property schema.
    pub async fn update(&self, id: &NotionId, changes: &Value) -> Result<Database, AppError> {
        self.http.patch(&format!("databases/{}", id), changes).await
    }

    /// Archives the database.
    pub async fn delete(&self, id: &NotionId) -> Result<Database, AppError> {
        self.update(id, &json!({ "archived": true })).await
    }
}
