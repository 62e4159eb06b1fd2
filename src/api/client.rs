// src/api/client.rs
//! HTTP transport for the Notion API.
//!
//! A thin wrapper around reqwest that adds authentication and version
//! headers, resolves endpoint paths against the configured base URL and
//! hands responses to the parser. One call is one request: there are no
//! retries.

use super::pagination::{collect_pages, PaginatedResponse};
use super::parser::parse_api_response;
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::types::ValidatedUrl;
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: ValidatedUrl,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().default_headers(Self::create_headers(config)?);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(config: &ClientConfig) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", config.api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(&config.notion_version).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid Notion-Version value: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn url(&self, endpoint: &str) -> String {
        self.base_url.join_endpoint(endpoint)
    }

    /// Makes a GET request to the specified endpoint.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let url = self.url(endpoint);
        log::debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    /// Makes a GET request with query string parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<T, AppError> {
        let url = self.url(endpoint);
        log::debug!("GET {} {:?}", url, query);
        self.send(self.client.get(url).query(query)).await
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);

        if endpoint.starts_with("databases") && endpoint.ends_with("query") {
            log::info!("POST {}", url);
            log::debug!(
                "Query body: {}",
                serde_json::to_string(body).unwrap_or_else(|_| "Failed to serialize".to_string())
            );
        } else {
            log::debug!("POST {}", url);
        }

        self.send(self.client.post(url).json(body)).await
    }

    /// Makes a PATCH request with JSON body to the specified endpoint.
    pub async fn patch<B, T>(&self, endpoint: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        log::debug!("PATCH {}", url);
        self.send(self.client.patch(url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await?;
        let result = extract_response_text(response).await?;
        parse_api_response(result)
    }

    /// Collects a cursor-paginated list in API order.
    ///
    /// For `GET` the cursor and page size travel in the query string, for
    /// `POST` they are merged into `body`. At most `limit` items are
    /// returned.
    pub async fn paginate<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Map<String, Value>,
        query: Vec<(String, String)>,
        limit: Option<usize>,
    ) -> Result<Vec<T>, AppError> {
        collect_pages(
            |page_size, cursor| {
                let method = method.clone();
                let mut body = body.clone();
                let mut query = query.clone();
                async move {
                    if method == Method::GET {
                        query.push(("page_size".to_string(), page_size.to_string()));
                        if let Some(cursor) = cursor {
                            query.push(("start_cursor".to_string(), cursor));
                        }
                        self.get_with_query::<PaginatedResponse<T>>(endpoint, &query)
                            .await
                    } else {
                        body.insert("page_size".to_string(), Value::from(page_size));
                        if let Some(cursor) = cursor {
                            body.insert("start_cursor".to_string(), Value::String(cursor));
                        }
                        self.post::<_, PaginatedResponse<T>>(endpoint, &body).await
                    }
                }
            },
            limit,
        )
        .await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
