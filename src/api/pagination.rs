// src/api/pagination.rs
//! Cursor pagination over list endpoints.

use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;
use serde::Deserialize;

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Follows `next_cursor` until the list is exhausted or `limit` items are
/// collected.
///
/// `fetch_fn` receives the page size to request and the cursor of the page
/// to fetch (`None` for the first one).
pub async fn collect_pages<T, F, Fut>(mut fetch_fn: F, limit: Option<usize>) -> Result<Vec<T>, AppError>
where
    F: FnMut(usize, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let page_size = match limit {
            Some(max) => max.saturating_sub(all_items.len()).min(NOTION_API_PAGE_SIZE),
            None => NOTION_API_PAGE_SIZE,
        };
        if page_size == 0 {
            log::debug!("Reached result limit after {} pages", pages_fetched);
            break;
        }

        let response = fetch_fn(page_size, cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
    }

    if let Some(max) = limit {
        all_items.truncate(max);
    }
    Ok(all_items)
}
