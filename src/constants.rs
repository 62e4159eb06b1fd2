// src/constants.rs
//! Domain constants that define how the client talks to the Notion API.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL of the public Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header of every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips when collecting paginated result sets.
pub const NOTION_API_PAGE_SIZE: usize = 100;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable holding the integration secret.
pub const ENV_API_KEY: &str = "NOTION_API_KEY";

/// Optional override of the API base URL (useful against a mock server).
pub const ENV_BASE_URL: &str = "NOTION_BASE_URL";

/// Optional request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "NOTION_TIMEOUT_SECS";

/// Log level for the console/file logger (`error`, `warn`, `info`, `debug`, `trace`).
pub const ENV_LOG_LEVEL: &str = "LOGLEVEL";

/// Optional path of a log file; logging goes to the console only when unset.
pub const ENV_LOG_FILE: &str = "LOGFILE";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
