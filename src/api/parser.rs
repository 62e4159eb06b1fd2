// src/api/parser.rs
//! Turns raw HTTP responses into typed values or typed errors.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error object returned by the API for non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Parses a response body as `T`, or the API error it carries.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(error) = serde_json::from_str::<ErrorBody>(body) {
        log::debug!("{} returned {} ({})", url, status, error.code);
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&error.code),
            message: error.message,
            status,
        };
    }

    // Fallback to generic error with HTTP status code
    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}: {}", status, url, preview(body)),
        status,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn response(status: u16, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            url: "https://api.notion.com/v1/pages/x".to_string(),
        }
    }

    #[test]
    fn parses_success_body() {
        let value: Value = parse_api_response(response(200, r#"{"object":"page"}"#)).unwrap();
        assert_eq!(value["object"], "page");
    }

    #[test]
    fn maps_api_error_codes() {
        let err = parse_api_response::<Value>(response(
            404,
            r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find page"}"#,
        ))
        .unwrap_err();

        match err {
            AppError::NotionService {
                code,
                message,
                status,
            } => {
                assert!(code.is_not_found());
                assert_eq!(message, "Could not find page");
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_errors_fall_back_to_status() {
        let err = parse_api_response::<Value>(response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert_eq!(err.notion_code(), Some(&NotionErrorCode::HttpStatus(502)));
    }

    #[test]
    fn malformed_success_body() {
        let err = parse_api_response::<Value>(response(200, "{not json")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(ERROR_BODY_PREVIEW_LENGTH + 10);
        assert_eq!(preview(&body).len(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
