//! Resource-specific error types for REST API operations.
//!
//! BigCommerce reports failures in two shapes: a `422` body listing
//! validation messages per field, and a `{status, title}` envelope for
//! everything else. Both are folded into [`ResourceError`] here.
//!
//! # Error Handling
//!
//! - **204**: [`ResourceError::NoContent`]
//! - **404** (lookup by id): [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - **Other 4xx/5xx**: [`ResourceError::Api`]
//! - **Unparseable body**: [`ResourceError::DecodeFailed`]
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{ResourceError, RestResource};
//!
//! match Post::create(&client, &payload).await {
//!     Ok(post) => println!("Created post {:?}", post.id),
//!     Err(ResourceError::ValidationFailed { message, .. }) => println!("Rejected: {}", message),
//!     Err(e) if e.is_retryable() => println!("Try again later: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpError, RestError};

/// Message used when the API reports a failure without any detail.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Product",
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "Product with id 123 not found");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404 on a lookup by id).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Product", "Post").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// The API answered `204 No Content`.
    #[error("no content returned for {resource}")]
    NoContent {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// The API rejected the request with HTTP 422.
    ///
    /// `message` is every reported message joined with `", "`, or
    /// `"unknown error"` when the body listed none.
    #[error("{message}")]
    ValidationFailed {
        /// Joined validation messages.
        message: String,
        /// Messages per field, as reported by the API.
        errors: BTreeMap<String, Vec<String>>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The API answered with a `{status, title}` error envelope.
    #[error("{title}")]
    Api {
        /// The HTTP status code, or the envelope status for 2xx bodies.
        status: u16,
        /// The envelope title.
        title: String,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("failed to decode {resource} response (HTTP {status}): {source}")]
    DecodeFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The HTTP status code of the response.
        status: u16,
        /// The raw body that failed to decode.
        body: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A successful response carried no resource.
    #[error("empty {resource} response")]
    EmptyResponse {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// A request payload could not be serialized.
    #[error("failed to encode {resource} payload: {source}")]
    EncodeFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying encode error.
        #[source]
        source: serde_json::Error,
    },

    /// No valid path matches the provided IDs and operation.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "create").
        operation: &'static str,
    },

    /// Page fetches kept failing beyond the retry budget.
    #[error("max retries reached fetching {resource} page {page} after {retries} retries: {last_error}")]
    MaxRetriesExceeded {
        /// The type name of the resource.
        resource: &'static str,
        /// The page that could not be fetched.
        page: u32,
        /// The retry budget that was exhausted.
        retries: u32,
        /// The failure from the final attempt.
        #[source]
        last_error: Box<ResourceError>,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Classifies a non-success HTTP response.
    ///
    /// # Arguments
    ///
    /// * `code` - The HTTP status code
    /// * `body` - The raw response body
    /// * `resource` - The resource type name (e.g., "Product")
    /// * `id` - The resource ID for lookups by id
    /// * `request_id` - The X-Request-Id header value
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::rest::ResourceError;
    ///
    /// let error = ResourceError::from_http_response(
    ///     422,
    ///     r#"{"errors": {"title": "is required"}}"#,
    ///     "Post",
    ///     None,
    ///     None,
    /// );
    /// assert_eq!(error.to_string(), "is required");
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &str,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match (code, id) {
            (204, _) => Self::NoContent { resource },
            (404, Some(id)) => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            (422, _) => match parse_validation_errors(body) {
                Ok(errors) => Self::ValidationFailed {
                    message: join_validation_messages(&errors),
                    errors,
                    request_id: request_id.map(ToString::to_string),
                },
                Err(source) => Self::decode_failed(resource, code, body, source),
            },
            _ => match serde_json::from_str::<ErrorBody>(body) {
                Ok(error_body) => Self::Api {
                    status: code,
                    title: error_body.title_or_unknown(),
                    request_id: request_id.map(ToString::to_string),
                },
                Err(source) => Self::decode_failed(resource, code, body, source),
            },
        }
    }

    /// Builds a [`ResourceError::DecodeFailed`], logging the offending body.
    #[must_use]
    pub fn decode_failed(
        resource: &'static str,
        status: u16,
        body: &str,
        source: serde_json::Error,
    ) -> Self {
        tracing::warn!(
            resource,
            status,
            error = %source,
            body,
            "Failed to decode response body"
        );
        Self::DecodeFailed {
            resource,
            status,
            body: body.to_string(),
            source,
        }
    }

    /// Returns `true` when repeating the same request may succeed.
    ///
    /// Transport failures, rate limiting (429) and server errors (5xx) are
    /// retryable; validation, decode and other client errors are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(HttpError::Network(_)) | Self::Rest(RestError::Http(HttpError::Network(_))) => {
                true
            }
            Self::Api { status, .. } | Self::DecodeFailed { status, .. } => {
                *status == 429 || *status >= 500
            }
            _ => false,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } | Self::Api { request_id, .. } => {
                request_id.as_deref()
            }
            Self::MaxRetriesExceeded { last_error, .. } => last_error.request_id(),
            _ => None,
        }
    }
}

/// The `{status, title}` envelope used for generic API failures.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub(crate) status: Option<i64>,
    #[serde(default)]
    pub(crate) title: Option<String>,
}

impl ErrorEnvelope {
    pub(crate) fn title_or_unknown(self) -> String {
        self.title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}

/// Accepted shapes of a generic error body.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    /// Legacy v2 form: `[{"status": 400, "message": "..."}]`.
    List(Vec<LegacyValidationError>),
    Envelope(ErrorEnvelope),
}

impl ErrorBody {
    fn title_or_unknown(self) -> String {
        match self {
            Self::List(list) => list
                .into_iter()
                .map(|e| e.message)
                .find(|m| !m.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            Self::Envelope(envelope) => envelope.title_or_unknown(),
        }
    }
}

/// Accepted shapes of a 422 body.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValidationBody {
    /// Legacy v2 form: `[{"status": 422, "message": "..."}]`.
    List(Vec<LegacyValidationError>),
    /// `{"errors": {"field": "message"}}` and friends.
    Envelope {
        #[serde(default)]
        errors: Option<serde_json::Value>,
    },
}

#[derive(Deserialize)]
struct LegacyValidationError {
    #[serde(default)]
    message: String,
}

/// Parses validation errors from a 422 body.
///
/// Accepted formats:
/// ```json
/// {"errors": {"title": "is required", "price": ["must be positive"]}}
/// {"errors": ["Title is required"]}
/// [{"status": 422, "message": "Title is required"}]
/// ```
///
/// Messages without a field are reported under `base`.
fn parse_validation_errors(
    body: &str,
) -> Result<BTreeMap<String, Vec<String>>, serde_json::Error> {
    let mut result = BTreeMap::new();

    match serde_json::from_str::<ValidationBody>(body)? {
        ValidationBody::List(list) => {
            let msgs: Vec<String> = list
                .into_iter()
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .collect();
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        ValidationBody::Envelope { errors } => match errors {
            Some(serde_json::Value::Object(map)) => {
                for (field, messages) in map {
                    let msgs = message_list(&messages);
                    if !msgs.is_empty() {
                        result.insert(field, msgs);
                    }
                }
            }
            Some(other @ (serde_json::Value::Array(_) | serde_json::Value::String(_))) => {
                let msgs = message_list(&other);
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            _ => {}
        },
    }

    Ok(result)
}

fn message_list(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(arr) => arr
            .iter()
            .filter_map(|v| v.as_str().map(ToString::to_string))
            .collect(),
        serde_json::Value::String(s) => vec![s.clone()],
        serde_json::Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

fn join_validation_messages(errors: &BTreeMap<String, Vec<String>>) -> String {
    let joined = errors
        .values()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        joined
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_not_found_error_formats_message_with_resource_and_id() {
        let error = ResourceError::from_http_response(404, "{}", "Product", Some("77"), None);
        assert!(matches!(&error, ResourceError::NotFound { id, .. } if id == "77"));
        assert_eq!(error.to_string(), "Product with id 77 not found");
    }

    #[test]
    fn test_404_without_id_uses_error_envelope() {
        let error = ResourceError::from_http_response(
            404,
            r#"{"status": 404, "title": "The route is not found"}"#,
            "Metafield",
            None,
            None,
        );
        assert!(matches!(error, ResourceError::Api { status: 404, .. }));
        assert_eq!(error.to_string(), "The route is not found");
    }

    #[test]
    fn test_no_content_is_distinct() {
        let error = ResourceError::from_http_response(204, "", "Product", None, None);
        assert!(matches!(error, ResourceError::NoContent { resource: "Product" }));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_validation_single_message() {
        let error = ResourceError::from_http_response(
            422,
            r#"{"errors": {"title": "is required"}}"#,
            "Post",
            None,
            Some("req-1"),
        );

        assert_eq!(error.to_string(), "is required");
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_validation_joins_messages_in_field_order() {
        let error = ResourceError::from_http_response(
            422,
            r#"{"errors": {"weight": "must be positive", "name": ["is required", "is too short"]}}"#,
            "Product",
            None,
            None,
        );

        if let ResourceError::ValidationFailed {
            message, errors, ..
        } = error
        {
            assert_eq!(message, "is required, is too short, must be positive");
            assert_eq!(errors.len(), 2);
            assert_eq!(errors.get("name").map(Vec::len), Some(2));
        } else {
            panic!("Expected ValidationFailed variant");
        }
    }

    #[test]
    fn test_validation_empty_errors_is_unknown_error() {
        for body in [r#"{"errors": {}}"#, r#"{"title": "Invalid"}"#, "[]"] {
            let error = ResourceError::from_http_response(422, body, "Post", None, None);
            assert_eq!(error.to_string(), UNKNOWN_ERROR, "body: {body}");
        }
    }

    #[test]
    fn test_validation_legacy_list_form() {
        let error = ResourceError::from_http_response(
            422,
            r#"[{"status": 422, "message": "The field 'title' cannot be blank."}]"#,
            "Post",
            None,
            None,
        );
        assert_eq!(error.to_string(), "The field 'title' cannot be blank.");
    }

    #[test]
    fn test_validation_unparseable_body_is_decode_failure() {
        let error = ResourceError::from_http_response(422, "<html>oops</html>", "Post", None, None);
        match error {
            ResourceError::DecodeFailed {
                resource,
                status,
                body,
                ..
            } => {
                assert_eq!(resource, "Post");
                assert_eq!(status, 422);
                assert_eq!(body, "<html>oops</html>");
            }
            other => panic!("Expected DecodeFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_generic_envelope_uses_title() {
        let error = ResourceError::from_http_response(
            409,
            r#"{"status": 409, "title": "Product name is a duplicate"}"#,
            "Product",
            None,
            None,
        );
        assert!(matches!(error, ResourceError::Api { status: 409, .. }));
        assert_eq!(error.to_string(), "Product name is a duplicate");
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_generic_legacy_list_uses_message() {
        let error = ResourceError::from_http_response(
            400,
            r#"[{"status": 400, "message": "The filter(s) are invalid."}]"#,
            "Post",
            None,
            None,
        );
        assert!(matches!(error, ResourceError::Api { status: 400, .. }));
        assert_eq!(error.to_string(), "The filter(s) are invalid.");
    }

    #[test]
    fn test_generic_envelope_without_title_is_unknown_error() {
        let error = ResourceError::from_http_response(400, r#"{"status": 400}"#, "Product", None, None);
        assert_eq!(error.to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let api = ResourceError::from_http_response(
            503,
            r#"{"status": 503, "title": "Service Unavailable"}"#,
            "Product",
            None,
            None,
        );
        assert!(api.is_retryable());

        let html = ResourceError::from_http_response(502, "<html>", "Product", None, None);
        assert!(matches!(html, ResourceError::DecodeFailed { status: 502, .. }));
        assert!(html.is_retryable());

        let limited = ResourceError::from_http_response(429, "{}", "Product", None, None);
        assert!(limited.is_retryable());
    }

    #[test]
    fn test_invalid_request_is_not_retryable() {
        let error: ResourceError =
            HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType).into();
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_max_retries_message_and_source() {
        let error = ResourceError::MaxRetriesExceeded {
            resource: "Post",
            page: 3,
            retries: 2,
            last_error: Box::new(ResourceError::Api {
                status: 500,
                title: "Internal Server Error".to_string(),
                request_id: Some("req-9".to_string()),
            }),
        };

        assert!(error.to_string().starts_with("max retries reached"));
        assert!(error.to_string().contains("Internal Server Error"));
        assert_eq!(error.request_id(), Some("req-9"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_path_resolution_failed_includes_operation_context() {
        let error = ResourceError::PathResolutionFailed {
            resource: "Metafield",
            operation: "all",
        };
        let message = error.to_string();
        assert!(message.contains("Metafield"));
        assert!(message.contains("all"));
    }
}
