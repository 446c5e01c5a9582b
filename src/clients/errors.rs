//! HTTP-specific error types for the BigCommerce client.
//!
//! The HTTP layer only fails for problems it can detect on its own: a
//! malformed request or a transport failure. Non-2xx responses are returned
//! as ordinary [`HttpResponse`](crate::clients::HttpResponse) values so the
//! REST layer can inspect status and raw body before classifying them.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{} bytes", response.body.len()),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for HTTP-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including failure to read the body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_http_error_wraps_invalid_request_transparently() {
        let error: HttpError = InvalidHttpRequestError::MissingBodyType.into();
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
        let _: &dyn std::error::Error = &error;
    }
}
