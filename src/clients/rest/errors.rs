//! REST-specific error types for the BigCommerce client.
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::rest::{RestClient, RestError};
//!
//! match client.get("v2/blog/posts", None).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {}", path),
//!     Err(RestError::Http(e)) => println!("HTTP error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// Returned when a path is empty after normalization or tries to escape
    /// the store base URL.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
