//! Configuration errors for the BigCommerce client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or hosts are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid BigCommerce API token.")]
    EmptyAccessToken,

    /// Client id cannot be empty when provided.
    #[error("Client id cannot be empty. Omit it or provide a valid BigCommerce client id.")]
    EmptyClientId,

    /// Store hash is invalid.
    #[error("Invalid store hash '{hash}'. Expected lowercase letters and digits only (e.g., 'abc123').")]
    InvalidStoreHash {
        /// The invalid hash that was provided.
        hash: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v2' or 'v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },
}
