//! REST API client for the BigCommerce store API.
//!
//! This module provides a higher-level REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{AccessToken, BigCommerceConfig, RestClient, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config)?;
//! let response = client.get("v3/catalog/products", None).await?;
//! println!("Status: {}", response.code);
//! ```
//!
//! # Path Normalization
//!
//! - Leading and trailing slashes are stripped: `/v2/blog/posts/` -> `v2/blog/posts`
//! - Empty paths and paths containing `..` segments are rejected
//!
//! # Retries
//!
//! Individual requests are attempted once. The client carries the retry
//! policy from configuration, which the collection pager applies per page.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
