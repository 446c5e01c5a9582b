//! # BigCommerce API Rust Client
//!
//! A typed client for the BigCommerce REST API, covering blog posts, catalog
//! products (with variants, images, videos, custom fields and bulk pricing
//! rules) and metafields.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for store credentials
//! - An async HTTP client that attaches BigCommerce authentication headers
//! - Typed resource accessors through [`rest::RestResource`]
//! - Exhaustive pagination with a bounded per-page retry budget, for both the
//!   legacy `v2` count-based pages and the `v3` `meta.pagination` envelopes
//! - One error taxonomy for both API error shapes ([`rest::ResourceError`])
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, BigCommerceConfig, RestClient, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(client.base_uri(), "https://api.bigcommerce.com/stores/abc123");
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::RestResource;
//! use bigcommerce_api::rest::resources::{CreatePostPayload, Metafield, Post, Product};
//!
//! // Every blog post, following legacy pagination
//! let posts = Post::all(&client, None).await?;
//!
//! // One product with every sub-resource included
//! let product = Product::find(&client, 111, None).await?;
//!
//! // Product metafields indexed by key
//! let metafields = Metafield::all_for_product(&client, 111).await?;
//!
//! // Create a post
//! let post = Post::create(&client, &CreatePostPayload::new("Hello", "<p>World</p>")).await?;
//! ```
//!
//! ## Handling Failures
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{ResourceError, RestResource};
//!
//! match Product::all(&client, None).await {
//!     Ok(products) => println!("{} products", products.len()),
//!     Err(e) => {
//!         // Partial results travel with the failure.
//!         println!("kept {} products", e.items.len());
//!         if let ResourceError::MaxRetriesExceeded { page, .. } = e.source {
//!             println!("gave up on page {page}");
//!         }
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and query parameters are passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Sequential**: The client never issues concurrent requests on its own

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiHost, ApiVersion, BigCommerceConfig, BigCommerceConfigBuilder, ClientId,
    StoreHash,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RateLimitInfo, RestClient, RestError,
};

// Re-export resource types
pub use rest::resources::{Metafield, Post, Product, Video};
pub use rest::{PaginationError, ResourceError, RestResource, RetryPolicy};
