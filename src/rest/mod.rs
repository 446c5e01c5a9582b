//! REST resource infrastructure for the BigCommerce API.
//!
//! This module provides the foundational infrastructure for REST resources with:
//!
//! - **[`RestResource`] trait**: A standardized interface for typed accessors
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper for ergonomic response handling
//! - **[`paginate`]**: Exhaustive enumeration with a bounded per-page retry budget
//! - **Path building**: Multiple path support for nested resources
//! - **[`ResourceError`]**: One taxonomy for both API error shapes
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use bigcommerce_api::{BigCommerceConfig, RestClient};
//! use bigcommerce_api::rest::RestResource;
//! use bigcommerce_api::rest::resources::{Metafield, Post, Product};
//!
//! let client = RestClient::new(&config)?;
//!
//! // Find a single product with every sub-resource included
//! let product = Product::find(&client, 123, None).await?;
//! println!("Product: {:?}", product.name);  // Deref to Product
//!
//! // Fetch one legacy page of blog posts
//! let page = Post::page(&client, None, 1).await?;
//! if page.has_next_page() {
//!     // fetch page 2...
//! }
//!
//! // Fetch every page, keeping partial results on failure
//! let posts = match Post::all(&client, None).await {
//!     Ok(posts) => posts,
//!     Err(e) => {
//!         eprintln!("stopped early: {}", e.source);
//!         e.items
//!     }
//! };
//!
//! // Product metafields indexed by key
//! let metafields = Metafield::all_for_product(&client, 123).await?;
//! ```
//!
//! # Key Types
//!
//! - [`ResourceError`]: Error types for resource operations
//! - [`ResourcePath`] and [`ResourceOperation`]: Path building infrastructure
//! - [`ResourceResponse`] and [`Page`]: Response wrappers
//! - [`RetryPolicy`] and [`PaginationError`]: Pager configuration and failure
//! - [`resources`]: Resource implementations (Post, Product, Metafield, Video)

mod errors;
mod pager;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::{ResourceError, UNKNOWN_ERROR};
pub use pager::{paginate, PaginationError, RetryPolicy};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::{
    Page, PaginationInfo, PaginationStyle, ResourceResponse, LEGACY_PAGE_LIMIT,
};
