//! Path building infrastructure for REST resources.
//!
//! Resources can be reached through more than one path. Metafields, for
//! example, hang off products, categories and brands:
//! - `catalog/products/{product_id}/metafields`
//! - `catalog/categories/{category_id}/metafields`
//!
//! The path resolution system picks the most specific path whose ids are
//! all available, then interpolates them and prefixes the API generation.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use bigcommerce_api::{ApiVersion, HttpMethod};
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["product_id"], "catalog/products/{product_id}/metafields"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["brand_id"], "catalog/brands/{brand_id}/metafields"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::All, &["brand_id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("brand_id", "7");
//! assert_eq!(path.url(ApiVersion::V3, &ids), "v3/catalog/brands/7/metafields");
//! assert_eq!(build_path(path.template, &ids), "catalog/brands/7/metafields");
//! ```

use crate::clients::HttpMethod;
use crate::config::ApiVersion;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List resources page by page (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates are relative to the API generation prefix and use `{id_name}`
/// placeholders:
/// - `blog/posts/{id}`
/// - `catalog/products/{product_id}/metafields`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method accessors send for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["product_id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }

    /// Builds the request path, prefixed with the API generation.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn url<V: Display>(&self, version: ApiVersion, ids: &HashMap<&str, V>) -> String {
        format!("{version}/{}", build_path(self.template, ids))
    }
}

/// Selects the most specific path for an operation whose ids are all available.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Placeholders without a matching id are left untouched.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
