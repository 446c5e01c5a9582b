//! REST Resource trait for typed accessors.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for BigCommerce REST resources. Resources that implement this
//! trait gain `find()`, `page()`, `all()` and `create()` methods, plus
//! parent-scoped variants for nested collections.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives
//! 2. Pick the API generation and pagination style
//! 3. List the paths for each supported operation
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{PaginationStyle, ResourceOperation, ResourcePath, RestResource};
//! use bigcommerce_api::{ApiVersion, HttpMethod};
//!
//! impl RestResource for Post {
//!     type Id = u64;
//!     type FindParams = ();
//!     type AllParams = PostListParams;
//!     type CreatePayload = CreatePostPayload;
//!
//!     const NAME: &'static str = "Post";
//!     const API_VERSION: ApiVersion = ApiVersion::V2;
//!     const PAGINATION: PaginationStyle = PaginationStyle::Count;
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "blog/posts/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "blog/posts"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "blog/posts"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! // Usage:
//! let post = Post::find(&client, 12, None).await?;
//! let posts = Post::all(&client, None).await?;
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::config::ApiVersion;
use crate::rest::{
    get_path, paginate, Page, PaginationError, PaginationStyle, ResourceError, ResourceOperation,
    ResourcePath, ResourceResponse, LEGACY_PAGE_LIMIT,
};

/// A REST resource with typed accessors.
///
/// # Associated Types
///
/// - `Id`: The type of the resource's identifier
/// - `FindParams`: Query parameters for `find()` (use `()` if none)
/// - `AllParams`: Query parameters for `page()` and `all()`
/// - `CreatePayload`: The write-side projection sent by `create()`
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name used in errors and logs
/// - `API_VERSION`: The API generation the paths live under
/// - `PAGINATION`: How list pages signal that more exist
/// - `PATHS`: Available paths for different operations
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Parameters for `find()` operations.
    ///
    /// `Default` is what `find()` sends when the caller passes `None`.
    type FindParams: Serialize + Default + Send + Sync;

    /// Parameters for `page()` and `all()` operations.
    type AllParams: Serialize + Default + Send + Sync;

    /// Payload for `create()` operations.
    type CreatePayload: Serialize + Send + Sync;

    /// The singular name of the resource (e.g., "Product").
    const NAME: &'static str;

    /// The API generation (`v2` or `v3`) the paths are relative to.
    const API_VERSION: ApiVersion;

    /// The pagination convention of this resource's list endpoint.
    const PAGINATION: PaginationStyle;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID if it exists.
    fn get_id(&self) -> Option<Self::Id>;

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product::find(&client, 123, None).await?;
    /// println!("Found: {}", product.name);
    /// ```
    async fn find(
        client: &RestClient,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = id.to_string();
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.clone());

        let (method, url) = resolve_target::<Self>(ResourceOperation::Find, &ids)?;
        let query = serialize_to_query::<Self, _>(&params.unwrap_or_default())?;

        let response = client.request(method, &url, None, non_empty(query)).await?;
        ResourceResponse::from_http_response(response, Self::NAME, Some(&id))
    }

    /// Fetches one page of the collection (1-based).
    ///
    /// Legacy resources also send `limit=250`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoContent`] for a 204 page, or the classified
    /// error for any other failure.
    async fn page(
        client: &RestClient,
        params: Option<&Self::AllParams>,
        page: u32,
    ) -> Result<Page<Self>, ResourceError> {
        fetch_page::<Self>(client, &HashMap::new(), params, page).await
    }

    /// Fetches one page of a collection nested under a parent resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no path takes
    /// `parent_id_name`.
    async fn page_with_parent<ParentId: Display + Send + Sync>(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: ParentId,
        params: Option<&Self::AllParams>,
        page: u32,
    ) -> Result<Page<Self>, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());
        fetch_page::<Self>(client, &ids, params, page).await
    }

    /// Fetches every page of the collection.
    ///
    /// Uses the client's [`RetryPolicy`](crate::rest::RetryPolicy).
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] with the items fetched before the failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// match Post::all(&client, None).await {
    ///     Ok(posts) => println!("{} posts", posts.len()),
    ///     Err(e) => println!("{} (kept {} posts)", e.source, e.items.len()),
    /// }
    /// ```
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<Vec<Self>, PaginationError<Self>> {
        let params = params.as_ref();
        paginate(Self::NAME, client.retry_policy(), |page| {
            Self::page(client, params, page)
        })
        .await
    }

    /// Fetches every page of a collection nested under a parent resource.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] with the items fetched before the failure.
    async fn all_with_parent<ParentId: Display + Send + Sync>(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: ParentId,
        params: Option<Self::AllParams>,
    ) -> Result<Vec<Self>, PaginationError<Self>> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());

        let ids = &ids;
        let params = params.as_ref();
        paginate(Self::NAME, client.retry_policy(), |page| {
            fetch_page::<Self>(client, ids, params, page)
        })
        .await
    }

    /// Creates a resource.
    ///
    /// The payload is sent as a one-element JSON array; the echoed resource
    /// may come back bare, `data`-wrapped or as a one-element array.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the API rejects the
    /// payload (422), [`ResourceError::EncodeFailed`] if it cannot be
    /// serialized.
    async fn create(
        client: &RestClient,
        payload: &Self::CreatePayload,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let (method, url) = resolve_target::<Self>(ResourceOperation::Create, &HashMap::new())?;

        let body = serde_json::to_value(payload).map_err(|source| ResourceError::EncodeFailed {
            resource: Self::NAME,
            source,
        })?;

        let response = client
            .request(method, &url, Some(Value::Array(vec![body])), None)
            .await?;
        ResourceResponse::from_http_response(response, Self::NAME, None)
    }
}

/// Resolves the path for an operation into its HTTP method and interpolated URL.
fn resolve_target<R: RestResource>(
    operation: ResourceOperation,
    ids: &HashMap<&str, String>,
) -> Result<(HttpMethod, String), ResourceError> {
    let available_ids: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(R::PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;
    Ok((path.http_method, path.url(R::API_VERSION, ids)))
}

async fn fetch_page<R: RestResource>(
    client: &RestClient,
    ids: &HashMap<&str, String>,
    params: Option<&R::AllParams>,
    page: u32,
) -> Result<Page<R>, ResourceError> {
    let (method, url) = resolve_target::<R>(ResourceOperation::All, ids)?;

    let mut query = match params {
        Some(p) => serialize_to_query::<R, _>(p)?,
        None => BTreeMap::new(),
    };
    query.insert("page".to_string(), page.to_string());
    if R::PAGINATION == PaginationStyle::Count {
        query.insert("limit".to_string(), LEGACY_PAGE_LIMIT.to_string());
    }

    tracing::debug!(resource = R::NAME, page, path = %url, "Fetching page");

    let response = client.request(method, &url, None, Some(query)).await?;
    ResourceResponse::from_page_response(response, R::NAME, R::PAGINATION, page)
}

fn non_empty(query: BTreeMap<String, String>) -> Option<BTreeMap<String, String>> {
    Some(query).filter(|q| !q.is_empty())
}

/// Serializes a params struct to a query parameter map.
///
/// Nulls are skipped, arrays become comma-separated values and nested
/// objects are sent as JSON text.
fn serialize_to_query<R: RestResource, T: Serialize>(
    params: &T,
) -> Result<BTreeMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|source| ResourceError::EncodeFailed {
        resource: R::NAME,
        source,
    })?;

    let mut query = BTreeMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
