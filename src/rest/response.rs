//! Response wrapper and decoder for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! resource data with metadata like pagination and rate limit information,
//! and the decoding rules that turn a raw [`HttpResponse`] into one.
//!
//! # Response Shapes
//!
//! - Legacy (`v2`) lists are bare JSON arrays. A page "has more" when it is
//!   full, i.e. holds exactly [`LEGACY_PAGE_LIMIT`] items.
//! - Current (`v3`) lists are `{data: [...], meta: {pagination: {...}}}`
//!   envelopes. A page "has more" when `current_page < total_pages`.
//! - Single resources may be a bare object, a `{data: object}` envelope, or a
//!   one-element array (what a create call echoes back).
//!
//! # Deref Pattern
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`:
//!
//! ```rust,ignore
//! let page: Page<Product> = Product::page(&client, None, 1).await?;
//!
//! for product in page.iter() {
//!     println!("{}", product.name);
//! }
//!
//! if page.has_next_page() {
//!     // fetch page 2...
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::{HttpResponse, RateLimitInfo};
use crate::rest::ResourceError;

/// Fixed page size requested from legacy list endpoints.
pub const LEGACY_PAGE_LIMIT: usize = 250;

/// How a list endpoint signals that more pages exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationStyle {
    /// Legacy count-based paging: a full page implies another may follow.
    Count,
    /// Envelope paging: `meta.pagination.{current_page,total_pages}`.
    Meta,
}

/// Pagination state of a single fetched page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The page number that was fetched (1-based).
    pub current_page: u32,
    /// Total number of pages, when the API reports it.
    pub total_pages: Option<u32>,
    /// Total number of items across all pages, when the API reports it.
    pub total: Option<u64>,
    /// Whether another page should be requested.
    pub has_more: bool,
}

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::{Page, ResourceResponse};
///
/// let page: Page<&str> = ResourceResponse::page(vec!["a", "b"], 1, true);
///
/// assert_eq!(page.len(), 2);
/// assert!(page.has_next_page());
/// assert_eq!(page.into_inner(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<PaginationInfo>,
    rate_limit: Option<RateLimitInfo>,
    request_id: Option<String>,
}

/// One page of a paged collection.
pub type Page<T> = ResourceResponse<Vec<T>>;

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<PaginationInfo>,
        rate_limit: Option<RateLimitInfo>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if another page should be requested.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_more)
    }

    /// Returns the pagination info, if this is a page response.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Returns the rate limit information, if available.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimitInfo> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T> ResourceResponse<Vec<T>> {
    /// Creates a bare page with no response metadata.
    #[must_use]
    pub fn page(items: Vec<T>, current_page: u32, has_more: bool) -> Self {
        Self::new(
            items,
            Some(PaginationInfo {
                current_page,
                has_more,
                ..PaginationInfo::default()
            }),
            None,
            None,
        )
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes a single-resource response.
    ///
    /// # Arguments
    ///
    /// * `response` - The HTTP response
    /// * `resource` - The resource type name, used in errors
    /// * `id` - The requested id, so a 404 becomes [`ResourceError::NotFound`]
    ///
    /// # Errors
    ///
    /// Returns the classified [`ResourceError`] for non-2xx and 204 responses,
    /// [`ResourceError::Api`] for a 2xx `{status, title}` envelope,
    /// [`ResourceError::EmptyResponse`] for an empty body or array, and
    /// [`ResourceError::DecodeFailed`] if the body does not match `T`.
    pub fn from_http_response(
        response: HttpResponse,
        resource: &'static str,
        id: Option<&str>,
    ) -> Result<Self, ResourceError> {
        ensure_success(&response, resource, id)?;

        let value = response
            .json()
            .map_err(|e| ResourceError::decode_failed(resource, response.code, &response.body, e))?;

        if let Some(error) = envelope_error(&value, &response) {
            return Err(error);
        }

        let value = unwrap_single(value).ok_or(ResourceError::EmptyResponse { resource })?;
        let data: T = serde_json::from_value(value)
            .map_err(|e| ResourceError::decode_failed(resource, response.code, &response.body, e))?;

        Ok(Self::new(
            data,
            None,
            response.rate_limit,
            response.request_id().map(ToString::to_string),
        ))
    }
}

impl<T: DeserializeOwned> ResourceResponse<Vec<T>> {
    /// Decodes one page of a list endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoContent`] for 204, the classified error for
    /// other non-2xx responses, [`ResourceError::Api`] when a 2xx envelope
    /// carries a non-zero `status`, and [`ResourceError::DecodeFailed`] when
    /// the body does not decode.
    pub fn from_page_response(
        response: HttpResponse,
        resource: &'static str,
        style: PaginationStyle,
        page: u32,
    ) -> Result<Self, ResourceError> {
        ensure_success(&response, resource, None)?;

        let decode_err =
            |e| ResourceError::decode_failed(resource, response.code, &response.body, e);

        let (items, pagination) = match style {
            PaginationStyle::Count => {
                let items: Vec<T> = if response.body.trim().is_empty() {
                    Vec::new()
                } else {
                    serde_json::from_str(&response.body).map_err(decode_err)?
                };
                let has_more = items.len() == LEGACY_PAGE_LIMIT;
                let pagination = PaginationInfo {
                    current_page: page,
                    has_more,
                    ..PaginationInfo::default()
                };
                (items, pagination)
            }
            PaginationStyle::Meta => {
                let envelope: ListEnvelope<T> =
                    serde_json::from_str(&response.body).map_err(decode_err)?;

                if let Some(status) = envelope.status.filter(|s| *s != 0) {
                    return Err(ResourceError::Api {
                        status: u16::try_from(status).unwrap_or(response.code),
                        title: super::errors::ErrorEnvelope {
                            status: Some(status),
                            title: envelope.title,
                        }
                        .title_or_unknown(),
                        request_id: response.request_id().map(ToString::to_string),
                    });
                }

                let meta = envelope
                    .meta
                    .and_then(|m| m.pagination)
                    .unwrap_or_default();
                // Some endpoints omit `current_page`; trust the page we asked for.
                let current_page = if meta.current_page == 0 {
                    page
                } else {
                    meta.current_page
                };
                let pagination = PaginationInfo {
                    current_page,
                    total_pages: Some(meta.total_pages),
                    total: meta.total,
                    has_more: current_page < meta.total_pages,
                };
                (envelope.data, pagination)
            }
        };

        tracing::debug!(
            resource,
            page,
            items = items.len(),
            has_more = pagination.has_more,
            "Decoded page"
        );

        Ok(Self::new(
            items,
            Some(pagination),
            response.rate_limit,
            response.request_id().map(ToString::to_string),
        ))
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

fn ensure_success(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<&str>,
) -> Result<(), ResourceError> {
    if response.is_ok() && !response.is_no_content() {
        return Ok(());
    }
    Err(ResourceError::from_http_response(
        response.code,
        &response.body,
        resource,
        id,
        response.request_id(),
    ))
}

/// Detects a `{status, title}` error envelope delivered with a 2xx status.
fn envelope_error(value: &serde_json::Value, response: &HttpResponse) -> Option<ResourceError> {
    let object = value.as_object()?;
    if object.contains_key("data") || !object.contains_key("title") {
        return None;
    }
    let status = object
        .get("status")
        .and_then(serde_json::Value::as_i64)
        .filter(|s| *s != 0)?;

    Some(ResourceError::Api {
        status: u16::try_from(status).unwrap_or(response.code),
        title: object
            .get("title")
            .and_then(serde_json::Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(super::errors::UNKNOWN_ERROR)
            .to_string(),
        request_id: response.request_id().map(ToString::to_string),
    })
}

/// Unwraps `{data: x}`, `[x, ...]` and bare `x` to `x`.
fn unwrap_single(value: serde_json::Value) -> Option<serde_json::Value> {
    match value {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").and_then(unwrap_single)
        }
        serde_json::Value::Array(items) => items.into_iter().next(),
        serde_json::Value::Null => None,
        other => Some(other),
    }
}

#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct ListEnvelope<T> {
    #[serde(default)]
    data: Vec<T>,
    #[serde(default)]
    meta: Option<ListMeta>,
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Deserialize)]
struct ListMeta {
    #[serde(default)]
    pagination: Option<MetaPagination>,
}

#[derive(Default, Deserialize)]
struct MetaPagination {
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    current_page: u32,
    #[serde(default)]
    total_pages: u32,
}
