//! Exhaustive enumeration of paged collections.
//!
//! [`paginate`] drives a page-fetch function from page 1 until a page
//! reports no more results. Retryable failures (transport errors, 429, 5xx)
//! re-request the same page after a fixed delay; the budget counts
//! consecutive failures and is reset by every successful page. Any other
//! failure ends enumeration at once. Items gathered before a failure are
//! handed back inside [`PaginationError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{paginate, RetryPolicy};
//!
//! let posts = paginate("Post", client.retry_policy(), |page| {
//!     Post::page(&client, None, page)
//! })
//! .await?;
//! ```

use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::config::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY};
use crate::rest::{Page, ResourceError};

/// Bounded, fixed-delay retry budget for page fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Consecutive failures tolerated before giving up.
    pub max_retries: u32,
    /// Pause before re-requesting a failed page.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Creates a retry policy.
    #[must_use]
    pub const fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY)
    }
}

/// A failed enumeration, with the items fetched before the failure.
#[derive(Debug)]
pub struct PaginationError<T> {
    /// Items accumulated from the pages fetched before the failure.
    pub items: Vec<T>,
    /// The failure that ended enumeration.
    pub source: ResourceError,
}

impl<T> PaginationError<T> {
    /// Splits the error into the partial results and the failure.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, ResourceError) {
        (self.items, self.source)
    }
}

impl<T> fmt::Display for PaginationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (after {} items were fetched)",
            self.source,
            self.items.len()
        )
    }
}

impl<T: fmt::Debug> std::error::Error for PaginationError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl<T> From<PaginationError<T>> for ResourceError {
    fn from(error: PaginationError<T>) -> Self {
        error.source
    }
}

/// Fetches every page of a collection.
///
/// `fetch_page` is called with 1-based page numbers. Pages are requested
/// strictly one after another.
///
/// # Errors
///
/// Returns [`PaginationError`] carrying the items gathered so far and:
/// - [`ResourceError::MaxRetriesExceeded`] once consecutive retryable
///   failures exceed `policy.max_retries`
/// - the original error for any non-retryable failure, including
///   [`ResourceError::NoContent`]
pub async fn paginate<T, F, Fut>(
    resource: &'static str,
    policy: RetryPolicy,
    mut fetch_page: F,
) -> Result<Vec<T>, PaginationError<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, ResourceError>>,
{
    let mut items = Vec::new();
    let mut page: u32 = 1;
    let mut failures: u32 = 0;

    loop {
        match fetch_page(page).await {
            Ok(response) => {
                let has_more = response.has_next_page();
                items.extend(response.into_inner());

                if !has_more {
                    tracing::debug!(resource, pages = page, items = items.len(), "Fetched all pages");
                    return Ok(items);
                }

                failures = 0;
                page = page.saturating_add(1);
            }
            Err(error) if error.is_retryable() => {
                failures += 1;

                if failures > policy.max_retries {
                    tracing::warn!(
                        resource,
                        page,
                        retries = policy.max_retries,
                        error = %error,
                        "Max retries reached"
                    );
                    return Err(PaginationError {
                        items,
                        source: ResourceError::MaxRetriesExceeded {
                            resource,
                            page,
                            retries: policy.max_retries,
                            last_error: Box::new(error),
                        },
                    });
                }

                tracing::warn!(
                    resource,
                    page,
                    attempt = failures,
                    error = %error,
                    "Page fetch failed, retrying"
                );

                if !policy.delay.is_zero() {
                    tokio::time::sleep(policy.delay).await;
                }
            }
            Err(error) => return Err(PaginationError { items, source: error }),
        }
    }
}
