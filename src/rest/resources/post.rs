//! Blog post resource implementation.
//!
//! Posts live on the legacy `v2` API: lists are bare JSON arrays paged with
//! `limit=250&page=N`, and a page holding fewer than 250 posts is the last.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::RestResource;
//! use bigcommerce_api::rest::resources::{CreatePostPayload, Post};
//!
//! // One page
//! let page = Post::page(&client, None, 1).await?;
//!
//! // Every page
//! let posts = Post::all(&client, None).await?;
//!
//! // Create
//! let payload = CreatePostPayload::new("Spring sale", "<p>Everything 20% off</p>");
//! let post = Post::create(&client, &payload).await?;
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ApiVersion;
use crate::rest::{PaginationStyle, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::DateOrString;

/// A blog post.
///
/// `published_date` arrives either as a PHP date object or as an RFC 2822
/// string depending on the store; `published_date_iso8601` is always a
/// string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Post {
    /// The unique identifier of the post.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The post title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The post's path relative to the storefront root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Preview URL for unpublished posts.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub preview_url: Option<String>,

    /// The post body in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Tags attached to the post.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Summary shown in listings.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub summary: Option<String>,

    /// Whether the post is visible on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    /// When the post was published.
    #[serde(
        rename = "publisheddate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub published_date: Option<DateOrString>,

    /// The publication date in ISO 8601.
    /// Read-only field.
    #[serde(rename = "publisheddate_iso8601", skip_serializing)]
    pub published_date_iso8601: Option<String>,

    /// SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// SEO keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,

    /// The author's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Path of the thumbnail image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,
}

impl RestResource for Post {
    type Id = u64;
    type FindParams = ();
    type AllParams = PostListParams;
    type CreatePayload = CreatePostPayload;

    const NAME: &'static str = "Post";
    const API_VERSION: ApiVersion = ApiVersion::V2;
    const PAGINATION: PaginationStyle = PaginationStyle::Count;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "blog/posts/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "blog/posts"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "blog/posts",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Filters for listing posts.
///
/// `page` and `limit` are managed by the accessors and should not be set here.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PostListParams {
    /// Only published (or unpublished) posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    /// Only posts with this tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Additional filters, sent verbatim.
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

/// The fields accepted when creating a post.
///
/// `title` and `body` are required; every other field is omitted from the
/// request unless set.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CreatePostPayload {
    /// The post title.
    pub title: String,

    /// The post body in HTML.
    pub body: String,

    /// Custom path relative to the storefront root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Tags to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Whether to publish immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    /// SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// SEO keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,

    /// The author's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Path of the thumbnail image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,

    /// Publication date, e.g. RFC 2822.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

impl CreatePostPayload {
    /// Creates a payload with the required fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }
}
