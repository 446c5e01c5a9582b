//! Product video resource implementation.
//!
//! Videos are listed per product and are also embedded in `Product` when
//! the `videos` sub-resource is included.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::Video;
//!
//! let videos = Video::all_for_product(&client, 111).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::config::ApiVersion;
use crate::rest::{
    PaginationError, PaginationStyle, ResourceOperation, ResourcePath, RestResource,
};
use crate::HttpMethod;

/// A video attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Video {
    /// The unique identifier of the video.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The product the video belongs to.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub product_id: Option<u64>,

    /// The video title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The video description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display position among the product's videos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// The hosting provider, e.g. `"youtube"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,

    /// The provider's identifier for the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,

    /// Duration as reported by the provider, e.g. `"01:32"`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub length: Option<String>,
}

impl RestResource for Video {
    type Id = u64;
    type FindParams = ();
    type AllParams = ();
    type CreatePayload = Self;

    const NAME: &'static str = "Video";
    const API_VERSION: ApiVersion = ApiVersion::V3;
    const PAGINATION: PaginationStyle = PaginationStyle::Meta;

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &["product_id"],
        "catalog/products/{product_id}/videos",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Video {
    /// Fetches every video of a product.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] with the videos fetched before the failure.
    pub async fn all_for_product(
        client: &RestClient,
        product_id: u64,
    ) -> Result<Vec<Self>, PaginationError<Self>> {
        Self::all_with_parent(client, "product_id", product_id, None).await
    }
}
