//! Metafield resource implementation.
//!
//! Metafields are key/value records attached to catalog resources. The API
//! path depends on the owner:
//! - Products: `/v3/catalog/products/{product_id}/metafields`
//! - Categories: `/v3/catalog/categories/{category_id}/metafields`
//! - Brands: `/v3/catalog/brands/{brand_id}/metafields`
//!
//! Listings are returned indexed by `key`.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::Metafield;
//! use bigcommerce_api::rest::resources::common::MetafieldOwner;
//!
//! let metafields = Metafield::all_for_product(&client, 111).await?;
//! if let Some(color) = metafields.get("color") {
//!     println!("color = {}", color.value);
//! }
//!
//! let brand_fields = Metafield::all_for_owner(&client, MetafieldOwner::Brand, 7).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::config::ApiVersion;
use crate::rest::{
    PaginationStyle, ResourceError, ResourceOperation, ResourcePath, RestResource,
};
use crate::HttpMethod;

use super::common::{MetafieldOwner, MetafieldPermissionSet, MetafieldResourceType};

/// A metafield attached to a catalog resource.
///
/// `key` is unique per owner and namespace on the remote side.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// The unique identifier of the metafield.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The metafield key.
    #[serde(default)]
    pub key: String,

    /// The stored value.
    #[serde(default)]
    pub value: String,

    /// Groups related metafields, e.g. `"Warehouse Locations"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The ID of the owning resource.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub resource_id: Option<u64>,

    /// The kind of the owning resource.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub resource_type: Option<MetafieldResourceType>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Who may read and write the metafield.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_set: Option<MetafieldPermissionSet>,

    /// When the metafield was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<FixedOffset>>,

    /// When the metafield was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTime<FixedOffset>>,
}

impl RestResource for Metafield {
    type Id = u64;
    type FindParams = ();
    type AllParams = ();
    type CreatePayload = Self;

    const NAME: &'static str = "Metafield";
    const API_VERSION: ApiVersion = ApiVersion::V3;
    const PAGINATION: PaginationStyle = PaginationStyle::Meta;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["product_id"],
            "catalog/products/{product_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["category_id"],
            "catalog/categories/{category_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["brand_id"],
            "catalog/brands/{brand_id}/metafields",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Metafield {
    /// Fetches every metafield of a product, indexed by key.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] that stopped enumeration.
    pub async fn all_for_product(
        client: &RestClient,
        product_id: u64,
    ) -> Result<HashMap<String, Self>, ResourceError> {
        Self::all_for_owner(client, MetafieldOwner::Product, product_id).await
    }

    /// Fetches every metafield of a product, category or brand, indexed by key.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] that stopped enumeration.
    pub async fn all_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        owner_id: u64,
    ) -> Result<HashMap<String, Self>, ResourceError> {
        let metafields = Self::all_with_parent(client, owner.id_name(), owner_id, None).await?;
        Ok(Self::index_by_key(metafields))
    }

    /// Indexes metafields by key. On duplicate keys the last one wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::rest::resources::Metafield;
    ///
    /// let fields = vec![
    ///     Metafield { key: "color".to_string(), value: "red".to_string(), ..Default::default() },
    ///     Metafield { key: "size".to_string(), value: "L".to_string(), ..Default::default() },
    /// ];
    ///
    /// let indexed = Metafield::index_by_key(fields);
    /// assert_eq!(indexed.len(), 2);
    /// assert_eq!(indexed["color"].value, "red");
    /// ```
    #[must_use]
    pub fn index_by_key<I>(metafields: I) -> HashMap<String, Self>
    where
        I: IntoIterator<Item = Self>,
    {
        metafields
            .into_iter()
            .map(|metafield| (metafield.key.clone(), metafield))
            .collect()
    }
}
