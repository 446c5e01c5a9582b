//! Metafield owner and attribute types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of resource a metafield is attached to, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldResourceType {
    /// A catalog product.
    Product,
    /// A catalog category.
    Category,
    /// A catalog brand.
    Brand,
    /// A product variant.
    Variant,
}

/// Who may read and write a metafield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldPermissionSet {
    /// Only the app that created it.
    AppOnly,
    /// Readable by other apps.
    Read,
    /// Readable and writable by other apps.
    Write,
    /// Readable by other apps and the storefront.
    ReadAndSfAccess,
    /// Writable by other apps, readable by the storefront.
    WriteAndSfAccess,
}

/// A resource whose metafields can be listed.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::common::MetafieldOwner;
///
/// assert_eq!(MetafieldOwner::Brand.to_path_segment(), "brands");
/// assert_eq!(MetafieldOwner::Brand.id_name(), "brand_id");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldOwner {
    /// Metafields of a product.
    Product,
    /// Metafields of a category.
    Category,
    /// Metafields of a brand.
    Brand,
}

impl MetafieldOwner {
    /// Returns the catalog path segment for this owner type.
    #[must_use]
    pub const fn to_path_segment(&self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Category => "categories",
            Self::Brand => "brands",
        }
    }

    /// Returns the path id placeholder name for this owner type.
    #[must_use]
    pub const fn id_name(&self) -> &'static str {
        match self {
            Self::Product => "product_id",
            Self::Category => "category_id",
            Self::Brand => "brand_id",
        }
    }
}

impl fmt::Display for MetafieldOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Product => "product",
            Self::Category => "category",
            Self::Brand => "brand",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metafield_owner_path_segments() {
        assert_eq!(MetafieldOwner::Product.to_path_segment(), "products");
        assert_eq!(MetafieldOwner::Category.to_path_segment(), "categories");
        assert_eq!(MetafieldOwner::Brand.to_path_segment(), "brands");
    }

    #[test]
    fn test_metafield_owner_id_names() {
        assert_eq!(MetafieldOwner::Product.id_name(), "product_id");
        assert_eq!(MetafieldOwner::Category.id_name(), "category_id");
    }

    #[test]
    fn test_metafield_owner_display() {
        assert_eq!(MetafieldOwner::Category.to_string(), "category");
    }

    #[test]
    fn test_permission_set_wire_names() {
        let set: MetafieldPermissionSet = serde_json::from_str(r#""read_and_sf_access""#).unwrap();
        assert_eq!(set, MetafieldPermissionSet::ReadAndSfAccess);
        assert_eq!(
            serde_json::to_string(&MetafieldPermissionSet::AppOnly).unwrap(),
            r#""app_only""#
        );
    }

    #[test]
    fn test_resource_type_wire_names() {
        let kind: MetafieldResourceType = serde_json::from_str(r#""variant""#).unwrap();
        assert_eq!(kind, MetafieldResourceType::Variant);
        assert!(serde_json::from_str::<MetafieldResourceType>(r#""order""#).is_err());
    }
}
