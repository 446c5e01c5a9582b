//! Common types embedded in REST resources.
//!
//! These types are not full REST resources themselves (they don't implement
//! `RestResource`), but are used as nested data within `Product`, `Post`
//! and `Metafield`.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::resources::common::{CustomField, NumberOrString};
//!
//! let field = CustomField {
//!     id: None,
//!     name: "Material".to_string(),
//!     value: "Oak".to_string(),
//! };
//! assert_eq!(field.name, "Material");
//! assert_eq!(NumberOrString::from(3.5).as_f64(), Some(3.5));
//! ```

mod bulk_pricing;
mod custom_field;
mod dynamic;
mod image;
mod metafield;

pub use bulk_pricing::{BulkPricingRule, BulkPricingType};
pub use custom_field::CustomField;
pub use dynamic::{DateOrString, LegacyDate, NumberOrString};
pub use image::ProductImage;
pub use metafield::{MetafieldOwner, MetafieldPermissionSet, MetafieldResourceType};
