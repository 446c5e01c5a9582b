//! Product resource implementation.
//!
//! Products live on the `v3` catalog API. Lists are `{data, meta}`
//! envelopes paged through `meta.pagination`, and sub-resources (variants,
//! images, videos, ...) are only returned when requested through
//! [`ProductIncludes`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::RestResource;
//! use bigcommerce_api::rest::resources::{
//!     CreateProductPayload, Product, ProductInclude, ProductIncludes, ProductListParams, ProductType,
//! };
//!
//! // Find a single product with every sub-resource
//! let product = Product::find(&client, 111, None).await?;
//!
//! // List visible products with their images
//! let mut params = ProductListParams {
//!     include: ProductIncludes::new().with(ProductInclude::Images),
//!     ..Default::default()
//! };
//! params.filters.insert("is_visible".to_string(), "true".to_string());
//! let products = Product::all(&client, Some(params)).await?;
//!
//! // Create a product
//! let payload = CreateProductPayload::new("Oak table", ProductType::Physical, 12.5, 199.0);
//! let created = Product::create(&client, &payload).await?;
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};

use crate::config::ApiVersion;
use crate::rest::{PaginationStyle, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::{BulkPricingRule, CustomField, DateOrString, ProductImage};
use super::Video;

/// Whether a product is shipped or downloaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// A shipped product.
    #[default]
    Physical,
    /// A downloadable product.
    Digital,
}

/// How stock is counted for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InventoryTracking {
    /// Stock is not tracked.
    None,
    /// Stock is tracked on the product.
    Product,
    /// Stock is tracked per variant.
    Variant,
}

/// A product's storefront URL.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomUrl {
    /// Path relative to the storefront root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Whether the URL was set by hand rather than generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_customized: Option<bool>,
}

/// One option value chosen by a variant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariantOptionValue {
    /// The option value ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The option value label, e.g. `"Blue"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The option this value belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<u64>,

    /// The option's display name, e.g. `"Color"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_display_name: Option<String>,
}

/// A variant embedded within a Product response.
///
/// Variants are independent SKUs with their own pricing, dimensions and
/// inventory.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariant {
    /// The unique identifier of the variant.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The product this variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The variant SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Legacy SKU ID; null for base variants.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub sku_id: Option<i64>,

    /// Variant price; null inherits the product price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Price after rules and taxes.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub calculated_price: Option<f64>,

    /// Sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,

    /// Retail (MSRP) price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,

    /// Minimum advertised price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_price: Option<f64>,

    /// Cost price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,

    /// Weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,

    /// Weight after inheritance from the product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub calculated_weight: Option<f64>,

    /// Whether shipping is free.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_shipping: Option<bool>,

    /// Flat shipping price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_cost_shipping_price: Option<f64>,

    /// Whether the variant cannot be purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_disabled: Option<bool>,

    /// Message shown when purchasing is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_disabled_message: Option<String>,

    /// Variant image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Universal Product Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// Manufacturer Part Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,

    /// Global Trade Item Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,

    /// Stock on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,

    /// Low-stock threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_warning_level: Option<i64>,

    /// Warehouse bin picking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_picking_number: Option<String>,

    /// The option values that define this variant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_values: Vec<VariantOptionValue>,
}

/// A selectable value of a [`ProductOption`] or [`ProductModifier`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductOptionValue {
    /// The unique identifier of the value.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The value label, e.g. `"Large"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Display position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// Whether the value is preselected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    /// Type-specific data, e.g. swatch colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_data: Option<serde_json::Value>,
}

/// A variant option (e.g., Size, Color).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductOption {
    /// The unique identifier of the option.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The product this option belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The name shown to shoppers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The control type, e.g. `"dropdown"` or `"swatch"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub option_type: Option<String>,

    /// Display position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// The selectable values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_values: Vec<ProductOptionValue>,
}

/// A modifier: an option that does not create variants (e.g., gift text).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductModifier {
    /// The unique identifier of the modifier.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The product this modifier belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Internal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The name shown to shoppers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The control type, e.g. `"text"` or `"checkbox"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub modifier_type: Option<String>,

    /// Whether the shopper must fill it in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Display position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// Type-specific configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,

    /// The selectable values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_values: Vec<ProductOptionValue>,
}

/// A catalog product.
///
/// # Nested Resources
///
/// `variants`, `images`, `primary_image`, `videos`, `custom_fields`,
/// `bulk_pricing_rules`, `options` and `modifiers` are `None` unless the
/// matching [`ProductInclude`] was requested.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Physical or digital.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The description in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,

    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Default price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Cost price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,

    /// Retail (MSRP) price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,

    /// Sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,

    /// Minimum advertised price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_price: Option<f64>,

    /// Price after rules and taxes.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub calculated_price: Option<f64>,

    /// Tax class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class_id: Option<u64>,

    /// Tax provider product code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_tax_code: Option<String>,

    /// Category IDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<u64>,

    /// Brand ID; `0` for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<u64>,

    /// Legacy option set; null when none is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_set_id: Option<i64>,

    /// Where the option set is displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_set_display: Option<String>,

    /// Stock on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,

    /// Low-stock threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_warning_level: Option<i64>,

    /// Stock tracking mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_tracking: Option<InventoryTracking>,

    /// Sum of review ratings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_rating_sum: Option<i64>,

    /// Number of reviews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<i64>,

    /// Units sold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sold: Option<i64>,

    /// Flat shipping price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_cost_shipping_price: Option<f64>,

    /// Whether shipping is free.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_shipping: Option<bool>,

    /// Whether the product is shown on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Whether the product is featured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    /// Related product IDs; `[-1]` lets the store pick.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_products: Vec<i64>,

    /// Warranty text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,

    /// Warehouse bin picking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_picking_number: Option<String>,

    /// Storefront template file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<String>,

    /// Universal Product Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// Manufacturer Part Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,

    /// Global Trade Item Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,

    /// Extra search terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,

    /// `available`, `disabled` or `preorder`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Availability text shown to shoppers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_description: Option<String>,

    /// `any`, `none` or `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrapping_options_type: Option<String>,

    /// Gift wrapping option IDs when the type is `list`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gift_wrapping_options_list: Vec<u64>,

    /// Display position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// `New`, `Used` or `Refurbished`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// Whether the condition is shown on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_condition_shown: Option<bool>,

    /// Minimum order quantity; `0` for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_minimum: Option<i64>,

    /// Maximum order quantity; `0` for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_maximum: Option<i64>,

    /// SEO page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    /// SEO keywords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta_keywords: Vec<String>,

    /// SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<FixedOffset>>,

    /// When the product was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTime<FixedOffset>>,

    /// Storefront page views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<i64>,

    /// When a preorder product becomes available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preorder_release_date: Option<DateOrString>,

    /// Message shown on preorder products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_message: Option<String>,

    /// Whether the product can only be preordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preorder_only: Option<bool>,

    /// Whether the price is hidden on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_price_hidden: Option<bool>,

    /// Text shown in place of a hidden price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_hidden_label: Option<String>,

    /// Storefront URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<CustomUrl>,

    /// The variant holding the product's own SKU data.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub base_variant_id: Option<u64>,

    /// Open Graph object type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_type: Option<String>,

    /// Open Graph title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_title: Option<String>,

    /// Open Graph description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_description: Option<String>,

    /// Use `meta_description` for Open Graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_meta_description: Option<bool>,

    /// Use `name` for Open Graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_product_name: Option<bool>,

    /// Use the primary image for Open Graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_image: Option<bool>,

    /// Included with [`ProductInclude::Variants`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,

    /// Included with [`ProductInclude::Images`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,

    /// Included with [`ProductInclude::PrimaryImage`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_image: Option<ProductImage>,

    /// Included with [`ProductInclude::Videos`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<Video>>,

    /// Included with [`ProductInclude::CustomFields`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,

    /// Included with [`ProductInclude::BulkPricingRules`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_pricing_rules: Option<Vec<BulkPricingRule>>,

    /// Included with [`ProductInclude::Options`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    /// Included with [`ProductInclude::Modifiers`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<ProductModifier>>,
}

impl RestResource for Product {
    type Id = u64;
    type FindParams = ProductFindParams;
    type AllParams = ProductListParams;
    type CreatePayload = CreateProductPayload;

    const NAME: &'static str = "Product";
    const API_VERSION: ApiVersion = ApiVersion::V3;
    const PAGINATION: PaginationStyle = PaginationStyle::Meta;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "catalog/products/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "catalog/products",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "catalog/products",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// A product sub-resource that can be embedded in responses.
///
/// Variants are declared in the order they are sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductInclude {
    /// `variants`
    Variants,
    /// `images`
    Images,
    /// `custom_fields`
    CustomFields,
    /// `bulk_pricing_rules`
    BulkPricingRules,
    /// `primary_image`
    PrimaryImage,
    /// `modifiers`
    Modifiers,
    /// `options`
    Options,
    /// `videos`
    Videos,
}

impl ProductInclude {
    /// Every sub-resource.
    pub const ALL: [Self; 8] = [
        Self::Variants,
        Self::Images,
        Self::CustomFields,
        Self::BulkPricingRules,
        Self::PrimaryImage,
        Self::Modifiers,
        Self::Options,
        Self::Videos,
    ];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Variants => "variants",
            Self::Images => "images",
            Self::CustomFields => "custom_fields",
            Self::BulkPricingRules => "bulk_pricing_rules",
            Self::PrimaryImage => "primary_image",
            Self::Modifiers => "modifiers",
            Self::Options => "options",
            Self::Videos => "videos",
        }
    }
}

impl fmt::Display for ProductInclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of sub-resources to embed, sent as the `include` query parameter.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::{ProductInclude, ProductIncludes};
///
/// let includes = ProductIncludes::new()
///     .with(ProductInclude::Videos)
///     .with(ProductInclude::Variants)
///     .with(ProductInclude::Videos);
///
/// assert_eq!(includes.to_string(), "variants,videos");
/// assert_eq!(
///     ProductIncludes::all().to_string(),
///     "variants,images,custom_fields,bulk_pricing_rules,primary_image,modifiers,options,videos"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductIncludes(BTreeSet<ProductInclude>);

impl ProductIncludes {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a set holding every sub-resource.
    #[must_use]
    pub fn all() -> Self {
        ProductInclude::ALL.into_iter().collect()
    }

    /// Adds a sub-resource, returning the set.
    #[must_use]
    pub fn with(mut self, include: ProductInclude) -> Self {
        self.0.insert(include);
        self
    }

    /// Adds a sub-resource.
    pub fn insert(&mut self, include: ProductInclude) {
        self.0.insert(include);
    }

    /// Returns `true` if the sub-resource is requested.
    #[must_use]
    pub fn contains(&self, include: ProductInclude) -> bool {
        self.0.contains(&include)
    }

    /// Returns `true` if nothing is requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in wire order.
    pub fn iter(&self) -> impl Iterator<Item = ProductInclude> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ProductInclude> for ProductIncludes {
    fn from_iter<I: IntoIterator<Item = ProductInclude>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ProductIncludes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(ProductInclude::as_str).collect();
        f.write_str(&joined.join(","))
    }
}

impl Serialize for ProductIncludes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parameters for finding a single product.
///
/// The default requests every sub-resource.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductFindParams {
    /// Sub-resources to embed.
    #[serde(skip_serializing_if = "ProductIncludes::is_empty")]
    pub include: ProductIncludes,

    /// Restrict the response to these fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_fields: Vec<String>,
}

impl Default for ProductFindParams {
    fn default() -> Self {
        Self {
            include: ProductIncludes::all(),
            include_fields: Vec::new(),
        }
    }
}

/// Parameters for listing products.
///
/// `page` is managed by the accessors and should not be set in `filters`.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Sub-resources to embed.
    #[serde(skip_serializing_if = "ProductIncludes::is_empty")]
    pub include: ProductIncludes,

    /// Restrict the response to these fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_fields: Vec<String>,

    /// Additional filters (e.g. `is_visible`, `categories:in`), sent verbatim.
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

/// The fields accepted when creating a product.
///
/// `name`, `type`, `weight` and `price` are required. Every other field is
/// omitted from the request unless set, so an explicit zero is sent as zero.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CreateProductPayload {
    /// The product name.
    pub name: String,

    /// Physical or digital.
    #[serde(rename = "type")]
    pub product_type: ProductType,

    /// Weight.
    pub weight: f64,

    /// Default price.
    pub price: f64,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The description in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,

    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Cost price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,

    /// Retail (MSRP) price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,

    /// Sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,

    /// Tax class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class_id: Option<u64>,

    /// Category IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<u64>,

    /// Brand ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<u64>,

    /// Legacy option set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_set_id: Option<i64>,

    /// Where the option set is displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_set_display: Option<String>,

    /// Stock on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,

    /// Low-stock threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_warning_level: Option<i64>,

    /// Stock tracking mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_tracking: Option<InventoryTracking>,

    /// `available`, `disabled` or `preorder`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Availability text shown to shoppers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_description: Option<String>,

    /// `any`, `none` or `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrapping_options_type: Option<String>,

    /// Gift wrapping option IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gift_wrapping_options_list: Vec<u64>,

    /// Display position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// `New`, `Used` or `Refurbished`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// Whether the condition is shown on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_condition_shown: Option<bool>,

    /// Whether the product is shown on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Whether the product is featured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    /// Universal Product Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// Extra search terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,

    /// Warranty text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,

    /// Warehouse bin picking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_picking_number: Option<String>,

    /// Storefront template file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<String>,

    /// SEO page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,

    /// SEO keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,

    /// SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Storefront page views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<i64>,

    /// When a preorder product becomes available (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_release_date: Option<String>,

    /// Message shown on preorder products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_message: Option<String>,

    /// Minimum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_minimum: Option<i64>,

    /// Maximum order quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_maximum: Option<i64>,

    /// Related product IDs to cross-sell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_selling_related_products: Option<Vec<u64>>,

    /// Images to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,

    /// Videos to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Video>,

    /// Custom fields to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,

    /// Bulk pricing rules to attach.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bulk_pricing_rules: Vec<BulkPricingRule>,
}

impl CreateProductPayload {
    /// Creates a payload with the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, product_type: ProductType, weight: f64, price: f64) -> Self {
        Self {
            name: name.into(),
            product_type,
            weight,
            price,
            ..Default::default()
        }
    }
}
