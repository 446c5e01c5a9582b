//! BigCommerce REST resource implementations.
//!
//! # Available Resources
//!
//! | Resource      | API | Paging          | Accessors                                  |
//! |---------------|-----|-----------------|--------------------------------------------|
//! | [`Post`]      | v2  | count (250/page)| `find`, `page`, `all`, `create`            |
//! | [`Product`]   | v3  | `meta`          | `find`, `page`, `all`, `create`            |
//! | [`Metafield`] | v3  | `meta`          | `all_for_product`, `all_for_owner`         |
//! | [`Video`]     | v3  | `meta`          | `all_for_product`                          |
//!
//! Embedded types shared between resources live in [`common`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::RestResource;
//! use bigcommerce_api::rest::resources::{Product, ProductListParams};
//!
//! let product = Product::find(&client, 111, None).await?;
//! let products = Product::all(&client, Some(ProductListParams::default())).await?;
//! ```

pub mod common;

mod metafield;
mod post;
mod product;
mod video;

pub use metafield::Metafield;
pub use post::{CreatePostPayload, Post, PostListParams};
pub use product::{
    CreateProductPayload, CustomUrl, InventoryTracking, Product, ProductFindParams,
    ProductInclude, ProductIncludes, ProductListParams, ProductModifier, ProductOption,
    ProductOptionValue, ProductType, ProductVariant, VariantOptionValue,
};
pub use video::Video;
