//! Product image type.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// An image associated with a product.
///
/// Returned in `images` and `primary_image` when those sub-resources are
/// included.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::common::ProductImage;
///
/// let image = ProductImage {
///     image_url: Some("https://cdn.example.com/front.jpg".to_string()),
///     is_thumbnail: Some(true),
///     ..Default::default()
/// };
/// assert!(image.id.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    /// The unique identifier of the image.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the product this image belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Whether this image is the product's thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_thumbnail: Option<bool>,

    /// Display position among the product's images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Path of the uploaded file on the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,

    /// Source URL to fetch the image from when creating it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Zoom-size rendition URL.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url_zoom: Option<String>,

    /// Standard-size rendition URL.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url_standard: Option<String>,

    /// Thumbnail rendition URL.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url_thumbnail: Option<String>,

    /// Tiny rendition URL.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub url_tiny: Option<String>,

    /// When the image was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_image_deserialization() {
        let image: ProductImage = serde_json::from_str(
            r#"{
                "id": 372,
                "product_id": 111,
                "is_thumbnail": true,
                "sort_order": 0,
                "description": "",
                "image_file": "k/522/logo_1519.png",
                "url_zoom": "https://cdn.example.com/zoom.png",
                "url_standard": "https://cdn.example.com/standard.png",
                "url_thumbnail": "https://cdn.example.com/thumb.png",
                "url_tiny": "https://cdn.example.com/tiny.png",
                "date_modified": "2018-01-26T21:49:32+00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(image.id, Some(372));
        assert_eq!(image.is_thumbnail, Some(true));
        assert_eq!(
            image.date_modified.unwrap().to_rfc3339(),
            "2018-01-26T21:49:32+00:00"
        );
    }

    #[test]
    fn test_product_image_serialization_skips_read_only_fields() {
        let image = ProductImage {
            id: Some(1),
            image_url: Some("https://cdn.example.com/a.jpg".to_string()),
            url_zoom: Some("https://cdn.example.com/zoom.jpg".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json, serde_json::json!({"image_url": "https://cdn.example.com/a.jpg"}));
    }
}
