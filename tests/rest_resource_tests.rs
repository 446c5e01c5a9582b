//! Integration tests for resource accessors against a mock store.
//!
//! These tests verify request shaping (paths, query strings, bodies),
//! response decoding for both API generations, and error normalization.

use bigcommerce_api::rest::resources::common::MetafieldOwner;
use bigcommerce_api::rest::resources::{
    CreatePostPayload, CreateProductPayload, Metafield, Post, Product, ProductFindParams,
    ProductInclude, ProductIncludes, ProductType, Video,
};
use bigcommerce_api::rest::{
    PaginationStyle, ResourceError, ResourceOperation, ResourcePath, RestResource, UNKNOWN_ERROR,
};
use bigcommerce_api::{
    AccessToken, ApiHost, ApiVersion, BigCommerceConfig, HttpMethod, RestClient, StoreHash,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn create_client(server: &MockServer) -> RestClient {
    let config = BigCommerceConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
        .retry_delay(Duration::ZERO)
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

/// Answers a create call with the single submitted object plus an id.
///
/// Rejects any body that is not a one-element array.
struct EchoCreated {
    id: u64,
    wrap_in_data: bool,
}

impl Respond for EchoCreated {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(Value::Array(mut items)) = serde_json::from_slice::<Value>(&request.body) else {
            return ResponseTemplate::new(400).set_body_json(json!({
                "status": 400,
                "title": "Body must be a JSON array"
            }));
        };
        if items.len() != 1 {
            return ResponseTemplate::new(400).set_body_json(json!({
                "status": 400,
                "title": "Expected exactly one item"
            }));
        }

        let mut item = items.remove(0);
        item["id"] = json!(self.id);

        let body = if self.wrap_in_data {
            json!({"data": item, "meta": {}})
        } else {
            item
        };
        ResponseTemplate::new(200).set_body_json(body)
    }
}

/// A storefront redirect; the API upserts these with `PUT`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
struct Redirect {
    #[serde(skip_serializing)]
    id: Option<u64>,
    from_path: String,
    to_url: String,
}

impl RestResource for Redirect {
    type Id = u64;
    type FindParams = ();
    type AllParams = ();
    type CreatePayload = Self;

    const NAME: &'static str = "Redirect";
    const API_VERSION: ApiVersion = ApiVersion::V3;
    const PAGINATION: PaginationStyle = PaginationStyle::Meta;
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Put,
        ResourceOperation::Create,
        &[],
        "storefront/redirects",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

// ============================================================================
// Posts (v2)
// ============================================================================

#[tokio::test]
async fn test_post_find_decodes_bare_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/blog/posts/7"))
        .and(header("X-Auth-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "title": "Spring sale",
            "url": "/blog/spring-sale/",
            "body": "<p>Everything must go</p>",
            "tags": ["sale", "spring"],
            "is_published": true,
            "publisheddate": {
                "date": "2024-03-01 10:00:00.000000",
                "timezone_type": 1,
                "timezone": "+00:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let post = assert_ok!(Post::find(&client, 7, None).await);

    assert_eq!(post.id, Some(7));
    assert_eq!(post.title.as_deref(), Some("Spring sale"));
    assert_eq!(post.tags, vec!["sale".to_string(), "spring".to_string()]);
    assert_eq!(post.is_published, Some(true));
}

#[tokio::test]
async fn test_post_find_missing_returns_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/blog/posts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!([{
            "status": 404,
            "message": "The requested resource was not found."
        }])))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = assert_err!(Post::find(&client, 999, None).await);

    match error {
        ResourceError::NotFound { resource, id } => {
            assert_eq!(resource, "Post");
            assert_eq!(id, "999");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_post_create_sends_single_element_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v2/blog/posts"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!([{
            "title": "Hello",
            "body": "<p>World</p>",
            "tags": ["news"]
        }])))
        .respond_with(EchoCreated {
            id: 12,
            wrap_in_data: false,
        })
        .expect(1)
        .mount(&server)
        .await;

    let mut payload = CreatePostPayload::new("Hello", "<p>World</p>");
    payload.tags = vec!["news".to_string()];

    let client = create_client(&server);
    let post = Post::create(&client, &payload).await.unwrap();

    assert_eq!(post.id, Some(12));
    assert_eq!(post.title.as_deref(), Some("Hello"));
    assert_eq!(post.body.as_deref(), Some("<p>World</p>"));
    assert_eq!(post.tags, vec!["news".to_string()]);
}

#[tokio::test]
async fn test_post_create_validation_error_joins_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v2/blog/posts"))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("X-Request-Id", "req-422")
                .set_body_json(json!({"errors": {"title": "is required"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = Post::create(&client, &CreatePostPayload::new("", "body"))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "is required");
    assert_eq!(error.request_id(), Some("req-422"));
    match error {
        ResourceError::ValidationFailed { errors, .. } => {
            assert_eq!(errors["title"], vec!["is required".to_string()]);
        }
        other => panic!("Expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_post_create_empty_validation_error_is_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v2/blog/posts"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"errors": {}})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = Post::create(&client, &CreatePostPayload::new("t", "b"))
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::ValidationFailed { .. }));
    assert_eq!(error.to_string(), UNKNOWN_ERROR);
}

// ============================================================================
// Products (v3)
// ============================================================================

#[tokio::test]
async fn test_product_find_requests_every_include_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/111"))
        .and(query_param(
            "include",
            "variants,images,custom_fields,bulk_pricing_rules,primary_image,modifiers,options,videos",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 111,
                "name": "Smith Journal 13",
                "type": "physical",
                "price": 25.0,
                "variants": [{"id": 77, "product_id": 111, "sku": "SM-13"}],
                "custom_fields": [{"id": 1, "name": "ISBN", "value": "1234567890123"}],
                "bulk_pricing_rules": [
                    {"id": 2, "quantity_min": 10, "quantity_max": 50, "type": "percent", "amount": 5}
                ],
                "videos": [{"id": 3, "title": "Unboxing", "type": "youtube", "video_id": "abc"}]
            },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let product = Product::find(&client, 111, None).await.unwrap();

    assert_eq!(product.id, Some(111));
    assert_eq!(product.name.as_deref(), Some("Smith Journal 13"));
    assert_eq!(product.product_type, Some(ProductType::Physical));
    assert_eq!(product.variants.as_ref().map(Vec::len), Some(1));
    assert_eq!(product.custom_fields.as_ref().map(Vec::len), Some(1));
    assert_eq!(product.bulk_pricing_rules.as_ref().map(Vec::len), Some(1));
    assert_eq!(product.videos.as_ref().map(Vec::len), Some(1));
    assert!(product.images.is_none());
}

#[tokio::test]
async fn test_product_find_with_selected_includes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/5"))
        .and(query_param("include", "variants,images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 5, "name": "Mug"},
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ProductFindParams {
        include: ProductIncludes::new()
            .with(ProductInclude::Images)
            .with(ProductInclude::Variants),
        ..Default::default()
    };

    let client = create_client(&server);
    let product = Product::find(&client, 5, Some(params)).await.unwrap();

    assert_eq!(product.id, Some(5));
}

#[tokio::test]
async fn test_product_error_envelope_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/5"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status": 403,
            "title": "You don't have a required scope to access the endpoint",
            "type": "/api-docs/getting-started/api-status-codes"
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = Product::find(&client, 5, None).await.unwrap_err();

    assert!(!error.is_retryable());
    match error {
        ResourceError::Api { status, title, .. } => {
            assert_eq!(status, 403);
            assert_eq!(title, "You don't have a required scope to access the endpoint");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_product_create_round_trips_payload_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/catalog/products"))
        .respond_with(EchoCreated {
            id: 321,
            wrap_in_data: true,
        })
        .expect(1)
        .mount(&server)
        .await;

    let mut payload = CreateProductPayload::new("Journal", ProductType::Physical, 1.5, 12.0);
    payload.sku = Some("JRNL-1".to_string());
    payload.categories = vec![23, 24];

    let client = create_client(&server);
    let product = Product::create(&client, &payload).await.unwrap();

    assert_eq!(product.id, Some(321));
    assert_eq!(product.name.as_deref(), Some("Journal"));
    assert_eq!(product.product_type, Some(ProductType::Physical));
    assert_eq!(product.weight, Some(1.5));
    assert_eq!(product.price, Some(12.0));
    assert_eq!(product.sku.as_deref(), Some("JRNL-1"));
    assert_eq!(product.categories, vec![23, 24]);
}

// ============================================================================
// Metafields and videos
// ============================================================================

#[tokio::test]
async fn test_metafields_are_indexed_by_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/111/metafields"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "key": "color", "value": "red", "namespace": "attrs"},
                {"id": 2, "key": "size", "value": "L", "namespace": "attrs"}
            ],
            "meta": {"pagination": {"total": 2, "count": 2, "per_page": 50, "current_page": 1, "total_pages": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let metafields = Metafield::all_for_product(&client, 111).await.unwrap();

    assert_eq!(metafields.len(), 2);
    assert_eq!(metafields["color"].value, "red");
    assert_eq!(metafields["size"].id, Some(2));
}

#[tokio::test]
async fn test_brand_metafields_use_brand_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands/7/metafields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": {"pagination": {"total": 0, "count": 0, "per_page": 50, "current_page": 1, "total_pages": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let metafields = Metafield::all_for_owner(&client, MetafieldOwner::Brand, 7)
        .await
        .unwrap();

    assert!(metafields.is_empty());
}

#[tokio::test]
async fn test_videos_for_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/111/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "product_id": 111, "title": "Unboxing", "type": "youtube", "video_id": "dQw4w9WgXcQ", "sort_order": 1},
                {"id": 2, "product_id": 111, "title": "Review", "type": "youtube", "video_id": "xyz", "sort_order": 2}
            ],
            "meta": {"pagination": {"total": 2, "count": 2, "per_page": 50, "current_page": 1, "total_pages": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let videos = Video::all_for_product(&client, 111).await.unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].title.as_deref(), Some("Unboxing"));
    assert_eq!(videos[1].product_id, Some(111));
}

#[tokio::test]
async fn test_video_create_is_not_supported() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    let error = Video::create(&client, &Video::default()).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::PathResolutionFailed {
            resource: "Video",
            operation: "create"
        }
    ));
}

// ============================================================================
// Path methods
// ============================================================================

#[tokio::test]
async fn test_create_sends_the_method_declared_on_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/storefront/redirects"))
        .and(body_json(json!([{"from_path": "/old", "to_url": "/new"}])))
        .respond_with(EchoCreated {
            id: 5,
            wrap_in_data: true,
        })
        .expect(1)
        .mount(&server)
        .await;

    let redirect = Redirect {
        id: None,
        from_path: "/old".to_string(),
        to_url: "/new".to_string(),
    };

    let client = create_client(&server);
    let created = Redirect::create(&client, &redirect).await.unwrap();

    assert_eq!(created.id, Some(5));
    assert_eq!(created.from_path, "/old");
    assert_eq!(created.to_url, "/new");
}
