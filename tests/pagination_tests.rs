//! Integration tests for exhaustive pagination against a mock store.
//!
//! These tests verify legacy count-based paging, `meta.pagination` paging,
//! the per-page retry budget and how partial results are returned.

use bigcommerce_api::rest::resources::{Post, Product, ProductListParams};
use bigcommerce_api::rest::{ResourceError, RestResource, LEGACY_PAGE_LIMIT};
use bigcommerce_api::{AccessToken, ApiHost, BigCommerceConfig, RestClient, StoreHash};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POSTS_PATH: &str = "/stores/abc123/v2/blog/posts";
const PRODUCTS_PATH: &str = "/stores/abc123/v3/catalog/products";

fn create_client(server: &MockServer, max_retries: u32) -> RestClient {
    let config = BigCommerceConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
        .max_retries(max_retries)
        .retry_delay(Duration::ZERO)
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn posts(first_id: u64, count: usize) -> Value {
    let items: Vec<Value> = (0..count as u64)
        .map(|i| json!({"id": first_id + i, "title": format!("Post {}", first_id + i)}))
        .collect();
    Value::Array(items)
}

fn product_page(ids: &[u64], current_page: u32, total_pages: u32) -> Value {
    let data: Vec<Value> = ids
        .iter()
        .map(|id| json!({"id": id, "name": format!("Product {id}")}))
        .collect();
    json!({
        "data": data,
        "meta": {
            "pagination": {
                "total": total_pages * 2,
                "count": ids.len(),
                "per_page": 2,
                "current_page": current_page,
                "total_pages": total_pages
            }
        }
    })
}

async fn mount_post_page(server: &MockServer, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Legacy (count-based) pagination
// ============================================================================

#[tokio::test]
async fn test_legacy_pages_are_fetched_until_a_short_page() {
    let server = MockServer::start().await;
    mount_post_page(&server, 1, posts(1, LEGACY_PAGE_LIMIT)).await;
    mount_post_page(&server, 2, posts(251, 10)).await;

    let client = create_client(&server, 3);
    let all = Post::all(&client, None).await.unwrap();

    assert_eq!(all.len(), 260);
    assert_eq!(all[0].id, Some(1));
    assert_eq!(all[259].id, Some(260));
}

#[tokio::test]
async fn test_legacy_exact_multiple_issues_one_extra_empty_request() {
    let server = MockServer::start().await;
    mount_post_page(&server, 1, posts(1, LEGACY_PAGE_LIMIT)).await;
    mount_post_page(&server, 2, posts(251, LEGACY_PAGE_LIMIT)).await;
    mount_post_page(&server, 3, json!([])).await;

    let client = create_client(&server, 3);
    let all = Post::all(&client, None).await.unwrap();

    assert_eq!(all.len(), 2 * LEGACY_PAGE_LIMIT);
}

#[tokio::test]
async fn test_legacy_single_page_sends_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts(1, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 3);
    let page = Post::page(&client, None, 1).await.unwrap();

    assert_eq!(page.len(), 3);
    assert!(!page.has_next_page());
}

// ============================================================================
// Meta pagination
// ============================================================================

#[tokio::test]
async fn test_meta_pagination_issues_one_request_per_page() {
    let server = MockServer::start().await;
    for (page, ids) in [(1_u32, [1_u64, 2]), (2, [3, 4]), (3, [5, 6])] {
        Mock::given(method("GET"))
            .and(path(PRODUCTS_PATH))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(product_page(&ids, page, 3)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = create_client(&server, 3);
    let products = Product::all(&client, None).await.unwrap();

    let ids: Vec<u64> = products.iter().filter_map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_meta_pagination_without_current_page_stops_at_total_pages() {
    let server = MockServer::start().await;
    for page in [1_u32, 2] {
        Mock::given(method("GET"))
            .and(path(PRODUCTS_PATH))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": page, "name": format!("Product {page}")}],
                "meta": {"pagination": {"total_pages": 2}}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = create_client(&server, 0);
    let products = Product::all(&client, None).await.unwrap();

    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn test_meta_pagination_forwards_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("page", "1"))
        .and(query_param("is_visible", "true"))
        .and(query_param("include_fields", "name,sku"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page(&[9], 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = ProductListParams {
        include_fields: vec!["name".to_string(), "sku".to_string()],
        ..Default::default()
    };
    params
        .filters
        .insert("is_visible".to_string(), "true".to_string());

    let client = create_client(&server, 3);
    let products = Product::all(&client, Some(params)).await.unwrap();

    assert_eq!(products.len(), 1);
}

// ============================================================================
// Retry budget
// ============================================================================

#[tokio::test]
async fn test_transient_failure_retries_the_same_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "status": 503,
            "title": "Service Unavailable"
        })))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    for page in [1_u32, 2] {
        Mock::given(method("GET"))
            .and(path(PRODUCTS_PATH))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(product_page(&[u64::from(page)], page, 2)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = create_client(&server, 1);
    let products = Product::all(&client, None).await.unwrap();

    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn test_persistent_server_errors_exhaust_retries_with_partial_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page(&[1, 2], 1, 3)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": 500,
            "title": "Internal Server Error"
        })))
        // initial attempt + 2 retries
        .expect(3)
        .mount(&server)
        .await;

    let client = create_client(&server, 2);
    let error = Product::all(&client, None).await.unwrap_err();

    assert_eq!(error.items.len(), 2);
    assert!(error.source.to_string().starts_with("max retries reached"));
    match error.source {
        ResourceError::MaxRetriesExceeded {
            page,
            retries,
            last_error,
            ..
        } => {
            assert_eq!(page, 2);
            assert_eq!(retries, 2);
            assert!(matches!(*last_error, ResourceError::Api { status: 500, .. }));
        }
        other => panic!("Expected MaxRetriesExceeded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "title": "Invalid include value"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 5);
    let (items, source) = Product::all(&client, None).await.unwrap_err().into_parts();

    assert!(items.is_empty());
    match source {
        ResourceError::Api { status, title, .. } => {
            assert_eq!(status, 400);
            assert_eq!(title, "Invalid include value");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_content_page_ends_enumeration_with_accumulated_items() {
    let server = MockServer::start().await;
    mount_post_page(&server, 1, posts(1, LEGACY_PAGE_LIMIT)).await;
    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, 3);
    let error = Post::all(&client, None).await.unwrap_err();

    assert_eq!(error.items.len(), LEGACY_PAGE_LIMIT);
    assert!(matches!(
        error.source,
        ResourceError::NoContent { resource: "Post" }
    ));
}
