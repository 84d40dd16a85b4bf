//! Products service against a mock REST server.

use catalog_ui::catalog::{Product, ProductResource, ProductsService};
use catalog_ui::http_client::RequestError;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> ProductsService {
    ProductsService::new(&format!("{}/", server.uri()))
}

fn draft() -> Product {
    Product::new("Test Product", "Test description", "19.99", "Test category")
}

#[tokio::test]
async fn list_gets_collection_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "title": "A", "description": "a", "price": "1.00", "category": "x" },
            { "id": 2, "title": "B", "description": "b", "price": 2.5, "category": "y" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let products = service_for(&server).list().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0], Product::new("A", "a", "1.00", "x").with_id("1"));
    assert_eq!(products[1].id.as_deref(), Some("2"));
    assert_eq!(products[1].price, "2.5");
}

#[tokio::test]
async fn list_maps_server_error_to_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service_for(&server).list().await.unwrap_err();

    assert!(matches!(err, RequestError::Status { status: 500, .. }));
}

#[tokio::test]
async fn list_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = service_for(&server).list().await.unwrap_err();

    assert!(matches!(err, RequestError::Decode { .. }));
}

#[tokio::test]
async fn create_posts_product_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(json!({
            "title": "Test Product",
            "description": "Test description",
            "price": "19.99",
            "category": "Test category"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 21,
            "title": "Test Product",
            "description": "Test description",
            "price": 19.99,
            "category": "Test category"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = service_for(&server).create(&draft()).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("21"));
    assert_eq!(created.price, "19.99");
}

#[tokio::test]
async fn update_puts_full_product_to_item_path() {
    let server = MockServer::start().await;
    let product = draft().with_id("1");
    Mock::given(method("PUT"))
        .and(path("/products/1"))
        .and(body_json(json!({
            "id": "1",
            "title": "Test Product",
            "description": "Test description",
            "price": "19.99",
            "category": "Test category"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&product))
        .expect(1)
        .mount(&server)
        .await;

    let updated = service_for(&server).update(&product).await.unwrap();

    assert_eq!(updated, product);
}

#[tokio::test]
async fn update_without_id_never_reaches_the_server() {
    let server = MockServer::start().await;

    let err = service_for(&server).update(&draft()).await.unwrap_err();

    assert!(matches!(err, RequestError::MissingId));
    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn delete_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "deleted": true })))
        .expect(1)
        .mount(&server)
        .await;

    let body = service_for(&server).delete("1").await.unwrap();

    assert_eq!(body, json!({ "id": 1, "deleted": true }));
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = service_for(&server).delete("9").await.unwrap();

    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn delete_missing_product_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = service_for(&server).delete("404").await.unwrap_err();

    assert!(matches!(err, RequestError::Status { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ProductsService::new(&format!("http://{}/", addr))
        .list()
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Transport { .. }));
}
