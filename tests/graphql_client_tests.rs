//! Integration tests for the GraphQL and storefront clients.

use sdt::clients::{GraphqlClient, GraphqlError, StorefrontClient};
use sdt::config::ShopContext;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn versioned_context(server: &MockServer) -> ShopContext {
    ShopContext::builder()
        .shop("test-shop")
        .access_token("test-token")
        .api_version("2025-01")
        .api_host(server.uri())
        .build()
        .unwrap()
}

fn versionless_context(server: &MockServer) -> ShopContext {
    ShopContext::builder()
        .shop("test-shop")
        .access_token("test-token")
        .api_host(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_query_posts_to_versioned_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-01/graphql.json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"query": "{ shop { name } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"shop": {"name": "Test Shop"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphqlClient::new(&versioned_context(&server), "test-token");
    let response = client.query("{ shop { name } }").await.unwrap();

    assert_eq!(response["data"]["shop"]["name"], "Test Shop");
}

#[tokio::test]
async fn test_query_without_version_omits_version_segment() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/graphql.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphqlClient::new(&versionless_context(&server), "test-token");
    client.query("{ shop { name } }").await.unwrap();
}

#[tokio::test]
async fn test_mutation_includes_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-01/graphql.json"))
        .and(body_json(json!({
            "query": "mutation($id: ID!) { x(id: $id) { id } }",
            "variables": {"id": "gid://shopify/Product/1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"x": null}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphqlClient::new(&versioned_context(&server), "test-token");
    client
        .mutate(
            "mutation($id: ID!) { x(id: $id) { id } }",
            &json!({"id": "gid://shopify/Product/1"}),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-01/graphql.json"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let client = GraphqlClient::new(&versioned_context(&server), "test-token");
    let error = client.query("{ shop { name } }").await.unwrap_err();

    match error {
        GraphqlError::Status { code, message } => {
            assert_eq!(code, 401);
            assert!(message.contains("unauthorized"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_storefront_list_extracts_edge_nodes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/graphql.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "metafieldStorefrontVisibilities": {
                    "pageInfo": {"hasNextPage": false},
                    "edges": [
                        {
                            "cursor": "a",
                            "node": {
                                "id": "gid://shopify/MetafieldStorefrontVisibility/1",
                                "legacyResourceId": "1",
                                "namespace": "inventory",
                                "key": "warehouse",
                                "ownerType": "PRODUCT",
                                "createdAt": "2024-01-01T00:00:00Z",
                                "updatedAt": "2024-01-01T00:00:00Z"
                            }
                        }
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let client = StorefrontClient::new(&versionless_context(&server), "test-token");
    let visibilities = client.list().await.unwrap();

    assert_eq!(visibilities.len(), 1);
    assert_eq!(visibilities[0].namespace, "inventory");
    assert_eq!(visibilities[0].owner_type, "PRODUCT");
}

#[tokio::test]
async fn test_storefront_list_rejects_unexpected_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/graphql.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let client = StorefrontClient::new(&versionless_context(&server), "test-token");
    let error = client.list().await.unwrap_err();

    assert!(matches!(error, GraphqlError::Shape { .. }));
}

#[tokio::test]
async fn test_storefront_create_reports_user_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/graphql.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "metafieldStorefrontVisibilityCreate": {
                    "metafieldStorefrontVisibility": null,
                    "userErrors": [{"field": ["input"], "message": "already exists"}]
                }
            }
        })))
        .mount(&server)
        .await;

    let client = StorefrontClient::new(&versionless_context(&server), "test-token");
    let error = client
        .create(&sdt::clients::VisibilityInput {
            namespace: "inventory".to_string(),
            key: "warehouse".to_string(),
            owner_type: "PRODUCT".to_string(),
        })
        .await
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("already exists"));
}
