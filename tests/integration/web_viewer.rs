//! Integration tests for the web viewer routes

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use sdbview::store::{MemoryClient, SharedClient};
use sdbview::web::{domain_items_query, router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

use crate::integration::test_utils::{item, RecordingClient};

async fn get(client: SharedClient, uri: &str) -> (StatusCode, Option<String>, String) {
    let app = router(AppState::new(client).unwrap());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, location, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_root_redirects_to_domain_list() {
    let (status, location, _) = get(Arc::new(MemoryClient::new()), "/").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/domain"));
}

#[tokio::test]
async fn test_domain_list_page() {
    let client = Arc::new(RecordingClient::with_domains(&["users", "orders"]));
    let (status, _, body) = get(client, "/domain").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>Available domains</h2>"));
    assert!(body.contains(r#"<a href="domain/users">users</a>"#));
}

#[tokio::test]
async fn test_domain_page_runs_fixed_query() {
    let client = Arc::new(RecordingClient::with_items(vec![
        item("i2", &[("color", "blue")]),
        item("i1", &[("color", "red"), ("size", "M")]),
    ]));
    let (status, _, body) = get(client.clone(), "/domain/things").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        client.calls(),
        vec![format!("select({})", domain_items_query("things"))]
    );
    assert_eq!(
        domain_items_query("things"),
        "select * from things where ItemName() > '0' order by ItemName() desc"
    );
    assert!(body.contains("<h2>Items for domain: things</h2>"));
    assert_eq!(body.matches("<th>").count(), 3);
    assert_eq!(body.matches("<td>").count(), 5);
}

#[tokio::test]
async fn test_store_failure_renders_error_page_with_ok_status() {
    let client = Arc::new(RecordingClient::failing("AuthFailure"));
    let (status, _, body) = get(client.clone(), "/domain").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Error occures - sdbcli</title>"));
    assert!(body.contains("AuthFailure: request rejected"));

    let (status, _, body) = get(client, "/domain/users").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("AuthFailure: request rejected"));
}

#[tokio::test]
async fn test_memory_store_domain_page() {
    let client = MemoryClient::new();
    client.put_item("users", item("0", &[("skipped", "yes")]));
    client.put_item("users", item("alice", &[("role", "admin")]));
    client.put_item("users", item("bob", &[("role", "dev")]));
    let (_, _, body) = get(Arc::new(client), "/domain/users").await;

    let bob = body.find("<td>bob</td>").unwrap();
    let alice = body.find("<td>alice</td>").unwrap();
    assert!(bob < alice, "items are ordered by name descending");
    assert!(!body.contains("skipped"));
}

#[tokio::test]
async fn test_empty_domain_page() {
    let client = MemoryClient::new();
    client.put_item("users", item("0", &[]));
    let (_, _, body) = get(Arc::new(client), "/domain/users").await;
    assert!(body.contains("No items in domain"));
}

#[tokio::test]
async fn test_empty_domain_name_is_an_error() {
    let client = Arc::new(RecordingClient::with_domains(&["users"]));
    let (status, _, body) = get(client.clone(), "/domain/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Domain name can not be empty"));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_concurrent_requests_share_one_client() {
    let client = Arc::new(RecordingClient::with_domains(&["users"]));
    let app = router(AppState::new(client.clone()).unwrap());

    let requests = (0..8).map(|_| {
        let app = app.clone();
        tokio::spawn(async move {
            app.oneshot(Request::builder().uri("/domain").body(Body::empty()).unwrap())
                .await
                .unwrap()
                .status()
        })
    });
    for handle in requests.collect::<Vec<_>>() {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
    assert_eq!(client.calls().len(), 8);
}
