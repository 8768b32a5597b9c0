//! Writes against a WAL database file with a multi-connection pool

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use crate::common::TestApp;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_created_list_is_visible_to_later_requests() {
    let app = TestApp::file_backed().await;

    let (status, body) = app.post("/api/lists/", json!({"name": "Filled List"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    let uri = format!("/api/lists/{}/", id);

    // More reads than pooled connections, so several connections see the row
    for _ in 0..10 {
        let (status, body) = app.get(&uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Filled List");
    }

    let (status, _) = app
        .request(Method::PUT, &uri, Some(json!({"name": "Renamed"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    for _ in 0..10 {
        let (_, body) = app.get(&uri).await;
        assert_eq!(body["name"], "Renamed");
    }

    let (_, body) = app.get("/api/lists/").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_created_book_can_be_added_right_away() {
    let app = TestApp::file_backed().await;
    let list = app.create_list("Fresh").await;
    let book = app.create_book("Just Written", 2024, "Author").await;
    let uri = format!("/api/lists/{}/books/", list.id);

    let (status, body) = app.post(&uri, json!({"book_id": book.id})).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Just Written");

    let (status, _) = app.get(&format!("/api/books/{}/", book.id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_all_succeed() {
    let app = TestApp::file_backed().await;
    let list = app.create_list("Race").await;
    let uri = format!("/api/lists/{}/books/", list.id);

    for round in 0..20 {
        let book = app.create_book(&format!("Contended {}", round), 2000, "Author").await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let router = app.router.clone();
            let request = Request::builder()
                .method("POST")
                .uri(&uri)
                .header("content-type", "application/json")
                .body(Body::from(json!({"book_id": book.id}).to_string()))
                .unwrap();
            handles.push(tokio::spawn(async move {
                router.oneshot(request).await.unwrap().status()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), StatusCode::CREATED, "round {}", round);
        }

        assert!(app
            .repository
            .list_items_get(list.id, book.id)
            .await
            .unwrap()
            .is_some());
    }

    assert_eq!(app.repository.list_items_count(list.id).await.unwrap(), 20);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_add_reports_missing_list_then_missing_book() {
    let app = TestApp::file_backed().await;
    let list = app.create_list("Checks").await;
    let book = app.create_book("Present", 2000, "Author").await;

    let (status, body) = app.post("/api/lists/99999/books/", json!({"book_id": 88888})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("list"));

    let (status, body) = app
        .post(&format!("/api/lists/{}/books/", list.id), json!({"book_id": 88888}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Book 88888 not found");

    let (status, _) = app
        .post("/api/lists/99999/books/", json!({"book_id": book.id}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.repository.list_items_count(list.id).await.unwrap(), 0);
}
