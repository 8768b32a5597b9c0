//! Adding, listing and removing books in a list

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_get_books_in_list_empty() {
    let app = TestApp::new().await;
    let list = app.create_list("Empty List").await;

    let (status, body) = app.get(&format!("/api/lists/{}/books/", list.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_books_in_missing_list() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/lists/99999/books/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_then_list_books() {
    let app = TestApp::new().await;
    let list = app.create_list("Filled List").await;
    let book = app.create_book("Book A", 2000, "Author A").await;
    app.create_book("Book B", 2001, "Author B").await;
    let uri = format!("/api/lists/{}/books/", list.id);

    let (status, body) = app.post(&uri, json!({"book_id": book.id})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"detail": "added"}));

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Book A");
    assert_eq!(body[0]["id"], book.id);
}

#[tokio::test]
async fn test_add_book_with_string_id() {
    let app = TestApp::new().await;
    let list = app.create_list("Strings").await;
    let book = app.create_book("Book A", 2000, "Author A").await;

    let (status, _) = app
        .post(
            &format!("/api/lists/{}/books/", list.id),
            json!({"book_id": book.id.to_string()}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(app
        .repository
        .list_items_get(list.id, book.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_add_book_missing_book_id() {
    let app = TestApp::new().await;
    let list = app.create_list("Bad Add").await;
    let uri = format!("/api/lists/{}/books/", list.id);

    let (status, body) = app.post(&uri, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("book_id"));

    // No body and no content type at all
    let request = Request::builder()
        .method("POST")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "book_id is required");
}

#[tokio::test]
async fn test_add_book_malformed_book_id() {
    let app = TestApp::new().await;
    let list = app.create_list("Malformed").await;
    let uri = format!("/api/lists/{}/books/", list.id);

    for book_id in [json!(0), json!(-3), json!("abc"), json!(true), json!(2.5)] {
        let (status, body) = app.post(&uri, json!({ "book_id": book_id })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "book_id = {}", book_id);
        assert!(body["detail"].as_str().unwrap().contains("book_id"));
    }
    assert_eq!(app.repository.list_items_count(list.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_book_id_reported_before_missing_list() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/lists/99999/books/", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("book_id"));
}

#[tokio::test]
async fn test_add_book_invalid_book_id() {
    let app = TestApp::new().await;
    let list = app.create_list("Invalid").await;

    let (status, _) = app
        .post(&format!("/api/lists/{}/books/", list.id), json!({"book_id": 99999}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_book_to_missing_list() {
    let app = TestApp::new().await;
    let book = app.create_book("Book A", 2000, "Author A").await;

    let (status, _) = app
        .post("/api/lists/99999/books/", json!({"book_id": book.id}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_book_idempotent() {
    let app = TestApp::new().await;
    let list = app.create_list("Idempotent").await;
    let book = app.create_book("Book A", 2000, "Author A").await;
    let uri = format!("/api/lists/{}/books/", list.id);

    for _ in 0..3 {
        let (status, body) = app.post(&uri, json!({"book_id": book.id})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["detail"], "added");
    }

    assert_eq!(app.repository.list_items_count(list.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_remove_book_from_list() {
    let app = TestApp::new().await;
    let list = app.create_list("Remove List").await;
    let book = app.create_book("Book A", 2000, "Author A").await;
    app.repository.list_items_add(list.id, book.id).await.unwrap();

    let (status, body) = app
        .delete(&format!("/api/lists/{}/books/{}/", list.id, book.id))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
    assert!(app
        .repository
        .list_items_get(list.id, book.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_remove_book_from_list_not_in_list() {
    let app = TestApp::new().await;
    let list = app.create_list("No Book").await;
    let book = app.create_book("Book A", 2000, "Author A").await;

    let (status, body) = app
        .delete(&format!("/api/lists/{}/books/{}/", list.id, book.id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "not found");

    let (status, _) = app
        .delete(&format!("/api/lists/99999/books/{}/", book.id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .delete(&format!("/api/lists/{}/books/abc/", list.id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_succeeds_only_once() {
    let app = TestApp::new().await;
    let list = app.create_list("Once").await;
    let book = app.create_book("Book A", 2000, "Author A").await;
    let add_uri = format!("/api/lists/{}/books/", list.id);
    let remove_uri = format!("/api/lists/{}/books/{}/", list.id, book.id);

    app.post(&add_uri, json!({"book_id": book.id})).await;

    let (status, _) = app.delete(&remove_uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    for _ in 0..2 {
        let (status, _) = app.delete(&remove_uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // The pair can be added again afterwards
    let (status, _) = app.post(&add_uri, json!({"book_id": book.id})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(app.repository.list_items_count(list.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_list_cascades_membership() {
    let app = TestApp::new().await;
    let list = app.create_list("Cascade").await;
    let book = app.create_book("Book A", 2000, "Author A").await;
    app.post(
        &format!("/api/lists/{}/books/", list.id),
        json!({"book_id": book.id}),
    )
    .await;

    let (status, _) = app.delete(&format!("/api/lists/{}/", list.id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/lists/{}/books/", list.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.repository.list_items_count(list.id).await.unwrap(), 0);

    // The book itself survives
    let (status, _) = app.get(&format!("/api/books/{}/", book.id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_membership_is_per_list() {
    let app = TestApp::new().await;
    let first = app.create_list("First").await;
    let second = app.create_list("Second").await;
    let book = app.create_book("Shared", 2000, "Author").await;

    for list in [&first, &second] {
        let (status, _) = app
            .post(&format!("/api/lists/{}/books/", list.id), json!({"book_id": book.id}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    app.delete(&format!("/api/lists/{}/books/{}/", first.id, book.id))
        .await;

    let (_, body) = app.get(&format!("/api/lists/{}/books/", first.id)).await;
    assert_eq!(body, json!([]));
    let (_, body) = app.get(&format!("/api/lists/{}/books/", second.id)).await;
    assert_eq!(body[0]["title"], "Shared");
}
