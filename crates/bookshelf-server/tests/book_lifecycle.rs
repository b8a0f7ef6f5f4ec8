//! End-to-end book lifecycle over real HTTP.
//!
//! Binds the full application (routes plus middleware) on an ephemeral port
//! with the in-memory repository and drives it with reqwest.

use std::net::SocketAddr;
use std::sync::Arc;

use bookshelf_server::{AppState, ServerConfig, build_app};
use bookshelf_store::MemoryStore;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_test::assert_ok;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookResponse {
    book_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookData {
    id: Uuid,
    title: String,
    author: String,
    description: String,
    is_favorite: bool,
    is_reading: bool,
    is_finished: bool,
}

/// Start the server and return its base URL.
async fn spawn_server() -> String {
    let config = ServerConfig::default();
    let state = AppState::new(Arc::new(MemoryStore::new()));
    let app = build_app(state, &config).unwrap();

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_dune_scenario() {
    let base = spawn_server().await;
    let client = Client::new();

    // Create
    let response = assert_ok!(
        client
            .post(format!("{base}/books"))
            .json(&json!({"title": "Dune", "author": "Herbert", "description": "..."}))
            .send()
            .await
    );
    assert_eq!(response.status(), StatusCode::CREATED);
    let CreateBookResponse { book_id } = response.json().await.unwrap();
    let book_url = format!("{base}/books/{book_id}");

    // Fetch: all flags false
    let response = client.get(&book_url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let book: BookData = response.json().await.unwrap();
    assert_eq!(book.id, book_id);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.description, "...");
    assert!(!book.is_favorite && !book.is_reading && !book.is_finished);

    // Start reading
    let response = client
        .patch(&book_url)
        .json(&json!({"isReading": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].is_string());

    let book: BookData = client.get(&book_url).send().await.unwrap().json().await.unwrap();
    assert!(book.is_reading);
    assert!(!book.is_favorite);
    assert!(!book.is_finished);

    // Delete
    let response = client.delete(&book_url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    // Gone
    let response = client.get(&book_url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].is_string());
    assert!(body.get("title").is_none());
}

#[tokio::test]
async fn test_list_reflects_creates_and_deletes() {
    let base = spawn_server().await;
    let client = Client::new();

    let mut ids = Vec::new();
    for title in ["Dune", "Dune", "Emma"] {
        let created: CreateBookResponse = client
            .post(format!("{base}/books"))
            .json(&json!({"title": title, "author": "x", "description": ""}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        ids.push(created.book_id);
    }

    let books: Vec<BookData> = client
        .get(format!("{base}/books"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(books.len(), 3);

    client
        .delete(format!("{base}/books/{}", ids[0]))
        .send()
        .await
        .unwrap();

    let books: Vec<BookData> = client
        .get(format!("{base}/books"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let remaining: Vec<Uuid> = books.iter().map(|b| b.id).collect();
    assert_eq!(remaining, ids[1..].to_vec());
}

#[tokio::test]
async fn test_request_id_header_and_health() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("request id header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(Uuid::parse_str(&request_id).is_ok());

    let response = client
        .get(format!("{base}/books"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me");
}

#[tokio::test]
async fn test_bad_requests() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{base}/books"))
        .json(&json!({"title": "Dune", "author": "Herbert"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .patch(format!("{base}/books/not-a-uuid"))
        .json(&json!({"isFavorite": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .delete(format!("{base}/books/{}", Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
