//! Router tests against a live Postgres
//!
//! Ignored by default; run with `cargo test -- --ignored` and `DATABASE_URL` set.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{seed_category, seed_tag, seed_topic, seed_user, test_pool};
use devforum_server::db::{NewUser, UserRepo};
use devforum_server::models::{Email, Experience, Handle, UserStatus};
use devforum_server::{build_router, ServerConfig};

fn app(pool: &PgPool) -> Router {
    build_router(pool.clone(), &ServerConfig::default())
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post(app: &Router, uri: &str, json: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// === Forum ===

#[tokio::test]
#[ignore = "requires database"]
async fn test_forum_lists_topics_with_author_and_category() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice").await;
    let rust = seed_category(&pool, "rust").await;
    let topic = seed_topic(&pool, "Pinning", rust.id, alice.id, vec![]).await;

    let response = get(&app(&pool), "/forum").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let topics = body.as_array().unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["id"], topic.id);
    assert_eq!(topics[0]["title"], "Pinning");
    assert_eq!(topics[0]["author"]["handle"], "alice");
    assert_eq!(topics[0]["category"]["name"], "rust");
    assert_eq!(topics[0]["category"]["color"], "#336699");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_empty_forum_is_empty_array() {
    let pool = test_pool().await;

    let body = body_json(get(&app(&pool), "/forum").await).await;
    assert_eq!(body, serde_json::json!([]));
}

// === Topic detail ===

#[tokio::test]
#[ignore = "requires database"]
async fn test_topic_detail_counts_views_on_both_paths() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice").await;
    let rust = seed_category(&pool, "rust").await;
    let tag = seed_tag(&pool, "async").await;
    let topic = seed_topic(&pool, "Wakers", rust.id, alice.id, vec![tag.id]).await;
    let app = app(&pool);

    let first = get(&app, &format!("/topic/{}", topic.id)).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;
    assert_eq!(first["views"], 1);
    assert_eq!(first["title"], "Wakers");
    assert_eq!(first["tags"][0]["name"], "async");

    let second = body_json(get(&app, &format!("/t/{}", topic.id)).await).await;
    assert_eq!(second["views"], 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_missing_topic_is_json_404() {
    let pool = test_pool().await;

    let response = get(&app(&pool), "/topic/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "topic '9999' not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_topic_then_browse() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice").await;
    let rust = seed_category(&pool, "rust").await;
    let tag = seed_tag(&pool, "macros").await;
    let app = app(&pool);

    let response = post(
        &app,
        "/forum/topic",
        serde_json::json!({
            "title": "proc-macro hygiene",
            "body": "How do spans work?",
            "category_id": rust.id,
            "user_id": alice.id,
            "tag_ids": [tag.id]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["views"], 0);

    let by_tag = body_json(get(&app, "/tags/macros").await).await;
    assert_eq!(by_tag["total"], 1);
    assert_eq!(by_tag["items"][0]["id"], created["id"]);

    let missing = get(&app, "/categories/cobol").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_topic_in_unknown_category_is_422() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice").await;

    let response = post(
        &app(&pool),
        "/forum/topic",
        serde_json::json!({
            "title": "Lost",
            "body": "Where am I?",
            "category_id": 404,
            "user_id": alice.id
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "invalid_reference");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_page_past_the_end_keeps_total() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice").await;
    let rust = seed_category(&pool, "rust").await;
    seed_topic(&pool, "One", rust.id, alice.id, vec![]).await;
    seed_topic(&pool, "Two", rust.id, alice.id, vec![]).await;

    let body = body_json(get(&app(&pool), "/categories/rust?page=5&per_page=1").await).await;
    assert_eq!(body["items"], serde_json::json!([]));
    assert_eq!(body["total"], 2);
    assert_eq!(body["page"], 5);
}

// === Replies ===

#[tokio::test]
#[ignore = "requires database"]
async fn test_reply_round_trip() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let rust = seed_category(&pool, "rust").await;
    let topic = seed_topic(&pool, "Drop order", rust.id, alice.id, vec![]).await;
    let app = app(&pool);
    let uri = format!("/topic/{}/reply", topic.id);

    let response = post(
        &app,
        &uri,
        serde_json::json!({"body": "Fields drop in declaration order", "user_id": bob.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let page = body_json(get(&app, &uri).await).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["items"][0]["author_handle"], "bob");

    let orphan = get(&app, "/topic/9999/reply").await;
    assert_eq!(orphan.status(), StatusCode::NOT_FOUND);
}

// === Lists and profiles ===

#[tokio::test]
#[ignore = "requires database"]
async fn test_tag_and_category_lists() {
    let pool = test_pool().await;
    seed_tag(&pool, "wasm").await;
    seed_category(&pool, "web").await;
    let app = app(&pool);

    let tags = body_json(get(&app, "/tags").await).await;
    assert_eq!(tags[0]["name"], "wasm");

    let categories = body_json(get(&app, "/categories").await).await;
    assert_eq!(categories.as_array().unwrap().len(), 1);
    assert_eq!(categories[0]["name"], "web");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_profile_hides_email_and_hidden_users() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice").await;
    let ghost = UserRepo::new(&pool)
        .create(NewUser {
            handle: Handle::new("ghost").unwrap(),
            email: Email::new("ghost@example.com").unwrap(),
            password_hash: "x".to_string(),
            bio: String::new(),
            image: String::new(),
            status: UserStatus::Hidden,
            experience: Experience::new(1).unwrap(),
        })
        .await
        .unwrap();
    let app = app(&pool);

    let response = get(&app, &format!("/dev/{}", alice.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = body_json(response).await;
    assert_eq!(profile["handle"], "alice");
    assert!(profile.get("email").is_none());

    let hidden = get(&app, &format!("/dev/{}", ghost.id)).await;
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);
}
