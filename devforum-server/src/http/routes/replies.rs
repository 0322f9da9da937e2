//! Reply endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{NewReply, Reply, ReplyRepo, ReplyWithAuthor};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery, ValidId};
use crate::http::server::AppState;
use crate::models::{Paginated, Pagination, PaginationParams, PostBody};

/// Create reply request
#[derive(Deserialize)]
pub struct CreateReplyRequest {
    pub body: String,
    pub user_id: i64,
}

/// Reply response
#[derive(Serialize)]
pub struct ReplyResponse {
    pub id: i64,
    pub topic_id: i64,
    pub user_id: i64,
    pub body: String,
    pub likes: i64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image: Option<String>,
}

impl From<Reply> for ReplyResponse {
    fn from(r: Reply) -> Self {
        Self {
            id: r.id,
            topic_id: r.topic_id,
            user_id: r.user_id,
            body: r.body,
            likes: r.likes,
            created_at: r.created_at.to_rfc3339(),
            author_handle: None,
            author_image: None,
        }
    }
}

impl From<ReplyWithAuthor> for ReplyResponse {
    fn from(r: ReplyWithAuthor) -> Self {
        Self {
            author_handle: Some(r.author_handle),
            author_image: Some(r.author_image),
            ..Self::from(r.reply)
        }
    }
}

/// GET /topic/{topic_id}/reply - list replies, oldest first
async fn list_replies(
    State(state): State<Arc<AppState>>,
    ValidId(topic_id): ValidId,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Paginated<ReplyResponse>>, ApiError> {
    let page = Pagination::from(params);
    let replies = ReplyRepo::new(&state.pool)
        .list_for_topic(topic_id, page)
        .await?;

    Ok(Json(replies.map(ReplyResponse::from)))
}

/// POST /topic/{topic_id}/reply - reply to a topic
async fn create_reply(
    State(state): State<Arc<AppState>>,
    ValidId(topic_id): ValidId,
    ApiJson(req): ApiJson<CreateReplyRequest>,
) -> Result<(StatusCode, Json<ReplyResponse>), ApiError> {
    let new = NewReply {
        topic_id,
        user_id: req.user_id,
        body: PostBody::new(&req.body)?,
    };

    let reply = ReplyRepo::new(&state.pool).create(new).await?;
    Ok((StatusCode::CREATED, Json(ReplyResponse::from(reply))))
}

/// Reply routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/topic/{topic_id}/reply",
            get(list_replies).post(create_reply),
        )
        .route(
            "/topic/{topic_id}/reply/",
            get(list_replies).post(create_reply),
        )
}
