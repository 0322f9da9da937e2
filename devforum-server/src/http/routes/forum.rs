//! Forum and topic endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{ForumTopic, NewTopic, Tag, Topic, TopicRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidId};
use crate::http::server::AppState;
use crate::models::{PostBody, TopicTitle};

/// Create topic request
#[derive(Deserialize)]
pub struct CreateTopicRequest {
    pub title: String,
    pub body: String,
    pub category_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// Topic response
#[derive(Serialize)]
pub struct TopicResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub likes: i64,
    pub views: i64,
    pub created_at: String,
    pub category_id: i64,
    pub user_id: i64,
}

impl From<Topic> for TopicResponse {
    fn from(t: Topic) -> Self {
        Self {
            id: t.id,
            title: t.title,
            body: t.body,
            likes: t.likes,
            views: t.views,
            created_at: t.created_at.to_rfc3339(),
            category_id: t.category_id,
            user_id: t.user_id,
        }
    }
}

/// Topic with its tags, for the detail page
#[derive(Serialize)]
pub struct TopicDetailResponse {
    #[serde(flatten)]
    pub topic: TopicResponse,
    pub tags: Vec<Tag>,
}

#[derive(Serialize)]
pub struct AuthorSummary {
    pub id: i64,
    pub handle: String,
    pub image: String,
}

#[derive(Serialize)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Forum listing entry
#[derive(Serialize)]
pub struct ForumTopicResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub likes: i64,
    pub views: i64,
    pub created_at: String,
    pub author: AuthorSummary,
    pub category: CategorySummary,
}

impl From<ForumTopic> for ForumTopicResponse {
    fn from(t: ForumTopic) -> Self {
        Self {
            id: t.id,
            title: t.title,
            body: t.body,
            likes: t.likes,
            views: t.views,
            created_at: t.created_at.to_rfc3339(),
            author: AuthorSummary {
                id: t.user_id,
                handle: t.author_handle,
                image: t.author_image,
            },
            category: CategorySummary {
                id: t.category_id,
                name: t.category_name,
                color: t.category_color,
            },
        }
    }
}

/// GET /forum - every topic with author and category
async fn list_forum(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ForumTopicResponse>>, ApiError> {
    let topics = TopicRepo::new(&state.pool).list_forum().await?;
    Ok(Json(topics.into_iter().map(ForumTopicResponse::from).collect()))
}

/// POST /forum/topic - open a new topic
async fn create_topic(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateTopicRequest>,
) -> Result<(StatusCode, Json<TopicResponse>), ApiError> {
    let new = NewTopic {
        title: TopicTitle::new(&req.title)?,
        body: PostBody::new(&req.body)?,
        category_id: req.category_id,
        // TODO: take the author from the signed-in session once sign-in exists
        user_id: req.user_id,
        tag_ids: req.tag_ids,
    };

    let topic = TopicRepo::new(&state.pool).create(new).await?;
    tracing::info!(topic_id = topic.id, "topic opened");

    Ok((StatusCode::CREATED, Json(TopicResponse::from(topic))))
}

/// GET /topic/{topic_id} - count a view and show the topic
async fn show_topic(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<TopicDetailResponse>, ApiError> {
    let repo = TopicRepo::new(&state.pool);

    repo.increment_views(id).await?;
    let topic = repo.get(id).await?;
    let tags = repo.tags_for(id).await?;

    Ok(Json(TopicDetailResponse {
        topic: TopicResponse::from(topic),
        tags,
    }))
}

/// Forum routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/forum", get(list_forum))
        .route("/forum/topic", post(create_topic))
        .route("/topic/{topic_id}", get(show_topic))
        .route("/t/{topic_id}", get(show_topic))
}
