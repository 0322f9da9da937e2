//! Tag endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use super::forum::ForumTopicResponse;
use crate::db::repos::{Tag, TagRepo, TopicRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiQuery, ValidLabel};
use crate::http::server::AppState;
use crate::models::{Paginated, Pagination, PaginationParams};

/// GET /tags
async fn list_tags(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Tag>>, ApiError> {
    let tags = TagRepo::new(&state.pool).list().await?;
    Ok(Json(tags))
}

/// GET /tags/{tag_name}
async fn tag_topics(
    State(state): State<Arc<AppState>>,
    ValidLabel(name): ValidLabel,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Paginated<ForumTopicResponse>>, ApiError> {
    let topics = TopicRepo::new(&state.pool)
        .list_for_tag(&name, Pagination::from(params))
        .await?;

    Ok(Json(topics.map(ForumTopicResponse::from)))
}

/// Tag routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tags", get(list_tags))
        .route("/tags/{tag_name}", get(tag_topics))
}
