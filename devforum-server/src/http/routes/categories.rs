//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use super::forum::ForumTopicResponse;
use crate::db::repos::{Category, CategoryRepo, TopicRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiQuery, ValidLabel};
use crate::http::server::AppState;
use crate::models::{Paginated, Pagination, PaginationParams};

/// GET /categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(categories))
}

/// GET /categories/{category_name} - topics filed under a category
async fn category_topics(
    State(state): State<Arc<AppState>>,
    ValidLabel(name): ValidLabel,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Paginated<ForumTopicResponse>>, ApiError> {
    let topics = TopicRepo::new(&state.pool)
        .list_for_category(&name, Pagination::from(params))
        .await?;

    Ok(Json(topics.map(ForumTopicResponse::from)))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_name}", get(category_topics))
}
