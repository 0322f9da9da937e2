//! Developer profile endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{Skill, UserProfile, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::UserStatus;

/// Public profile. Email and credentials stay private.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub handle: String,
    pub bio: String,
    pub image: String,
    pub experience: i32,
    pub last_active: String,
    pub created_at: String,
    pub skills: Vec<Skill>,
    pub topic_count: i64,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.user.id,
            handle: p.user.handle,
            bio: p.user.bio,
            image: p.user.image,
            experience: p.user.experience,
            last_active: p.user.last_active.to_rfc3339(),
            created_at: p.user.created_at.to_rfc3339(),
            skills: p.skills,
            topic_count: p.topic_count,
        }
    }
}

/// GET /dev/{user_id}
async fn show_profile(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = UserRepo::new(&state.pool).profile(id).await?;

    // Hidden profiles look the same as missing ones
    if profile.user.status == UserStatus::Hidden {
        return Err(ApiError::NotFound {
            resource: "user",
            id: id.to_string(),
        });
    }

    Ok(Json(ProfileResponse::from(profile)))
}

/// Profile routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dev/{user_id}", get(show_profile))
}
