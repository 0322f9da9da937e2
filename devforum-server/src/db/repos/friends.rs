//! Friend repository
//!
//! Links are directional: linking A to B does not create B to A.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::db::DbError;
use crate::models::{FriendPair, FriendStatus};

/// Friend record from database
#[derive(Debug, Clone, FromRow)]
pub struct Friend {
    pub id: i64,
    pub user_id: i64,
    pub friend_user_id: i64,
    #[sqlx(try_from = "String")]
    pub status: FriendStatus,
    pub created_at: DateTime<Utc>,
}

/// Outgoing link joined with the friend's display data
#[derive(Debug, Clone, FromRow)]
pub struct FriendLink {
    pub id: i64,
    pub friend_user_id: i64,
    pub handle: String,
    pub image: String,
    #[sqlx(try_from = "String")]
    pub status: FriendStatus,
    pub created_at: DateTime<Utc>,
}

/// Friend repository
pub struct FriendRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FriendRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record that `pair.user_id` befriends `pair.friend_user_id`.
    ///
    /// A second link for the same ordered pair is a `Conflict`; unknown
    /// users are an `InvalidReference`.
    pub async fn link(&self, pair: FriendPair, status: FriendStatus) -> Result<Friend, DbError> {
        let friend: Friend = sqlx::query_as(
            r#"
            INSERT INTO friends (user_id, friend_user_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, friend_user_id, status, created_at
            "#,
        )
        .bind(pair.user_id())
        .bind(pair.friend_user_id())
        .bind(status.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "friend"))?;

        Ok(friend)
    }

    /// Outgoing links for a user, oldest first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<FriendLink>, DbError> {
        let links = sqlx::query_as(
            r#"
            SELECT f.id, f.friend_user_id, u.handle, u.image, f.status, f.created_at
            FROM friends f
            JOIN users u ON u.id = f.friend_user_id
            WHERE f.user_id = $1
            ORDER BY f.created_at ASC, f.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(links)
    }
}
