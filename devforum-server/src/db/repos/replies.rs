//! Reply repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::topics::ensure_topic;
use crate::db::DbError;
use crate::models::{Paginated, Pagination, PostBody};

/// Reply record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Reply {
    pub id: i64,
    pub body: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub topic_id: i64,
    pub user_id: i64,
}

/// Reply joined with its author's display data
#[derive(Debug, Clone, FromRow)]
pub struct ReplyWithAuthor {
    #[sqlx(flatten)]
    pub reply: Reply,
    pub author_handle: String,
    pub author_image: String,
}

/// Input for a new reply
#[derive(Debug, Clone)]
pub struct NewReply {
    pub topic_id: i64,
    pub user_id: i64,
    pub body: PostBody,
}

/// Reply repository
pub struct ReplyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReplyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a reply to a topic.
    ///
    /// A missing topic is `NotFound`; a missing author is `InvalidReference`.
    pub async fn create(&self, new: NewReply) -> Result<Reply, DbError> {
        ensure_topic(self.pool, new.topic_id).await?;

        let reply: Reply = sqlx::query_as(
            r#"
            INSERT INTO replies (body, topic_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, body, likes, created_at, topic_id, user_id
            "#,
        )
        .bind(new.body.as_str())
        .bind(new.topic_id)
        .bind(new.user_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "reply"))?;

        tracing::debug!(reply_id = reply.id, topic_id = reply.topic_id, "reply created");
        Ok(reply)
    }

    /// List replies for a topic, oldest first.
    ///
    /// `total` counts every reply on the topic, so pages past the end
    /// still report it.
    pub async fn list_for_topic(
        &self,
        topic_id: i64,
        page: Pagination,
    ) -> Result<Paginated<ReplyWithAuthor>, DbError> {
        ensure_topic(self.pool, topic_id).await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE topic_id = $1")
            .bind(topic_id)
            .fetch_one(self.pool)
            .await?;

        let items: Vec<ReplyWithAuthor> = sqlx::query_as(
            r#"
            SELECT
                r.id, r.body, r.likes, r.created_at, r.topic_id, r.user_id,
                u.handle AS author_handle,
                u.image AS author_image
            FROM replies r
            JOIN users u ON u.id = r.user_id
            WHERE r.topic_id = $1
            ORDER BY r.created_at ASC, r.id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(topic_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(page.wrap(items, total))
    }
}
