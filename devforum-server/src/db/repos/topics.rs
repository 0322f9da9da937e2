//! Topic repository - the forum query layer
//!
//! - list_forum: every topic joined with author and category (one query)
//! - get: single topic, NotFound on a missing id
//! - increment_views: in-place `views = views + 1`, never read-modify-write
//! - create: topic + tag links in one transaction

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::categories::CategoryRepo;
use super::tags::{Tag, TagRepo};
use crate::db::DbError;
use crate::models::{LabelName, Paginated, Pagination, PostBody, TopicTitle};

/// Topic record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub likes: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub category_id: i64,
    pub user_id: i64,
}

/// Topic joined with author and category display data
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ForumTopic {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub likes: i64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub category_id: i64,
    pub category_name: String,
    pub category_color: String,
    pub user_id: i64,
    pub author_handle: String,
    pub author_image: String,
}

/// Input for a new topic
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: TopicTitle,
    pub body: PostBody,
    pub category_id: i64,
    pub user_id: i64,
    pub tag_ids: Vec<i64>,
}

const TOPIC_COLUMNS: &str = "id, title, body, likes, views, created_at, category_id, user_id";

const FORUM_TOPIC_FROM: &str = r#"
    FROM topics t
    JOIN users u ON u.id = t.user_id
    JOIN categories c ON c.id = t.category_id
"#;

const FORUM_TOPIC_COLUMNS: &str = r#"
    t.id, t.title, t.body, t.likes, t.views, t.created_at,
    t.category_id, c.name AS category_name, c.color AS category_color,
    t.user_id, u.handle AS author_handle, u.image AS author_image
"#;

/// Topic repository
pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every topic with its author and category, in id order.
    pub async fn list_forum(&self) -> Result<Vec<ForumTopic>, DbError> {
        let sql = format!("SELECT {FORUM_TOPIC_COLUMNS} {FORUM_TOPIC_FROM} ORDER BY t.id ASC");

        let topics = sqlx::query_as(&sql).fetch_all(self.pool).await?;
        Ok(topics)
    }

    /// Get a single topic by ID.
    pub async fn get(&self, id: i64) -> Result<Topic, DbError> {
        let sql = format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE id = $1");

        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("topic", id))
    }

    /// Add one to a topic's view counter and return the new count.
    ///
    /// Single UPDATE, so concurrent callers never lose increments.
    pub async fn increment_views(&self, id: i64) -> Result<i64, DbError> {
        let views: Option<i64> = sqlx::query_scalar(
            "UPDATE topics SET views = views + 1 WHERE id = $1 RETURNING views",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        views.ok_or_else(|| DbError::not_found("topic", id))
    }

    /// Create a topic with its tag links (atomic).
    ///
    /// Unknown category, author, or tag ids are an `InvalidReference` and
    /// leave nothing behind.
    pub async fn create(&self, new: NewTopic) -> Result<Topic, DbError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO topics (title, body, category_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {TOPIC_COLUMNS}
            "#
        );
        let topic: Topic = sqlx::query_as(&sql)
            .bind(new.title.as_str())
            .bind(new.body.as_str())
            .bind(new.category_id)
            .bind(new.user_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DbError::from_write(e, "topic"))?;

        if !new.tag_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO topic_tags (topic_id, tag_id)
                SELECT $1, tag_id FROM UNNEST($2::BIGINT[]) AS tag_id
                ON CONFLICT (topic_id, tag_id) DO NOTHING
                "#,
            )
            .bind(topic.id)
            .bind(&new.tag_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::from_write(e, "topic tag"))?;
        }

        tx.commit().await?;
        tracing::debug!(topic_id = topic.id, tags = new.tag_ids.len(), "topic created");
        Ok(topic)
    }

    /// Link a tag to a topic. Linking twice is a no-op.
    pub async fn attach_tag(&self, topic_id: i64, tag_id: i64) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO topic_tags (topic_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT (topic_id, tag_id) DO NOTHING
            "#,
        )
        .bind(topic_id)
        .bind(tag_id)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "topic tag"))?;

        Ok(())
    }

    /// Tags attached to a topic, by name.
    pub async fn tags_for(&self, topic_id: i64) -> Result<Vec<Tag>, DbError> {
        let tags = sqlx::query_as(
            r#"
            SELECT g.id, g.name, g.color
            FROM topic_tags tt
            JOIN tags g ON g.id = tt.tag_id
            WHERE tt.topic_id = $1
            ORDER BY g.name ASC
            "#,
        )
        .bind(topic_id)
        .fetch_all(self.pool)
        .await?;

        Ok(tags)
    }

    /// Topics in a category, newest first.
    pub async fn list_for_category(
        &self,
        name: &LabelName,
        page: Pagination,
    ) -> Result<Paginated<ForumTopic>, DbError> {
        CategoryRepo::new(self.pool).get_by_name(name).await?;
        self.fetch_page("WHERE c.name = $1", name, page).await
    }

    /// Topics carrying a tag, newest first.
    pub async fn list_for_tag(
        &self,
        name: &LabelName,
        page: Pagination,
    ) -> Result<Paginated<ForumTopic>, DbError> {
        TagRepo::new(self.pool).get_by_name(name).await?;
        self.fetch_page(
            r#"
            JOIN topic_tags tt ON tt.topic_id = t.id
            JOIN tags g ON g.id = tt.tag_id
            WHERE g.name = $1
            "#,
            name,
            page,
        )
        .await
    }

    /// Total is counted over the whole filter, not the page window.
    async fn fetch_page(
        &self,
        filter: &str,
        name: &LabelName,
        page: Pagination,
    ) -> Result<Paginated<ForumTopic>, DbError> {
        let count_sql = format!("SELECT COUNT(*) {FORUM_TOPIC_FROM} {filter}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(name.as_str())
            .fetch_one(self.pool)
            .await?;

        let sql = format!(
            "SELECT {FORUM_TOPIC_COLUMNS} {FORUM_TOPIC_FROM} {filter} \
             ORDER BY t.created_at DESC, t.id DESC LIMIT $2 OFFSET $3"
        );
        let items: Vec<ForumTopic> = sqlx::query_as(&sql)
            .bind(name.as_str())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool)
            .await?;

        Ok(page.wrap(items, total))
    }
}

/// NotFound unless the topic exists.
pub(crate) async fn ensure_topic(pool: &PgPool, id: i64) -> Result<(), DbError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM topics WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    if exists {
        Ok(())
    } else {
        Err(DbError::not_found("topic", id))
    }
}

