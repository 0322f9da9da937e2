//! Tag repository

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;
use crate::models::{Color, LabelName};

/// Tag record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Tag repository
pub struct TagRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TagRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: LabelName, color: Color) -> Result<Tag, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO tags (name, color)
            VALUES ($1, $2)
            RETURNING id, name, color
            "#,
        )
        .bind(name.as_str())
        .bind(color.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "tag"))
    }

    /// All tags in insertion order. No filtering, no pagination.
    pub async fn list(&self) -> Result<Vec<Tag>, DbError> {
        let tags = sqlx::query_as("SELECT id, name, color FROM tags ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(tags)
    }

    pub async fn get_by_name(&self, name: &LabelName) -> Result<Tag, DbError> {
        sqlx::query_as("SELECT id, name, color FROM tags WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("tag", name.as_str()))
    }
}
