//! Category repository

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;
use crate::models::{Color, LabelName};

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a category. Names are unique.
    pub async fn create(&self, name: LabelName, color: Color) -> Result<Category, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO categories (name, color)
            VALUES ($1, $2)
            RETURNING id, name, color
            "#,
        )
        .bind(name.as_str())
        .bind(color.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "category"))
    }

    /// All categories in insertion order.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as("SELECT id, name, color FROM categories ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(categories)
    }

    pub async fn get_by_name(&self, name: &LabelName) -> Result<Category, DbError> {
        sqlx::query_as("SELECT id, name, color FROM categories WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("category", name.as_str()))
    }
}
