//! Skill repository

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;
use crate::models::LabelName;

/// Skill record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

/// Skill repository
pub struct SkillRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SkillRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: LabelName) -> Result<Skill, DbError> {
        sqlx::query_as("INSERT INTO skills (name) VALUES ($1) RETURNING id, name")
            .bind(name.as_str())
            .fetch_one(self.pool)
            .await
            .map_err(|e| DbError::from_write(e, "skill"))
    }

    pub async fn list(&self) -> Result<Vec<Skill>, DbError> {
        let skills = sqlx::query_as("SELECT id, name FROM skills ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;
        Ok(skills)
    }

    /// Give a user a skill. Assigning twice is a no-op.
    pub async fn assign(&self, user_id: i64, skill_id: i64) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO user_skills (user_id, skill_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, skill_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(skill_id)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "user skill"))?;

        Ok(())
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Skill>, DbError> {
        let skills = sqlx::query_as(
            r#"
            SELECT s.id, s.name
            FROM user_skills us
            JOIN skills s ON s.id = us.skill_id
            WHERE us.user_id = $1
            ORDER BY s.name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(skills)
    }
}
