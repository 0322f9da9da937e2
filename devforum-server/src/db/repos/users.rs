//! User repository
//!
//! The password hash is write-only from this repository's point of view:
//! it is stored on create and never selected back out.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::skills::{Skill, SkillRepo};
use crate::db::DbError;
use crate::models::{Email, Experience, Handle, UserStatus};

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub handle: String,
    pub email: String,
    pub bio: String,
    pub image: String,
    #[sqlx(try_from = "String")]
    pub status: UserStatus,
    pub experience: i32,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub handle: Handle,
    pub email: Email,
    /// Already-hashed password; hashing belongs to the sign-up flow.
    pub password_hash: String,
    pub bio: String,
    pub image: String,
    pub status: UserStatus,
    pub experience: Experience,
}

/// Public profile: user, skills, and how many topics they opened
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub skills: Vec<Skill>,
    pub topic_count: i64,
}

#[derive(FromRow)]
struct ProfileRow {
    #[sqlx(flatten)]
    user: User,
    topic_count: i64,
}

const USER_COLUMNS: &str =
    "id, handle, email, bio, image, status, experience, last_active, created_at";

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user. Duplicate handle or email is a `Conflict`.
    pub async fn create(&self, new: NewUser) -> Result<User, DbError> {
        let sql = format!(
            r#"
            INSERT INTO users (handle, email, password_hash, bio, image, status, experience)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        );

        let user: User = sqlx::query_as(&sql)
            .bind(new.handle.as_str())
            .bind(new.email.as_str())
            .bind(&new.password_hash)
            .bind(&new.bio)
            .bind(&new.image)
            .bind(new.status.as_str())
            .bind(new.experience.years())
            .fetch_one(self.pool)
            .await
            .map_err(|e| DbError::from_write(e, "user"))?;

        tracing::debug!(user_id = user.id, handle = %user.handle, "user created");
        Ok(user)
    }

    /// Get a single user by ID.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Profile with skills and topic count.
    pub async fn profile(&self, id: i64) -> Result<UserProfile, DbError> {
        let row: ProfileRow = sqlx::query_as(
            r#"
            SELECT
                u.id, u.handle, u.email, u.bio, u.image, u.status,
                u.experience, u.last_active, u.created_at,
                (SELECT COUNT(*) FROM topics t WHERE t.user_id = u.id) AS topic_count
            FROM users u
            WHERE u.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("user", id))?;

        let skills = SkillRepo::new(self.pool).list_for_user(id).await?;

        Ok(UserProfile {
            user: row.user,
            skills,
            topic_count: row.topic_count,
        })
    }
}
