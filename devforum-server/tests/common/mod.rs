//! Shared helpers for database-backed tests
//!
//! Each test gets its own schema so runs never see each other's rows.
//! Point `DATABASE_URL` at a scratch Postgres database to run them:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/devforum_test cargo test -- --ignored
//! ```

#![allow(dead_code)]

use std::str::FromStr;

use devforum_server::db::migrations;
use devforum_server::db::{
    Category, CategoryRepo, NewTopic, NewUser, Tag, TagRepo, Topic, TopicRepo, User, UserRepo,
};
use devforum_server::models::{
    Color, Email, Experience, Handle, LabelName, PostBody, TopicTitle, UserStatus,
};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgConnection, PgPool};

/// Pool scoped to a fresh, migrated schema.
pub async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let schema = format!("devforum_{}", uuid::Uuid::new_v4().simple());

    let mut conn = PgConnection::connect(&url).await.unwrap();
    sqlx::query(&format!("CREATE SCHEMA {schema}"))
        .execute(&mut conn)
        .await
        .unwrap();
    conn.close().await.unwrap();

    let options = PgConnectOptions::from_str(&url)
        .unwrap()
        .options([("search_path", schema.as_str())]);

    let pool = PgPoolOptions::new()
        .max_connections(12)
        .connect_with(options)
        .await
        .unwrap();

    migrations::run(&pool).await.unwrap();
    pool
}

pub async fn seed_user(pool: &PgPool, handle: &str) -> User {
    UserRepo::new(pool)
        .create(NewUser {
            handle: Handle::new(handle).unwrap(),
            email: Email::new(&format!("{handle}@example.com")).unwrap(),
            password_hash: "not-a-real-hash".to_string(),
            bio: String::new(),
            image: format!("https://img.example.com/{handle}.png"),
            status: UserStatus::Visible,
            experience: Experience::new(3).unwrap(),
        })
        .await
        .unwrap()
}

pub async fn seed_category(pool: &PgPool, name: &str) -> Category {
    CategoryRepo::new(pool)
        .create(LabelName::new(name).unwrap(), Color::new("#336699").unwrap())
        .await
        .unwrap()
}

pub async fn seed_tag(pool: &PgPool, name: &str) -> Tag {
    TagRepo::new(pool)
        .create(LabelName::new(name).unwrap(), Color::new("#f80").unwrap())
        .await
        .unwrap()
}

pub async fn seed_topic(
    pool: &PgPool,
    title: &str,
    category_id: i64,
    user_id: i64,
    tag_ids: Vec<i64>,
) -> Topic {
    TopicRepo::new(pool)
        .create(NewTopic {
            title: TopicTitle::new(title).unwrap(),
            body: PostBody::new("body text").unwrap(),
            category_id,
            user_id,
            tag_ids,
        })
        .await
        .unwrap()
}

pub async fn set_views(pool: &PgPool, topic_id: i64, views: i64) {
    sqlx::query("UPDATE topics SET views = $2 WHERE id = $1")
        .bind(topic_id)
        .bind(views)
        .execute(pool)
        .await
        .unwrap();
}
