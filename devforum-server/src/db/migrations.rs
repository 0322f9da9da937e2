//! Schema migrations for the forum tables
//!
//! Every statement is idempotent so `run` is safe on each startup.

use sqlx::PgPool;

/// Tables in dependency order.
const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            handle TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            bio TEXT NOT NULL DEFAULT '',
            image TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'visible'
                CHECK (status IN ('visible', 'hidden')),
            experience INTEGER NOT NULL DEFAULT 0 CHECK (experience >= 0),
            last_active TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "friends",
        r#"
        CREATE TABLE IF NOT EXISTS friends (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL REFERENCES users(id),
            friend_user_id BIGINT NOT NULL REFERENCES users(id),
            status TEXT NOT NULL DEFAULT 'active'
                CHECK (status IN ('active', 'pending', 'blocked')),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            UNIQUE (user_id, friend_user_id),
            CHECK (user_id <> friend_user_id)
        )
        "#,
    ),
    (
        "skills",
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    ),
    (
        "user_skills",
        r#"
        CREATE TABLE IF NOT EXISTS user_skills (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL REFERENCES users(id),
            skill_id BIGINT NOT NULL REFERENCES skills(id),
            UNIQUE (user_id, skill_id)
        )
        "#,
    ),
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            color TEXT NOT NULL
        )
        "#,
    ),
    (
        "tags",
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            color TEXT NOT NULL
        )
        "#,
    ),
    (
        "topics",
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            likes BIGINT NOT NULL DEFAULT 0 CHECK (likes >= 0),
            views BIGINT NOT NULL DEFAULT 0 CHECK (views >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            category_id BIGINT NOT NULL REFERENCES categories(id),
            user_id BIGINT NOT NULL REFERENCES users(id)
        )
        "#,
    ),
    (
        "topic_tags",
        r#"
        CREATE TABLE IF NOT EXISTS topic_tags (
            id BIGSERIAL PRIMARY KEY,
            topic_id BIGINT NOT NULL REFERENCES topics(id),
            tag_id BIGINT NOT NULL REFERENCES tags(id),
            UNIQUE (topic_id, tag_id)
        )
        "#,
    ),
    (
        "replies",
        r#"
        CREATE TABLE IF NOT EXISTS replies (
            id BIGSERIAL PRIMARY KEY,
            body TEXT NOT NULL,
            likes BIGINT NOT NULL DEFAULT 0 CHECK (likes >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            topic_id BIGINT NOT NULL REFERENCES topics(id),
            user_id BIGINT NOT NULL REFERENCES users(id)
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_topics_category ON topics(category_id)",
    "CREATE INDEX IF NOT EXISTS idx_topics_user ON topics(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_topics_created ON topics(created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_replies_topic ON replies(topic_id)",
    "CREATE INDEX IF NOT EXISTS idx_topic_tags_tag ON topic_tags(tag_id)",
    "CREATE INDEX IF NOT EXISTS idx_friends_friend ON friends(friend_user_id)",
    "CREATE INDEX IF NOT EXISTS idx_user_skills_skill ON user_skills(skill_id)",
];

/// Run all forum migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running forum migrations...");

    for (table, ddl) in TABLES {
        tracing::debug!(table, "ensuring table");
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!("Forum migrations complete");
    Ok(())
}
