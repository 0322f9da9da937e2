//! devforum-server: developer forum backed by Postgres
//!
//! Holds the schema, the query layer over users, topics, replies,
//! categories and tags, and a JSON HTTP API in front of it.
//!
//! Every query takes an explicit [`sqlx::PgPool`]; nothing is global.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, ForumConfig};
pub use db::DbError;
pub use http::{build_router, run_server, ServerConfig};
