//! Route handlers organized by resource

pub mod health;
pub mod forum;
pub mod replies;
pub mod categories;
pub mod tags;
pub mod users;
