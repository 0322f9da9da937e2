//! Repository implementations for database access
//!
//! Each repository borrows the pool it was given and follows these patterns:
//! - Uses JOINs for list operations (no N+1)
//! - Classifies constraint violations instead of checking before insert
//! - Uses transactions for multi-step writes

pub mod users;
pub mod friends;
pub mod skills;
pub mod categories;
pub mod tags;
pub mod topics;
pub mod replies;

pub use users::{NewUser, User, UserProfile, UserRepo};
pub use friends::{Friend, FriendLink, FriendRepo};
pub use skills::{Skill, SkillRepo};
pub use categories::{Category, CategoryRepo};
pub use tags::{Tag, TagRepo};
pub use topics::{ForumTopic, NewTopic, Topic, TopicRepo};
pub use replies::{NewReply, Reply, ReplyRepo, ReplyWithAuthor};
