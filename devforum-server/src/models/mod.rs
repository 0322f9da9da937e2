//! Domain inputs with validation at construction
//!
//! Everything that reaches a repository from the outside goes through one
//! of these types first. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod friend;
pub mod label;
pub mod topic;
pub mod post;
pub mod pagination;

pub use validation::ValidationError;
pub use user::{Email, Experience, Handle, UserStatus};
pub use friend::{FriendPair, FriendStatus};
pub use label::{Color, LabelName};
pub use topic::TopicTitle;
pub use post::PostBody;
pub use pagination::{Pagination, Paginated, PaginationParams};
