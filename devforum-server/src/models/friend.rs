//! Friend link direction and status

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// State of a directional friend link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    #[default]
    Active,
    Pending,
    Blocked,
}

impl FriendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Blocked => "blocked",
        }
    }
}

impl TryFrom<String> for FriendStatus {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for FriendStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "blocked" => Ok(Self::Blocked),
            other => Err(ValidationError::InvalidVariant {
                field: "friend status",
                value: other.to_owned(),
            }),
        }
    }
}

/// Ordered pair for a friend link: `user_id` befriends `friend_user_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FriendPair {
    user_id: i64,
    friend_user_id: i64,
}

impl FriendPair {
    /// A user cannot befriend themselves.
    pub fn new(user_id: i64, friend_user_id: i64) -> Result<Self, ValidationError> {
        if user_id == friend_user_id {
            return Err(ValidationError::InvalidFormat {
                field: "friend_user_id",
                reason: "cannot link a user to themselves",
            });
        }
        Ok(Self {
            user_id,
            friend_user_id,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn friend_user_id(&self) -> i64 {
        self.friend_user_id
    }
}
