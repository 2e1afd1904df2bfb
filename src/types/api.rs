//! Wire types for the companion backend's REST API.

use serde::{Deserialize, Serialize};

/// Authenticated user profile with gamification counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub level: i64,
    pub points: i64,
    pub streak: i64,
    pub adventures_completed: i64,
    pub badges_earned: i64,
}

/// Response to `/register` and `/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

/// Adventure persisted on the backend after completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAdventure {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub points_earned: i64,
    pub completed_at: String,
}

/// Payload for recording a completed adventure.
#[derive(Debug, Clone, Serialize)]
pub struct NewAdventure {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_earned: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    pub id: i64,
    pub username: String,
    pub level: i64,
    pub adventures_completed: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

/// A pending incoming friend request. The backend stores `message` in a
/// nullable column, so it may arrive as `null` as well as missing.
#[derive(Debug, Clone, Deserialize)]
pub struct FriendRequest {
    pub id: i64,
    pub sender: Friend,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: String,
}

/// How to answer a pending friend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestAction {
    Accept,
    Decline,
}

impl FriendRequestAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendRequestAction::Accept => "accept",
            FriendRequestAction::Decline => "decline",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: String,
}

/// Payload for saving a memory, optionally linked to a saved adventure.
#[derive(Debug, Clone, Serialize)]
pub struct NewMemory {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adventure_id: Option<i64>,
}
