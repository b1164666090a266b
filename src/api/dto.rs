//! Data Transfer Objects
//!
//! Response envelopes for the API endpoints. Key names match what the
//! dashboard reads (`topUsers`, `latestPosts`, ...). The CLI deserializes the
//! same types.

use serde::{Deserialize, Serialize};

use crate::dataset::{user_directory, Comment, Post, PostWithUser, User, UserPostCount};

/// GET /api/users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsersResponse {
    /// Serialized as `{ "<id>": "<name>" }` in declaration order
    #[serde(with = "user_directory")]
    pub users: Vec<User>,
}

/// GET /api/users/top
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopUsersResponse {
    pub top_users: Vec<UserPostCount>,
}

/// GET /api/users/:userId/posts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// GET /api/posts/latest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LatestPostsResponse {
    pub latest_posts: Vec<PostWithUser>,
}

/// GET /api/posts/popular
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PopularPostsResponse {
    pub popular_posts: Vec<PostWithUser>,
}

/// GET /api/posts/:postId/comments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of users loaded
    pub users: usize,
    /// Number of posts loaded
    pub posts: usize,
    /// Number of comments loaded
    pub comments: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
