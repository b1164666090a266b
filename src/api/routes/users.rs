//! User Routes
//!
//! - GET /api/users - User directory
//! - GET /api/users/top - Users ranked by post count
//! - GET /api/users/:userId/posts - Posts by one user

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PostsResponse, TopUsersResponse, UsersResponse};
use crate::api::error::ApiResult;
use crate::api::routes::empty_if_not_found;
use crate::api::state::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.dataset().users().to_vec(),
    })
}

/// GET /api/users/top
///
/// Top users by post count, highest first.
pub async fn top_users(State(state): State<Arc<AppState>>) -> Json<TopUsersResponse> {
    Json(TopUsersResponse {
        top_users: state.analytics.top_users(),
    })
}

/// GET /api/users/:userId/posts
///
/// Unknown user ids yield an empty list.
pub async fn user_posts(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<PostsResponse>> {
    let posts = empty_if_not_found(state.analytics.posts_by_user(&user_id))?;

    tracing::debug!(user_id = %user_id, count = posts.len(), "Fetched user posts");

    Ok(Json(PostsResponse { posts }))
}
