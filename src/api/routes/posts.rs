//! Post Routes
//!
//! - GET /api/posts/latest - Newest posts with authors
//! - GET /api/posts/popular - Most-commented posts with authors
//! - GET /api/posts/:postId/comments - Comments on one post

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::AnalyticsError;
use crate::api::dto::{CommentsResponse, LatestPostsResponse, PopularPostsResponse};
use crate::api::error::ApiResult;
use crate::api::routes::empty_if_not_found;
use crate::api::state::AppState;

/// GET /api/posts/latest
pub async fn latest_posts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LatestPostsResponse>> {
    let latest_posts = state.analytics.latest_posts()?;
    Ok(Json(LatestPostsResponse { latest_posts }))
}

/// GET /api/posts/popular
///
/// Every post tied for the most comments.
pub async fn popular_posts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PopularPostsResponse>> {
    let popular_posts = state.analytics.popular_posts()?;
    Ok(Json(PopularPostsResponse { popular_posts }))
}

/// GET /api/posts/:postId/comments
///
/// Unknown or non-numeric post ids yield an empty list.
pub async fn post_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<CommentsResponse>> {
    let result = match post_id.parse::<u64>() {
        Ok(id) => state.analytics.comments_for_post(id),
        Err(_) => Err(AnalyticsError::PostNotFound(post_id.clone())),
    };
    let comments = empty_if_not_found(result)?;

    tracing::debug!(post_id = %post_id, count = comments.len(), "Fetched post comments");

    Ok(Json(CommentsResponse { comments }))
}
