//! Aggregations
//!
//! Pure, single-pass views over a [`Dataset`]. None of these functions
//! allocate more than the result they return plus a per-call count table.
//!
//! Ordering rules:
//! - top users: post count descending, ties in user declaration order
//! - latest posts: post id descending (ids are unique)
//! - popular posts: comment count descending, ties by ascending post id

use std::collections::HashMap;

use crate::analytics::error::{AnalyticsError, AnalyticsResult};
use crate::dataset::{Comment, Dataset, Post, PostWithUser, User, UserPostCount};

/// Top `limit` users by number of posts authored
pub fn top_users(dataset: &Dataset, limit: usize) -> Vec<UserPostCount> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(dataset.users().len());
    for post in dataset.posts() {
        *counts.entry(post.user_id.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<UserPostCount> = dataset
        .users()
        .iter()
        .map(|user| UserPostCount {
            user: user.clone(),
            post_count: counts.get(user.id.as_str()).copied().unwrap_or(0),
        })
        .collect();

    // Stable: equal counts keep declaration order
    ranked.sort_by(|a, b| b.post_count.cmp(&a.post_count));
    ranked.truncate(limit);
    ranked
}

/// The `limit` newest posts joined with their authors
pub fn latest_posts(dataset: &Dataset, limit: usize) -> AnalyticsResult<Vec<PostWithUser>> {
    let mut posts: Vec<&Post> = dataset.posts().iter().collect();
    posts.sort_by(|a, b| b.id.cmp(&a.id));

    posts
        .into_iter()
        .take(limit)
        .map(|post| {
            Ok(PostWithUser {
                post: post.clone(),
                user: author_of(dataset, post)?,
                comment_count: None,
            })
        })
        .collect()
}

/// Every post tied for the highest comment count
///
/// When no post has comments every post ties at zero and the whole
/// collection is returned.
pub fn popular_posts(dataset: &Dataset) -> AnalyticsResult<Vec<PostWithUser>> {
    let mut counted: Vec<(&Post, usize)> = dataset
        .posts()
        .iter()
        .map(|post| (post, dataset.comment_count(post.id)))
        .collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.id.cmp(&b.0.id)));

    let max_count = counted.first().map(|(_, count)| *count).unwrap_or(0);

    counted
        .into_iter()
        .take_while(|(_, count)| *count == max_count)
        .map(|(post, count)| {
            Ok(PostWithUser {
                post: post.clone(),
                user: author_of(dataset, post)?,
                comment_count: Some(count),
            })
        })
        .collect()
}

/// All posts authored by a user, in declaration order
pub fn posts_by_user(dataset: &Dataset, user_id: &str) -> AnalyticsResult<Vec<Post>> {
    if dataset.user(user_id).is_none() {
        return Err(AnalyticsError::UserNotFound(user_id.to_string()));
    }

    Ok(dataset
        .posts()
        .iter()
        .filter(|post| post.user_id == user_id)
        .cloned()
        .collect())
}

/// All comments on a post
pub fn comments_for_post(dataset: &Dataset, post_id: u64) -> AnalyticsResult<Vec<Comment>> {
    if dataset.post(post_id).is_none() {
        return Err(AnalyticsError::PostNotFound(post_id.to_string()));
    }

    Ok(dataset.comments_on(post_id).to_vec())
}

fn author_of(dataset: &Dataset, post: &Post) -> AnalyticsResult<User> {
    dataset
        .user(&post.user_id)
        .cloned()
        .ok_or_else(|| AnalyticsError::UnknownUser {
            post_id: post.id,
            user_id: post.user_id.clone(),
        })
}
