//! Validated, read-only dataset
//!
//! `Dataset` is built once from a [`Seed`] and never mutated afterwards.
//! Construction checks referential integrity so that every lookup the
//! analytics layer performs against loaded data can succeed.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::seed::Seed;
use super::types::{Comment, DatasetStats, Post, User};

/// Immutable collection of users, posts and comments
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Users in declaration order
    users: Vec<User>,
    /// User id -> position in `users`
    user_index: HashMap<String, usize>,
    /// Posts in declaration order
    posts: Vec<Post>,
    /// Post id -> position in `posts`
    post_index: HashMap<u64, usize>,
    /// Post id -> comments on that post
    comments: HashMap<u64, Vec<Comment>>,
    comment_total: usize,
}

impl Dataset {
    /// Validate a seed and build the dataset
    pub fn from_seed(seed: Seed) -> DatasetResult<Self> {
        let Seed {
            users,
            posts,
            comments: grouped,
        } = seed;

        let mut user_index = HashMap::with_capacity(users.len());
        for (pos, user) in users.iter().enumerate() {
            if user_index.insert(user.id.clone(), pos).is_some() {
                return Err(DatasetError::DuplicateUser(user.id.clone()));
            }
        }

        let mut post_index = HashMap::with_capacity(posts.len());
        for (pos, post) in posts.iter().enumerate() {
            if post_index.insert(post.id, pos).is_some() {
                return Err(DatasetError::DuplicatePost(post.id));
            }
            if !user_index.contains_key(&post.user_id) {
                return Err(DatasetError::DanglingUser {
                    post_id: post.id,
                    user_id: post.user_id.clone(),
                });
            }
        }

        let mut comment_ids = HashSet::new();
        let mut comments = HashMap::with_capacity(grouped.len());
        let mut group_keys = HashSet::with_capacity(grouped.len());
        for (listed_under, group) in grouped {
            if !group_keys.insert(listed_under) {
                return Err(DatasetError::DuplicateCommentGroup(listed_under));
            }
            for comment in &group {
                if comment.post_id != listed_under {
                    return Err(DatasetError::MisfiledComment {
                        comment_id: comment.id,
                        post_id: comment.post_id,
                        listed_under,
                    });
                }
                if !post_index.contains_key(&comment.post_id) {
                    return Err(DatasetError::DanglingPost {
                        comment_id: comment.id,
                        post_id: comment.post_id,
                    });
                }
                if !comment_ids.insert(comment.id) {
                    return Err(DatasetError::DuplicateComment(comment.id));
                }
            }
            if !group.is_empty() {
                comments.insert(listed_under, group);
            }
        }

        Ok(Self {
            users,
            user_index,
            posts,
            post_index,
            comments,
            comment_total: comment_ids.len(),
        })
    }

    /// Load and validate a JSON seed file
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let dataset = Self::from_seed(Seed::from_path(path)?)?;
        tracing::debug!(path = ?path, stats = %dataset.stats(), "Loaded seed file");
        Ok(dataset)
    }

    /// Build the dataset from the built-in sample seed
    pub fn sample() -> DatasetResult<Self> {
        Self::from_seed(Seed::sample())
    }

    /// All users in declaration order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by id
    pub fn user(&self, id: &str) -> Option<&User> {
        self.user_index.get(id).map(|&pos| &self.users[pos])
    }

    /// All posts in declaration order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by id
    pub fn post(&self, id: u64) -> Option<&Post> {
        self.post_index.get(&id).map(|&pos| &self.posts[pos])
    }

    /// Comments on a post; empty for posts without comments or unknown ids
    pub fn comments_on(&self, post_id: u64) -> &[Comment] {
        self.comments
            .get(&post_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn comment_count(&self, post_id: u64) -> usize {
        self.comments_on(post_id).len()
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            users: self.users.len(),
            posts: self.posts.len(),
            comments: self.comment_total,
        }
    }
}
