//! Seed data
//!
//! A `Seed` is the raw, unvalidated input to [`Dataset::from_seed`]. It can
//! come from the built-in sample, a JSON document, or be assembled in code
//! with the builder methods.
//!
//! JSON layout:
//!
//! ```text
//! {
//!   "users":    { "<user id>": "<name>", ... },
//!   "posts":    [ { "id": 1, "userid": "<user id>", "content": "..." }, ... ],
//!   "comments": { "<post id>": [ { "id": 1, "postid": 1, "content": "..." } ] }
//! }
//! ```
//!
//! [`Dataset::from_seed`]: super::Dataset::from_seed

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{comment_groups, user_directory, Comment, Post, User};

/// Unvalidated users, posts and comments
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    /// Users in declaration order
    #[serde(default, with = "user_directory")]
    pub users: Vec<User>,

    #[serde(default)]
    pub posts: Vec<Post>,

    /// Comments grouped by the post they belong to, in document order
    #[serde(default, with = "comment_groups")]
    pub comments: Vec<(u64, Vec<Comment>)>,
}

impl Seed {
    /// Create an empty seed
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: add a user
    pub fn user(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.users.push(User::new(id, name));
        self
    }

    /// Builder method: add a post
    pub fn post(mut self, id: u64, user_id: impl Into<String>, content: impl Into<String>) -> Self {
        self.posts.push(Post::new(id, user_id, content));
        self
    }

    /// Builder method: add a comment under its post
    pub fn comment(mut self, id: u64, post_id: u64, content: impl Into<String>) -> Self {
        let comment = Comment::new(id, post_id, content);
        match self.comments.iter_mut().find(|(key, _)| *key == post_id) {
            Some((_, group)) => group.push(comment),
            None => self.comments.push((post_id, vec![comment])),
        }
        self
    }

    /// Parse a seed from a JSON document
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON seed file
    pub fn from_path(path: &Path) -> DatasetResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Built-in sample data served when no seed file is configured
    pub fn sample() -> Self {
        Self::new()
            .user("1", "John Doe")
            .user("2", "Jane Doe")
            .user("3", "Alice Smith")
            .user("4", "Bob Johnson")
            .user("5", "Charlie Brown")
            .user("6", "Diana White")
            .user("7", "Edward Davis")
            .user("8", "Fiona Miller")
            .user("9", "George Wilson")
            .user("10", "Helen Moore")
            .post(246, "1", "Post about ant")
            .post(161, "1", "Post about elephant")
            .post(150, "1", "Post about ocean")
            .post(370, "1", "Post about monkey")
            .post(344, "1", "Post about ocean")
            .post(952, "1", "Post about zebra")
            .post(647, "1", "Post about igloo")
            .post(421, "1", "Post about house")
            .post(890, "1", "Post about bat")
            .post(461, "1", "Post about umbrella")
            .post(247, "2", "Post about flowers")
            .post(162, "2", "Post about gardens")
            .post(151, "2", "Post about rivers")
            .post(371, "2", "Post about mountains")
            .post(345, "3", "Post about hiking")
            .post(648, "4", "Post about cooking")
            .post(422, "4", "Post about baking")
            .post(891, "5", "Post about music")
            .post(462, "5", "Post about art")
            .comment(3893, 150, "Old comment")
            .comment(4791, 150, "Boring comment")
            .comment(3894, 161, "Nice post")
            .comment(4793, 161, "Great observation")
            .comment(3895, 246, "I agree")
            .comment(3896, 370, "Funny post")
            .comment(4794, 370, "LOL")
            .comment(4795, 370, "ROFL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_shape() {
        let seed = Seed::sample();
        assert_eq!(seed.users.len(), 10);
        assert_eq!(seed.posts.len(), 19);
        assert_eq!(seed.comments.iter().map(|(_, group)| group.len()).sum::<usize>(), 8);
    }

    #[test]
    fn test_from_json() {
        let seed = Seed::from_json(
            r#"{
                "users": {"1": "John Doe", "2": "Jane Doe"},
                "posts": [{"id": 10, "userid": "2", "content": "hello"}],
                "comments": {"10": [{"id": 100, "postid": 10, "content": "hi"}]}
            }"#,
        )
        .unwrap();

        assert_eq!(seed.users[1], User::new("2", "Jane Doe"));
        assert_eq!(seed.posts[0].user_id, "2");
        assert_eq!(seed.comments[0].0, 10);
        assert_eq!(seed.comments[0].1[0].content, "hi");
    }

    #[test]
    fn test_from_json_missing_sections_default_to_empty() {
        let seed = Seed::from_json(r#"{"users": {"1": "John Doe"}}"#).unwrap();
        assert!(seed.posts.is_empty());
        assert!(seed.comments.is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        let err = Seed::from_json(r#"{"users": ["John Doe"]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Seed::sample()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let seed = Seed::from_path(file.path()).unwrap();
        assert_eq!(seed, Seed::sample());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Seed::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
