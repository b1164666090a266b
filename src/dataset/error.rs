//! Dataset error types
//!
//! Everything that can go wrong while reading or validating seed data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Seed file could not be read
    #[error("Failed to read seed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed document is not valid JSON or has the wrong shape
    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two users share an id
    #[error("Duplicate user id: {0}")]
    DuplicateUser(String),

    /// Two posts share an id
    #[error("Duplicate post id: {0}")]
    DuplicatePost(u64),

    /// Two comments share an id
    #[error("Duplicate comment id: {0}")]
    DuplicateComment(u64),

    /// A post references a user that does not exist
    #[error("Post {post_id} references unknown user '{user_id}'")]
    DanglingUser { post_id: u64, user_id: String },

    /// The same post id appears as more than one comment group
    #[error("Comments for post {0} are listed more than once")]
    DuplicateCommentGroup(u64),

    /// A comment references a post that does not exist
    #[error("Comment {comment_id} references unknown post {post_id}")]
    DanglingPost { comment_id: u64, post_id: u64 },

    /// A comment is grouped under a different post than the one it names
    #[error("Comment {comment_id} is listed under post {listed_under} but belongs to post {post_id}")]
    MisfiledComment {
        comment_id: u64,
        post_id: u64,
        listed_under: u64,
    },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
