//! Analytics error types

use thiserror::Error;

/// Errors that can occur while computing a view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// Lookup by a user id that is not in the dataset
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Lookup by a post id that is not in the dataset
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// A post's author could not be resolved while joining
    #[error("Post {post_id} references unknown user '{user_id}'")]
    UnknownUser { post_id: u64, user_id: String },
}

impl AnalyticsError {
    /// Whether this error classifies a lookup of an unknown id
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AnalyticsError::UserNotFound(_) | AnalyticsError::PostNotFound(_)
        )
    }
}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(AnalyticsError::UserNotFound("999".into()).is_not_found());
        assert!(AnalyticsError::PostNotFound("abc".into()).is_not_found());
        assert!(!AnalyticsError::UnknownUser {
            post_id: 1,
            user_id: "2".into()
        }
        .is_not_found());
    }
}
