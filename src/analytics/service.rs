//! Analytics Service
//!
//! Binds the aggregations to a shared dataset and the configured view sizes.
//! Handlers hold one of these behind an `Arc`.

use std::sync::Arc;

use crate::analytics::aggregate;
use crate::analytics::error::AnalyticsResult;
use crate::dataset::{Comment, Dataset, Post, PostWithUser, UserPostCount};

/// View sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Entries returned by the top-users view
    pub top_users_limit: usize,
    /// Entries returned by the latest-posts view
    pub latest_posts_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_users_limit: 5,
            latest_posts_limit: 5,
        }
    }
}

/// Read-only analytics over a shared dataset
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    dataset: Arc<Dataset>,
    config: AnalyticsConfig,
}

impl AnalyticsService {
    pub fn new(dataset: Arc<Dataset>, config: AnalyticsConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn top_users(&self) -> Vec<UserPostCount> {
        aggregate::top_users(&self.dataset, self.config.top_users_limit)
    }

    pub fn latest_posts(&self) -> AnalyticsResult<Vec<PostWithUser>> {
        aggregate::latest_posts(&self.dataset, self.config.latest_posts_limit)
    }

    pub fn popular_posts(&self) -> AnalyticsResult<Vec<PostWithUser>> {
        aggregate::popular_posts(&self.dataset)
    }

    pub fn posts_by_user(&self, user_id: &str) -> AnalyticsResult<Vec<Post>> {
        aggregate::posts_by_user(&self.dataset, user_id)
    }

    pub fn comments_for_post(&self, post_id: u64) -> AnalyticsResult<Vec<Comment>> {
        aggregate::comments_for_post(&self.dataset, post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_apply() {
        let dataset = Arc::new(Dataset::sample().unwrap());
        let service = AnalyticsService::new(
            dataset,
            AnalyticsConfig {
                top_users_limit: 2,
                latest_posts_limit: 3,
            },
        );

        assert_eq!(service.top_users().len(), 2);
        assert_eq!(service.latest_posts().unwrap().len(), 3);
    }

    #[test]
    fn test_zero_limits_yield_empty_views() {
        let dataset = Arc::new(Dataset::sample().unwrap());
        let service = AnalyticsService::new(
            dataset,
            AnalyticsConfig {
                top_users_limit: 0,
                latest_posts_limit: 0,
            },
        );

        assert!(service.top_users().is_empty());
        assert!(service.latest_posts().unwrap().is_empty());
        // Popular posts has no limit
        assert_eq!(service.popular_posts().unwrap().len(), 1);
    }
}
