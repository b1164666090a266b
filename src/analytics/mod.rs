//! Socialify Analytics
//!
//! Read-only views over the dataset:
//!
//! - **aggregate**: Pure aggregation functions
//! - **service**: `AnalyticsService`, the aggregations bound to a shared dataset
//! - **error**: Error types
//!
//! # Views
//!
//! ```text
//! top_users        users ranked by post count, first N
//! latest_posts     posts by descending id, first N, joined with author
//! popular_posts    posts tied for the most comments, joined with author
//! posts_by_user    one user's posts          (unknown id → NotFound)
//! comments_for_post one post's comments      (unknown id → NotFound)
//! ```
//!
//! # Example
//!
//! ```rust
//! use socialify::analytics::{AnalyticsConfig, AnalyticsService};
//! use socialify::dataset::Dataset;
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(Dataset::sample().unwrap());
//! let analytics = AnalyticsService::new(dataset, AnalyticsConfig::default());
//!
//! let top = analytics.top_users();
//! assert_eq!(top[0].user.name, "John Doe");
//! ```

mod aggregate;
mod error;
mod service;

pub use aggregate::{comments_for_post, latest_posts, popular_posts, posts_by_user, top_users};
pub use error::{AnalyticsError, AnalyticsResult};
pub use service::{AnalyticsConfig, AnalyticsService};
