//! # Socialify
//!
//! Social analytics service - top users, latest posts and trending posts
//! served over HTTP from a fixed in-memory dataset.
//!
//! ## Features
//!
//! - **Validated dataset**: Seed data checked for duplicate ids and dangling references at load
//! - **Aggregations**: Top users by post count, newest posts, most-commented posts
//! - **REST API**: Axum server with open CORS for the dashboard
//! - **CLI**: Terminal client with a refreshing feed
//!
//! ## Modules
//!
//! - [`dataset`]: Records, seed loading and the immutable dataset
//! - [`analytics`]: Aggregation views
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use socialify::analytics::{AnalyticsConfig, AnalyticsService};
//! use socialify::dataset::Dataset;
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(Dataset::sample().unwrap());
//! let analytics = AnalyticsService::new(dataset, AnalyticsConfig::default());
//!
//! let latest = analytics.latest_posts().unwrap();
//! assert_eq!(latest[0].post.content, "Post about zebra");
//!
//! let popular = analytics.popular_posts().unwrap();
//! assert_eq!(popular[0].comment_count, Some(3));
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{
    Comment, Dataset, DatasetError, DatasetResult, DatasetStats, Post, PostWithUser, Seed, User,
    UserPostCount,
};

pub use analytics::{AnalyticsConfig, AnalyticsError, AnalyticsResult, AnalyticsService};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DatasetConfig, LoggingConfig};
