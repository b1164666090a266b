//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::analytics::AnalyticsService;
use crate::config::ApiConfig;
use crate::dataset::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Analytics over the read-only dataset
    pub analytics: Arc<AnalyticsService>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(analytics: Arc<AnalyticsService>, config: ApiConfig) -> Self {
        Self {
            analytics,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// The dataset the analytics run against
    pub fn dataset(&self) -> &Dataset {
        self.analytics.dataset()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
