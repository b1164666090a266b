//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod posts;
pub mod users;

use axum::http::Uri;

use crate::analytics::AnalyticsResult;
use crate::api::error::{ApiError, ApiResult};

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Detail lookups answer unknown ids with an empty list rather than an error
/// status; the miss is still logged.
pub(crate) fn empty_if_not_found<T>(result: AnalyticsResult<Vec<T>>) -> ApiResult<Vec<T>> {
    match result {
        Ok(items) => Ok(items),
        Err(e) if e.is_not_found() => {
            tracing::debug!(reason = %e, "Lookup miss, returning empty list");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::AnalyticsError;

    #[test]
    fn test_empty_if_not_found() {
        let hit: AnalyticsResult<Vec<u32>> = Ok(vec![1, 2]);
        assert_eq!(empty_if_not_found(hit).unwrap(), vec![1, 2]);

        let miss: AnalyticsResult<Vec<u32>> = Err(AnalyticsError::PostNotFound("9".into()));
        assert!(empty_if_not_found(miss).unwrap().is_empty());

        let broken: AnalyticsResult<Vec<u32>> = Err(AnalyticsError::UnknownUser {
            post_id: 1,
            user_id: "x".into(),
        });
        assert!(matches!(
            empty_if_not_found(broken),
            Err(ApiError::Analytics(_))
        ));
    }
}
