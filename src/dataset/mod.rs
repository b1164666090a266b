//! Socialify Dataset
//!
//! The in-memory data the service answers from:
//!
//! - **types**: Records (User, Post, Comment) and derived views
//! - **seed**: Raw seed input (built-in sample or JSON file)
//! - **store**: Validated, immutable `Dataset`
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//!   Seed (sample | JSON file) → validate → Dataset → Arc<Dataset> → handlers
//! ```
//!
//! Validation rejects duplicate ids and dangling references up front, so a
//! loaded dataset never yields a post without an author.
//!
//! # Example
//!
//! ```rust
//! use socialify::dataset::{Dataset, Seed};
//!
//! let seed = Seed::new()
//!     .user("1", "John Doe")
//!     .post(10, "1", "Hello")
//!     .comment(100, 10, "Hi!");
//!
//! let dataset = Dataset::from_seed(seed).unwrap();
//! assert_eq!(dataset.comment_count(10), 1);
//! ```

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use seed::Seed;
pub use store::Dataset;
pub use types::{
    comment_groups, user_directory, Comment, DatasetStats, Post, PostWithUser, User,
    UserPostCount,
};
