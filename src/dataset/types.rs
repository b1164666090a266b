//! Core data types for the Socialify dataset
//!
//! This module defines the records held in memory and the derived views
//! returned by the analytics layer:
//! - `User`, `Post`, `Comment`: seed records
//! - `UserPostCount`, `PostWithUser`: aggregation results
//!
//! Field names on the wire follow the dashboard's types (`userid`, `postid`,
//! `postCount`, `commentCount`).

use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User {
    /// Opaque user identifier (numeric-looking strings in the sample data)
    pub id: String,
    /// Display name
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A post authored by exactly one user
///
/// Higher ids are newer; the id doubles as the recency key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userid")]
    pub user_id: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            content: content.into(),
        }
    }
}

/// A comment attached to exactly one post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postid")]
    pub post_id: u64,
    pub content: String,
}

impl Comment {
    pub fn new(id: u64, post_id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            post_id,
            content: content.into(),
        }
    }
}

/// A user paired with the number of posts they authored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPostCount {
    pub user: User,
    pub post_count: usize,
}

/// A post joined with its author
///
/// `comment_count` is only filled in by the popular-posts view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostWithUser {
    pub post: Post,
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<usize>,
}

/// Record counts for a loaded dataset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetStats {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
}

impl std::fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} users, {} posts, {} comments",
            self.users, self.posts, self.comments
        )
    }
}

/// Serde adapter for the `{ "<id>": "<name>" }` user directory shape.
///
/// Deserialization keeps the document's key order, which is the order users
/// were declared in.
pub mod user_directory {
    use super::User;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(users: &[User], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(users.len()))?;
        for user in users {
            map.serialize_entry(&user.id, &user.name)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<User>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = Vec<User>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of user id to user name")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut users = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, name)) = access.next_entry::<String, String>()? {
                    users.push(User { id, name });
                }
                Ok(users)
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}

/// Serde adapter for the `{ "<post id>": [comment, ...] }` comment grouping.
///
/// Every group is kept in document order, including repeated keys, so that
/// validation can see them.
pub mod comment_groups {
    use super::Comment;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(groups: &[(u64, Vec<Comment>)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (post_id, comments) in groups {
            map.serialize_entry(post_id, comments)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(u64, Vec<Comment>)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = Vec<(u64, Vec<Comment>)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of post id to a list of comments")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<u64, Vec<Comment>>()? {
                    groups.push(entry);
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}
