use serde::{Deserialize, Serialize};

/// Post entity - a single blog post.
///
/// Identifiers are assigned by the persistence layer on add; a post that
/// has not been stored yet carries the placeholder id `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
}

impl Post {
    /// Create a post that has not been stored yet.
    pub fn new(title: String) -> Self {
        Self { id: 0, title }
    }
}
