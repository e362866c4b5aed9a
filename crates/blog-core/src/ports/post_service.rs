use async_trait::async_trait;

use crate::domain::Post;
use crate::error::ServiceError;

/// Post service port - the five operations the HTTP layer needs.
///
/// Implementations may suspend awaiting I/O; no ordering guarantee is
/// provided between calls.
#[async_trait]
pub trait PostService: Send + Sync {
    /// List every stored post. May be empty.
    async fn list_posts(&self) -> Result<Vec<Post>, ServiceError>;

    /// Fetch one post. `None` means no post has this id.
    async fn get_post(&self, id: i64) -> Result<Option<Post>, ServiceError>;

    /// Store a new post. The incoming id is ignored; the service assigns
    /// one and returns the stored post.
    async fn add_post(&self, post: Post) -> Result<Post, ServiceError>;

    /// Replace the post carrying the same id. `None` means no post has
    /// this id.
    async fn update_post(&self, post: Post) -> Result<Option<Post>, ServiceError>;

    /// Remove a post. Returns `false` when no post has this id.
    async fn delete_post(&self, id: i64) -> Result<bool, ServiceError>;
}
