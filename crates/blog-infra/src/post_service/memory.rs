//! In-memory post service - used when no real storage backend is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::Post;
use blog_core::error::ServiceError;
use blog_core::ports::PostService;

struct Store {
    posts: HashMap<i64, Post>,
    next_id: i64,
}

/// In-memory post store using a simple HashMap with async RwLock.
///
/// Ids are assigned sequentially starting from 1.
/// Note: Data is lost on process restart.
pub struct InMemoryPostService {
    store: RwLock<Store>,
}

impl InMemoryPostService {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostService for InMemoryPostService {
    async fn list_posts(&self) -> Result<Vec<Post>, ServiceError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.posts.values().cloned().collect();
        posts.sort_by_key(|p| p.id);
        Ok(posts)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, ServiceError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn add_post(&self, mut post: Post) -> Result<Post, ServiceError> {
        let mut store = self.store.write().await;
        post.id = store.next_id;
        store.next_id += 1;
        store.posts.insert(post.id, post.clone());
        tracing::debug!(id = post.id, "stored new post");
        Ok(post)
    }

    async fn update_post(&self, post: Post) -> Result<Option<Post>, ServiceError> {
        let mut store = self.store.write().await;
        if !store.posts.contains_key(&post.id) {
            return Ok(None);
        }
        store.posts.insert(post.id, post.clone());
        tracing::debug!(id = post.id, "replaced post");
        Ok(Some(post))
    }

    async fn delete_post(&self, id: i64) -> Result<bool, ServiceError> {
        let mut store = self.store.write().await;
        Ok(store.posts.remove(&id).is_some())
    }
}
