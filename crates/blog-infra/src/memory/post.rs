//! In-memory post repository - used when no database is compiled in, and by tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::RepoError;
use blog_core::domain::{Post, PostFields};
use blog_core::ports::PostRepository;

/// Post repository backed by a `Vec` behind an async RwLock.
///
/// Keeps insertion order, which is what `find_all` returns.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, fields: PostFields) -> Result<Post, RepoError> {
        let post = Post::from_fields(Uuid::new_v4(), fields, Utc::now());
        self.posts.write().await.push(post.clone());
        tracing::debug!(post_id = %post.id, "Post stored in memory");
        Ok(post)
    }

    async fn update_by_id(&self, id: Uuid, fields: PostFields) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.apply(fields);
        Ok(Some(post.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
