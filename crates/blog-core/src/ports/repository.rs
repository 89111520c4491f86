use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostFields};
use crate::error::RepoError;

/// Post repository - the schema-bound accessor over the document store.
///
/// Every method is a single round trip to the store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, in the store's default order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Persist a new post. The store assigns `id` and `created`.
    async fn create(&self, fields: PostFields) -> Result<Post, RepoError>;

    /// Replace title, image and body of an existing post.
    /// Returns `Ok(None)` when no post has that id.
    async fn update_by_id(&self, id: Uuid, fields: PostFields) -> Result<Option<Post>, RepoError>;

    /// Remove a post. Fails with [`RepoError::NotFound`] when no post has that id.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;
}
