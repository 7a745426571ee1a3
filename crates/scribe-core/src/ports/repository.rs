use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist changes to an existing entity.
    ///
    /// Fails with [`RepoError::NotFound`] when no row has the entity's ID.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Insert a new post, letting the store assign its ID and timestamps.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// All posts, ascending by ID.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;
}
