//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use scribe_core::domain::{Post, PostDraft, PostId};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository};

/// In-memory post repository backed by an ordered map with async RwLock.
///
/// IDs start at 1 and are never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<BTreeMap<PostId, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(&post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            title: draft.into_title(),
            created_at: now,
            updated_at: now,
        };

        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PostDraft {
        PostDraft::validate(Some(title)).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(draft("El post de prueba")).await.unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.created_at, post.updated_at);

        let found = repo.find_by_id(post.id).await.unwrap();
        assert_eq!(found, Some(post));
        assert_eq!(repo.find_by_id(1000).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_existing_and_missing() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.create(draft("old")).await.unwrap();

        post.retitle(draft("nuevo"));
        let saved = repo.save(post.clone()).await.unwrap();
        assert_eq!(saved.title, "nuevo");
        assert_eq!(repo.find_by_id(post.id).await.unwrap().unwrap().title, "nuevo");

        post.id = 1000;
        assert!(matches!(repo.save(post).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(draft("gone soon")).await.unwrap();

        repo.delete(post.id).await.unwrap();
        assert_eq!(repo.find_by_id(post.id).await.unwrap(), None);
        assert!(matches!(repo.delete(post.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_ordered_by_id_without_reuse() {
        let repo = InMemoryPostRepository::new();
        for title in ["a", "b", "c"] {
            repo.create(draft(title)).await.unwrap();
        }
        repo.delete(3).await.unwrap();
        let next = repo.create(draft("d")).await.unwrap();
        assert_eq!(next.id, 4);

        let ids: Vec<PostId> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }
}
