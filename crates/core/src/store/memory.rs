//! In-memory [`MovieStore`] for tests and local development.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DeleteOutcome, InsertOutcome, MovieStore, UpdateOutcome};
use crate::error::StoreError;
use crate::movie::{Movie, MovieFields};
use crate::types::MovieId;

/// A stored document: the store's own key plus the movie payload.
#[derive(Debug, Clone)]
struct Entry {
    key: i64,
    movie: Movie,
}

#[derive(Debug, Default)]
struct Inner {
    next_key: i64,
    entries: Vec<Entry>,
}

/// Keeps movies in insertion order behind an async `RwLock`.
///
/// Like the database-backed store, every document gets an internal key that
/// is independent of the movie's `id` field; lookups only consult `id`.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    inner: RwLock<Inner>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored movies.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Internal key of the document holding `id`, if any.
    pub async fn native_key(&self, id: MovieId) -> Option<i64> {
        self.inner
            .read()
            .await
            .entries
            .iter()
            .find(|e| e.movie.id == id)
            .map(|e| e.key)
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn find_all(&self, limit: i64) -> Result<Vec<Movie>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let inner = self.inner.read().await;
        Ok(inner
            .entries
            .iter()
            .take(limit)
            .map(|e| e.movie.clone())
            .collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Movie, StoreError> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .find(|e| e.movie.title == title)
            .map(|e| e.movie.clone())
            .ok_or(StoreError::NoDocuments)
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Movie, StoreError> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .find(|e| e.movie.id == id)
            .map(|e| e.movie.clone())
            .ok_or(StoreError::NoDocuments)
    }

    async fn insert(&self, movie: &Movie) -> Result<InsertOutcome, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_key += 1;
        let key = inner.next_key;
        inner.entries.push(Entry {
            key,
            movie: movie.clone(),
        });
        Ok(InsertOutcome {
            inserted_id: movie.id,
        })
    }

    async fn update(&self, id: MovieId, fields: &MovieFields) -> Result<UpdateOutcome, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(entry) = inner.entries.iter_mut().find(|e| e.movie.id == id) else {
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let before = entry.movie.clone();
        entry.movie.apply(fields);
        let modified_count = u64::from(entry.movie != before);
        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count,
        })
    }

    async fn delete(&self, id: MovieId) -> Result<DeleteOutcome, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.entries.iter().position(|e| e.movie.id == id) {
            Some(index) => {
                inner.entries.remove(index);
                Ok(DeleteOutcome { deleted_count: 1 })
            }
            None => Ok(DeleteOutcome { deleted_count: 0 }),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
