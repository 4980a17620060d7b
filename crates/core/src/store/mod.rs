//! Store abstraction the HTTP handlers are written against.
//!
//! Implementations: [`memory::InMemoryMovieStore`] here, and the
//! PostgreSQL-backed `MovieRepo` in `movies-db`.

pub mod memory;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::StoreError;
use crate::movie::{Movie, MovieFields};
use crate::types::MovieId;

/// Maximum number of records returned by a listing.
pub const LIST_LIMIT: i64 = 5;

/// Result of inserting one movie.
///
/// Serialized with the snake_case key `inserted_id`, matching the other
/// outcome types, not the `InsertedID` key some document drivers emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertOutcome {
    pub inserted_id: MovieId,
}

/// Result of updating at most one movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of deleting at most one movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Access to the `movies` collection.
///
/// By-identifier operations match on the movie document's own `id` field,
/// not on whatever primary key the backend keeps for the document.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Up to `limit` movies in store-native order.
    async fn find_all(&self, limit: i64) -> Result<Vec<Movie>, StoreError>;

    /// First movie whose title equals `title` exactly.
    ///
    /// Returns [`StoreError::NoDocuments`] when nothing matches.
    async fn find_by_title(&self, title: &str) -> Result<Movie, StoreError>;

    /// The movie whose `id` field equals `id`.
    ///
    /// Returns [`StoreError::NoDocuments`] when nothing matches.
    async fn find_by_id(&self, id: MovieId) -> Result<Movie, StoreError>;

    async fn insert(&self, movie: &Movie) -> Result<InsertOutcome, StoreError>;

    /// Overwrite title, plot and year on the first movie with this `id`.
    async fn update(&self, id: MovieId, fields: &MovieFields) -> Result<UpdateOutcome, StoreError>;

    /// Remove the first movie with this `id`.
    async fn delete(&self, id: MovieId) -> Result<DeleteOutcome, StoreError>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Run a store operation, failing with [`StoreError::Timeout`] once `after`
/// has elapsed.
pub async fn bounded<T, F>(after: Duration, op: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(after, op).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout { after }),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn bounded_passes_through_fast_results() {
        let result = bounded(Duration::from_secs(1), async { Ok::<_, StoreError>(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn bounded_passes_through_errors() {
        let result = bounded(Duration::from_secs(1), async {
            Err::<(), _>(StoreError::NoDocuments)
        })
        .await;
        assert_matches!(result, Err(StoreError::NoDocuments));
    }

    #[tokio::test(start_paused = true)]
    async fn bounded_times_out_slow_operations() {
        let result = bounded(Duration::from_secs(10), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, StoreError>(())
        })
        .await;
        let err = result.unwrap_err();
        assert_matches!(err, StoreError::Timeout { .. });
        assert_eq!(err.to_string(), "store operation timed out after 10s");
    }
}
