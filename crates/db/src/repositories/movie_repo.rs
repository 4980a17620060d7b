//! Repository for the `movies` collection.

use async_trait::async_trait;
use movies_core::error::StoreError;
use movies_core::movie::{Movie, MovieFields};
use movies_core::store::{DeleteOutcome, InsertOutcome, MovieStore, UpdateOutcome};
use movies_core::types::MovieId;

use crate::collection::{get_collection, Collection, Document, Filter};
use crate::DbPool;

/// Name of the collection holding movie documents.
pub const MOVIES_COLLECTION: &str = "movies";

/// [`MovieStore`] over the `movies` document collection.
///
/// Identifier lookups filter on the document's `id` field.
#[derive(Debug, Clone)]
pub struct MovieRepo {
    collection: Collection,
}

impl MovieRepo {
    pub fn new(pool: &DbPool) -> Self {
        Self {
            collection: get_collection(pool, MOVIES_COLLECTION),
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }
}

fn by_id(id: MovieId) -> Filter {
    Filter::all().eq("id", id.to_string())
}

fn backend(err: sqlx::Error) -> StoreError {
    tracing::debug!(error = ?err, "Movie store query failed");
    StoreError::Backend(err.to_string())
}

fn decode(doc: Document) -> Result<Movie, StoreError> {
    Ok(serde_json::from_value(doc.body)?)
}

#[async_trait]
impl MovieStore for MovieRepo {
    async fn find_all(&self, limit: i64) -> Result<Vec<Movie>, StoreError> {
        let docs = self
            .collection
            .find(&Filter::all(), limit)
            .await
            .map_err(backend)?;
        docs.into_iter().map(decode).collect()
    }

    async fn find_by_title(&self, title: &str) -> Result<Movie, StoreError> {
        let doc = self
            .collection
            .find_one(&Filter::all().eq("title", title))
            .await
            .map_err(backend)?
            .ok_or(StoreError::NoDocuments)?;
        decode(doc)
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Movie, StoreError> {
        let doc = self
            .collection
            .find_one(&by_id(id))
            .await
            .map_err(backend)?
            .ok_or(StoreError::NoDocuments)?;
        decode(doc)
    }

    async fn insert(&self, movie: &Movie) -> Result<InsertOutcome, StoreError> {
        let body = serde_json::to_value(movie)?;
        let native_id = self.collection.insert_one(&body).await.map_err(backend)?;
        tracing::debug!(movie_id = %movie.id, native_id, "Inserted movie");
        Ok(InsertOutcome {
            inserted_id: movie.id,
        })
    }

    async fn update(&self, id: MovieId, fields: &MovieFields) -> Result<UpdateOutcome, StoreError> {
        let set = serde_json::to_value(fields)?;
        let result = self
            .collection
            .update_one(&by_id(id), &set)
            .await
            .map_err(backend)?;
        Ok(UpdateOutcome {
            matched_count: result.matched_count.unsigned_abs(),
            modified_count: result.modified_count.unsigned_abs(),
        })
    }

    async fn delete(&self, id: MovieId) -> Result<DeleteOutcome, StoreError> {
        let deleted_count = self
            .collection
            .delete_one(&by_id(id))
            .await
            .map_err(backend)?;
        Ok(DeleteOutcome { deleted_count })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.collection.ping().await.map_err(backend)
    }
}
