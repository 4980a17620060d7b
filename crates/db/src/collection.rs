//! Named document collections stored in the `documents` table.
//!
//! A [`Collection`] is a cheap handle (pool + collection name). Queries
//! select documents with a [`Filter`], which is a set of top-level
//! field/value pairs matched with JSONB containment (`body @> filter`).

use serde_json::{Map, Value};
use sqlx::FromRow;

use crate::DbPool;

/// One stored document.
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    /// Store-native key. Not part of `body`.
    #[sqlx(rename = "_id")]
    pub native_id: i64,
    pub body: Value,
}

/// Equality filter on top-level document fields. An empty filter matches
/// every document in the collection.
#[derive(Debug, Clone, Default)]
pub struct Filter(Map<String, Value>);

impl Filter {
    /// Matches every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a `field == value` condition.
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    fn as_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Counts reported by [`Collection::update_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct UpdateResult {
    pub matched_count: i64,
    pub modified_count: i64,
}

/// Handle to a single named collection.
#[derive(Debug, Clone)]
pub struct Collection {
    pool: DbPool,
    name: String,
}

/// Obtain a handle to the collection called `name`. Collections are
/// implicit; nothing is created until the first insert.
pub fn get_collection(pool: &DbPool, name: &str) -> Collection {
    Collection {
        pool: pool.clone(),
        name: name.to_string(),
    }
}

impl Collection {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Up to `limit` matching documents in insertion order.
    pub async fn find(&self, filter: &Filter, limit: i64) -> Result<Vec<Document>, sqlx::Error> {
        sqlx::query_as::<_, Document>(
            "SELECT _id, body FROM documents
             WHERE collection = $1 AND body @> $2
             ORDER BY _id
             LIMIT $3",
        )
        .bind(&self.name)
        .bind(filter.as_json())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// The earliest-inserted matching document, if any.
    pub async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, sqlx::Error> {
        sqlx::query_as::<_, Document>(
            "SELECT _id, body FROM documents
             WHERE collection = $1 AND body @> $2
             ORDER BY _id
             LIMIT 1",
        )
        .bind(&self.name)
        .bind(filter.as_json())
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a document, returning its store-native key.
    pub async fn insert_one(&self, body: &Value) -> Result<i64, sqlx::Error> {
        let (native_id,): (i64,) = sqlx::query_as(
            "INSERT INTO documents (collection, body) VALUES ($1, $2) RETURNING _id",
        )
        .bind(&self.name)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;
        Ok(native_id)
    }

    /// Merge `set` into the first matching document.
    ///
    /// `matched_count` is 0 or 1. `modified_count` is 0 when the document
    /// already held every value in `set`.
    pub async fn update_one(&self, filter: &Filter, set: &Value) -> Result<UpdateResult, sqlx::Error> {
        sqlx::query_as::<_, UpdateResult>(
            "WITH target AS (
                 SELECT _id, body FROM documents
                 WHERE collection = $1 AND body @> $2
                 ORDER BY _id
                 LIMIT 1
                 FOR UPDATE
             ),
             updated AS (
                 UPDATE documents d
                 SET body = d.body || $3, updated_at = NOW()
                 FROM target t
                 WHERE d._id = t._id AND NOT (t.body @> $3)
                 RETURNING d._id
             )
             SELECT (SELECT COUNT(*) FROM target) AS matched_count,
                    (SELECT COUNT(*) FROM updated) AS modified_count",
        )
        .bind(&self.name)
        .bind(filter.as_json())
        .bind(set)
        .fetch_one(&self.pool)
        .await
    }

    /// Delete the first matching document. Returns the number removed (0 or 1).
    pub async fn delete_one(&self, filter: &Filter) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM documents WHERE _id = (
                 SELECT _id FROM documents
                 WHERE collection = $1 AND body @> $2
                 ORDER BY _id
                 LIMIT 1
             )",
        )
        .bind(&self.name)
        .bind(filter.as_json())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Confirm the backing database answers.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    /// Number of documents in the collection.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = $1")
                .bind(&self.name)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
