//! Document store seam
//!
//! The HTTP layer never talks to a database driver directly; it goes through
//! [`CoffeeStore`]. The MongoDB backend implements it for production, the
//! in-memory backend for tests and local development. Every operation maps to
//! exactly one store call, and every write returns the store's own
//! acknowledgement counts so handlers can pass them through untouched.

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use serde_json::Value;

/// A schemaless coffee document as submitted by clients.
///
/// Fields are never inspected or validated; the service passes them through to
/// storage verbatim.
pub type CoffeeDocument = serde_json::Map<String, Value>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("document conversion failed: {0}")]
    Conversion(#[from] mongodb::bson::ser::Error),
}

/// Acknowledgement for a successful insert
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    /// Store-assigned identifier, rendered as a 24-character hex string
    pub inserted_id: String,
}

/// Acknowledgement for an upsert
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    /// Present only when no document matched and one was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Acknowledgement for a delete
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Collection-scoped document operations.
///
/// Implementations must be safe for concurrent use; the handle is shared by
/// every in-flight request.
#[async_trait]
pub trait CoffeeStore: Send + Sync {
    /// Retrieve every document in the collection, in the store's natural order.
    async fn find_all(&self) -> StoreResult<Vec<Value>>;

    /// Fetch a single document by identifier, `None` when absent.
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Value>>;

    /// Insert a new document; the store assigns the identifier.
    async fn insert_one(&self, doc: CoffeeDocument) -> StoreResult<InsertAck>;

    /// Merge the given fields onto the matching document, creating the
    /// document when no match exists (upsert).
    async fn upsert_one(&self, id: ObjectId, fields: CoffeeDocument) -> StoreResult<UpdateAck>;

    /// Remove the matching document. Deleting an absent document is not an
    /// error; the acknowledgement reports zero deleted.
    async fn delete_one(&self, id: ObjectId) -> StoreResult<DeleteAck>;
}
