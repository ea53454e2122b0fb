//! MongoDB-backed coffee store

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};
use serde_json::Value;

use super::{CoffeeDocument, CoffeeStore, DeleteAck, InsertAck, StoreResult, UpdateAck};
use crate::config::ServerConfig;

/// Production store over a MongoDB collection.
///
/// The driver manages its own connection pool; a single `MongoStore` is shared
/// by every request handler.
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// Connect to the configured cluster and verify it responds.
    ///
    /// Runs `ping` against the admin database so bad credentials or an
    /// unreachable cluster fail startup instead of the first request.
    pub async fn connect(config: &ServerConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(config.mongodb_uri()).await?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        tracing::info!(
            cluster = %config.db_cluster,
            db = %config.db_name,
            collection = %config.db_collection,
            "connected to MongoDB"
        );

        let collection = client
            .database(&config.db_name)
            .collection::<Document>(&config.db_collection);
        Ok(Self { collection })
    }
}

/// Render a stored document as client-facing JSON, with `_id` flattened from
/// an ObjectId to its 24-character hex string.
fn to_json(mut doc: Document) -> Value {
    if let Ok(oid) = doc.get_object_id("_id") {
        let hex = oid.to_hex();
        doc.insert("_id", hex);
    }
    Bson::Document(doc).into_relaxed_extjson()
}

fn to_bson(fields: &CoffeeDocument) -> StoreResult<Document> {
    Ok(mongodb::bson::to_document(fields)?)
}

fn id_to_hex(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

#[async_trait]
impl CoffeeStore for MongoStore {
    async fn find_all(&self) -> StoreResult<Vec<Value>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(to_json).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Value>> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(to_json))
    }

    async fn insert_one(&self, doc: CoffeeDocument) -> StoreResult<InsertAck> {
        let result = self.collection.insert_one(to_bson(&doc)?).await?;
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id_to_hex(&result.inserted_id),
        })
    }

    async fn upsert_one(&self, id: ObjectId, fields: CoffeeDocument) -> StoreResult<UpdateAck> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": to_bson(&fields)? })
            .upsert(true)
            .await?;
        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(id_to_hex),
        })
    }

    async fn delete_one(&self, id: ObjectId) -> StoreResult<DeleteAck> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}
