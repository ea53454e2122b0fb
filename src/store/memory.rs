//! In-memory coffee store
//!
//! Backs the integration tests and local development without a cluster.

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;

use super::{CoffeeDocument, CoffeeStore, DeleteAck, InsertAck, StoreResult, UpdateAck};

/// Concurrent map of identifier to document fields.
///
/// Listing returns documents ordered by identifier; ObjectIds carry a
/// creation-time prefix, so this matches insertion order for documents created
/// through the API.
#[derive(Default)]
pub struct MemoryStore {
    documents: DashMap<ObjectId, CoffeeDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn render(id: &ObjectId, fields: &CoffeeDocument) -> Value {
        let mut doc = CoffeeDocument::new();
        doc.insert("_id".to_string(), Value::String(id.to_hex()));
        for (key, value) in fields {
            doc.insert(key.clone(), value.clone());
        }
        Value::Object(doc)
    }
}

#[async_trait]
impl CoffeeStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Value>> {
        let mut entries: Vec<(ObjectId, CoffeeDocument)> = self
            .documents
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        entries.sort_by_key(|(id, _)| id.bytes());

        Ok(entries
            .iter()
            .map(|(id, fields)| Self::render(id, fields))
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Value>> {
        Ok(self
            .documents
            .get(&id)
            .map(|entry| Self::render(&id, entry.value())))
    }

    async fn insert_one(&self, doc: CoffeeDocument) -> StoreResult<InsertAck> {
        let id = ObjectId::new();
        self.documents.insert(id, doc);
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id.to_hex(),
        })
    }

    async fn upsert_one(&self, id: ObjectId, fields: CoffeeDocument) -> StoreResult<UpdateAck> {
        match self.documents.get_mut(&id) {
            Some(mut existing) => {
                let mut modified = 0;
                for (key, value) in fields {
                    if existing.get(&key) != Some(&value) {
                        modified = 1;
                    }
                    existing.insert(key, value);
                }
                Ok(UpdateAck {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: modified,
                    upserted_id: None,
                })
            }
            None => {
                self.documents.insert(id, fields);
                Ok(UpdateAck {
                    acknowledged: true,
                    matched_count: 0,
                    modified_count: 0,
                    upserted_id: Some(id.to_hex()),
                })
            }
        }
    }

    async fn delete_one(&self, id: ObjectId) -> StoreResult<DeleteAck> {
        let removed = self.documents.remove(&id).is_some();
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: u64::from(removed),
        })
    }
}
