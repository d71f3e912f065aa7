#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tinylink::prelude::*;

/// In-memory record store with the same uniqueness semantics as the
/// PostgreSQL schema: codes unique across all rows, original URLs unique
/// among active rows. The visit counter mutates under the lock, so the
/// increment is relative exactly like the SQL `visit_count = visit_count + 1`.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    records: HashMap<String, ShortUrlRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                records: HashMap::new(),
            }),
        }
    }

    /// Seeds a record directly, bypassing creation-service validation.
    pub fn seed(
        &self,
        code: &str,
        original_url: &str,
        is_active: bool,
        expires_at: Option<DateTime<Utc>>,
    ) {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.insert(
            code.to_string(),
            ShortUrlRecord {
                id,
                code: code.to_string(),
                original_url: original_url.to_string(),
                is_active,
                is_private: false,
                created_at: Utc::now(),
                expires_at,
                visit_count: 0,
                last_accessed_at: None,
            },
        );
    }

    pub fn visit_count(&self, code: &str) -> Option<i64> {
        let inner = self.inner.lock().unwrap();
        inner.records.get(code).map(|r| r.visit_count)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.records.get(code).cloned())
    }

    async fn find_active_by_original_url(
        &self,
        url: &str,
    ) -> Result<Option<ShortUrlRecord>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .records
            .values()
            .find(|r| r.is_active && r.original_url == url)
            .cloned())
    }

    async fn insert(&self, new_record: NewShortUrl) -> Result<ShortUrlRecord, AppError> {
        let mut inner = self.inner.lock().unwrap();

        if inner.records.contains_key(&new_record.code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "short_urls_code_key" }),
            ));
        }
        if inner
            .records
            .values()
            .any(|r| r.is_active && r.original_url == new_record.original_url)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "short_urls_active_original_url_key" }),
            ));
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let record = ShortUrlRecord {
            id,
            code: new_record.code.clone(),
            original_url: new_record.original_url,
            is_active: true,
            is_private: new_record.is_private,
            created_at: Utc::now(),
            expires_at: new_record.expires_at,
            visit_count: 0,
            last_accessed_at: None,
        };
        inner.records.insert(new_record.code, record.clone());

        Ok(record)
    }

    async fn increment_visit(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.records.get_mut(code) {
            Some(record) => {
                record.visit_count += 1;
                record.last_accessed_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_active(&self, code: &str, active: bool) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.records.get_mut(code) {
            Some(record) => {
                record.is_active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.records.remove(code).is_some())
    }

    async fn list_all(&self) -> Result<Vec<ShortUrlRecord>, AppError> {
        let inner = self.inner.lock().unwrap();
        let mut records: Vec<ShortUrlRecord> = inner.records.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());

    let generator = CodeGenerator::new(Arc::new(OsRandom), 6);
    let resolver = UniquenessResolver::new(10);

    let state = AppState {
        creation_service: Arc::new(CreationService::new(
            store.clone(),
            generator,
            resolver,
        )),
        redirect_engine: Arc::new(RedirectEngine::new(store.clone())),
        store: store.clone(),
        base_url: "http://localhost:3000".to_string(),
    };

    (state, store)
}
