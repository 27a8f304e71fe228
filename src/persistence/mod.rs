//! Record storage seam.
//!
//! The services only need `create`, `get` and `update` scoped to one record
//! type. [`MemoryRepository`] backs the CLI and the tests; a database-backed
//! store implements the same trait.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PenwrightError, Result};

/// A record as stored, with its generated id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub data: T,
}

/// Storage for one record type.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    /// Insert a new record and return it with its id.
    async fn create(&self, data: T) -> Result<Stored<T>>;

    async fn get(&self, id: Uuid) -> Result<Option<Stored<T>>>;

    /// Replace the data of an existing record. Unknown ids are a
    /// [`PenwrightError::Persistence`] error.
    async fn update(&self, id: Uuid, data: T) -> Result<Stored<T>>;
}

/// In-process repository.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    rows: Mutex<HashMap<Uuid, Stored<T>>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: Clone> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records, oldest first.
    pub fn all(&self) -> Vec<Stored<T>> {
        let mut all: Vec<_> = self.rows().values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        all
    }

    fn rows(&self) -> MutexGuard<'_, HashMap<Uuid, Stored<T>>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<T> Repository<T> for MemoryRepository<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn create(&self, data: T) -> Result<Stored<T>> {
        let now = Utc::now();
        let record = Stored {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            data,
        };
        self.rows().insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Stored<T>>> {
        Ok(self.rows().get(&id).cloned())
    }

    async fn update(&self, id: Uuid, data: T) -> Result<Stored<T>> {
        let mut rows = self.rows();
        let record = rows
            .get_mut(&id)
            .ok_or_else(|| PenwrightError::Persistence(format!("record {id} not found")))?;
        record.data = data;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}
