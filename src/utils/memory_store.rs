//! In-memory state store implementation for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::traits::{StateKey, StateStore};
use crate::types::LedgerResult;

/// In-memory state store for testing and development.
///
/// Cloning is shallow: clones share the underlying map, which lets a test
/// hand one handle to a ledger and inspect the same state through another.
/// Iteration order is the byte order of the keys.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Arc<RwLock<BTreeMap<StateKey, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self, key: &StateKey) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.records.read().unwrap().get(key).cloned())
    }

    async fn put(&mut self, key: &StateKey, value: Vec<u8>) -> LedgerResult<()> {
        self.records.write().unwrap().insert(key.clone(), value);
        Ok(())
    }

    async fn put_batch(&mut self, writes: Vec<(StateKey, Vec<u8>)>) -> LedgerResult<()> {
        // One lock acquisition covers the whole batch.
        let mut records = self.records.write().unwrap();
        for (key, value) in writes {
            records.insert(key, value);
        }
        Ok(())
    }

    async fn scan_prefix(
        &self,
        object_type: &str,
        attributes: &[&str],
    ) -> LedgerResult<Vec<(StateKey, Vec<u8>)>> {
        let prefix = StateKey::new(object_type, attributes);
        let records = self.records.read().unwrap();
        let matched: Vec<(StateKey, Vec<u8>)> = records
            .iter()
            .filter(|(key, _)| key.as_str().starts_with(prefix.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(matched)
    }
}
