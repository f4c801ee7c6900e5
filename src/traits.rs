//! Traits for state storage abstraction

use async_trait::async_trait;

use crate::types::LedgerResult;

const KEY_DELIMITER: char = '\u{0}';

/// Composite key addressing one record in the state store.
///
/// A key is a deterministic function of an object-type tag and attribute
/// strings: nul-delimited, with a leading nul that keeps composite keys in
/// their own namespace. Building a key twice from the same inputs yields the
/// same key, and a key built from fewer attributes is a string prefix of
/// every key that extends it, which is what prefix scans match against.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey(String);

impl StateKey {
    /// Build the key for `object_type` and the given attributes
    pub fn new(object_type: &str, attributes: &[&str]) -> Self {
        let mut key = String::new();
        key.push(KEY_DELIMITER);
        key.push_str(object_type);
        key.push(KEY_DELIMITER);
        for attribute in attributes {
            key.push_str(attribute);
            key.push(KEY_DELIMITER);
        }
        Self(key)
    }

    /// The raw key string handed to the store
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Storage abstraction for ledger state
///
/// The ledger core works against any key-value backend implementing these
/// methods. Implementations map their internal failures to
/// `LedgerError::StoreUnavailable`; the core propagates such failures to the
/// caller without retrying.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Point lookup; `Ok(None)` when no record exists under `key`
    async fn get(&self, key: &StateKey) -> LedgerResult<Option<Vec<u8>>>;

    /// Write one record, replacing any previous value under `key`
    async fn put(&mut self, key: &StateKey, value: Vec<u8>) -> LedgerResult<()>;

    /// Write a set of records together.
    ///
    /// Implementations must apply every write or none of them. The ledger
    /// relies on this contract to commit both sides of a transfer as one
    /// unit; a backend that cannot honor it must reject the batch up front.
    async fn put_batch(&mut self, writes: Vec<(StateKey, Vec<u8>)>) -> LedgerResult<()>;

    /// Enumerate every record whose key extends `object_type` plus the given
    /// leading attributes. Order is store-defined; callers get no sort
    /// guarantee beyond what the backend happens to provide.
    async fn scan_prefix(
        &self,
        object_type: &str,
        attributes: &[&str],
    ) -> LedgerResult<Vec<(StateKey, Vec<u8>)>>;
}
