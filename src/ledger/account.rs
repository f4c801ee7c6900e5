//! Account record access over the state store

use tracing::debug;

use crate::traits::{StateKey, StateStore};
use crate::types::{Account, LedgerError, LedgerResult};

/// Object-type tag namespacing account records in the store
pub const ACCOUNT_OBJECT_TYPE: &str = "Account";

/// Keyed account access: the record codec plus point lookups, writes, and
/// the all-accounts scan, so the operation layer reads as straight-line
/// checks.
pub struct AccountStore<S: StateStore> {
    store: S,
}

impl<S: StateStore> AccountStore<S> {
    /// Create an account store over the given backend
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn key(id: &str) -> StateKey {
        StateKey::new(ACCOUNT_OBJECT_TYPE, &[id])
    }

    /// Whether a record exists under `id`
    pub async fn exists(&self, id: &str) -> LedgerResult<bool> {
        Ok(self.store.get(&Self::key(id)).await?.is_some())
    }

    /// Load the account stored under `id`, failing with `NotFound` when absent
    pub async fn load(&self, id: &str) -> LedgerResult<Account> {
        let bytes = self
            .store
            .get(&Self::key(id))
            .await?
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;
        Account::from_bytes(&bytes)
    }

    /// Persist one account record
    pub async fn save(&mut self, account: &Account) -> LedgerResult<()> {
        self.store
            .put(&Self::key(&account.id), account.to_bytes()?)
            .await
    }

    /// Persist a set of account records as one unit; all land or none do
    pub async fn save_all(&mut self, accounts: &[&Account]) -> LedgerResult<()> {
        let mut writes = Vec::with_capacity(accounts.len());
        for account in accounts {
            writes.push((Self::key(&account.id), account.to_bytes()?));
        }
        self.store.put_batch(writes).await
    }

    /// Decode every stored account, in store-iteration order
    pub async fn list_all(&self) -> LedgerResult<Vec<Account>> {
        let records = self.store.scan_prefix(ACCOUNT_OBJECT_TYPE, &[]).await?;
        debug!(records = records.len(), "scanned account records");

        let mut accounts = Vec::with_capacity(records.len());
        for (_, bytes) in records {
            accounts.push(Account::from_bytes(&bytes)?);
        }
        Ok(accounts)
    }
}
