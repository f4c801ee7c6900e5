//! Core types and data structures for the account ledger

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Identity of the party invoking a ledger operation.
///
/// The host execution environment authenticates the caller and hands this
/// record to every call; the ledger trusts it without further verification.
/// It pairs the membership service provider id with the enrolled identity's
/// distinguished id. The ledger assumes nothing about the distinguished id
/// beyond equality and substring containment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerId {
    /// Membership service provider vouching for the caller
    pub msp_id: String,
    /// Distinguished id of the enrolled identity within that provider
    pub enrollment_id: String,
}

impl CallerId {
    /// Create a new caller identity
    pub fn new(msp_id: impl Into<String>, enrollment_id: impl Into<String>) -> Self {
        Self {
            msp_id: msp_id.into(),
            enrollment_id: enrollment_id.into(),
        }
    }
}

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.msp_id, self.enrollment_id)
    }
}

/// Core account record, the ledger's sole persisted entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, chosen by the caller at creation, immutable after
    pub id: String,
    /// Identity that created the account; the only identity allowed to set
    /// its balance or transfer out of it
    pub owner: CallerId,
    /// Current balance, never negative
    pub balance: BigDecimal,
    /// Blocks every balance mutation while set. Records written before the
    /// freeze feature existed lack the field and decode as active.
    #[serde(default)]
    pub frozen: bool,
}

impl Account {
    /// Create a new active account owned by `owner`
    pub fn new(id: String, owner: CallerId, balance: BigDecimal) -> Self {
        Self {
            id,
            owner,
            balance,
            frozen: false,
        }
    }

    /// Encode the account into its stored byte representation
    pub fn to_bytes(&self) -> LedgerResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| {
            LedgerError::StoreUnavailable(format!("failed to encode account {}: {}", self.id, e))
        })
    }

    /// Decode an account from its stored byte representation
    pub fn from_bytes(bytes: &[u8]) -> LedgerResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            LedgerError::StoreUnavailable(format!("failed to decode account record: {}", e))
        })
    }
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Account already exists: {0}")]
    AlreadyExists(String),
    #[error("Account not found: {0}")]
    NotFound(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Admin required: {0}")]
    AdminRequired(String),
    #[error("Frozen account: {0}")]
    FrozenAccount(String),
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
