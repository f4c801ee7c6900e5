//! # Account Ledger
//!
//! A small account ledger providing named balance accounts, owner-gated
//! transfers, and admin freeze controls over a pluggable state store.
//!
//! ## Features
//!
//! - **Account management**: Caller-owned accounts with decimal balances
//! - **Transfers**: Owner-authorized, atomically committed balance movement
//! - **Freeze controls**: Admin-only freeze and unfreeze of individual accounts
//! - **Explicit identity**: Every operation takes the caller identity as an argument
//! - **Storage abstraction**: Trait-based state store with an in-memory implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use account_ledger::{CallerId, Ledger};
//! use account_ledger::utils::MemoryStore;
//!
//! # async fn demo() -> account_ledger::LedgerResult<()> {
//! let mut ledger = Ledger::new(MemoryStore::new());
//! let alice = CallerId::new("Org1MSP", "alice@example.com");
//!
//! ledger.init_account(&alice, "savings", "100").await?;
//! let accounts = ledger.list_accounts(&alice).await?;
//! assert_eq!(accounts.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use traits::*;
pub use types::*;
