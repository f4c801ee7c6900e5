//! Main ledger orchestrator: the operation surface exposed to the host

use tracing::{debug, info};

use crate::ledger::{auth, AccountStore};
use crate::traits::StateStore;
use crate::types::{Account, CallerId, LedgerError, LedgerResult};
use crate::utils::validation;

/// The account ledger: named balance accounts over an injected state store.
///
/// The host delivers one call at a time and authenticates the caller; every
/// operation takes that caller identity explicitly rather than reading any
/// ambient context. A failed call returns before anything is written, so no
/// partial effect is ever observable.
pub struct Ledger<S: StateStore> {
    accounts: AccountStore<S>,
}

impl<S: StateStore> Ledger<S> {
    /// Create a ledger over the given state store
    pub fn new(store: S) -> Self {
        Self {
            accounts: AccountStore::new(store),
        }
    }

    /// Create an account owned by `caller` under the caller-chosen `id`.
    ///
    /// `balance` must parse to a non-negative number. Fails with
    /// `AlreadyExists` when the id is already taken, by any owner.
    pub async fn init_account(
        &mut self,
        caller: &CallerId,
        id: &str,
        balance: &str,
    ) -> LedgerResult<()> {
        let balance = validation::parse_nonnegative_decimal("balance", balance)?;

        if self.accounts.exists(id).await? {
            return Err(LedgerError::AlreadyExists(id.to_string()));
        }

        let account = Account::new(id.to_string(), caller.clone(), balance);
        self.accounts.save(&account).await?;

        info!(account = %account.id, owner = %caller, "account created");
        Ok(())
    }

    /// Overwrite the balance of an account owned by `caller`.
    ///
    /// `new_balance` must parse to a non-negative number; the account must
    /// exist, belong to the caller, and not be frozen.
    pub async fn set_balance(
        &mut self,
        caller: &CallerId,
        id: &str,
        new_balance: &str,
    ) -> LedgerResult<()> {
        let new_balance = validation::parse_nonnegative_decimal("new balance", new_balance)?;

        let mut account = self.accounts.load(id).await?;

        if !auth::is_owner(&account, caller) {
            return Err(LedgerError::Unauthorized(format!(
                "account {} belongs to another owner",
                id
            )));
        }
        if account.frozen {
            return Err(LedgerError::FrozenAccount(format!(
                "account {} cannot be modified",
                id
            )));
        }

        account.balance = new_balance;
        self.accounts.save(&account).await?;

        info!(account = %id, "balance updated");
        Ok(())
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// Preconditions run in a fixed order: `from` exists, `caller` owns
    /// `from`, `to` exists, `from` covers the amount, neither side is frozen
    /// (source checked before destination). Both records are committed
    /// through one batched write, so a state where only one side reflects
    /// the transfer is never stored.
    ///
    /// A transfer where `from` and `to` name the same account runs the same
    /// checks and then succeeds without changing the balance: the debit and
    /// the credit cancel out.
    pub async fn transfer(
        &mut self,
        caller: &CallerId,
        from: &str,
        to: &str,
        amount: &str,
    ) -> LedgerResult<()> {
        let amount = validation::parse_positive_decimal("amount", amount)?;

        let mut from_account = self.accounts.load(from).await?;

        if !auth::is_owner(&from_account, caller) {
            return Err(LedgerError::Unauthorized(format!(
                "account {} belongs to another owner",
                from
            )));
        }

        let mut to_account = self.accounts.load(to).await?;

        if from_account.balance < amount {
            return Err(LedgerError::InsufficientFunds(format!(
                "account {} holds {}, cannot transfer {}",
                from, from_account.balance, amount
            )));
        }

        if from_account.frozen {
            return Err(LedgerError::FrozenAccount(format!(
                "source account {} cannot be modified",
                from
            )));
        }
        if to_account.frozen {
            return Err(LedgerError::FrozenAccount(format!(
                "destination account {} cannot be modified",
                to
            )));
        }

        if from == to {
            // Every check above has passed and the net movement is zero.
            debug!(account = %from, %amount, "self-transfer leaves balance unchanged");
            return Ok(());
        }

        from_account.balance -= &amount;
        to_account.balance += &amount;
        self.accounts
            .save_all(&[&from_account, &to_account])
            .await?;

        info!(from = %from, to = %to, %amount, "transfer applied");
        Ok(())
    }

    /// Freeze an account, blocking every balance mutation until it is
    /// unfrozen again.
    ///
    /// Admin-only; ownership is not consulted and the balance plays no part.
    pub async fn freeze_account(&mut self, caller: &CallerId, id: &str) -> LedgerResult<()> {
        let mut account = self.accounts.load(id).await?;

        if !auth::is_admin(caller) {
            return Err(LedgerError::AdminRequired(
                "only an admin identity can freeze accounts".to_string(),
            ));
        }

        account.frozen = true;
        self.accounts.save(&account).await?;

        info!(account = %id, admin = %caller, "account frozen");
        Ok(())
    }

    /// Clear an account's frozen flag. Admin-only.
    pub async fn unfreeze_account(&mut self, caller: &CallerId, id: &str) -> LedgerResult<()> {
        let mut account = self.accounts.load(id).await?;

        if !auth::is_admin(caller) {
            return Err(LedgerError::AdminRequired(
                "only an admin identity can unfreeze accounts".to_string(),
            ));
        }

        account.frozen = false;
        self.accounts.save(&account).await?;

        info!(account = %id, admin = %caller, "account unfrozen");
        Ok(())
    }

    /// Every account owned by `caller`, in store-iteration order.
    pub async fn list_accounts(&self, caller: &CallerId) -> LedgerResult<Vec<Account>> {
        let accounts = self.accounts.list_all().await?;
        let owned: Vec<Account> = accounts
            .into_iter()
            .filter(|account| auth::is_owner(account, caller))
            .collect();

        debug!(owner = %caller, count = owned.len(), "accounts listed");
        Ok(owned)
    }
}
