//! Ownership and admin checks gating ledger mutations

use crate::types::{Account, CallerId};

/// Substring marking an identity as administrative.
///
/// The match is case-sensitive and positional-blind: any enrollment id
/// containing the marker anywhere qualifies, so `badminton-club` passes
/// while `Admin` does not. `is_admin` is the only reader of this constant.
pub const ADMIN_MARKER: &str = "admin";

/// Whether `caller` is the identity that created `account`
pub fn is_owner(account: &Account, caller: &CallerId) -> bool {
    account.owner == *caller
}

/// Whether `caller` satisfies the admin predicate.
///
/// Only the enrollment id is consulted; the membership service provider id
/// plays no part.
pub fn is_admin(caller: &CallerId) -> bool {
    caller.enrollment_id.contains(ADMIN_MARKER)
}
