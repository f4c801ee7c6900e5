//! Ledger module containing account access, authorization, and operations

pub mod account;
pub mod auth;
pub mod core;

pub use account::*;
pub use auth::*;
pub use core::*;
