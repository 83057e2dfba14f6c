//! Community Vault - CW20 custody on both sides of the bridge
//!
//! One code base serves both chains; the role is fixed at instantiation.
//!
//! # Root chain
//! Anyone may call `TransferToChild` to sweep the vault's entire balance into
//! the bridge: the predicate is approved for the balance and the bridge
//! manager's `DepositFor` locks it and emits the state-sync message that
//! credits the vault's counterpart on the child chain.
//!
//! # Child chain
//! Same surface, but `TransferToChild` is permanently disabled.
//!
//! # Owner
//! The owner initializes the vault once, manages CW20 allowances for external
//! spenders and may hand ownership over. Nobody can redirect swept funds.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
