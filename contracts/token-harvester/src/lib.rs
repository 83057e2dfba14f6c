//! Token Harvester - Child-to-Root Settlement
//!
//! One code base serves both chains; the role is fixed at instantiation.
//!
//! # Child chain
//! Anyone may call `WithdrawOnChild { token }`. The harvester burns its whole
//! balance of `token` through the CW20 withdraw path, at most once per token
//! per cooldown window. Calls inside the window, or with nothing to withdraw,
//! succeed without doing anything so periodic callers never need to predict
//! timing.
//!
//! # Root chain
//! Once the burn is checkpointed, anyone relays the exit proof with
//! `WithdrawOnRoot`; the bridge manager validates it and releases the tokens
//! to the harvester. `TransferToOwner` forwards the harvester's balance to the
//! beneficiary, and `WithdrawAndTransferToOwner` does both in one transaction.
//!
//! # Security
//! - Callers trigger, they never choose where funds go
//! - Proof validity and replay protection belong to the bridge manager
//! - Role-mismatched calls fail instead of silently doing nothing

pub mod contract;
pub mod cooldown;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::cooldown::CooldownPhase;
pub use crate::error::ContractError;
