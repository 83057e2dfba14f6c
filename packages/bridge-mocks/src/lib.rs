//! Reference bridge manager and predicate.
//!
//! Implements the external interface the vault and harvester call into
//! (`common::bridge`) closely enough to run the whole root/child flow under
//! `cw-multi-test`:
//!
//! - `DepositFor` makes the predicate pull the depositor's approved tokens and
//!   emits a `state_synced` event with an increasing id.
//! - `Exit` decodes an [`msg::ExitPayload`], rejects undecodable or reused
//!   payloads, and has the predicate release the tokens to the withdrawer.
//!
//! Proof verification is reduced to "the payload decodes"; replay protection
//! is keyed on the keccak256 of the raw payload bytes.

pub mod error;
pub mod hash;
pub mod msg;
pub mod predicate;
pub mod root_chain_manager;

pub use crate::error::ContractError;
pub use crate::msg::ExitPayload;
