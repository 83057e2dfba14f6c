//! Common - Shared Types and Utilities for the Community Vault Contracts
//!
//! This package provides the pieces both the vault and the harvester build on:
//! single-owner access control, the root/child role flag, the wire interface
//! of the external bridge manager and predicate, and CW20 helpers.

pub mod bridge;
pub mod ownable;
pub mod role;
pub mod token;

pub use ownable::{Ownable, OwnerResponse, OwnershipError};
pub use role::ChainRole;
