//! Execute handlers for the Token Harvester contract.
//!
//! - `admin` - Initialize and cooldown configuration
//! - `root` - Exit relay and forwarding to the beneficiary
//! - `child` - Cooldown-gated withdrawal toward root

mod admin;
mod child;
mod root;

pub use admin::*;
pub use child::*;
pub use root::*;

use common::ChainRole;
use cosmwasm_std::Storage;

use crate::error::ContractError;
use crate::state::{Settings, ROLE, SETTINGS};

/// Fail with `WrongChain` unless this instance runs on `expected`.
pub(crate) fn assert_role(storage: &dyn Storage, expected: ChainRole) -> Result<(), ContractError> {
    if ROLE.load(storage)? != expected {
        return Err(ContractError::WrongChain { expected });
    }
    Ok(())
}

pub(crate) fn load_settings(storage: &dyn Storage) -> Result<Settings, ContractError> {
    SETTINGS
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)
}
