//! State definitions for the Token Harvester contract

use common::{ChainRole, Ownable};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:token-harvester";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default blocks between two withdrawals of the same token (~1 day of 2s blocks)
pub const DEFAULT_WITHDRAW_COOLDOWN: u64 = 43_200;

/// Reply id of the CW20 transfer to the beneficiary
pub const TRANSFER_REPLY_ID: u64 = 1;

/// Reply id of the CW20 burn on the child chain
pub const BURN_REPLY_ID: u64 = 2;

// ============================================================================
// Storage
// ============================================================================

/// Addresses fixed by the one-shot `Initialize`
#[cw_serde]
pub struct Settings {
    /// Bridge manager, `Some` exactly on root
    pub bridge_manager: Option<Addr>,
    /// Receives everything the harvester recovers on root
    pub beneficiary: Addr,
}

pub const OWNER: Ownable = Ownable::new("owner");

/// Set at instantiation, never changed
pub const ROLE: Item<ChainRole> = Item::new("role");

/// Present once `Initialize` has run
pub const SETTINGS: Item<Settings> = Item::new("settings");

/// Minimum blocks between successful withdrawals of one token
pub const WITHDRAW_COOLDOWN: Item<u64> = Item::new("withdraw_cooldown");

/// Token address => block height of its last successful withdrawal
pub const LAST_WITHDRAW_BLOCK: Map<&Addr, u64> = Map::new("last_withdraw_block");
