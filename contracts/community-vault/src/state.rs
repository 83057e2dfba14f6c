use common::{ChainRole, Ownable};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:community-vault";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the bridge manager `DepositFor` submessage
pub const DEPOSIT_FOR_REPLY_ID: u64 = 1;

/// Addresses fixed by the one-shot `Initialize`
#[cw_serde]
pub struct Settings {
    /// Custodied CW20 token
    pub token: Addr,
    /// Bridge manager (root only)
    pub bridge_manager: Option<Addr>,
    /// Predicate that pulls locked tokens (root only)
    pub predicate: Option<Addr>,
}

pub const OWNER: Ownable = Ownable::new("owner");

/// Set at instantiation, never changed
pub const ROLE: Item<ChainRole> = Item::new("role");

/// Present once `Initialize` has run
pub const SETTINGS: Item<Settings> = Item::new("settings");
