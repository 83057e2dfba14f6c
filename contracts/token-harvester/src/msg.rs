use common::{ChainRole, OwnerResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

use crate::cooldown::CooldownPhase;

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address (defaults to the instantiating sender)
    pub owner: Option<String>,
    /// Which chain this instance lives on
    pub role: ChainRole,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner, once: fix the beneficiary and, on root, the bridge manager.
    /// `withdraw_cooldown` is in blocks and keeps the default when omitted.
    Initialize {
        bridge_manager: Option<String>,
        beneficiary: String,
        withdraw_cooldown: Option<i64>,
    },
    /// Owner: hand the owner role to another address
    TransferOwnership { new_owner: String },
    /// Owner: blocks between two withdrawals of the same token, must not be negative
    SetWithdrawCooldown { blocks: i64 },

    // ========================================================================
    // Root chain
    // ========================================================================
    /// Anyone: relay an exit proof to the bridge manager
    WithdrawOnRoot { exit_proof: Binary },
    /// Anyone: forward the whole balance of `token` to the beneficiary
    TransferToOwner { token: String },
    /// Anyone: `WithdrawOnRoot` then `TransferToOwner` in one transaction
    WithdrawAndTransferToOwner { exit_proof: Binary, token: String },

    // ========================================================================
    // Child chain
    // ========================================================================
    /// Anyone: burn the whole balance of `token` toward root, once per cooldown
    WithdrawOnChild { token: String },

    /// Internal follow-up steps, only accepted from the harvester itself
    Callback(CallbackMsg),
}

#[cw_serde]
pub enum CallbackMsg {
    /// Transfer step of `WithdrawAndTransferToOwner`, run after the exit settled
    TransferToOwner { token: String, caller: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(OwnerResponse)]
    Owner {},
    /// `None` on child and before initialization
    #[returns(BridgeManagerResponse)]
    BridgeManager {},
    #[returns(WithdrawCooldownResponse)]
    WithdrawCooldown {},
    #[returns(LastWithdrawBlockResponse)]
    LastWithdrawBlock { token: String },
    #[returns(CooldownStatusResponse)]
    CooldownStatus { token: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub role: ChainRole,
    pub initialized: bool,
    pub bridge_manager: Option<Addr>,
    pub beneficiary: Option<Addr>,
    pub withdraw_cooldown: u64,
}

#[cw_serde]
pub struct BridgeManagerResponse {
    pub bridge_manager: Option<Addr>,
}

#[cw_serde]
pub struct WithdrawCooldownResponse {
    pub blocks: u64,
}

#[cw_serde]
pub struct LastWithdrawBlockResponse {
    /// `None` until the first successful withdrawal of the token
    pub height: Option<u64>,
}

#[cw_serde]
pub struct CooldownStatusResponse {
    pub phase: CooldownPhase,
    pub last_withdraw_block: Option<u64>,
    pub current_block: u64,
    /// First block at which a withdrawal will go through, `None` when ready
    pub ready_at: Option<u64>,
}
