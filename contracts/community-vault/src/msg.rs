use common::{ChainRole, OwnerResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

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
    /// Owner, once: fix the custodied token and, on root, the bridge addresses
    Initialize {
        token: String,
        bridge_manager: Option<String>,
        predicate: Option<String>,
    },
    /// Owner: set the CW20 allowance of `spender` over the vault's tokens to `amount`
    SetAllowance { spender: String, amount: Uint128 },
    /// Anyone (root only): lock the whole balance in the bridge for the child chain
    TransferToChild {},
    /// Owner: hand the owner role to another address
    TransferOwnership { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(OwnerResponse)]
    Owner {},
    /// The custodied token, `None` before initialization
    #[returns(TokenResponse)]
    Token {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub role: ChainRole,
    pub initialized: bool,
    pub token: Option<Addr>,
    pub bridge_manager: Option<Addr>,
    pub predicate: Option<Addr>,
}

#[cw_serde]
pub struct TokenResponse {
    pub token: Option<Addr>,
}
