use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

/// Exit payload accepted by the reference bridge manager in place of a real
/// checkpoint proof.
#[cw_serde]
pub struct ExitPayload {
    /// Address that burned on the child chain and receives the release on root
    pub withdrawer: String,
    /// Root token to release
    pub root_token: String,
    pub amount: Uint128,
    /// Distinguishes otherwise identical exits
    pub nonce: u64,
}

#[cw_serde]
pub struct ManagerInstantiateMsg {}

/// Bridge manager execute messages. `DepositFor` and `Exit` match
/// `common::bridge::BridgeManagerExecuteMsg` on the wire.
#[cw_serde]
pub enum ManagerExecuteMsg {
    /// Admin: register the predicate that holds locked tokens
    SetPredicate { predicate: String },
    DepositFor {
        user: String,
        root_token: String,
        amount: Uint128,
    },
    Exit { input_data: Binary },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum ManagerQueryMsg {
    #[returns(ExitProcessedResponse)]
    ExitProcessed { input_data: Binary },
    #[returns(StateIdResponse)]
    StateId {},
}

#[cw_serde]
pub struct ExitProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct StateIdResponse {
    pub state_id: u64,
}

#[cw_serde]
pub struct PredicateInstantiateMsg {
    /// Bridge manager allowed to lock and release through this predicate
    pub manager: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum PredicateQueryMsg {
    #[returns(ManagerResponse)]
    Manager {},
}

#[cw_serde]
pub struct ManagerResponse {
    pub manager: Addr,
}
