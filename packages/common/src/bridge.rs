//! Wire interface of the external bridge manager and predicate.
//!
//! The vault and harvester never lock, unlock or verify anything themselves.
//! They hand the asset to the predicate and the exit proof to the bridge
//! manager through these messages, and rely on those contracts to either
//! settle fully or fail the whole transaction.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Binary, StdResult, Uint128, WasmMsg};

/// Execute messages understood by the bridge manager
#[cw_serde]
pub enum BridgeManagerExecuteMsg {
    /// Lock `amount` of `root_token` from the sender through the predicate and
    /// emit a state-sync message crediting `user` on the child chain.
    DepositFor {
        user: String,
        root_token: String,
        amount: Uint128,
    },
    /// Validate an exit proof and release the withdrawn asset on root.
    /// Replaying a consumed proof must fail.
    Exit { input_data: Binary },
}

/// Execute messages understood by the predicate (called by the bridge manager only)
#[cw_serde]
pub enum PredicateExecuteMsg {
    /// Pull `amount` of `root_token` from `depositor` into predicate custody.
    LockTokens {
        depositor: String,
        user: String,
        root_token: String,
        amount: Uint128,
    },
    /// Release `amount` of `root_token` from predicate custody to `withdrawer`.
    ExitTokens {
        withdrawer: String,
        root_token: String,
        amount: Uint128,
    },
}

pub fn deposit_for_msg(
    bridge_manager: &Addr,
    user: &Addr,
    root_token: &Addr,
    amount: Uint128,
) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: bridge_manager.to_string(),
        msg: to_json_binary(&BridgeManagerExecuteMsg::DepositFor {
            user: user.to_string(),
            root_token: root_token.to_string(),
            amount,
        })?,
        funds: vec![],
    })
}

pub fn exit_msg(bridge_manager: &Addr, input_data: Binary) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: bridge_manager.to_string(),
        msg: to_json_binary(&BridgeManagerExecuteMsg::Exit { input_data })?,
        funds: vec![],
    })
}
