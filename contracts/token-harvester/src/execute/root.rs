//! Root chain handlers.
//!
//! The harvester never judges an exit proof itself. `WithdrawOnRoot` hands it
//! to the bridge manager as a plain message, so a rejected or replayed proof
//! fails the transaction with the manager's own error.

use common::bridge::exit_msg;
use common::token::{query_balance, transfer_msg};
use common::ChainRole;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, DepsMut, Env, MessageInfo, Response, Storage, SubMsg, WasmMsg,
};

use super::{assert_role, load_settings};
use crate::error::ContractError;
use crate::msg::{CallbackMsg, ExecuteMsg};
use crate::state::TRANSFER_REPLY_ID;

pub fn execute_withdraw_on_root(
    deps: DepsMut,
    info: MessageInfo,
    exit_proof: Binary,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, ChainRole::Root)?;
    let exit = build_exit(deps.storage, exit_proof)?;

    Ok(Response::new()
        .add_message(exit)
        .add_attribute("action", "withdraw_on_root")
        .add_attribute("caller", info.sender))
}

pub fn execute_transfer_to_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, ChainRole::Root)?;
    let token = deps.api.addr_validate(&token)?;
    transfer_to_owner(deps, env, &info.sender, &token)
}

/// Relay the exit, then schedule the transfer as a callback so that it reads
/// the balance the exit just released.
pub fn execute_withdraw_and_transfer_to_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    exit_proof: Binary,
    token: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, ChainRole::Root)?;
    let token = deps.api.addr_validate(&token)?;
    let exit = build_exit(deps.storage, exit_proof)?;

    let callback = WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::Callback(CallbackMsg::TransferToOwner {
            token: token.to_string(),
            caller: info.sender.to_string(),
        }))?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(exit)
        .add_message(callback)
        .add_attribute("action", "withdraw_on_root")
        .add_attribute("caller", info.sender))
}

pub fn execute_callback(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: CallbackMsg,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::CallbackOnly);
    }

    match msg {
        CallbackMsg::TransferToOwner { token, caller } => {
            let token = deps.api.addr_validate(&token)?;
            let caller = deps.api.addr_validate(&caller)?;
            transfer_to_owner(deps, env, &caller, &token)
        }
    }
}

fn build_exit(storage: &dyn Storage, exit_proof: Binary) -> Result<WasmMsg, ContractError> {
    let settings = load_settings(storage)?;
    let bridge_manager = settings
        .bridge_manager
        .ok_or(ContractError::NotInitialized)?;
    Ok(exit_msg(&bridge_manager, exit_proof)?)
}

fn transfer_to_owner(
    deps: DepsMut,
    env: Env,
    caller: &Addr,
    token: &Addr,
) -> Result<Response, ContractError> {
    let settings = load_settings(deps.storage)?;

    let amount = query_balance(&deps.querier, token, &env.contract.address)?;
    if amount.is_zero() {
        deps.api.debug("transfer_to_owner: harvester balance is zero, nothing to forward");
        return Ok(Response::new());
    }

    let transfer = SubMsg::reply_on_error(
        transfer_msg(token, &settings.beneficiary, amount)?,
        TRANSFER_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(transfer)
        .add_attribute("action", "transfer_to_owner")
        .add_attribute("caller", caller)
        .add_attribute("beneficiary", settings.beneficiary)
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}
