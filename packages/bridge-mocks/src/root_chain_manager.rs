//! Reference bridge manager.

use common::bridge::PredicateExecuteMsg;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, keccak256};
use crate::msg::{
    ExitPayload, ExitProcessedResponse, ManagerExecuteMsg, ManagerInstantiateMsg,
    ManagerQueryMsg, StateIdResponse,
};

pub const ADMIN: Item<Addr> = Item::new("admin");
pub const PREDICATE: Item<Addr> = Item::new("predicate");

/// Counter of emitted state-sync messages
pub const STATE_ID: Item<u64> = Item::new("state_id");

/// keccak256(exit payload) => consumed
pub const PROCESSED_EXITS: Map<&[u8], bool> = Map::new("processed_exits");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: ManagerInstantiateMsg,
) -> Result<Response, ContractError> {
    ADMIN.save(deps.storage, &info.sender)?;
    STATE_ID.save(deps.storage, &0)?;
    Ok(Response::new().add_attribute("action", "instantiate"))
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ManagerExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ManagerExecuteMsg::SetPredicate { predicate } => {
            if info.sender != ADMIN.load(deps.storage)? {
                return Err(ContractError::Unauthorized {
                    expected: "admin".to_string(),
                });
            }
            let predicate = deps.api.addr_validate(&predicate)?;
            PREDICATE.save(deps.storage, &predicate)?;
            Ok(Response::new()
                .add_attribute("action", "set_predicate")
                .add_attribute("predicate", predicate))
        }
        ManagerExecuteMsg::DepositFor {
            user,
            root_token,
            amount,
        } => execute_deposit_for(deps, info, user, root_token, amount),
        ManagerExecuteMsg::Exit { input_data } => execute_exit(deps, input_data),
    }
}

fn execute_deposit_for(
    deps: DepsMut,
    info: MessageInfo,
    user: String,
    root_token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let predicate = PREDICATE
        .may_load(deps.storage)?
        .ok_or(ContractError::PredicateNotSet)?;
    let user = deps.api.addr_validate(&user)?;
    let root_token = deps.api.addr_validate(&root_token)?;

    let state_id = STATE_ID.load(deps.storage)? + 1;
    STATE_ID.save(deps.storage, &state_id)?;

    let lock = WasmMsg::Execute {
        contract_addr: predicate.to_string(),
        msg: to_json_binary(&PredicateExecuteMsg::LockTokens {
            depositor: info.sender.to_string(),
            user: user.to_string(),
            root_token: root_token.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(lock)
        .add_attribute("action", "deposit_for")
        .add_attribute("user", &user)
        .add_attribute("root_token", &root_token)
        .add_attribute("amount", amount)
        .add_event(
            Event::new("state_synced")
                .add_attribute("id", state_id.to_string())
                .add_attribute("user", user)
                .add_attribute("root_token", root_token)
                .add_attribute("amount", amount),
        ))
}

fn execute_exit(deps: DepsMut, input_data: Binary) -> Result<Response, ContractError> {
    let payload: ExitPayload =
        from_json(&input_data).map_err(|e| ContractError::ProofInvalid {
            reason: e.to_string(),
        })?;
    if payload.amount.is_zero() {
        return Err(ContractError::ProofInvalid {
            reason: "exit amount is zero".to_string(),
        });
    }
    let withdrawer = deps.api.addr_validate(&payload.withdrawer)?;
    let root_token = deps.api.addr_validate(&payload.root_token)?;

    let exit_hash = keccak256(input_data.as_slice());
    if PROCESSED_EXITS.has(deps.storage, exit_hash.as_slice()) {
        return Err(ContractError::ProofAlreadyConsumed {
            exit_hash: bytes32_to_hex(&exit_hash),
        });
    }
    PROCESSED_EXITS.save(deps.storage, exit_hash.as_slice(), &true)?;

    let predicate = PREDICATE
        .may_load(deps.storage)?
        .ok_or(ContractError::PredicateNotSet)?;
    let release = WasmMsg::Execute {
        contract_addr: predicate.to_string(),
        msg: to_json_binary(&PredicateExecuteMsg::ExitTokens {
            withdrawer: withdrawer.to_string(),
            root_token: root_token.to_string(),
            amount: payload.amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "exit")
        .add_attribute("exit_hash", bytes32_to_hex(&exit_hash))
        .add_attribute("withdrawer", withdrawer)
        .add_attribute("amount", payload.amount))
}

pub fn query(deps: Deps, _env: Env, msg: ManagerQueryMsg) -> StdResult<Binary> {
    match msg {
        ManagerQueryMsg::ExitProcessed { input_data } => {
            let exit_hash = keccak256(input_data.as_slice());
            to_json_binary(&ExitProcessedResponse {
                processed: PROCESSED_EXITS.has(deps.storage, exit_hash.as_slice()),
            })
        }
        ManagerQueryMsg::StateId {} => to_json_binary(&StateIdResponse {
            state_id: STATE_ID.load(deps.storage)?,
        }),
    }
}
