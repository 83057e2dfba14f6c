//! Token Harvester - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_callback, execute_initialize, execute_set_withdraw_cooldown,
    execute_transfer_to_owner, execute_withdraw_and_transfer_to_owner, execute_withdraw_on_child,
    execute_withdraw_on_root,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_bridge_manager, query_config, query_cooldown_status, query_last_withdraw_block,
    query_withdraw_cooldown,
};
use crate::state::{
    BURN_REPLY_ID, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_WITHDRAW_COOLDOWN, OWNER, ROLE,
    TRANSFER_REPLY_ID, WITHDRAW_COOLDOWN,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = OWNER.initialize(deps.storage, deps.api, &info, msg.owner)?;
    ROLE.save(deps.storage, &msg.role)?;
    WITHDRAW_COOLDOWN.save(deps.storage, &DEFAULT_WITHDRAW_COOLDOWN)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("role", msg.role.as_str()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Admin
        ExecuteMsg::Initialize {
            bridge_manager,
            beneficiary,
            withdraw_cooldown,
        } => execute_initialize(deps, info, bridge_manager, beneficiary, withdraw_cooldown),
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(OWNER.transfer_ownership(deps.storage, deps.api, &info.sender, &new_owner)?)
        }
        ExecuteMsg::SetWithdrawCooldown { blocks } => {
            execute_set_withdraw_cooldown(deps, info, blocks)
        }

        // Root
        ExecuteMsg::WithdrawOnRoot { exit_proof } => {
            execute_withdraw_on_root(deps, info, exit_proof)
        }
        ExecuteMsg::TransferToOwner { token } => execute_transfer_to_owner(deps, env, info, token),
        ExecuteMsg::WithdrawAndTransferToOwner { exit_proof, token } => {
            execute_withdraw_and_transfer_to_owner(deps, env, info, exit_proof, token)
        }

        // Child
        ExecuteMsg::WithdrawOnChild { token } => execute_withdraw_on_child(deps, env, info, token),

        ExecuteMsg::Callback(msg) => execute_callback(deps, env, info, msg),
    }
}

// ============================================================================
// Reply
// ============================================================================

/// Only failures are routed here. Each one reverts the whole call.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        (TRANSFER_REPLY_ID | BURN_REPLY_ID, SubMsgResult::Err(reason)) => {
            Err(ContractError::TransferFailed { reason })
        }
        (TRANSFER_REPLY_ID | BURN_REPLY_ID, SubMsgResult::Ok(_)) => Ok(Response::new()),
        (id, _) => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::BridgeManager {} => to_json_binary(&query_bridge_manager(deps)?),
        QueryMsg::WithdrawCooldown {} => to_json_binary(&query_withdraw_cooldown(deps)?),
        QueryMsg::LastWithdrawBlock { token } => {
            to_json_binary(&query_last_withdraw_block(deps, token)?)
        }
        QueryMsg::CooldownStatus { token } => {
            to_json_binary(&query_cooldown_status(deps, env, token)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
