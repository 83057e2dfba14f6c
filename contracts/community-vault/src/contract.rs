//! Community Vault - Entry Points

use common::bridge::deposit_for_msg;
use common::token::{query_allowance, query_balance, set_allowance_msg};
use common::ChainRole;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, Storage, SubMsg, SubMsgResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, TokenResponse};
use crate::state::{
    Settings, CONTRACT_NAME, CONTRACT_VERSION, DEPOSIT_FOR_REPLY_ID, OWNER, ROLE, SETTINGS,
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
        ExecuteMsg::Initialize {
            token,
            bridge_manager,
            predicate,
        } => execute_initialize(deps, info, token, bridge_manager, predicate),
        ExecuteMsg::SetAllowance { spender, amount } => {
            execute_set_allowance(deps, env, info, spender, amount)
        }
        ExecuteMsg::TransferToChild {} => execute_transfer_to_child(deps, env, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(OWNER.transfer_ownership(deps.storage, deps.api, &info.sender, &new_owner)?)
        }
    }
}

fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    bridge_manager: Option<String>,
    predicate: Option<String>,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;
    if SETTINGS.exists(deps.storage) {
        return Err(ContractError::AlreadyInitialized);
    }

    let role = ROLE.load(deps.storage)?;
    let (bridge_manager, predicate) = match (role, bridge_manager, predicate) {
        (ChainRole::Root, Some(bridge_manager), Some(predicate)) => (
            Some(deps.api.addr_validate(&bridge_manager)?),
            Some(deps.api.addr_validate(&predicate)?),
        ),
        (ChainRole::Root, _, _) => {
            return Err(ContractError::InvalidArgument {
                reason: "root vault needs both a bridge manager and a predicate".to_string(),
            })
        }
        (ChainRole::Child, None, None) => (None, None),
        (ChainRole::Child, _, _) => {
            return Err(ContractError::InvalidArgument {
                reason: "child vault has no bridge manager or predicate".to_string(),
            })
        }
    };

    let settings = Settings {
        token: deps.api.addr_validate(&token)?,
        bridge_manager,
        predicate,
    };
    SETTINGS.save(deps.storage, &settings)?;

    let mut res = Response::new()
        .add_attribute("action", "initialize")
        .add_attribute("token", &settings.token);
    if let (Some(bridge_manager), Some(predicate)) = (&settings.bridge_manager, &settings.predicate)
    {
        res = res
            .add_attribute("bridge_manager", bridge_manager)
            .add_attribute("predicate", predicate);
    }
    Ok(res)
}

fn execute_set_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;
    let settings = load_settings(deps.storage)?;
    let spender = deps.api.addr_validate(&spender)?;

    let current = query_allowance(
        &deps.querier,
        &settings.token,
        &env.contract.address,
        &spender,
    )?;
    let update = set_allowance_msg(&settings.token, &spender, current, amount)?;

    Ok(Response::new()
        .add_messages(update)
        .add_attribute("action", "set_allowance")
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

/// Sweep the whole balance into the bridge. Permissionless: the caller only
/// shows up in the attributes, the funds always go to the predicate.
fn execute_transfer_to_child(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    if ROLE.load(deps.storage)? == ChainRole::Child {
        return Err(ContractError::DisabledOnChild);
    }

    let settings = load_settings(deps.storage)?;
    let (Some(bridge_manager), Some(predicate)) = (settings.bridge_manager, settings.predicate)
    else {
        return Err(ContractError::NotInitialized);
    };

    let vault = env.contract.address;
    let amount = query_balance(&deps.querier, &settings.token, &vault)?;
    if amount.is_zero() {
        deps.api.debug("transfer_to_child: vault balance is zero, nothing to sweep");
        return Ok(Response::new());
    }

    let current = query_allowance(&deps.querier, &settings.token, &vault, &predicate)?;
    let approve = set_allowance_msg(&settings.token, &predicate, current, amount)?;
    let deposit = SubMsg::reply_on_error(
        deposit_for_msg(&bridge_manager, &vault, &settings.token, amount)?,
        DEPOSIT_FOR_REPLY_ID,
    );

    Ok(Response::new()
        .add_messages(approve)
        .add_submessage(deposit)
        .add_attribute("action", "transfer_to_child")
        .add_attribute("caller", info.sender)
        .add_attribute("token", settings.token)
        .add_attribute("amount", amount))
}

fn load_settings(storage: &dyn Storage) -> Result<Settings, ContractError> {
    SETTINGS
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        (DEPOSIT_FOR_REPLY_ID, SubMsgResult::Err(reason)) => {
            Err(ContractError::BridgeCallFailed { reason })
        }
        (DEPOSIT_FOR_REPLY_ID, SubMsgResult::Ok(_)) => Ok(Response::new()),
        (id, _) => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Token {} => to_json_binary(&TokenResponse {
            token: SETTINGS.may_load(deps.storage)?.map(|s| s.token),
        }),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let settings = SETTINGS.may_load(deps.storage)?;
    Ok(ConfigResponse {
        owner: OWNER.get(deps.storage)?,
        role: ROLE.load(deps.storage)?,
        initialized: settings.is_some(),
        token: settings.as_ref().map(|s| s.token.clone()),
        bridge_manager: settings.as_ref().and_then(|s| s.bridge_manager.clone()),
        predicate: settings.and_then(|s| s.predicate),
    })
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
