//! Reference ERC20-style predicate: custody of root-locked tokens.

use common::bridge::PredicateExecuteMsg;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::Item;

use crate::error::ContractError;
use crate::msg::{ManagerResponse, PredicateInstantiateMsg, PredicateQueryMsg};

pub const MANAGER: Item<Addr> = Item::new("manager");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: PredicateInstantiateMsg,
) -> Result<Response, ContractError> {
    let manager = deps.api.addr_validate(&msg.manager)?;
    MANAGER.save(deps.storage, &manager)?;
    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("manager", manager))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: PredicateExecuteMsg,
) -> Result<Response, ContractError> {
    if info.sender != MANAGER.load(deps.storage)? {
        return Err(ContractError::Unauthorized {
            expected: "bridge manager".to_string(),
        });
    }

    match msg {
        PredicateExecuteMsg::LockTokens {
            depositor,
            user,
            root_token,
            amount,
        } => {
            let pull = WasmMsg::Execute {
                contract_addr: root_token.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: depositor.clone(),
                    recipient: env.contract.address.to_string(),
                    amount,
                })?,
                funds: vec![],
            };
            Ok(Response::new()
                .add_message(pull)
                .add_attribute("action", "locked_erc20")
                .add_attribute("depositor", depositor)
                .add_attribute("user", user)
                .add_attribute("root_token", root_token)
                .add_attribute("amount", amount))
        }
        PredicateExecuteMsg::ExitTokens {
            withdrawer,
            root_token,
            amount,
        } => {
            let release = WasmMsg::Execute {
                contract_addr: root_token.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: withdrawer.clone(),
                    amount,
                })?,
                funds: vec![],
            };
            Ok(Response::new()
                .add_message(release)
                .add_attribute("action", "exited_erc20")
                .add_attribute("withdrawer", withdrawer)
                .add_attribute("root_token", root_token)
                .add_attribute("amount", amount))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: PredicateQueryMsg) -> StdResult<Binary> {
    match msg {
        PredicateQueryMsg::Manager {} => to_json_binary(&ManagerResponse {
            manager: MANAGER.load(deps.storage)?,
        }),
    }
}
