//! Child chain handlers.

use common::token::{burn_msg, query_balance};
use common::ChainRole;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, SubMsg};

use super::{assert_role, load_settings};
use crate::cooldown::{phase, CooldownPhase};
use crate::error::ContractError;
use crate::state::{BURN_REPLY_ID, LAST_WITHDRAW_BLOCK, WITHDRAW_COOLDOWN};

/// Burn the harvester's whole balance of `token` toward root.
///
/// Skipped without error while the token is cooling down or when there is
/// nothing to burn. Only a withdrawal that actually burns starts a new window.
pub fn execute_withdraw_on_child(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    assert_role(deps.storage, ChainRole::Child)?;
    load_settings(deps.storage)?;
    let token = deps.api.addr_validate(&token)?;

    let height = env.block.height;
    let last = LAST_WITHDRAW_BLOCK.may_load(deps.storage, &token)?;
    let cooldown = WITHDRAW_COOLDOWN.load(deps.storage)?;
    if phase(last, cooldown, height) == CooldownPhase::Cooling {
        deps.api.debug("withdraw_on_child: token is cooling down, skipping");
        return Ok(Response::new());
    }

    let amount = query_balance(&deps.querier, &token, &env.contract.address)?;
    if amount.is_zero() {
        deps.api.debug("withdraw_on_child: harvester balance is zero, nothing to withdraw");
        return Ok(Response::new());
    }

    LAST_WITHDRAW_BLOCK.save(deps.storage, &token, &height)?;
    let burn = SubMsg::reply_on_error(burn_msg(&token, amount)?, BURN_REPLY_ID);

    Ok(Response::new()
        .add_submessage(burn)
        .add_attribute("action", "withdraw_on_child")
        .add_attribute("caller", info.sender)
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}
