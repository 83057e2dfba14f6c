//! Query handlers for the Token Harvester contract.

use cosmwasm_std::{Deps, Env, StdResult};

use crate::cooldown::{phase, ready_at};
use crate::msg::{
    BridgeManagerResponse, ConfigResponse, CooldownStatusResponse, LastWithdrawBlockResponse,
    WithdrawCooldownResponse,
};
use crate::state::{LAST_WITHDRAW_BLOCK, OWNER, ROLE, SETTINGS, WITHDRAW_COOLDOWN};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let settings = SETTINGS.may_load(deps.storage)?;
    Ok(ConfigResponse {
        owner: OWNER.get(deps.storage)?,
        role: ROLE.load(deps.storage)?,
        initialized: settings.is_some(),
        bridge_manager: settings.as_ref().and_then(|s| s.bridge_manager.clone()),
        beneficiary: settings.map(|s| s.beneficiary),
        withdraw_cooldown: WITHDRAW_COOLDOWN.load(deps.storage)?,
    })
}

pub fn query_bridge_manager(deps: Deps) -> StdResult<BridgeManagerResponse> {
    Ok(BridgeManagerResponse {
        bridge_manager: SETTINGS
            .may_load(deps.storage)?
            .and_then(|s| s.bridge_manager),
    })
}

pub fn query_withdraw_cooldown(deps: Deps) -> StdResult<WithdrawCooldownResponse> {
    Ok(WithdrawCooldownResponse {
        blocks: WITHDRAW_COOLDOWN.load(deps.storage)?,
    })
}

pub fn query_last_withdraw_block(
    deps: Deps,
    token: String,
) -> StdResult<LastWithdrawBlockResponse> {
    let token = deps.api.addr_validate(&token)?;
    Ok(LastWithdrawBlockResponse {
        height: LAST_WITHDRAW_BLOCK.may_load(deps.storage, &token)?,
    })
}

/// Phase the token is in at the current block.
pub fn query_cooldown_status(
    deps: Deps,
    env: Env,
    token: String,
) -> StdResult<CooldownStatusResponse> {
    let token = deps.api.addr_validate(&token)?;
    let last = LAST_WITHDRAW_BLOCK.may_load(deps.storage, &token)?;
    let cooldown = WITHDRAW_COOLDOWN.load(deps.storage)?;
    let height = env.block.height;

    Ok(CooldownStatusResponse {
        phase: phase(last, cooldown, height),
        last_withdraw_block: last,
        current_block: height,
        ready_at: ready_at(last, cooldown, height),
    })
}
