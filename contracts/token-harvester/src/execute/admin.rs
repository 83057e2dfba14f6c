//! Owner operations.

use common::ChainRole;
use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Settings, OWNER, ROLE, SETTINGS, WITHDRAW_COOLDOWN};

/// Fix the beneficiary and bridge manager. Owner only, exactly once.
pub fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    bridge_manager: Option<String>,
    beneficiary: String,
    withdraw_cooldown: Option<i64>,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;
    if SETTINGS.exists(deps.storage) {
        return Err(ContractError::AlreadyInitialized);
    }

    let bridge_manager = match (ROLE.load(deps.storage)?, bridge_manager) {
        (ChainRole::Root, Some(manager)) => Some(deps.api.addr_validate(&manager)?),
        (ChainRole::Root, None) => {
            return Err(ContractError::InvalidArgument {
                reason: "root harvester needs a bridge manager".to_string(),
            })
        }
        (ChainRole::Child, None) => None,
        (ChainRole::Child, Some(_)) => {
            return Err(ContractError::InvalidArgument {
                reason: "child harvester has no bridge manager".to_string(),
            })
        }
    };

    if beneficiary.trim().is_empty() {
        return Err(ContractError::InvalidArgument {
            reason: "beneficiary must not be the zero address".to_string(),
        });
    }
    let settings = Settings {
        bridge_manager,
        beneficiary: deps.api.addr_validate(&beneficiary)?,
    };
    SETTINGS.save(deps.storage, &settings)?;

    if let Some(blocks) = withdraw_cooldown {
        WITHDRAW_COOLDOWN.save(deps.storage, &validate_cooldown(blocks)?)?;
    }
    let cooldown = WITHDRAW_COOLDOWN.load(deps.storage)?;

    let mut res = Response::new()
        .add_attribute("action", "initialize")
        .add_attribute("beneficiary", &settings.beneficiary)
        .add_attribute("withdraw_cooldown", cooldown.to_string());
    if let Some(manager) = &settings.bridge_manager {
        res = res.add_attribute("bridge_manager", manager);
    }
    Ok(res)
}

pub fn execute_set_withdraw_cooldown(
    deps: DepsMut,
    info: MessageInfo,
    blocks: i64,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;
    let blocks = validate_cooldown(blocks)?;
    WITHDRAW_COOLDOWN.save(deps.storage, &blocks)?;

    Ok(Response::new()
        .add_attribute("action", "set_withdraw_cooldown")
        .add_attribute("blocks", blocks.to_string()))
}

fn validate_cooldown(blocks: i64) -> Result<u64, ContractError> {
    u64::try_from(blocks).map_err(|_| ContractError::InvalidArgument {
        reason: format!("withdraw cooldown must not be negative, got {blocks}"),
    })
}
