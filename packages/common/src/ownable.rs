//! Single-owner access control.
//!
//! Every privileged handler in the vault and harvester contracts calls
//! [`Ownable::assert_owner`] before touching any other state, so a rejected
//! call leaves storage untouched.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, MessageInfo, Response, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Ownable: caller is not the owner")]
    NotOwner,

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

/// Response for the `Owner {}` query of both contracts
#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

/// Owner slot stored under a fixed namespace.
pub struct Ownable<'a>(Item<'a, Addr>);

impl<'a> Ownable<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Ownable(Item::new(namespace))
    }

    /// Record the initial owner. `owner` defaults to the instantiating sender.
    pub fn initialize(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        info: &MessageInfo,
        owner: Option<String>,
    ) -> Result<Addr, OwnershipError> {
        let owner = match owner {
            Some(owner) => validate_owner(api, &owner)?,
            None => info.sender.clone(),
        };
        self.0.save(storage, &owner)?;
        Ok(owner)
    }

    pub fn get(&self, storage: &dyn Storage) -> StdResult<Addr> {
        self.0.load(storage)
    }

    pub fn assert_owner(&self, storage: &dyn Storage, sender: &Addr) -> Result<(), OwnershipError> {
        if *sender != self.0.load(storage)? {
            return Err(OwnershipError::NotOwner);
        }
        Ok(())
    }

    /// Hand the owner role to `new_owner`. Only the current owner may call this.
    pub fn transfer_ownership(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        sender: &Addr,
        new_owner: &str,
    ) -> Result<Response, OwnershipError> {
        self.assert_owner(storage, sender)?;
        let new_owner = validate_owner(api, new_owner)?;
        self.0.save(storage, &new_owner)?;

        Ok(Response::new()
            .add_attribute("action", "ownership_transferred")
            .add_attribute("previous_owner", sender)
            .add_attribute("new_owner", new_owner))
    }

    pub fn query(&self, storage: &dyn Storage) -> StdResult<OwnerResponse> {
        Ok(OwnerResponse {
            owner: self.get(storage)?,
        })
    }
}

fn validate_owner(api: &dyn Api, owner: &str) -> Result<Addr, OwnershipError> {
    if owner.trim().is_empty() {
        return Err(OwnershipError::InvalidArgument {
            reason: "owner must not be the zero address".to_string(),
        });
    }
    Ok(api.addr_validate(owner)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info, MockApi, MockQuerier, MockStorage};
    use cosmwasm_std::OwnedDeps;

    const OWNER: Ownable = Ownable::new("owner");

    fn init_owner(deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>, sender: &str) -> Addr {
        let info = mock_info(sender, &[]);
        let deps_mut = deps.as_mut();
        OWNER
            .initialize(deps_mut.storage, deps_mut.api, &info, None)
            .unwrap()
    }

    #[test]
    fn initialize_defaults_to_sender() {
        let mut deps = mock_dependencies();
        let owner = init_owner(&mut deps, "creator");

        assert_eq!(owner, Addr::unchecked("creator"));
        assert_eq!(OWNER.get(&deps.storage).unwrap(), owner);
    }

    #[test]
    fn initialize_rejects_empty_owner() {
        let mut deps = mock_dependencies();
        let info = mock_info("creator", &[]);

        let deps_mut = deps.as_mut();
        let err = OWNER
            .initialize(deps_mut.storage, deps_mut.api, &info, Some(String::new()))
            .unwrap_err();

        assert!(matches!(err, OwnershipError::InvalidArgument { .. }));
    }

    #[test]
    fn transfer_requires_current_owner() {
        let mut deps = mock_dependencies();
        init_owner(&mut deps, "creator");

        let deps_mut = deps.as_mut();
        let err = OWNER
            .transfer_ownership(
                deps_mut.storage,
                deps_mut.api,
                &Addr::unchecked("mallory"),
                "mallory",
            )
            .unwrap_err();
        assert_eq!(err, OwnershipError::NotOwner);
        assert_eq!(OWNER.get(&deps.storage).unwrap(), Addr::unchecked("creator"));
    }

    #[test]
    fn transfer_updates_owner_and_reports_both_sides() {
        let mut deps = mock_dependencies();
        init_owner(&mut deps, "creator");

        let deps_mut = deps.as_mut();
        let res = OWNER
            .transfer_ownership(
                deps_mut.storage,
                deps_mut.api,
                &Addr::unchecked("creator"),
                "successor",
            )
            .unwrap();

        assert_eq!(OWNER.get(&deps.storage).unwrap(), Addr::unchecked("successor"));
        let attr = |key: &str| {
            res.attributes
                .iter()
                .find(|a| a.key == key)
                .map(|a| a.value.clone())
        };
        assert_eq!(attr("action").as_deref(), Some("ownership_transferred"));
        assert_eq!(attr("previous_owner").as_deref(), Some("creator"));
        assert_eq!(attr("new_owner").as_deref(), Some("successor"));
    }

    #[test]
    fn transfer_to_empty_owner_is_rejected() {
        let mut deps = mock_dependencies();
        init_owner(&mut deps, "creator");

        let deps_mut = deps.as_mut();
        let err = OWNER
            .transfer_ownership(
                deps_mut.storage,
                deps_mut.api,
                &Addr::unchecked("creator"),
                "  ",
            )
            .unwrap_err();

        assert!(matches!(err, OwnershipError::InvalidArgument { .. }));
        assert_eq!(OWNER.get(&deps.storage).unwrap(), Addr::unchecked("creator"));
    }
}
