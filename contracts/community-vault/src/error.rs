use common::OwnershipError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Vault: already initialized")]
    AlreadyInitialized,

    #[error("Vault: not initialized")]
    NotInitialized,

    #[error("Vault: transfer to child chain is disabled")]
    DisabledOnChild,

    #[error("Vault: bridge call failed: {reason}")]
    BridgeCallFailed { reason: String },

    #[error("Vault: unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
