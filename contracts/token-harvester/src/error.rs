//! Error types for the Token Harvester contract

use common::{ChainRole, OwnershipError};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Harvester: already initialized")]
    AlreadyInitialized,

    #[error("Harvester: not initialized")]
    NotInitialized,

    // ========================================================================
    // Role Errors
    // ========================================================================

    #[error("Harvester: should only be called on {expected} chain")]
    WrongChain { expected: ChainRole },

    #[error("Harvester: callback can only be sent by the harvester itself")]
    CallbackOnly,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // ========================================================================
    // Settlement Errors
    // ========================================================================

    #[error("Harvester: token transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Harvester: unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
