use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not the {expected}")]
    Unauthorized { expected: String },

    #[error("Predicate not set")]
    PredicateNotSet,

    #[error("Invalid exit proof: {reason}")]
    ProofInvalid { reason: String },

    #[error("Exit proof already consumed: {exit_hash}")]
    ProofAlreadyConsumed { exit_hash: String },
}
