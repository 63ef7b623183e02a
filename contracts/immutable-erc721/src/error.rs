use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Base(#[from] cw721_base::ContractError),

    #[error("AccessControl: account {account} is missing role {role}")]
    MissingRole { account: String, role: String },

    #[error("ApproveTargetNotInAllowlist: {target}")]
    ApproveTargetNotInAllowlist { target: String },

    #[error("CallerNotInAllowlist: {caller}")]
    CallerNotInAllowlist { caller: String },

    #[error("InvalidRoyaltyFee: {0} exceeds 10000")]
    InvalidRoyaltyFee(u64),
}
