use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("Caller is not a registrar")]
    NotRegistrar {},

    #[error("AddressAlreadyExists: {addr}")]
    AddressAlreadyExists { addr: String },

    #[error("AddressNotFound: {addr}")]
    AddressNotFound { addr: String },
}
