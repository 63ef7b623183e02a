use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DeployError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}
