use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Ownable: caller is not the owner")]
    NotOwner {},

    #[error("Sale has not started")]
    SaleNotStarted {},

    #[error("User is not whitelisted")]
    NotWhitelisted {},

    #[error("Minted too many times")]
    MintLimitReached {},

    #[error("Max supply reached")]
    MaxSupplyReached {},

    #[error("Incorrect payment, got: {got}, expected {expected}")]
    IncorrectPayment { got: u128, expected: u128 },

    #[error("ERC20 not set")]
    Erc20NotSet {},

    #[error("ERC721 not set")]
    Erc721NotSet {},

    #[error("InvalidDecimals: {0}")]
    InvalidDecimals(u8),

    #[error("Nothing to withdraw")]
    NothingToWithdraw {},
}
