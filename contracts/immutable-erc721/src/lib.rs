pub mod contract;
mod error;
pub mod msg;
pub mod state;
#[cfg(test)]
mod unit_tests;

pub use crate::error::ContractError;
