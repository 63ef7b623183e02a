pub mod contract;
mod error;
pub mod helpers;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::helpers::PrimarySaleContract;
