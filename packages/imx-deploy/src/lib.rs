pub mod config;
mod error;
pub mod modules;

pub use crate::config::DeployConfig;
pub use crate::error::DeployError;
pub use crate::modules::{DeploymentModule, SampleContract, MODULES};
