use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Payment token for `MintErc20`, priced at 0.01 token
    SetErc20 { address: String, decimals: u8 },
    /// Collection the sale mints on. The sale needs its minter role.
    SetErc721 { address: String },
    StartSale {},
    StopSale {},
    AddToWhitelist { address: String },
    RemoveFromWhitelist { address: String },
    MintFree {},
    MintNative {},
    /// Pulls the price from the sender, so it needs an allowance first
    MintErc20 {},
    MintFreeWl {},
    MintNativeWl {},
    MintErc20Wl {},
    WithdrawNative {},
    WithdrawErc20 {},
    TransferOwnership { new_owner: String },
    RenounceOwnership {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerResponse)]
    Owner {},
    #[returns(bool)]
    IsStarted {},
    #[returns(u64)]
    TotalMinted {},
    #[returns(u64)]
    MaxSupply {},
    #[returns(bool)]
    Whitelist { address: String },
    #[returns(MintCountsResponse)]
    MintCounts { address: String },
    #[returns(Config)]
    Config {},
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<Addr>,
}

#[cw_serde]
pub struct MintCountsResponse {
    pub free: u32,
    pub native: u32,
    pub erc20: u32,
}
