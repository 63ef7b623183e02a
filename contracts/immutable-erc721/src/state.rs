use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty};
use cw721_base::Extension;
use cw_storage_plus::{Item, Map};
use imx_allowlist::OperatorAllowlistContract;
use sg_std::StargazeMsgWrapper;

pub type ImmutableErc721Contract<'a> =
    cw721_base::Cw721Contract<'a, Extension, StargazeMsgWrapper, Empty, Empty>;

/// Royalty denominator, fee numerators are basis points
pub const FEE_DENOMINATOR: u64 = 10_000;

#[cw_serde]
pub struct RoyaltyInfo {
    pub receiver: Addr,
    pub fee_numerator: u64,
}

#[cw_serde]
pub struct CollectionConfig {
    pub base_uri: String,
    pub contract_uri: String,
    pub royalty: RoyaltyInfo,
}

pub const CONFIG: Item<CollectionConfig> = Item::new("collection_config");

/// Registry consulted for approvals and operator transfers, unset means unrestricted
pub const OPERATOR_ALLOWLIST: Item<OperatorAllowlistContract> = Item::new("operator_allowlist");

/// (role, account) -> granted
pub const ROLES: Map<(&str, &Addr), Empty> = Map::new("roles");
