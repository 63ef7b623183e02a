use cosmwasm_std::{Addr, Empty};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

pub const ADMIN: Admin = Admin::new("admin");

/// Addresses allowed to edit the allowlist
pub const REGISTRARS: Map<&Addr, Empty> = Map::new("registrars");

/// Operators allowed to transfer tokens on behalf of holders
pub const ALLOWLIST: Map<&Addr, Empty> = Map::new("allowlist");

pub const ALLOWLIST_COUNT: Item<u64> = Item::new("allowlist_count");
