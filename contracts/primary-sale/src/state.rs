use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use imx_erc721::ImxErc721Contract;

pub const MAX_SUPPLY: u64 = 250;
pub const MINT_LIMIT_PER_WALLET: u32 = 5;

/// 0.01 native token
pub const NATIVE_MINT_PRICE: u128 = 10_000_000_000_000_000;

/// Share of every withdrawal sent to `FEE_RECIPIENT`
pub const WITHDRAW_FEE_PERCENT: u64 = 2;
pub const FEE_RECIPIENT: &str = "0x6c443510cf6a4a56341d4ce1aea3b4399a14fbc7";

pub const OWNER: Admin = Admin::new("owner");

#[cw_serde]
pub struct PaymentToken {
    pub address: Addr,
    pub decimals: u8,
}

impl PaymentToken {
    /// 0.01 of a whole token
    pub fn mint_price(&self) -> StdResult<Uint128> {
        let unit = Uint128::new(10).checked_pow(self.decimals as u32)?;
        Ok(unit / Uint128::new(100))
    }
}

#[cw_serde]
#[derive(Default)]
pub struct Config {
    pub erc20: Option<PaymentToken>,
    pub erc721: Option<ImxErc721Contract>,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const IS_STARTED: Item<bool> = Item::new("is_started");

pub const TOTAL_MINTED: Item<u64> = Item::new("total_minted");

pub const WHITELIST: Map<&Addr, bool> = Map::new("whitelist");

#[cw_serde]
#[derive(Copy)]
pub enum MintKind {
    Free,
    Native,
    Erc20,
}

impl MintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MintKind::Free => "free",
            MintKind::Native => "native",
            MintKind::Erc20 => "erc20",
        }
    }
}

/// (wallet, mint kind) -> number of mints
pub const MINT_COUNTS: Map<(&Addr, &str), u32> = Map::new("mint_counts");
