use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery};
use sg_std::CosmosMsg;

/// Role allowed to mint on the collection
pub const MINTER_ROLE: &str = "minter";
/// Role allowed to manage roles and collection settings
pub const DEFAULT_ADMIN_ROLE: &str = "admin";

#[cw_serde]
pub enum ImxErc721ExecuteMsg {
    /// Mint `token_id` to `to`, minter role only
    Mint { to: String, token_id: String },
    /// Grant the minter role, admin only
    GrantMinterRole { user: String },
    /// Revoke the minter role, admin only
    RevokeMinterRole { user: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum ImxErc721QueryMsg {
    #[returns(bool)]
    HasRole { role: String, account: String },
    #[returns(BalanceResponse)]
    BalanceOf { owner: String },
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: u64,
}

/// ImxErc721Contract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct ImxErc721Contract(pub Addr);

impl ImxErc721Contract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ImxErc721ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn mint(&self, to: &Addr, token_id: u64) -> StdResult<CosmosMsg> {
        self.call(ImxErc721ExecuteMsg::Mint {
            to: to.to_string(),
            token_id: token_id.to_string(),
        })
    }

    pub fn has_role(&self, querier: &QuerierWrapper, role: &str, account: &Addr) -> StdResult<bool> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&ImxErc721QueryMsg::HasRole {
                role: role.to_string(),
                account: account.to_string(),
            })?,
        }))
    }

    pub fn balance_of(&self, querier: &QuerierWrapper, owner: &Addr) -> StdResult<u64> {
        let res: BalanceResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&ImxErc721QueryMsg::BalanceOf {
                owner: owner.to_string(),
            })?,
        }))?;
        Ok(res.balance)
    }
}
