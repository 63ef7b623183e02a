use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, WasmQuery};

#[cw_serde]
pub enum ImxAllowlistExecuteMsg {
    /// Add contract addresses to the allowlist, registrar only
    AddAddressesToAllowlist { addresses: Vec<String> },
    /// Remove contract addresses from the allowlist, registrar only
    RemoveAddressesFromAllowlist { addresses: Vec<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum ImxAllowlistQueryMsg {
    /// Query if an operator may act on behalf of token holders
    #[returns(bool)]
    IsAllowlisted { target: String },
}

/// OperatorAllowlistContract is a wrapper around Addr for querying the registry
#[cw_serde]
pub struct OperatorAllowlistContract(pub Addr);

impl OperatorAllowlistContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn is_allowlisted(&self, querier: &QuerierWrapper, target: &Addr) -> StdResult<bool> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&ImxAllowlistQueryMsg::IsAllowlisted {
                target: target.to_string(),
            })?,
        }))
    }
}
