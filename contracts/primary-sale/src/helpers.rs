use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, Coin, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery,
};
use sg_std::CosmosMsg;

use crate::msg::{ExecuteMsg, QueryMsg};

/// PrimarySaleContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct PrimarySaleContract(pub Addr);

impl PrimarySaleContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    fn query<T: serde::de::DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        msg: &QueryMsg,
    ) -> StdResult<T> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(msg)?,
        }))
    }

    pub fn is_started(&self, querier: &QuerierWrapper) -> StdResult<bool> {
        self.query(querier, &QueryMsg::IsStarted {})
    }

    pub fn total_minted(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        self.query(querier, &QueryMsg::TotalMinted {})
    }

    pub fn max_supply(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        self.query(querier, &QueryMsg::MaxSupply {})
    }

    pub fn is_whitelisted(&self, querier: &QuerierWrapper, address: &Addr) -> StdResult<bool> {
        self.query(
            querier,
            &QueryMsg::Whitelist {
                address: address.to_string(),
            },
        )
    }
}
