#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Env, StdResult};

use crate::msg::{MintCountsResponse, OwnerResponse, QueryMsg};
use crate::state::{
    MintKind, CONFIG, IS_STARTED, MAX_SUPPLY, MINT_COUNTS, OWNER, TOTAL_MINTED, WHITELIST,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_binary(&query_owner(deps)?),
        QueryMsg::IsStarted {} => to_binary(&IS_STARTED.load(deps.storage)?),
        QueryMsg::TotalMinted {} => to_binary(&TOTAL_MINTED.load(deps.storage)?),
        QueryMsg::MaxSupply {} => to_binary(&MAX_SUPPLY),
        QueryMsg::Whitelist { address } => to_binary(&query_whitelist(deps, address)?),
        QueryMsg::MintCounts { address } => to_binary(&query_mint_counts(deps, address)?),
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
    }
}

fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: OWNER.get(deps)?,
    })
}

fn query_whitelist(deps: Deps, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(WHITELIST.may_load(deps.storage, &addr)?.unwrap_or(false))
}

fn query_mint_counts(deps: Deps, address: String) -> StdResult<MintCountsResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let count = |kind: MintKind| -> StdResult<u32> {
        Ok(MINT_COUNTS
            .may_load(deps.storage, (&addr, kind.as_str()))?
            .unwrap_or_default())
    };

    Ok(MintCountsResponse {
        free: count(MintKind::Free)?,
        native: count(MintKind::Native)?,
        erc20: count(MintKind::Erc20)?,
    })
}
