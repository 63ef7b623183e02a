#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, StdResult,
};
use cw2::set_contract_version;
use cw_utils::{maybe_addr, nonpayable};
use sg_std::Response;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{ADMIN, ALLOWLIST, ALLOWLIST_COUNT, REGISTRARS};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:sample-operator-allowlist";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    nonpayable(&info)?;

    ADMIN.set(deps.branch(), Some(info.sender.clone()))?;
    REGISTRARS.save(deps.storage, &info.sender, &Empty {})?;
    ALLOWLIST_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;
    nonpayable(&info)?;

    match msg {
        ExecuteMsg::AddAddressesToAllowlist { addresses } => {
            execute_add_addresses(deps, info, addresses)
        }
        ExecuteMsg::RemoveAddressesFromAllowlist { addresses } => {
            execute_remove_addresses(deps, info, addresses)
        }
        ExecuteMsg::GrantRegistrarRole { user } => {
            execute_grant_registrar(deps, info, api.addr_validate(&user)?)
        }
        ExecuteMsg::RevokeRegistrarRole { user } => {
            execute_revoke_registrar(deps, info, api.addr_validate(&user)?)
        }
        ExecuteMsg::UpdateAdmin { admin } => {
            Ok(ADMIN.execute_update_admin(deps, info, maybe_addr(api, admin)?)?)
        }
    }
}

fn only_registrar(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if !REGISTRARS.has(deps.storage, sender) {
        return Err(ContractError::NotRegistrar {});
    }
    Ok(())
}

pub fn execute_add_addresses(
    deps: DepsMut,
    info: MessageInfo,
    mut addresses: Vec<String>,
) -> Result<Response, ContractError> {
    only_registrar(deps.as_ref(), &info.sender)?;
    let mut count = ALLOWLIST_COUNT.load(deps.storage)?;

    // dedupe
    addresses.sort_unstable();
    addresses.dedup();

    for address in addresses.into_iter() {
        let addr = deps.api.addr_validate(&address)?;
        if ALLOWLIST.has(deps.storage, &addr) {
            return Err(ContractError::AddressAlreadyExists {
                addr: addr.to_string(),
            });
        }
        ALLOWLIST.save(deps.storage, &addr, &Empty {})?;
        count += 1;
    }

    ALLOWLIST_COUNT.save(deps.storage, &count)?;

    let event = Event::new("add_addresses_to_allowlist")
        .add_attribute("new-count", count.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_remove_addresses(
    deps: DepsMut,
    info: MessageInfo,
    mut addresses: Vec<String>,
) -> Result<Response, ContractError> {
    only_registrar(deps.as_ref(), &info.sender)?;
    let mut count = ALLOWLIST_COUNT.load(deps.storage)?;

    // dedupe
    addresses.sort_unstable();
    addresses.dedup();

    for address in addresses.into_iter() {
        let addr = deps.api.addr_validate(&address)?;
        if !ALLOWLIST.has(deps.storage, &addr) {
            return Err(ContractError::AddressNotFound {
                addr: addr.to_string(),
            });
        }
        ALLOWLIST.remove(deps.storage, &addr);
        count -= 1;
    }

    ALLOWLIST_COUNT.save(deps.storage, &count)?;

    let event = Event::new("remove_addresses_from_allowlist")
        .add_attribute("new-count", count.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_grant_registrar(
    deps: DepsMut,
    info: MessageInfo,
    user: Addr,
) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    REGISTRARS.save(deps.storage, &user, &Empty {})?;

    let event = Event::new("grant_registrar_role")
        .add_attribute("user", user)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_revoke_registrar(
    deps: DepsMut,
    info: MessageInfo,
    user: Addr,
) -> Result<Response, ContractError> {
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    REGISTRARS.remove(deps.storage, &user);

    let event = Event::new("revoke_registrar_role")
        .add_attribute("user", user)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsAllowlisted { target } => to_binary(&query_is_allowlisted(deps, target)?),
        QueryMsg::IsRegistrar { address } => to_binary(&query_is_registrar(deps, address)?),
        QueryMsg::AllowlistCount {} => to_binary(&ALLOWLIST_COUNT.load(deps.storage)?),
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
    }
}

pub fn query_is_allowlisted(deps: Deps, target: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&target)?;
    Ok(ALLOWLIST.has(deps.storage, &addr))
}

pub fn query_is_registrar(deps: Deps, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(REGISTRARS.has(deps.storage, &addr))
}
