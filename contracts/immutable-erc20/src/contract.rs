#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw20::Cw20Coin;
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_send_from,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{execute_send, execute_transfer, query_balance, query_token_info};
use cw20_base::msg::InstantiateMsg as Cw20InstantiateMsg;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{DECIMALS, OWNER};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:sample-immutable-erc20";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let treasurer = deps.api.addr_validate(&msg.treasurer)?;
    let hub_owner = deps.api.addr_validate(&msg.hub_owner)?;

    // no minter: the supply is fixed at instantiation
    let base_msg = Cw20InstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        decimals: DECIMALS,
        initial_balances: vec![Cw20Coin {
            address: treasurer.to_string(),
            amount: msg.total_supply,
        }],
        mint: None,
        marketing: None,
    };
    let res = cw20_base::contract::instantiate(deps.branch(), env, info, base_msg)?;

    // overrides the version written by the base instantiate
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    OWNER.set(deps.branch(), Some(hub_owner.clone()))?;

    Ok(res
        .add_attribute("action", "instantiate")
        .add_attribute("treasurer", treasurer)
        .add_attribute("hub_owner", hub_owner)
        .add_attribute("total_supply", msg.total_supply))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let res = match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)?
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => execute_send(deps, env, info, contract, amount, msg)?,
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_increase_allowance(deps, env, info, spender, amount, expires)?,
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_decrease_allowance(deps, env, info, spender, amount, expires)?,
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount)?,
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => execute_send_from(deps, env, info, owner, contract, amount, msg)?,
        ExecuteMsg::TransferOwnership { new_owner } => {
            return execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::RenounceOwnership {} => return execute_renounce_ownership(deps, info),
    };
    Ok(res)
}

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    if !OWNER.is_admin(deps, &info.sender)? {
        return Err(ContractError::NotOwner {});
    }
    Ok(())
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let new_owner = deps.api.addr_validate(&new_owner)?;
    OWNER.set(deps, Some(new_owner.clone()))?;

    let event = Event::new("transfer_ownership")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("new_owner", new_owner);
    Ok(Response::new().add_event(event))
}

pub fn execute_renounce_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    OWNER.set(deps, None)?;

    let event = Event::new("renounce_ownership").add_attribute("previous_owner", info.sender);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Owner {} => to_binary(&OWNER.query_admin(deps)?),
    }
}
