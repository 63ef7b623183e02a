#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Order, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use cw721_base::state::TokenInfo;
use cw721_base::{
    ContractError as Cw721ContractError, ExecuteMsg as Cw721ExecuteMsg,
    InstantiateMsg as Cw721InstantiateMsg, QueryMsg as Cw721QueryMsg,
};
use cw_utils::nonpayable;
use imx_allowlist::OperatorAllowlistContract;
use imx_erc721::{BalanceResponse, DEFAULT_ADMIN_ROLE, MINTER_ROLE};
use sg_std::Response;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, RoyaltyInfoResponse};
use crate::state::{
    CollectionConfig, ImmutableErc721Contract, RoyaltyInfo, CONFIG, FEE_DENOMINATOR,
    OPERATOR_ALLOWLIST, ROLES,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:sample-immutable-erc721";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let owner = deps.api.addr_validate(&msg.owner)?;
    let royalty = validate_royalty(deps.as_ref(), &msg.royalty_receiver, msg.fee_numerator)?;

    // minting goes through the minter role, the base minter is the collection itself
    let base_msg = Cw721InstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        minter: env.contract.address.to_string(),
    };
    let res = ImmutableErc721Contract::default().instantiate(
        deps.branch(),
        env.clone(),
        info,
        base_msg,
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    ROLES.save(deps.storage, (DEFAULT_ADMIN_ROLE, &owner), &Empty {})?;
    CONFIG.save(
        deps.storage,
        &CollectionConfig {
            base_uri: msg.base_uri,
            contract_uri: msg.contract_uri,
            royalty,
        },
    )?;
    if let Some(allowlist) = msg.operator_allowlist {
        let allowlist = deps.api.addr_validate(&allowlist)?;
        OPERATOR_ALLOWLIST.save(deps.storage, &OperatorAllowlistContract(allowlist))?;
    }

    Ok(res
        .add_attribute("action", "instantiate")
        .add_attribute("collection", env.contract.address)
        .add_attribute("owner", owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let api = deps.api;

    match msg {
        ExecuteMsg::Mint { to, token_id } => {
            execute_mint(deps, info, api.addr_validate(&to)?, token_id)
        }
        ExecuteMsg::GrantMinterRole { user } => {
            execute_grant_role(deps, info, MINTER_ROLE, api.addr_validate(&user)?)
        }
        ExecuteMsg::RevokeMinterRole { user } => {
            execute_revoke_role(deps, info, MINTER_ROLE, api.addr_validate(&user)?)
        }
        ExecuteMsg::GrantRole { role, account } => {
            execute_grant_role(deps, info, &role, api.addr_validate(&account)?)
        }
        ExecuteMsg::RevokeRole { role, account } => {
            execute_revoke_role(deps, info, &role, api.addr_validate(&account)?)
        }
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetContractUri { contract_uri } => {
            execute_set_contract_uri(deps, info, contract_uri)
        }
        ExecuteMsg::SetOperatorAllowlistRegistry { address } => {
            execute_set_operator_allowlist(deps, info, api.addr_validate(&address)?)
        }
        ExecuteMsg::SetDefaultRoyaltyReceiver {
            receiver,
            fee_numerator,
        } => execute_set_royalty(deps, info, receiver, fee_numerator),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => {
            only_allowlisted_transfer(deps.as_ref(), &info.sender, &token_id)?;
            base_execute(
                deps,
                env,
                info,
                Cw721ExecuteMsg::TransferNft {
                    recipient,
                    token_id,
                },
            )
        }
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => {
            only_allowlisted_transfer(deps.as_ref(), &info.sender, &token_id)?;
            base_execute(
                deps,
                env,
                info,
                Cw721ExecuteMsg::SendNft {
                    contract,
                    token_id,
                    msg,
                },
            )
        }
        ExecuteMsg::Approve {
            spender,
            token_id,
            expires,
        } => {
            only_allowlisted_approval(deps.as_ref(), &api.addr_validate(&spender)?)?;
            base_execute(
                deps,
                env,
                info,
                Cw721ExecuteMsg::Approve {
                    spender,
                    token_id,
                    expires,
                },
            )
        }
        ExecuteMsg::Revoke { spender, token_id } => base_execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Revoke { spender, token_id },
        ),
        ExecuteMsg::ApproveAll { operator, expires } => {
            only_allowlisted_approval(deps.as_ref(), &api.addr_validate(&operator)?)?;
            base_execute(
                deps,
                env,
                info,
                Cw721ExecuteMsg::ApproveAll { operator, expires },
            )
        }
        ExecuteMsg::RevokeAll { operator } => {
            base_execute(deps, env, info, Cw721ExecuteMsg::RevokeAll { operator })
        }
        ExecuteMsg::Burn { token_id } => {
            base_execute(deps, env, info, Cw721ExecuteMsg::Burn { token_id })
        }
    }
}

fn base_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: Cw721ExecuteMsg<cw721_base::Extension, Empty>,
) -> Result<Response, ContractError> {
    Ok(ImmutableErc721Contract::default().execute(deps, env, info, msg)?)
}

fn has_role(deps: Deps, role: &str, account: &Addr) -> bool {
    ROLES.has(deps.storage, (role, account))
}

fn only_role(deps: Deps, role: &str, account: &Addr) -> Result<(), ContractError> {
    if !has_role(deps, role, account) {
        return Err(ContractError::MissingRole {
            account: account.to_string(),
            role: role.to_string(),
        });
    }
    Ok(())
}

fn is_allowlisted(deps: Deps, target: &Addr) -> StdResult<bool> {
    match OPERATOR_ALLOWLIST.may_load(deps.storage)? {
        Some(allowlist) => allowlist.is_allowlisted(&deps.querier, target),
        None => Ok(true),
    }
}

fn only_allowlisted_approval(deps: Deps, target: &Addr) -> Result<(), ContractError> {
    if !is_allowlisted(deps, target)? {
        return Err(ContractError::ApproveTargetNotInAllowlist {
            target: target.to_string(),
        });
    }
    Ok(())
}

/// Holders move their own tokens freely, anyone else must be an allowlisted operator
fn only_allowlisted_transfer(deps: Deps, sender: &Addr, token_id: &str) -> Result<(), ContractError> {
    let token = ImmutableErc721Contract::default()
        .tokens
        .load(deps.storage, token_id)?;
    if token.owner != *sender && !is_allowlisted(deps, sender)? {
        return Err(ContractError::CallerNotInAllowlist {
            caller: sender.to_string(),
        });
    }
    Ok(())
}

fn validate_royalty(
    deps: Deps,
    receiver: &str,
    fee_numerator: u64,
) -> Result<RoyaltyInfo, ContractError> {
    if fee_numerator > FEE_DENOMINATOR {
        return Err(ContractError::InvalidRoyaltyFee(fee_numerator));
    }
    Ok(RoyaltyInfo {
        receiver: deps.api.addr_validate(receiver)?,
        fee_numerator,
    })
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: Addr,
    token_id: String,
) -> Result<Response, ContractError> {
    only_role(deps.as_ref(), MINTER_ROLE, &info.sender)?;

    let contract = ImmutableErc721Contract::default();
    let token = TokenInfo {
        owner: to.clone(),
        approvals: vec![],
        token_uri: None,
        extension: None,
    };
    contract
        .tokens
        .update(deps.storage, &token_id, |old| match old {
            Some(_) => Err(Cw721ContractError::Claimed {}),
            None => Ok(token),
        })?;
    contract.increment_tokens(deps.storage)?;

    let event = Event::new("mint")
        .add_attribute("minter", info.sender)
        .add_attribute("owner", to)
        .add_attribute("token_id", token_id);
    Ok(Response::new().add_event(event))
}

pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: &str,
    account: Addr,
) -> Result<Response, ContractError> {
    only_role(deps.as_ref(), DEFAULT_ADMIN_ROLE, &info.sender)?;
    ROLES.save(deps.storage, (role, &account), &Empty {})?;

    let event = Event::new("grant_role")
        .add_attribute("role", role)
        .add_attribute("account", account)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: &str,
    account: Addr,
) -> Result<Response, ContractError> {
    only_role(deps.as_ref(), DEFAULT_ADMIN_ROLE, &info.sender)?;
    ROLES.remove(deps.storage, (role, &account));

    let event = Event::new("revoke_role")
        .add_attribute("role", role)
        .add_attribute("account", account)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    only_role(deps.as_ref(), DEFAULT_ADMIN_ROLE, &info.sender)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.base_uri = base_uri.clone();
        Ok(config)
    })?;

    let event = Event::new("set_base_uri").add_attribute("base_uri", base_uri);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_contract_uri(
    deps: DepsMut,
    info: MessageInfo,
    contract_uri: String,
) -> Result<Response, ContractError> {
    only_role(deps.as_ref(), DEFAULT_ADMIN_ROLE, &info.sender)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.contract_uri = contract_uri.clone();
        Ok(config)
    })?;

    let event = Event::new("set_contract_uri").add_attribute("contract_uri", contract_uri);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_operator_allowlist(
    deps: DepsMut,
    info: MessageInfo,
    address: Addr,
) -> Result<Response, ContractError> {
    only_role(deps.as_ref(), DEFAULT_ADMIN_ROLE, &info.sender)?;
    OPERATOR_ALLOWLIST.save(deps.storage, &OperatorAllowlistContract(address.clone()))?;

    let event = Event::new("set_operator_allowlist").add_attribute("registry", address);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_royalty(
    deps: DepsMut,
    info: MessageInfo,
    receiver: String,
    fee_numerator: u64,
) -> Result<Response, ContractError> {
    only_role(deps.as_ref(), DEFAULT_ADMIN_ROLE, &info.sender)?;
    let royalty = validate_royalty(deps.as_ref(), &receiver, fee_numerator)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.royalty = royalty.clone();
        Ok(config)
    })?;

    let event = Event::new("set_default_royalty")
        .add_attribute("receiver", royalty.receiver)
        .add_attribute("fee_numerator", fee_numerator.to_string());
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    let base = ImmutableErc721Contract::default();

    match msg {
        QueryMsg::HasRole { role, account } => {
            let account = deps.api.addr_validate(&account)?;
            to_binary(&has_role(deps, &role, &account))
        }
        QueryMsg::MinterRole {} => to_binary(&MINTER_ROLE.to_string()),
        QueryMsg::BalanceOf { owner } => to_binary(&query_balance_of(deps, owner)?),
        QueryMsg::TotalSupply {} => base.query(deps, env, Cw721QueryMsg::NumTokens {}),
        QueryMsg::BaseUri {} => to_binary(&CONFIG.load(deps.storage)?.base_uri),
        QueryMsg::ContractUri {} => to_binary(&CONFIG.load(deps.storage)?.contract_uri),
        QueryMsg::TokenUri { token_id } => to_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::RoyaltyInfo {
            token_id,
            sale_price,
        } => to_binary(&query_royalty_info(deps, token_id, sale_price)?),
        QueryMsg::OperatorAllowlist {} => to_binary(
            &OPERATOR_ALLOWLIST
                .may_load(deps.storage)?
                .map(|allowlist| allowlist.addr()),
        ),
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::OwnerOf {
            token_id,
            include_expired,
        } => base.query(
            deps,
            env,
            Cw721QueryMsg::OwnerOf {
                token_id,
                include_expired,
            },
        ),
        QueryMsg::NumTokens {} => base.query(deps, env, Cw721QueryMsg::NumTokens {}),
        QueryMsg::ContractInfo {} => base.query(deps, env, Cw721QueryMsg::ContractInfo {}),
        QueryMsg::NftInfo { token_id } => {
            base.query(deps, env, Cw721QueryMsg::NftInfo { token_id })
        }
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => base.query(
            deps,
            env,
            Cw721QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            },
        ),
        QueryMsg::AllTokens { start_after, limit } => {
            base.query(deps, env, Cw721QueryMsg::AllTokens { start_after, limit })
        }
        QueryMsg::AllOperators {
            owner,
            include_expired,
            start_after,
            limit,
        } => base.query(
            deps,
            env,
            Cw721QueryMsg::AllOperators {
                owner,
                include_expired,
                start_after,
                limit,
            },
        ),
        QueryMsg::Approvals {
            token_id,
            include_expired,
        } => base.query(
            deps,
            env,
            Cw721QueryMsg::Approvals {
                token_id,
                include_expired,
            },
        ),
    }
}

pub fn query_balance_of(deps: Deps, owner: String) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let balance = ImmutableErc721Contract::default()
        .tokens
        .idx
        .owner
        .prefix(owner)
        .keys(deps.storage, None, None, Order::Ascending)
        .count();
    Ok(BalanceResponse {
        balance: balance as u64,
    })
}

pub fn query_token_uri(deps: Deps, token_id: String) -> StdResult<Option<String>> {
    // errors on unknown tokens
    ImmutableErc721Contract::default()
        .tokens
        .load(deps.storage, &token_id)?;

    let base_uri = CONFIG.load(deps.storage)?.base_uri;
    if base_uri.is_empty() {
        return Ok(None);
    }
    Ok(Some(format!("{}{}", base_uri, token_id)))
}

pub fn query_royalty_info(
    deps: Deps,
    _token_id: String,
    sale_price: Uint128,
) -> StdResult<RoyaltyInfoResponse> {
    let royalty = CONFIG.load(deps.storage)?.royalty;
    Ok(RoyaltyInfoResponse {
        receiver: royalty.receiver.to_string(),
        royalty_amount: sale_price.multiply_ratio(royalty.fee_numerator, FEE_DENOMINATOR),
    })
}
