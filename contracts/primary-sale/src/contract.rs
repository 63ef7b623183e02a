#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, ensure, to_binary, Addr, BankMsg, Decimal, Deps, DepsMut, Env, Event, MessageInfo,
    StdError, Uint128, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_utils::{must_pay, nonpayable};
use imx_erc721::ImxErc721Contract;
use semver::Version;
use sg_std::{Response, NATIVE_DENOM};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg};
use crate::state::{
    Config, MintKind, PaymentToken, CONFIG, FEE_RECIPIENT, IS_STARTED, MAX_SUPPLY,
    MINT_COUNTS, MINT_LIMIT_PER_WALLET, NATIVE_MINT_PRICE, OWNER, TOTAL_MINTED, WHITELIST,
    WITHDRAW_FEE_PERCENT,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:sample-primary-sale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.set(deps.branch(), Some(info.sender.clone()))?;
    CONFIG.save(deps.storage, &Config::default())?;
    IS_STARTED.save(deps.storage, &false)?;
    TOTAL_MINTED.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetErc20 { address, decimals } => {
            execute_set_erc20(deps, info, address, decimals)
        }
        ExecuteMsg::SetErc721 { address } => execute_set_erc721(deps, info, address),
        ExecuteMsg::StartSale {} => execute_set_sale_status(deps, info, true),
        ExecuteMsg::StopSale {} => execute_set_sale_status(deps, info, false),
        ExecuteMsg::AddToWhitelist { address } => {
            execute_update_whitelist(deps, info, address, true)
        }
        ExecuteMsg::RemoveFromWhitelist { address } => {
            execute_update_whitelist(deps, info, address, false)
        }
        ExecuteMsg::MintFree {} => execute_mint(deps, env, info, MintKind::Free, false),
        ExecuteMsg::MintNative {} => execute_mint(deps, env, info, MintKind::Native, false),
        ExecuteMsg::MintErc20 {} => execute_mint(deps, env, info, MintKind::Erc20, false),
        ExecuteMsg::MintFreeWl {} => execute_mint(deps, env, info, MintKind::Free, true),
        ExecuteMsg::MintNativeWl {} => execute_mint(deps, env, info, MintKind::Native, true),
        ExecuteMsg::MintErc20Wl {} => execute_mint(deps, env, info, MintKind::Erc20, true),
        ExecuteMsg::WithdrawNative {} => execute_withdraw_native(deps, env, info),
        ExecuteMsg::WithdrawErc20 {} => execute_withdraw_erc20(deps, env, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::RenounceOwnership {} => execute_renounce_ownership(deps, info),
    }
}

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    if !OWNER.is_admin(deps, &info.sender)? {
        return Err(ContractError::NotOwner {});
    }
    Ok(())
}

pub fn execute_set_erc20(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    decimals: u8,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_owner(deps.as_ref(), &info)?;

    let token = PaymentToken {
        address: deps.api.addr_validate(&address)?,
        decimals,
    };
    // the price must be a non-zero amount that fits in a Uint128
    if decimals < 2 || token.mint_price().is_err() {
        return Err(ContractError::InvalidDecimals(decimals));
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.erc20 = Some(token);
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_erc20")
        .add_attribute("address", address)
        .add_attribute("decimals", decimals.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_erc721(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_owner(deps.as_ref(), &info)?;

    let collection = deps.api.addr_validate(&address)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.erc721 = Some(ImxErc721Contract(collection));
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_erc721").add_attribute("address", address);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_sale_status(
    deps: DepsMut,
    info: MessageInfo,
    started: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_owner(deps.as_ref(), &info)?;

    IS_STARTED.save(deps.storage, &started)?;

    let event = Event::new(if started { "start_sale" } else { "stop_sale" })
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_update_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    whitelisted: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_owner(deps.as_ref(), &info)?;

    let addr = deps.api.addr_validate(&address)?;
    if whitelisted {
        WHITELIST.save(deps.storage, &addr, &true)?;
    } else {
        WHITELIST.remove(deps.storage, &addr);
    }

    let event = Event::new(if whitelisted {
        "add_to_whitelist"
    } else {
        "remove_from_whitelist"
    })
    .add_attribute("address", addr);
    Ok(Response::new().add_event(event))
}

/// Checks run in order: sale status, whitelist, wallet limit, payment, supply.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: MintKind,
    whitelisted_only: bool,
) -> Result<Response, ContractError> {
    ensure!(
        IS_STARTED.load(deps.storage)?,
        ContractError::SaleNotStarted {}
    );

    if whitelisted_only
        && !WHITELIST
            .may_load(deps.storage, &info.sender)?
            .unwrap_or(false)
    {
        return Err(ContractError::NotWhitelisted {});
    }

    let minted = MINT_COUNTS
        .may_load(deps.storage, (&info.sender, kind.as_str()))?
        .unwrap_or_default();
    ensure!(
        minted < MINT_LIMIT_PER_WALLET,
        ContractError::MintLimitReached {}
    );

    let config = CONFIG.load(deps.storage)?;
    let collection = config.erc721.ok_or(ContractError::Erc721NotSet {})?;

    let mut res = Response::new();
    let mut event = Event::new("mint")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("kind", kind.as_str());

    match kind {
        MintKind::Free => nonpayable(&info)?,
        MintKind::Native => {
            let payment = must_pay(&info, NATIVE_DENOM)?;
            if payment.u128() != NATIVE_MINT_PRICE {
                return Err(ContractError::IncorrectPayment {
                    got: payment.u128(),
                    expected: NATIVE_MINT_PRICE,
                });
            }
            event = event.add_attribute("price", payment);
        }
        MintKind::Erc20 => {
            nonpayable(&info)?;
            let token = config.erc20.ok_or(ContractError::Erc20NotSet {})?;
            let price = token.mint_price()?;
            res = res.add_message(WasmMsg::Execute {
                contract_addr: token.address.to_string(),
                msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount: price,
                })?,
                funds: vec![],
            });
            event = event.add_attribute("price", price);
        }
    }

    let total_minted = TOTAL_MINTED.load(deps.storage)?;
    ensure!(total_minted < MAX_SUPPLY, ContractError::MaxSupplyReached {});

    let token_id = total_minted + 1;
    TOTAL_MINTED.save(deps.storage, &token_id)?;
    MINT_COUNTS.save(deps.storage, (&info.sender, kind.as_str()), &(minted + 1))?;

    event = event.add_attribute("token_id", token_id.to_string());
    Ok(res
        .add_message(collection.mint(&info.sender, token_id)?)
        .add_event(event))
}

/// Splits `amount` into the withdrawal fee and the owner's remainder
fn split_withdrawal(amount: Uint128) -> (Uint128, Uint128) {
    let fee = amount * Decimal::percent(WITHDRAW_FEE_PERCENT);
    (fee, amount - fee)
}

pub fn execute_withdraw_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_owner(deps.as_ref(), &info)?;

    let balance = deps
        .querier
        .query_balance(&env.contract.address, NATIVE_DENOM)?
        .amount;
    ensure!(!balance.is_zero(), ContractError::NothingToWithdraw {});

    let fee_recipient = deps.api.addr_validate(FEE_RECIPIENT)?;
    let (fee, remainder) = split_withdrawal(balance);

    let mut res = Response::new();
    if !fee.is_zero() {
        res = res.add_message(BankMsg::Send {
            to_address: fee_recipient.to_string(),
            amount: coins(fee.u128(), NATIVE_DENOM),
        });
    }
    res = res.add_message(BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(remainder.u128(), NATIVE_DENOM),
    });

    let event = Event::new("withdraw_native")
        .add_attribute("owner", info.sender)
        .add_attribute("fee_recipient", fee_recipient)
        .add_attribute("fee", fee)
        .add_attribute("amount", remainder);
    Ok(res.add_event(event))
}

pub fn execute_withdraw_erc20(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_owner(deps.as_ref(), &info)?;

    let token = CONFIG
        .load(deps.storage)?
        .erc20
        .ok_or(ContractError::Erc20NotSet {})?;
    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        &token.address,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    ensure!(
        !balance.balance.is_zero(),
        ContractError::NothingToWithdraw {}
    );

    let fee_recipient = deps.api.addr_validate(FEE_RECIPIENT)?;
    let (fee, remainder) = split_withdrawal(balance.balance);

    let mut res = Response::new();
    if !fee.is_zero() {
        res = res.add_message(cw20_transfer(&token.address, &fee_recipient, fee)?);
    }
    res = res.add_message(cw20_transfer(&token.address, &info.sender, remainder)?);

    let event = Event::new("withdraw_erc20")
        .add_attribute("token", token.address)
        .add_attribute("owner", info.sender)
        .add_attribute("fee_recipient", fee_recipient)
        .add_attribute("fee", fee)
        .add_attribute("amount", remainder);
    Ok(res.add_event(event))
}

fn cw20_transfer(token: &Addr, recipient: &Addr, amount: Uint128) -> Result<WasmMsg, StdError> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    })
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
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
    nonpayable(&info)?;
    only_owner(deps.as_ref(), &info)?;

    OWNER.set(deps, None)?;

    let event = Event::new("renounce_ownership").add_attribute("previous_owner", info.sender);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let current_version = get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version > new_version {
        return Err(StdError::generic_err("Cannot upgrade to a previous contract version").into());
    }
    // if same version return
    if version == new_version {
        return Ok(Response::new());
    }

    // set new contract version
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let event = Event::new("migrate")
        .add_attribute("from_name", current_version.contract)
        .add_attribute("from_version", current_version.version)
        .add_attribute("to_name", CONTRACT_NAME)
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(Response::new().add_event(event))
}
