use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
use cosmwasm_std::{coins, from_binary, Deps, DepsMut, Uint128};
use cw721::{NumTokensResponse, OwnerOfResponse};
use cw721_base::ContractError as Cw721ContractError;
use cw_utils::PaymentError;
use imx_erc721::{BalanceResponse, MINTER_ROLE};

use crate::contract::{execute, instantiate, query};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, RoyaltyInfoResponse};
use crate::ContractError;

const OWNER: &str = "owner";
const MINTER: &str = "minter";
const USER: &str = "user";
const IMPOSTER: &str = "imposter";

fn init_msg() -> InstantiateMsg {
    InstantiateMsg {
        owner: OWNER.to_string(),
        name: "Fake Loot".to_string(),
        symbol: "FKLOOT".to_string(),
        base_uri: "".to_string(),
        contract_uri: "".to_string(),
        operator_allowlist: None,
        royalty_receiver: OWNER.to_string(),
        fee_numerator: 5,
    }
}

fn setup(mut deps: DepsMut) {
    instantiate(deps.branch(), mock_env(), mock_info(OWNER, &[]), init_msg()).unwrap();
    let msg = ExecuteMsg::GrantMinterRole {
        user: MINTER.to_string(),
    };
    execute(deps, mock_env(), mock_info(OWNER, &[]), msg).unwrap();
}

fn mint(deps: DepsMut, sender: &str, to: &str, token_id: &str) -> Result<(), ContractError> {
    let msg = ExecuteMsg::Mint {
        to: to.to_string(),
        token_id: token_id.to_string(),
    };
    execute(deps, mock_env(), mock_info(sender, &[]), msg).map(|_| ())
}

fn has_role(deps: Deps, role: &str, account: &str) -> bool {
    let msg = QueryMsg::HasRole {
        role: role.to_string(),
        account: account.to_string(),
    };
    from_binary(&query(deps, mock_env(), msg).unwrap()).unwrap()
}

#[test]
fn init() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    assert!(has_role(deps.as_ref(), MINTER_ROLE, MINTER));
    assert!(!has_role(deps.as_ref(), MINTER_ROLE, USER));

    let role: String =
        from_binary(&query(deps.as_ref(), mock_env(), QueryMsg::MinterRole {}).unwrap()).unwrap();
    assert_eq!(role, MINTER_ROLE);

    let res: NumTokensResponse =
        from_binary(&query(deps.as_ref(), mock_env(), QueryMsg::TotalSupply {}).unwrap()).unwrap();
    assert_eq!(res.count, 0);
}

#[test]
fn rejects_royalty_above_denominator() {
    let mut deps = mock_dependencies();
    let mut msg = init_msg();
    msg.fee_numerator = 10_001;
    let err = instantiate(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), msg).unwrap_err();
    assert_eq!(err, ContractError::InvalidRoyaltyFee(10_001));
}

#[test]
fn only_minters_mint() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    let err = mint(deps.as_mut(), IMPOSTER, USER, "1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "AccessControl: account imposter is missing role minter"
    );

    mint(deps.as_mut(), MINTER, USER, "1").unwrap();
    mint(deps.as_mut(), MINTER, USER, "2").unwrap();

    let res: OwnerOfResponse = from_binary(
        &query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::OwnerOf {
                token_id: "1".to_string(),
                include_expired: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(res.owner, USER);

    let res: BalanceResponse = from_binary(
        &query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::BalanceOf {
                owner: USER.to_string(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(res.balance, 2);

    let res: NumTokensResponse =
        from_binary(&query(deps.as_ref(), mock_env(), QueryMsg::NumTokens {}).unwrap()).unwrap();
    assert_eq!(res.count, 2);
}

#[test]
fn token_ids_are_unique() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    mint(deps.as_mut(), MINTER, USER, "1").unwrap();
    let err = mint(deps.as_mut(), MINTER, OWNER, "1").unwrap_err();
    assert_eq!(err, ContractError::Base(Cw721ContractError::Claimed {}));
}

#[test]
fn revoked_minter_cannot_mint() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    let msg = ExecuteMsg::RevokeMinterRole {
        user: MINTER.to_string(),
    };
    let err = execute(deps.as_mut(), mock_env(), mock_info(IMPOSTER, &[]), msg.clone()).unwrap_err();
    assert!(matches!(err, ContractError::MissingRole { .. }));

    execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), msg).unwrap();
    assert!(!has_role(deps.as_ref(), MINTER_ROLE, MINTER));
    assert!(mint(deps.as_mut(), MINTER, USER, "1").is_err());
}

#[test]
fn token_uri_follows_base_uri() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());
    mint(deps.as_mut(), MINTER, USER, "7").unwrap();

    let token_uri = |deps: Deps| -> Option<String> {
        let msg = QueryMsg::TokenUri {
            token_id: "7".to_string(),
        };
        from_binary(&query(deps, mock_env(), msg).unwrap()).unwrap()
    };
    assert_eq!(token_uri(deps.as_ref()), None);

    let msg = ExecuteMsg::SetBaseUri {
        base_uri: "https://example.com/loot/".to_string(),
    };
    execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), msg).unwrap();
    assert_eq!(
        token_uri(deps.as_ref()),
        Some("https://example.com/loot/7".to_string())
    );

    // unknown token
    let msg = QueryMsg::TokenUri {
        token_id: "8".to_string(),
    };
    assert!(query(deps.as_ref(), mock_env(), msg).is_err());
}

#[test]
fn royalty_info() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    let msg = QueryMsg::RoyaltyInfo {
        token_id: "1".to_string(),
        sale_price: Uint128::new(1_000_000),
    };
    let res: RoyaltyInfoResponse =
        from_binary(&query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap();
    assert_eq!(res.receiver, OWNER);
    assert_eq!(res.royalty_amount, Uint128::new(500));

    let msg = ExecuteMsg::SetDefaultRoyaltyReceiver {
        receiver: USER.to_string(),
        fee_numerator: 250,
    };
    execute(deps.as_mut(), mock_env(), mock_info(OWNER, &[]), msg).unwrap();

    let msg = QueryMsg::RoyaltyInfo {
        token_id: "1".to_string(),
        sale_price: Uint128::new(1_000_000),
    };
    let res: RoyaltyInfoResponse =
        from_binary(&query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap();
    assert_eq!(res.receiver, USER);
    assert_eq!(res.royalty_amount, Uint128::new(25_000));
}

#[test]
fn holder_transfers_without_allowlist() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());
    mint(deps.as_mut(), MINTER, USER, "1").unwrap();

    let msg = ExecuteMsg::TransferNft {
        recipient: OWNER.to_string(),
        token_id: "1".to_string(),
    };
    execute(deps.as_mut(), mock_env(), mock_info(USER, &[]), msg).unwrap();

    let res: OwnerOfResponse = from_binary(
        &query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::OwnerOf {
                token_id: "1".to_string(),
                include_expired: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(res.owner, OWNER);
}

#[test]
fn rejects_funds() {
    let mut deps = mock_dependencies();
    setup(deps.as_mut());

    let msg = ExecuteMsg::Mint {
        to: USER.to_string(),
        token_id: "1".to_string(),
    };
    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info(MINTER, &coins(1, "ustars")),
        msg,
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Payment(PaymentError::NonPayable {}));
}
