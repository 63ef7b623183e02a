use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw721::{
    ApprovalsResponse, ContractInfoResponse, Expiration, NftInfoResponse, NumTokensResponse,
    OperatorsResponse, OwnerOfResponse, TokensResponse,
};
use cw721_base::Extension;
use imx_erc721::BalanceResponse;

use crate::state::CollectionConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub contract_uri: String,
    pub operator_allowlist: Option<String>,
    pub royalty_receiver: String,
    /// Royalty in basis points
    pub fee_numerator: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a new NFT, minter role only
    Mint { to: String, token_id: String },
    GrantMinterRole { user: String },
    RevokeMinterRole { user: String },
    GrantRole { role: String, account: String },
    RevokeRole { role: String, account: String },
    SetBaseUri { base_uri: String },
    SetContractUri { contract_uri: String },
    /// Point the collection at another operator allowlist
    SetOperatorAllowlistRegistry { address: String },
    SetDefaultRoyaltyReceiver { receiver: String, fee_numerator: u64 },
    /// Transfer is a base message to move a token to another account without triggering actions
    TransferNft { recipient: String, token_id: String },
    /// Send is a base message to transfer a token to a contract and trigger an action
    /// on the receiving contract.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    /// Allows an allowlisted operator to transfer / send the token from the owner's account.
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    Revoke { spender: String, token_id: String },
    /// Allows an allowlisted operator to transfer / send any token from the owner's account.
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    RevokeAll { operator: String },
    Burn { token_id: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(bool)]
    HasRole { role: String, account: String },
    #[returns(String)]
    MinterRole {},
    #[returns(BalanceResponse)]
    BalanceOf { owner: String },
    #[returns(NumTokensResponse)]
    TotalSupply {},
    #[returns(String)]
    BaseUri {},
    #[returns(String)]
    ContractUri {},
    #[returns(Option<String>)]
    TokenUri { token_id: String },
    #[returns(RoyaltyInfoResponse)]
    RoyaltyInfo {
        token_id: String,
        sale_price: Uint128,
    },
    #[returns(Option<Addr>)]
    OperatorAllowlist {},
    #[returns(CollectionConfig)]
    Config {},
    #[returns(OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(NumTokensResponse)]
    NumTokens {},
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    #[returns(NftInfoResponse<Extension>)]
    NftInfo { token_id: String },
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(OperatorsResponse)]
    AllOperators {
        owner: String,
        include_expired: Option<bool>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(ApprovalsResponse)]
    Approvals {
        token_id: String,
        include_expired: Option<bool>,
    },
}

#[cw_serde]
pub struct RoyaltyInfoResponse {
    pub receiver: String,
    pub royalty_amount: Uint128,
}
