use cosmwasm_schema::{cw_serde, QueryResponses};
use cw_controllers::AdminResponse;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    AddAddressesToAllowlist { addresses: Vec<String> },
    RemoveAddressesFromAllowlist { addresses: Vec<String> },
    GrantRegistrarRole { user: String },
    RevokeRegistrarRole { user: String },
    UpdateAdmin { admin: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(bool)]
    IsAllowlisted { target: String },
    #[returns(bool)]
    IsRegistrar { address: String },
    #[returns(u64)]
    AllowlistCount {},
    #[returns(AdminResponse)]
    Admin {},
}
