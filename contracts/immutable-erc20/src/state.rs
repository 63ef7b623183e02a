use cw_controllers::Admin;

/// Hub owner of the token, renounceable
pub const OWNER: Admin = Admin::new("owner");

pub const DECIMALS: u8 = 18;
