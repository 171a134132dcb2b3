use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128, Uint256};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the native/USD price feed contract.
    pub price_feed: String,
    /// Native denomination accepted by `Fund`, assumed to carry 18 decimals.
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    Fund {},
    /// Bare value transfer, handled exactly like `Fund`.
    Receive {},
    Withdraw {},
    EfficientWithdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(GetPriceFeedResponse)]
    GetPriceFeed {},
    #[returns(GetOwnerResponse)]
    GetOwner {},
    #[returns(GetAddressToAmountFundedResponse)]
    GetAddressToAmountFunded { address: String },
    // Fails once index reaches the current funder count
    #[returns(GetFunderResponse)]
    GetFunder { index: u32 },
    #[returns(GetMinimumUsdResponse)]
    GetMinimumUsd {},
}

// We define a custom struct for each query response
#[cw_serde]
pub struct GetPriceFeedResponse {
    pub price_feed: Addr,
}
#[cw_serde]
pub struct GetOwnerResponse {
    pub owner: Addr,
}
#[cw_serde]
pub struct GetAddressToAmountFundedResponse {
    pub amount: Uint128,
}
#[cw_serde]
pub struct GetFunderResponse {
    pub funder: Addr,
}
#[cw_serde]
pub struct GetMinimumUsdResponse {
    pub minimum_usd: Uint256,
}
