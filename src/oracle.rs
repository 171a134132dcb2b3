use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Int128, QuerierWrapper, StdResult, Timestamp, Uint128, Uint256};

use crate::error::ContractError;

/// Precision every price is scaled to before comparing against `MINIMUM_USD`.
pub const TARGET_DECIMALS: u8 = 18;

const ONE_NATIVE: Uint256 = Uint256::from_u128(1_000_000_000_000_000_000);

/// Queries a price feed contract must answer.
#[cw_serde]
#[derive(QueryResponses)]
pub enum PriceFeedQueryMsg {
    #[returns(RoundDataResponse)]
    LatestRoundData {},
    #[returns(DecimalsResponse)]
    Decimals {},
}

#[cw_serde]
pub struct RoundDataResponse {
    pub round_id: u64,
    pub answer: Int128,
    pub started_at: Timestamp,
    pub updated_at: Timestamp,
    pub answered_in_round: u64,
}

#[cw_serde]
pub struct DecimalsResponse {
    pub decimals: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceData {
    pub price: i128,
    pub decimals: u8,
}

/// Read-only source of the native/USD price.
pub trait PriceOracle {
    fn latest_price(&self) -> StdResult<PriceData>;
}

/// Oracle backed by a price feed contract reachable through the querier.
pub struct WasmPriceFeed<'a> {
    querier: QuerierWrapper<'a>,
    address: Addr,
}

impl<'a> WasmPriceFeed<'a> {
    pub fn new(querier: QuerierWrapper<'a>, address: Addr) -> Self {
        WasmPriceFeed { querier, address }
    }
}

impl PriceOracle for WasmPriceFeed<'_> {
    fn latest_price(&self) -> StdResult<PriceData> {
        let round: RoundDataResponse = self
            .querier
            .query_wasm_smart(self.address.as_str(), &PriceFeedQueryMsg::LatestRoundData {})?;
        let decimals: DecimalsResponse = self
            .querier
            .query_wasm_smart(self.address.as_str(), &PriceFeedQueryMsg::Decimals {})?;

        Ok(PriceData {
            price: round.answer.i128(),
            decimals: decimals.decimals,
        })
    }
}

/// USD value (18 decimals) of `amount` native units at `price`.
pub fn conversion_rate(amount: Uint128, price: &PriceData) -> Result<Uint256, ContractError> {
    if price.price <= 0 {
        return Err(ContractError::InvalidPrice {
            price: Int128::new(price.price),
        });
    }

    let raw = Uint256::from(price.price.unsigned_abs());
    let ten = Uint256::from(10u8);
    let normalized = if price.decimals <= TARGET_DECIMALS {
        raw.checked_mul(ten.checked_pow(u32::from(TARGET_DECIMALS - price.decimals))?)?
    } else {
        raw / ten.checked_pow(u32::from(price.decimals - TARGET_DECIMALS))?
    };

    Ok(normalized.checked_mul(Uint256::from(amount))? / ONE_NATIVE)
}
