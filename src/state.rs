use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, StdResult, Storage, Uint128, Uint256};
use cosmwasm_storage::{singleton, singleton_read};
use cw_storage_plus::{Item, Map};

pub const CONFIG_KEY: &[u8] = b"FUND_ME_CONFIG";

/// 50 USD with 18 decimals of precision.
pub const MINIMUM_USD: Uint256 = Uint256::from_u128(50_000_000_000_000_000_000);

/// Fixed at instantiation, never rewritten afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    pub price_feed: Addr,
    pub denom: String,
}

// funder address -> cumulative amount funded since the last withdrawal
pub const ADDRESS_TO_AMOUNT_FUNDED: Map<&Addr, Uint128> = Map::new("address_to_amount_funded");

// funding order, one slot per fund call (duplicates allowed)
pub const FUNDERS: Map<u32, Addr> = Map::new("funders");
pub const FUNDER_COUNT: Item<u32> = Item::new("funder_count");

pub fn load_config(storage: &dyn Storage) -> StdResult<Config> {
    singleton_read(storage, CONFIG_KEY).load()
}

pub fn save_config(storage: &mut dyn Storage, config: &Config) -> StdResult<()> {
    singleton(storage, CONFIG_KEY).save(config)
}

pub fn amount_funded(storage: &dyn Storage, funder: &Addr) -> StdResult<Uint128> {
    Ok(ADDRESS_TO_AMOUNT_FUNDED
        .may_load(storage, funder)?
        .unwrap_or_default())
}

pub fn funder_count(storage: &dyn Storage) -> StdResult<u32> {
    Ok(FUNDER_COUNT.may_load(storage)?.unwrap_or_default())
}
