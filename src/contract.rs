#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::oracle::WasmPriceFeed;
use crate::state::{load_config, save_config, Config, FUNDER_COUNT};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:fund-me";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Instantiation
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.denom.is_empty() {
        return Err(ContractError::InvalidArgument {
            msg: "denom cannot be empty".to_string(),
        });
    }

    let config = Config {
        owner: info.sender.clone(),
        price_feed: deps.api.addr_validate(&msg.price_feed)?,
        denom: msg.denom,
    };

    save_config(deps.storage, &config)?;
    FUNDER_COUNT.save(deps.storage, &0)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("price_feed", config.price_feed)
        .add_attribute("denom", config.denom))
}

// Read API
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetPriceFeed {} => to_json_binary(&query::get_price_feed(deps)?),
        QueryMsg::GetOwner {} => to_json_binary(&query::get_owner(deps)?),
        QueryMsg::GetAddressToAmountFunded { address } => {
            to_json_binary(&query::get_address_to_amount_funded(deps, &address)?)
        }
        QueryMsg::GetFunder { index } => to_json_binary(&query::get_funder(deps, index)?),
        QueryMsg::GetMinimumUsd {} => to_json_binary(&query::get_minimum_usd()),
    }
}

pub mod query {
    use super::*;
    use cosmwasm_std::StdError;

    use crate::msg::{
        GetAddressToAmountFundedResponse, GetFunderResponse, GetMinimumUsdResponse,
        GetOwnerResponse, GetPriceFeedResponse,
    };
    use crate::state::{amount_funded, funder_count, FUNDERS, MINIMUM_USD};

    pub fn get_price_feed(deps: Deps) -> StdResult<GetPriceFeedResponse> {
        let config = load_config(deps.storage)?;
        Ok(GetPriceFeedResponse {
            price_feed: config.price_feed,
        })
    }

    pub fn get_owner(deps: Deps) -> StdResult<GetOwnerResponse> {
        let config = load_config(deps.storage)?;
        Ok(GetOwnerResponse {
            owner: config.owner,
        })
    }

    pub fn get_address_to_amount_funded(
        deps: Deps,
        address: &str,
    ) -> StdResult<GetAddressToAmountFundedResponse> {
        let address = deps.api.addr_validate(address)?;
        Ok(GetAddressToAmountFundedResponse {
            amount: amount_funded(deps.storage, &address)?,
        })
    }

    pub fn get_funder(deps: Deps, index: u32) -> StdResult<GetFunderResponse> {
        let count = funder_count(deps.storage)?;
        if index >= count {
            return Err(StdError::generic_err(format!(
                "funder index {} out of bounds (funder count {})",
                index, count
            )));
        }
        Ok(GetFunderResponse {
            funder: FUNDERS.load(deps.storage, index)?,
        })
    }

    pub fn get_minimum_usd() -> GetMinimumUsdResponse {
        GetMinimumUsdResponse {
            minimum_usd: MINIMUM_USD,
        }
    }
}

// Write API
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Fund {} | ExecuteMsg::Receive {} => {
            let config = load_config(deps.storage)?;
            let price_feed = WasmPriceFeed::new(deps.querier, config.price_feed);
            execute::fund(deps, info, &price_feed)
        }
        ExecuteMsg::Withdraw {} => execute::withdraw(deps, env, info),
        ExecuteMsg::EfficientWithdraw {} => execute::efficient_withdraw(deps, env, info),
    }
}

pub mod execute {
    use super::*;
    use cosmwasm_std::Order;

    use crate::oracle::{conversion_rate, PriceOracle};
    use crate::state::{funder_count, ADDRESS_TO_AMOUNT_FUNDED, FUNDERS, MINIMUM_USD};

    pub fn fund<O: PriceOracle>(
        deps: DepsMut,
        info: MessageInfo,
        oracle: &O,
    ) -> Result<Response, ContractError> {
        let config = load_config(deps.storage)?;
        let amount = paid_amount(&info.funds, &config.denom)?;

        let price = oracle.latest_price()?;
        if conversion_rate(amount, &price)? < MINIMUM_USD {
            return Err(ContractError::NotEnoughValue {});
        }

        ADDRESS_TO_AMOUNT_FUNDED.update(
            deps.storage,
            &info.sender,
            |funded| -> StdResult<Uint128> { Ok(funded.unwrap_or_default().checked_add(amount)?) },
        )?;

        // Repeat funders get another slot, the list is never deduplicated
        let index = funder_count(deps.storage)?;
        FUNDERS.save(deps.storage, index, &info.sender)?;
        FUNDER_COUNT.save(deps.storage, &(index + 1))?;

        Ok(Response::new()
            .add_attribute("method", "fund")
            .add_attribute("funder", info.sender)
            .add_attribute("amount", amount))
    }

    pub fn withdraw(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
    ) -> Result<Response, ContractError> {
        let config = load_config(deps.storage)?;
        only_owner(&config, &info)?;

        // Every slot is read back from storage on its own
        let count = funder_count(deps.storage)?;
        for index in 0..count {
            let funder = FUNDERS.load(deps.storage, index)?;
            ADDRESS_TO_AMOUNT_FUNDED.remove(deps.storage, &funder);
            FUNDERS.remove(deps.storage, index);
        }
        FUNDER_COUNT.save(deps.storage, &0)?;

        payout(deps.as_ref(), &env, config, "withdraw", count)
    }

    pub fn efficient_withdraw(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
    ) -> Result<Response, ContractError> {
        let config = load_config(deps.storage)?;
        only_owner(&config, &info)?;

        // One pass over storage, then work from memory
        let funders: Vec<(u32, Addr)> = FUNDERS
            .range(deps.storage, None, None, Order::Ascending)
            .collect::<StdResult<_>>()?;
        for (index, funder) in &funders {
            ADDRESS_TO_AMOUNT_FUNDED.remove(deps.storage, funder);
            FUNDERS.remove(deps.storage, *index);
        }
        FUNDER_COUNT.save(deps.storage, &0)?;

        payout(deps.as_ref(), &env, config, "efficient_withdraw", funders.len() as u32)
    }

    fn only_owner(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
        if info.sender != config.owner {
            return Err(ContractError::NotOwner {});
        }
        Ok(())
    }

    // Sums the attached coins, which must all be in the custodied denom.
    fn paid_amount(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
        let mut total = Uint128::zero();
        for coin in funds {
            if coin.denom != denom {
                return Err(ContractError::InvalidArgument {
                    msg: format!("unsupported denom {}, only {} is accepted", coin.denom, denom),
                });
            }
            total = total.checked_add(coin.amount)?;
        }
        Ok(total)
    }

    // Sends the whole custodied balance to the owner. The send reverts the
    // caller's storage resets if it fails.
    fn payout(
        deps: Deps,
        env: &Env,
        config: Config,
        method: &str,
        funders_reset: u32,
    ) -> Result<Response, ContractError> {
        let balance = deps
            .querier
            .query_balance(&env.contract.address, &config.denom)?;

        let mut res = Response::new()
            .add_attribute("method", method)
            .add_attribute("owner", config.owner.as_str())
            .add_attribute("amount", balance.amount)
            .add_attribute("funders_reset", funders_reset.to_string());

        // Bank sends of zero coins are rejected, an empty ledger just moves nothing
        if !balance.amount.is_zero() {
            res = res.add_message(BankMsg::Send {
                to_address: config.owner.into_string(),
                amount: vec![balance],
            });
        }
        Ok(res)
    }
}
