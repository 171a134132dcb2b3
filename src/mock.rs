//! Minimal aggregator answering [`PriceFeedQueryMsg`], for local chains and tests.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Int128, MessageInfo, Response, StdResult,
};
use cw_storage_plus::Item;

use crate::oracle::{DecimalsResponse, PriceFeedQueryMsg, RoundDataResponse};

pub const DECIMALS: Item<u8> = Item::new("decimals");
pub const LATEST_ROUND: Item<RoundDataResponse> = Item::new("latest_round");

#[cw_serde]
pub struct InstantiateMsg {
    pub decimals: u8,
    pub initial_answer: Int128,
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateAnswer { answer: Int128 },
}

pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    DECIMALS.save(deps.storage, &msg.decimals)?;
    LATEST_ROUND.save(
        deps.storage,
        &RoundDataResponse {
            round_id: 1,
            answer: msg.initial_answer,
            started_at: env.block.time,
            updated_at: env.block.time,
            answered_in_round: 1,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("decimals", msg.decimals.to_string())
        .add_attribute("answer", msg.initial_answer.to_string()))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::UpdateAnswer { answer } => {
            let round = LATEST_ROUND.update(deps.storage, |round| -> StdResult<_> {
                let round_id = round.round_id + 1;
                Ok(RoundDataResponse {
                    round_id,
                    answer,
                    started_at: env.block.time,
                    updated_at: env.block.time,
                    answered_in_round: round_id,
                })
            })?;

            Ok(Response::new()
                .add_attribute("method", "update_answer")
                .add_attribute("round_id", round.round_id.to_string())
                .add_attribute("answer", answer.to_string()))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: PriceFeedQueryMsg) -> StdResult<Binary> {
    match msg {
        PriceFeedQueryMsg::LatestRoundData {} => to_json_binary(&LATEST_ROUND.load(deps.storage)?),
        PriceFeedQueryMsg::Decimals {} => to_json_binary(&DecimalsResponse {
            decimals: DECIMALS.load(deps.storage)?,
        }),
    }
}
