use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{
    to_json_binary, Addr, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

use crate::msg::{
    ExecuteMsg, GetAddressToAmountFundedResponse, GetFunderResponse, GetOwnerResponse,
    GetPriceFeedResponse, QueryMsg,
};

/// FundMeContract is a wrapper around Addr that provides a lot of helpers
/// for working with this contract.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct FundMeContract(pub Addr);

impl FundMeContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        self.call_with_funds(msg, vec![])
    }

    pub fn call_with_funds<T: Into<ExecuteMsg>>(
        &self,
        msg: T,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    pub fn owner(&self, querier: &QuerierWrapper) -> StdResult<Addr> {
        let res: GetOwnerResponse = querier.query_wasm_smart(self.addr(), &QueryMsg::GetOwner {})?;
        Ok(res.owner)
    }

    pub fn price_feed(&self, querier: &QuerierWrapper) -> StdResult<Addr> {
        let res: GetPriceFeedResponse =
            querier.query_wasm_smart(self.addr(), &QueryMsg::GetPriceFeed {})?;
        Ok(res.price_feed)
    }

    pub fn amount_funded(
        &self,
        querier: &QuerierWrapper,
        address: impl Into<String>,
    ) -> StdResult<Uint128> {
        let msg = QueryMsg::GetAddressToAmountFunded {
            address: address.into(),
        };
        let res: GetAddressToAmountFundedResponse = querier.query_wasm_smart(self.addr(), &msg)?;
        Ok(res.amount)
    }

    pub fn funder(&self, querier: &QuerierWrapper, index: u32) -> StdResult<Addr> {
        let res: GetFunderResponse =
            querier.query_wasm_smart(self.addr(), &QueryMsg::GetFunder { index })?;
        Ok(res.funder)
    }
}
