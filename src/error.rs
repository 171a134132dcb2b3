use cosmwasm_std::{Int128, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("NotOwner")]
    NotOwner {},

    // Contribution is worth less than MINIMUM_USD at the current feed price.
    #[error("NotEnoughValue")]
    NotEnoughValue {},

    #[error("InvalidPrice: feed answered {price}")]
    InvalidPrice { price: Int128 },

    #[error("InvalidArgument: {msg}")]
    InvalidArgument { msg: String },
}
