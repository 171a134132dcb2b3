pub mod contract;
mod error;
pub mod helpers;
pub mod mock;
pub mod msg;
pub mod oracle;
pub mod state;

pub use crate::error::ContractError;
