#![no_std]

mod contract;
mod errors;
mod pricing;
mod state;
mod storage;
mod token_client;
mod types;

#[cfg(test)]
mod test;

pub use contract::{Presale, PresaleClient};
pub use errors::Error;
pub use types::{CampaignConfig, TOKEN_DECIMALS, UNIT};
