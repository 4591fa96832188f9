#![no_std]

mod contract;
mod fees;
mod pagination;
mod presale_client;
mod storage;
mod types;


pub use contract::{PresaleRegistry, PresaleRegistryClient};
pub use types::{Error, PresaleParams};
