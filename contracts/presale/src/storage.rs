use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Registry)
}

pub fn get_registry(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .ok_or(Error::NotInitialized)
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn get_token_contract(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::TokenContract)
        .ok_or(Error::NotInitialized)
}

pub fn set_token_contract(env: &Env, contract: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::TokenContract, contract);
}

pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn set_campaign_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::CampaignCount, &count);
}

pub fn get_campaign(env: &Env, id: u32) -> Result<CampaignConfig, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(id))
        .ok_or(Error::CampaignNotFound)
}

pub fn set_campaign(env: &Env, id: u32, config: &CampaignConfig) {
    env.storage()
        .persistent()
        .set(&DataKey::Campaign(id), config);
}

pub fn get_total_contributed(env: &Env, id: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalContributed(id))
        .unwrap_or(0)
}

pub fn set_total_contributed(env: &Env, id: u32, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalContributed(id), &amount);
}

pub fn is_soft_cap_reached(env: &Env, id: u32) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::SoftCapReached(id))
        .unwrap_or(false)
}

// One-way: there is no setter back to false.
pub fn mark_soft_cap_reached(env: &Env, id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::SoftCapReached(id), &true);
}

pub fn is_withdrawn(env: &Env, id: u32) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Withdrawn(id))
        .unwrap_or(false)
}

pub fn mark_withdrawn(env: &Env, id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::Withdrawn(id), &true);
}

pub fn get_currency_balance(env: &Env, id: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::CurrencyBalance(id))
        .unwrap_or(0)
}

pub fn set_currency_balance(env: &Env, id: u32, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::CurrencyBalance(id), &amount);
}

pub fn get_contributed(env: &Env, id: u32, addr: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contributed(id, addr.clone()))
        .unwrap_or(0)
}

pub fn set_contributed(env: &Env, id: u32, addr: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Contributed(id, addr.clone()), &amount);
}

pub fn get_claimable(env: &Env, id: u32, addr: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Claimable(id, addr.clone()))
        .unwrap_or(0)
}

pub fn set_claimable(env: &Env, id: u32, addr: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Claimable(id, addr.clone()), &amount);
}
