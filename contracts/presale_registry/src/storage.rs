use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_presale(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Presale)
        .ok_or(Error::NotInitialized)
}

pub fn set_presale(env: &Env, presale: &Address) {
    env.storage().instance().set(&DataKey::Presale, presale);
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

pub fn get_creation_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CreationFee)
        .unwrap_or(0)
}

pub fn set_creation_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::CreationFee, &fee);
}

pub fn get_presales(env: &Env) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::Presales)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn append_presale(env: &Env, id: u32) {
    let mut presales = get_presales(env);
    presales.push_back(id);
    env.storage().persistent().set(&DataKey::Presales, &presales);
}

pub fn get_creator_tokens(env: &Env, creator: &Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::CreatorTokens(creator.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn append_creator_token(env: &Env, creator: &Address, token_id: u32) {
    let mut tokens = get_creator_tokens(env, creator);
    tokens.push_back(token_id);
    env.storage()
        .persistent()
        .set(&DataKey::CreatorTokens(creator.clone()), &tokens);
}

pub fn get_collected_fees(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CollectedFees)
        .unwrap_or(0)
}

pub fn set_collected_fees(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::CollectedFees, &amount);
}
