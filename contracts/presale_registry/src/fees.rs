//! Creation-fee treasury.
//!
//! Fees paid at campaign creation accumulate on the registry's own balance
//! and are tracked here until the owner withdraws them.

use crate::storage;
use crate::types::Error;
use soroban_sdk::{token, Address, Env};

pub fn collect(env: &Env, amount: i128) -> Result<(), Error> {
    let total = storage::get_collected_fees(env)
        .checked_add(amount)
        .ok_or(Error::MathOverflow)?;
    storage::set_collected_fees(env, total);
    Ok(())
}

/// Transfer the whole collected balance to `to` and zero it. Returns the
/// amount moved; an empty balance is a no-op.
pub fn withdraw_all(env: &Env, payment_token: &Address, to: &Address) -> i128 {
    let amount = storage::get_collected_fees(env);
    if amount > 0 {
        token::Client::new(env, payment_token).transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );
        storage::set_collected_fees(env, 0);
    }
    amount
}
