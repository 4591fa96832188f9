use crate::fees;
use crate::pagination;
use crate::presale_client::PresaleClient;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, token, Address, Env, Vec,
};

contractmeta!(
    key = "Description",
    val = "Presale factory with creation fees and a paginated campaign index"
);

#[contract]
pub struct PresaleRegistry;

#[contractimpl]
impl PresaleRegistry {
    pub fn initialize(
        env: Env,
        owner: Address,
        presale: Address,
        payment_token: Address,
        creation_fee: i128,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        if creation_fee < 0 {
            return Err(Error::InvalidAmount);
        }

        set_owner(&env, &owner);
        set_presale(&env, &presale);
        set_payment_token(&env, &payment_token);
        set_creation_fee(&env, creation_fee);

        env.events().publish(
            (symbol_short!("registry"), symbol_short!("init")),
            (owner, presale, creation_fee),
        );
        Ok(())
    }

    /// Create a campaign on behalf of `creator`.
    ///
    /// The fee must match the configured creation fee exactly; both under-
    /// and over-payment are rejected. Parameter validation is delegated to
    /// the presale contract, and any error there aborts the whole call, fee
    /// transfer included. The emitted event carries the new campaign id and
    /// token id and is the discovery mechanism for just-created campaigns.
    pub fn create_presale(
        env: Env,
        creator: Address,
        params: PresaleParams,
        fee_payment: i128,
    ) -> Result<u32, Error> {
        creator.require_auth();
        let payment_token = get_payment_token(&env)?;

        let fee = get_creation_fee(&env);
        if fee_payment != fee {
            return Err(Error::IncorrectPresaleCreationFee);
        }

        let client = PresaleClient::new(&env, &get_presale(&env)?);
        let result = client.try_create_campaign(
            &creator,
            &params.name,
            &params.symbol,
            &params.supply,
            &params.price,
            &params.hard_cap,
            &params.soft_cap,
            &params.soft_cap_price,
            &params.start_time,
            &params.end_time,
        );
        let (campaign_id, token_id) = match result {
            Ok(Ok(ids)) => ids,
            Err(Ok(err)) => return Err(map_campaign_error(err)),
            _ => return Err(Error::CampaignCreationFailed),
        };

        // Collected after the campaign call so a validation failure never
        // strands the fee: a failed transfer here aborts the whole invocation,
        // campaign included.
        if fee > 0 {
            token::Client::new(&env, &payment_token).transfer(
                &creator,
                &env.current_contract_address(),
                &fee,
            );
            fees::collect(&env, fee)?;
        }

        append_presale(&env, campaign_id);
        append_creator_token(&env, &creator, token_id);

        env.events().publish(
            (symbol_short!("registry"), symbol_short!("created")),
            (campaign_id, token_id, creator),
        );
        Ok(campaign_id)
    }

    pub fn set_presale_creation_fee(env: Env, caller: Address, fee: i128) -> Result<(), Error> {
        caller.require_auth();
        if caller != get_owner(&env)? {
            return Err(Error::Unauthorized);
        }
        if fee < 0 {
            return Err(Error::InvalidAmount);
        }
        set_creation_fee(&env, fee);

        env.events()
            .publish((symbol_short!("registry"), symbol_short!("fee")), fee);
        Ok(())
    }

    /// Transfer the whole collected-fee balance to the owner. Returns the
    /// amount moved; an empty balance is a no-op.
    pub fn withdraw_fees(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let owner = get_owner(&env)?;
        if caller != owner {
            return Err(Error::Unauthorized);
        }

        let amount = fees::withdraw_all(&env, &get_payment_token(&env)?, &owner);
        env.events()
            .publish((symbol_short!("registry"), symbol_short!("wfees")), amount);
        Ok(amount)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Campaign ids in creation order, 1-indexed pages of ten.
    pub fn get_paginated_presales(env: Env, page: u32) -> Vec<u32> {
        pagination::page_ascending(&env, &get_presales(&env), page, pagination::PAGE_SIZE)
    }

    /// Campaign ids newest-first, 1-indexed pages of caller-chosen size.
    pub fn get_paginated_presales_decreasing_by_creation(
        env: Env,
        page: u32,
        page_size: u32,
    ) -> Vec<u32> {
        pagination::page_descending(&env, &get_presales(&env), page, page_size)
    }

    pub fn get_user_created_tokens(env: Env, creator: Address) -> Vec<u32> {
        get_creator_tokens(&env, &creator)
    }

    pub fn get_factory_balance(env: Env) -> i128 {
        get_collected_fees(&env)
    }

    pub fn presale_creation_fee(env: Env) -> i128 {
        get_creation_fee(&env)
    }

    pub fn total_presales(env: Env) -> u32 {
        get_presales(&env).len()
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }
}

/// Map validation errors propagated from the presale contract back onto the
/// registry's matching variants.
fn map_campaign_error(err: soroban_sdk::Error) -> Error {
    const MIRRORED: [(u32, Error); 6] = [
        (5, Error::InvalidAmount),
        (6, Error::InvalidPrice),
        (7, Error::InvalidSoftCapPrice),
        (8, Error::SoftCapRequiresTimeLimit),
        (9, Error::InvalidTimeWindow),
        (10, Error::InvalidHardCap),
    ];
    for (code, mapped) in MIRRORED {
        if err == soroban_sdk::Error::from_contract_error(code) {
            return mapped;
        }
    }
    Error::CampaignCreationFailed
}
