use crate::errors::Error;
use crate::pricing;
use crate::state;
use crate::storage::*;
use crate::token_client::CampaignTokenClient;
use crate::types::*;
use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, token, Address, Env, String,
};

contractmeta!(
    key = "Description",
    val = "Time-windowed presale campaigns with soft/hard caps and two-tier pricing"
);

#[contract]
pub struct Presale;

#[contractimpl]
impl Presale {
    /// Bind the contract to its registry, the campaign token contract and the
    /// payment asset. Campaigns can only be created through the registry.
    pub fn initialize(
        env: Env,
        registry: Address,
        token_contract: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        set_registry(&env, &registry);
        set_token_contract(&env, &token_contract);
        set_payment_token(&env, &payment_token);
        set_campaign_count(&env, 0);

        env.events().publish(
            (symbol_short!("presale"), symbol_short!("init")),
            (registry, token_contract, payment_token),
        );
        Ok(())
    }

    /// Create a campaign and its token ledger. Registry-only.
    ///
    /// Validates the cap and window configuration, creates the ledger with
    /// this contract as sole minter and `supply` minted to the creator, and
    /// returns `(campaign_id, token_id)`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        symbol: String,
        supply: i128,
        price: i128,
        hard_cap: i128,
        soft_cap: i128,
        soft_cap_price: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<(u32, u32), Error> {
        let registry = get_registry(&env)?;
        registry.require_auth();

        if supply < 0 || soft_cap < 0 {
            return Err(Error::InvalidAmount);
        }
        if price <= 0 {
            return Err(Error::InvalidPrice);
        }
        if soft_cap > 0 {
            if soft_cap_price < price {
                return Err(Error::InvalidSoftCapPrice);
            }
            if end_time == 0 {
                return Err(Error::SoftCapRequiresTimeLimit);
            }
        }
        if end_time != 0 && end_time <= start_time {
            return Err(Error::InvalidTimeWindow);
        }
        if hard_cap <= 0 {
            return Err(Error::InvalidHardCap);
        }

        let token_client = CampaignTokenClient::new(&env, &get_token_contract(&env)?);
        let token_id = token_client.create(
            &env.current_contract_address(),
            &creator,
            &name,
            &symbol,
            &TOKEN_DECIMALS,
            &supply,
        );

        let id = get_campaign_count(&env) + 1;
        let config = CampaignConfig {
            owner: creator.clone(),
            token_id,
            price,
            soft_cap,
            soft_cap_price,
            hard_cap,
            start_time,
            end_time,
        };
        set_campaign(&env, id, &config);
        set_campaign_count(&env, id);

        env.events().publish(
            (symbol_short!("presale"), symbol_short!("created")),
            (id, token_id, creator),
        );
        Ok((id, token_id))
    }

    /// Contribute `amount` currency units to a campaign.
    ///
    /// The whole contribution is rejected if it would push the running total
    /// past the hard cap. The token entitlement is recorded but nothing is
    /// minted until `claim_tokens`.
    pub fn contribute(env: Env, contributor: Address, id: u32, amount: i128) -> Result<(), Error> {
        contributor.require_auth();

        let cfg = get_campaign(&env, id)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let now = get_ledger_timestamp(&env);
        let reached = is_soft_cap_reached(&env, id);
        if !state::has_started(&cfg, now) {
            return Err(Error::PresaleNotStarted);
        }
        if state::has_ended(&cfg, now) {
            // A failed campaign rejects new money with a distinct error so
            // callers know to go get a refund instead.
            if state::is_failed(&cfg, now, reached) {
                return Err(Error::PresaleFailedNoRefund);
            }
            return Err(Error::PresaleEnded);
        }

        let total = get_total_contributed(&env, id);
        let new_total = total.checked_add(amount).ok_or(Error::MathOverflow)?;
        if new_total > cfg.hard_cap {
            return Err(Error::HardCapExceeded);
        }
        let tokens = pricing::token_amount(&cfg, total, amount)?;

        token::Client::new(&env, &get_payment_token(&env)?).transfer(
            &contributor,
            &env.current_contract_address(),
            &amount,
        );

        set_total_contributed(&env, id, new_total);
        let contributed = get_contributed(&env, id, &contributor)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        set_contributed(&env, id, &contributor, contributed);
        let claimable = get_claimable(&env, id, &contributor)
            .checked_add(tokens)
            .ok_or(Error::MathOverflow)?;
        set_claimable(&env, id, &contributor, claimable);
        set_currency_balance(
            &env,
            id,
            get_currency_balance(&env, id)
                .checked_add(amount)
                .ok_or(Error::MathOverflow)?,
        );

        if cfg.soft_cap > 0 && !reached && new_total >= cfg.soft_cap {
            mark_soft_cap_reached(&env, id);
            env.events()
                .publish((symbol_short!("presale"), symbol_short!("softcap")), id);
        }

        env.events().publish(
            (symbol_short!("presale"), symbol_short!("contrib")),
            (id, contributor, amount, tokens),
        );
        Ok(())
    }

    /// Mint the caller's recorded token entitlement.
    ///
    /// Allowed as soon as the soft cap is reached, even before the window
    /// closes. Once the window closes without the cap, the campaign is failed
    /// and claiming is blocked for good.
    pub fn claim_tokens(env: Env, claimer: Address, id: u32) -> Result<(), Error> {
        claimer.require_auth();

        let cfg = get_campaign(&env, id)?;
        let claimable = get_claimable(&env, id, &claimer);
        if claimable == 0 {
            return Err(Error::NothingToClaim);
        }
        if cfg.soft_cap > 0 && !is_soft_cap_reached(&env, id) {
            let now = get_ledger_timestamp(&env);
            if state::has_ended(&cfg, now) {
                return Err(Error::PresaleFailed);
            }
            return Err(Error::SoftCapNotReached);
        }

        set_claimable(&env, id, &claimer, 0);
        let token_client = CampaignTokenClient::new(&env, &get_token_contract(&env)?);
        token_client.mint(
            &env.current_contract_address(),
            &cfg.token_id,
            &claimer,
            &claimable,
        );

        env.events().publish(
            (symbol_short!("presale"), symbol_short!("claim")),
            (id, claimer, claimable),
        );
        Ok(())
    }

    /// Transfer the campaign's whole currency balance to the owner.
    ///
    /// Blocked until the soft cap is reached; a repeat call after the balance
    /// has been emptied is a no-op.
    pub fn withdraw_funds(env: Env, caller: Address, id: u32) -> Result<(), Error> {
        caller.require_auth();

        let cfg = get_campaign(&env, id)?;
        if caller != cfg.owner {
            return Err(Error::Unauthorized);
        }
        if cfg.soft_cap > 0 && !is_soft_cap_reached(&env, id) {
            return Err(Error::SoftCapNotReached);
        }

        let balance = get_currency_balance(&env, id);
        if balance > 0 {
            token::Client::new(&env, &get_payment_token(&env)?).transfer(
                &env.current_contract_address(),
                &cfg.owner,
                &balance,
            );
            set_currency_balance(&env, id, 0);
        }
        mark_withdrawn(&env, id);

        env.events().publish(
            (symbol_short!("presale"), symbol_short!("withdraw")),
            (id, balance),
        );
        Ok(())
    }

    /// Recover campaign tokens held by this contract (unsold or returned
    /// supply), sending them to the campaign owner. Same gating as
    /// `withdraw_funds`.
    pub fn withdraw_token(env: Env, caller: Address, id: u32, token_id: u32) -> Result<(), Error> {
        caller.require_auth();

        let cfg = get_campaign(&env, id)?;
        if caller != cfg.owner {
            return Err(Error::Unauthorized);
        }
        if cfg.soft_cap > 0 && !is_soft_cap_reached(&env, id) {
            return Err(Error::SoftCapNotReached);
        }

        let token_client = CampaignTokenClient::new(&env, &get_token_contract(&env)?);
        let held = token_client.balance(&token_id, &env.current_contract_address());
        if held > 0 {
            token_client.transfer(
                &env.current_contract_address(),
                &token_id,
                &cfg.owner,
                &held,
            );
        }

        env.events().publish(
            (symbol_short!("presale"), symbol_short!("wdtoken")),
            (id, token_id, held),
        );
        Ok(())
    }

    /// Return the caller's contribution after a failed campaign.
    pub fn refund(env: Env, contributor: Address, id: u32) -> Result<(), Error> {
        contributor.require_auth();

        let cfg = get_campaign(&env, id)?;
        let now = get_ledger_timestamp(&env);
        let reached = is_soft_cap_reached(&env, id);
        if !state::is_failed(&cfg, now, reached) {
            if cfg.soft_cap == 0 || reached {
                return Err(Error::SoftCapAlreadyReached);
            }
            return Err(Error::PresaleNotEnded);
        }

        let contributed = get_contributed(&env, id, &contributor);
        if contributed == 0 {
            return Err(Error::NothingToRefund);
        }

        set_contributed(&env, id, &contributor, 0);
        set_currency_balance(&env, id, get_currency_balance(&env, id) - contributed);
        token::Client::new(&env, &get_payment_token(&env)?).transfer(
            &env.current_contract_address(),
            &contributor,
            &contributed,
        );

        env.events().publish(
            (symbol_short!("presale"), symbol_short!("refund")),
            (id, contributor, contributed),
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn get_campaign(env: Env, id: u32) -> Result<CampaignConfig, Error> {
        get_campaign(&env, id)
    }

    pub fn campaign_count(env: Env) -> u32 {
        get_campaign_count(&env)
    }

    pub fn total_contributed(env: Env, id: u32) -> i128 {
        get_total_contributed(&env, id)
    }

    pub fn soft_cap_reached(env: Env, id: u32) -> bool {
        is_soft_cap_reached(&env, id)
    }

    pub fn has_soft_cap(env: Env, id: u32) -> Result<bool, Error> {
        Ok(get_campaign(&env, id)?.soft_cap > 0)
    }

    pub fn presale_failed(env: Env, id: u32) -> Result<bool, Error> {
        let cfg = get_campaign(&env, id)?;
        let now = get_ledger_timestamp(&env);
        Ok(state::is_failed(&cfg, now, is_soft_cap_reached(&env, id)))
    }

    pub fn funds_withdrawn(env: Env, id: u32) -> bool {
        is_withdrawn(&env, id)
    }

    pub fn contributed(env: Env, id: u32, addr: Address) -> i128 {
        get_contributed(&env, id, &addr)
    }

    pub fn claimable(env: Env, id: u32, addr: Address) -> i128 {
        get_claimable(&env, id, &addr)
    }
}
