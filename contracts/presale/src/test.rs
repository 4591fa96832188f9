#![cfg(test)]

use crate::{Error, Presale, PresaleClient, UNIT};
use campaign_token::{CampaignToken, CampaignTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token, Address, Env, String,
};

const START: u64 = 1_700_000_000;
const END: u64 = START + 3_600;

struct Setup {
    env: Env,
    presale: PresaleClient<'static>,
    ledger: CampaignTokenClient<'static>,
    currency: token::Client<'static>,
    currency_admin: token::StellarAssetClient<'static>,
    creator: Address,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|l| l.timestamp = START);

    let token_contract = env.register_contract(None, CampaignToken);
    let presale_contract = env.register_contract(None, Presale);
    let sac_admin = Address::generate(&env);
    let sac = env
        .register_stellar_asset_contract_v2(sac_admin.clone())
        .address();

    let presale = PresaleClient::new(&env, &presale_contract);
    let ledger = CampaignTokenClient::new(&env, &token_contract);
    let currency = token::Client::new(&env, &sac);
    let currency_admin = token::StellarAssetClient::new(&env, &sac);

    let registry = Address::generate(&env);
    presale.initialize(&registry, &token_contract, &sac);

    let creator = Address::generate(&env);

    Setup {
        env,
        presale,
        ledger,
        currency,
        currency_admin,
        creator,
    }
}

#[allow(clippy::too_many_arguments)]
fn create_campaign(
    s: &Setup,
    supply: i128,
    price: i128,
    hard_cap: i128,
    soft_cap: i128,
    soft_cap_price: i128,
    start: u64,
    end: u64,
) -> (u32, u32) {
    s.presale.create_campaign(
        &s.creator,
        &String::from_str(&s.env, "Example"),
        &String::from_str(&s.env, "EXM"),
        &supply,
        &price,
        &hard_cap,
        &soft_cap,
        &soft_cap_price,
        &start,
        &end,
    )
}

fn funded_contributor(s: &Setup, amount: i128) -> Address {
    let contributor = Address::generate(&s.env);
    s.currency_admin.mint(&contributor, &amount);
    contributor
}

fn warp_to(s: &Setup, timestamp: u64) {
    s.env.ledger().with_mut(|l| l.timestamp = timestamp);
}

#[test]
fn initialize_only_once() {
    let s = setup();
    let other = Address::generate(&s.env);
    let res = s
        .presale
        .try_initialize(&other, &other, &other);
    assert_eq!(res, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn create_campaign_validates_config() {
    let s = setup();
    let name = String::from_str(&s.env, "Example");
    let symbol = String::from_str(&s.env, "EXM");

    let try_create = |supply: i128, price: i128, hard: i128, soft: i128, scp: i128, end: u64| {
        s.presale.try_create_campaign(
            &s.creator, &name, &symbol, &supply, &price, &hard, &soft, &scp, &START, &end,
        )
    };

    assert_eq!(try_create(1000, 0, 10, 0, 0, END), Err(Ok(Error::InvalidPrice)));
    assert_eq!(
        try_create(1000, 1, 0, 0, 0, END),
        Err(Ok(Error::InvalidHardCap))
    );
    assert_eq!(
        try_create(1000, 1, 10, 5, 0, END),
        Err(Ok(Error::InvalidSoftCapPrice))
    );
    // Price cannot decrease once the soft cap is crossed.
    assert_eq!(
        try_create(1000, 2, 10, 5, 1, END),
        Err(Ok(Error::InvalidSoftCapPrice))
    );
    assert_eq!(
        try_create(1000, 1, 10, 5, 1, 0),
        Err(Ok(Error::SoftCapRequiresTimeLimit))
    );
    assert_eq!(
        try_create(1000, 1, 10, 0, 0, START),
        Err(Ok(Error::InvalidTimeWindow))
    );
    assert_eq!(
        try_create(-1, 1, 10, 0, 0, END),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn create_campaign_mints_keep_allocation() {
    let s = setup();
    let (id, token_id) = create_campaign(&s, 1000, 1, 10, 5, 1, START, END);
    assert_eq!((id, token_id), (1, 1));
    assert_eq!(s.presale.campaign_count(), 1);

    // The creator holds the keep allocation; the presale holds the mint
    // capability for the claim pool.
    assert_eq!(s.ledger.balance(&token_id, &s.creator), 1000);
    assert_eq!(s.ledger.minter(&token_id), s.presale.address);

    let cfg = s.presale.get_campaign(&id);
    assert_eq!(cfg.owner, s.creator);
    assert_eq!(cfg.token_id, token_id);
    assert_eq!(cfg.hard_cap, 10);
    assert!(s.presale.has_soft_cap(&id));
}

#[test]
fn contribute_rejected_before_start() {
    let s = setup();
    let (id, _) = create_campaign(&s, 1000, 1, 10, 0, 0, START + 1_000, END);
    let contributor = funded_contributor(&s, 100);

    let res = s.presale.try_contribute(&contributor, &id, &1);
    assert_eq!(res, Err(Ok(Error::PresaleNotStarted)));
}

#[test]
fn contribute_rejected_at_end_time() {
    let s = setup();
    let (id, _) = create_campaign(&s, 1000, 1, 10, 0, 0, START, END);
    let contributor = funded_contributor(&s, 100);

    // The window is [start, end): the end instant itself is closed.
    warp_to(&s, END);
    let res = s.presale.try_contribute(&contributor, &id, &1);
    assert_eq!(res, Err(Ok(Error::PresaleEnded)));
}

#[test]
fn contribute_requires_positive_amount_and_known_campaign() {
    let s = setup();
    let (id, _) = create_campaign(&s, 1000, 1, 10, 0, 0, START, END);
    let contributor = funded_contributor(&s, 100);

    assert_eq!(
        s.presale.try_contribute(&contributor, &id, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        s.presale.try_contribute(&contributor, &99u32, &1),
        Err(Ok(Error::CampaignNotFound))
    );
}

#[test]
fn hard_cap_rejects_whole_contribution() {
    let s = setup();
    let (id, _) = create_campaign(&s, 1000, 1, 10, 0, 0, START, END);
    let contributor = funded_contributor(&s, 100);

    s.presale.contribute(&contributor, &id, &8);
    assert_eq!(s.presale.total_contributed(&id), 8);

    let res = s.presale.try_contribute(&contributor, &id, &3);
    assert_eq!(res, Err(Ok(Error::HardCapExceeded)));

    // Whole rejection: nothing moved.
    assert_eq!(s.presale.total_contributed(&id), 8);
    assert_eq!(s.presale.contributed(&id, &contributor), 8);
    assert_eq!(s.presale.claimable(&id, &contributor), 8 * UNIT);
    assert_eq!(s.currency.balance(&contributor), 92);

    // An exact fill is still accepted.
    s.presale.contribute(&contributor, &id, &2);
    assert_eq!(s.presale.total_contributed(&id), 10);
}

#[test]
fn two_tier_pricing_across_calls() {
    let s = setup();
    let (id, _) = create_campaign(&s, 1000, 1, 10, 5, 2, START, END);
    let contributor = funded_contributor(&s, 100);

    s.presale.contribute(&contributor, &id, &5);
    assert!(s.presale.soft_cap_reached(&id));
    assert_eq!(s.presale.claimable(&id, &contributor), 5 * UNIT);

    // Beyond the threshold the soft-cap price applies: 2 currency units buy
    // one token.
    s.presale.contribute(&contributor, &id, &2);
    assert_eq!(s.presale.claimable(&id, &contributor), 6 * UNIT);
    assert_eq!(s.presale.total_contributed(&id), 7);
}

#[test]
fn two_tier_pricing_straddles_within_one_call() {
    let s = setup();
    let (id, _) = create_campaign(&s, 1000, 1, 10, 5, 2, START, END);
    let contributor = funded_contributor(&s, 100);

    s.presale.contribute(&contributor, &id, &4);
    assert!(!s.presale.soft_cap_reached(&id));
    assert_eq!(s.presale.claimable(&id, &contributor), 4 * UNIT);

    // 1 unit fills the gap to the cap at the base price, the remaining 2
    // units buy one token at the soft-cap price.
    s.presale.contribute(&contributor, &id, &3);
    assert!(s.presale.soft_cap_reached(&id));
    assert_eq!(s.presale.claimable(&id, &contributor), 6 * UNIT);
    assert_eq!(s.presale.total_contributed(&id), 7);
}

#[test]
fn claim_gated_on_soft_cap() {
    let s = setup();
    let (id, token_id) = create_campaign(&s, 0, 1, 10, 5, 1, START, END);
    let contributor = funded_contributor(&s, 100);

    s.presale.contribute(&contributor, &id, &1);
    assert_eq!(
        s.presale.try_claim_tokens(&contributor, &id),
        Err(Ok(Error::SoftCapNotReached))
    );

    // Claiming opens the moment the cap is reached, even mid-window.
    s.presale.contribute(&contributor, &id, &4);
    s.presale.claim_tokens(&contributor, &id);
    assert_eq!(s.ledger.balance(&token_id, &contributor), 5 * UNIT);
    assert_eq!(s.presale.claimable(&id, &contributor), 0);

    assert_eq!(
        s.presale.try_claim_tokens(&contributor, &id),
        Err(Ok(Error::NothingToClaim))
    );
}

#[test]
fn claim_blocked_once_failed() {
    let s = setup();
    let (id, _) = create_campaign(&s, 0, 1, 10, 5, 1, START, END);
    let contributor = funded_contributor(&s, 100);

    s.presale.contribute(&contributor, &id, &1);

    // At exactly end_time the window is closed, so the campaign is already
    // failed rather than merely short of the cap.
    warp_to(&s, END);
    assert!(s.presale.presale_failed(&id));
    assert_eq!(
        s.presale.try_claim_tokens(&contributor, &id),
        Err(Ok(Error::PresaleFailed))
    );
}

#[test]
fn failed_campaign_rejects_new_contributions() {
    let s = setup();
    let (id, _) = create_campaign(&s, 0, 1, 10, 5, 1, START, END);
    let contributor = funded_contributor(&s, 100);

    s.presale.contribute(&contributor, &id, &1);
    warp_to(&s, END + 1);

    let res = s.presale.try_contribute(&contributor, &id, &1);
    assert_eq!(res, Err(Ok(Error::PresaleFailedNoRefund)));
}

#[test]
fn refund_after_failure_returns_exact_contribution() {
    let s = setup();
    let (id, _) = create_campaign(&s, 0, 1, 10, 5, 1, START, END);
    let contributor = funded_contributor(&s, 10);

    s.presale.contribute(&contributor, &id, &1);
    assert_eq!(s.currency.balance(&contributor), 9);

    warp_to(&s, END + 1);
    assert!(s.presale.presale_failed(&id));

    s.presale.refund(&contributor, &id);
    assert_eq!(s.currency.balance(&contributor), 10);
    assert_eq!(s.presale.contributed(&id, &contributor), 0);

    // A second refund fails cleanly on the zeroed balance.
    assert_eq!(
        s.presale.try_refund(&contributor, &id),
        Err(Ok(Error::NothingToRefund))
    );
}

#[test]
fn refund_rejected_while_window_open() {
    let s = setup();
    let (id, _) = create_campaign(&s, 0, 1, 10, 5, 1, START, END);
    let contributor = funded_contributor(&s, 10);

    s.presale.contribute(&contributor, &id, &1);
    assert_eq!(
        s.presale.try_refund(&contributor, &id),
        Err(Ok(Error::PresaleNotEnded))
    );
}

#[test]
fn claim_and_refund_are_mutually_exclusive() {
    let s = setup();
    let (id, token_id) = create_campaign(&s, 0, 1, 10, 5, 1, START, END);
    let contributor = funded_contributor(&s, 100);

    s.presale.contribute(&contributor, &id, &6);
    warp_to(&s, END + 1);

    s.presale.claim_tokens(&contributor, &id);
    assert_eq!(s.ledger.balance(&token_id, &contributor), 6 * UNIT);

    // The campaign succeeded; no refund can ever follow a claim.
    assert_eq!(
        s.presale.try_refund(&contributor, &id),
        Err(Ok(Error::SoftCapAlreadyReached))
    );
}

#[test]
fn withdraw_funds_gated_and_idempotent() {
    let s = setup();
    let (id, _) = create_campaign(&s, 0, 1, 10, 5, 1, START, END);
    let contributor = funded_contributor(&s, 100);
    let outsider = Address::generate(&s.env);

    s.presale.contribute(&contributor, &id, &1);
    assert_eq!(
        s.presale.try_withdraw_funds(&outsider, &id),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        s.presale.try_withdraw_funds(&s.creator, &id),
        Err(Ok(Error::SoftCapNotReached))
    );

    s.presale.contribute(&contributor, &id, &5);
    s.presale.withdraw_funds(&s.creator, &id);
    assert_eq!(s.currency.balance(&s.creator), 6);
    assert!(s.presale.funds_withdrawn(&id));

    // Repeat call is a no-op on the emptied balance.
    s.presale.withdraw_funds(&s.creator, &id);
    assert_eq!(s.currency.balance(&s.creator), 6);
}

#[test]
fn withdraw_token_recovers_leftover_supply() {
    let s = setup();
    let (id, token_id) = create_campaign(&s, 1000, 1, 10, 0, 0, START, END);

    // Leftover supply parked on the presale contract, then recovered.
    s.ledger
        .transfer(&s.creator, &token_id, &s.presale.address, &100);
    assert_eq!(s.ledger.balance(&token_id, &s.creator), 900);

    s.presale.withdraw_token(&s.creator, &id, &token_id);
    assert_eq!(s.ledger.balance(&token_id, &s.creator), 1000);
    assert_eq!(s.ledger.balance(&token_id, &s.presale.address), 0);
}

#[test]
fn campaign_without_time_limit_never_ends() {
    let s = setup();
    let (id, token_id) = create_campaign(&s, 0, 1, 1_000, 0, 0, START, 0);
    let contributor = funded_contributor(&s, 100);

    warp_to(&s, START + 10_000_000);
    s.presale.contribute(&contributor, &id, &3);
    assert!(!s.presale.presale_failed(&id));

    // No soft cap: claiming is open as soon as there is an entitlement.
    s.presale.claim_tokens(&contributor, &id);
    assert_eq!(s.ledger.balance(&token_id, &contributor), 3 * UNIT);
}

#[test]
fn totals_accumulate_across_contributors() {
    let s = setup();
    let (id, _) = create_campaign(&s, 0, 1, 100, 5, 1, START, END);
    let alice = funded_contributor(&s, 50);
    let bob = funded_contributor(&s, 50);

    s.presale.contribute(&alice, &id, &2);
    s.presale.contribute(&bob, &id, &3);
    s.presale.contribute(&alice, &id, &4);

    assert_eq!(s.presale.total_contributed(&id), 9);
    assert_eq!(s.presale.contributed(&id, &alice), 6);
    assert_eq!(s.presale.contributed(&id, &bob), 3);
    assert!(s.presale.soft_cap_reached(&id));
}
