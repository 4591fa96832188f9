use soroban_sdk::{contracttype, Address, Env};

/// Decimals of every campaign token minted through the launchpad.
pub const TOKEN_DECIMALS: u32 = 18;

/// Smallest-unit representation of one whole campaign token.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Immutable per-campaign configuration, written once at creation.
#[derive(Clone)]
#[contracttype]
pub struct CampaignConfig {
    pub owner: Address,
    /// Ledger id of the campaign token, exclusively minted by this contract.
    pub token_id: u32,
    /// Currency units per whole token up to the soft cap.
    pub price: i128,
    /// Minimum raise target; 0 disables it.
    pub soft_cap: i128,
    /// Currency units per whole token once the soft cap is crossed.
    pub soft_cap_price: i128,
    /// Maximum cumulative contributions.
    pub hard_cap: i128,
    pub start_time: u64,
    /// 0 encodes "no time limit"; only legal without a soft cap.
    pub end_time: u64,
}

#[contracttype]
pub enum DataKey {
    Registry,
    TokenContract,
    PaymentToken,
    CampaignCount,
    Campaign(u32),
    TotalContributed(u32),
    SoftCapReached(u32),
    Withdrawn(u32),
    CurrencyBalance(u32),
    Contributed(u32, Address),
    Claimable(u32, Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
