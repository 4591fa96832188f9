use soroban_sdk::{contracterror, contracttype, String};

/// Everything a creator submits to open a campaign. Mirrors the presale
/// contract's `create_campaign` arguments.
#[derive(Clone)]
#[contracttype]
pub struct PresaleParams {
    pub name: String,
    pub symbol: String,
    /// Keep allocation minted to the creator at campaign creation.
    pub supply: i128,
    pub price: i128,
    pub hard_cap: i128,
    pub soft_cap: i128,
    pub soft_cap_price: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Presale,
    PaymentToken,
    CreationFee,
    Presales,
    CreatorTokens(soroban_sdk::Address),
    CollectedFees,
}

/// Codes 5..=10 mirror the presale contract's creation-time validation
/// errors one-to-one, so propagated cross-contract failures map back onto
/// the same variants here.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    IncorrectPresaleCreationFee = 4,
    InvalidAmount = 5,
    InvalidPrice = 6,
    InvalidSoftCapPrice = 7,
    SoftCapRequiresTimeLimit = 8,
    InvalidTimeWindow = 9,
    InvalidHardCap = 10,
    CampaignCreationFailed = 11,
    MathOverflow = 12,
}
