use soroban_sdk::contracterror;

/// Campaign lifecycle errors. Codes 5..=10 are validation errors raised at
/// creation time and are mirrored by the registry contract under the same
/// numbering so they survive cross-contract propagation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    CampaignNotFound = 4,
    InvalidAmount = 5,
    InvalidPrice = 6,
    InvalidSoftCapPrice = 7,
    SoftCapRequiresTimeLimit = 8,
    InvalidTimeWindow = 9,
    InvalidHardCap = 10,
    PresaleNotStarted = 11,
    PresaleEnded = 12,
    PresaleFailedNoRefund = 13,
    HardCapExceeded = 14,
    SoftCapNotReached = 15,
    PresaleFailed = 16,
    SoftCapAlreadyReached = 17,
    PresaleNotEnded = 18,
    NothingToClaim = 19,
    NothingToRefund = 20,
    MathOverflow = 21,
}
