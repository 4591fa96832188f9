use soroban_sdk::{contractclient, Address, Env, String};

/// Client for the presale contract's creation entry point. The registry is
/// the only caller authorized to create campaigns.
#[contractclient(name = "PresaleClient")]
pub trait PresaleInterface {
    #[allow(clippy::too_many_arguments)]
    fn create_campaign(
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
    ) -> (u32, u32);
}
