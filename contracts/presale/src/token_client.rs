use soroban_sdk::{contractclient, Address, Env, String};

/// Client for the campaign token contract. Only the operations the presale
/// actually invokes are declared here.
#[contractclient(name = "CampaignTokenClient")]
pub trait CampaignTokenInterface {
    fn create(
        env: Env,
        minter: Address,
        recipient: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_supply: i128,
    ) -> u32;

    fn mint(env: Env, minter: Address, id: u32, to: Address, amount: i128);

    fn transfer(env: Env, from: Address, id: u32, to: Address, amount: i128);

    fn balance(env: Env, id: u32, addr: Address) -> i128;
}
