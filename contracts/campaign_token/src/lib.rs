#![no_std]


use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address, Env,
    String,
};

contractmeta!(
    key = "Description",
    val = "Mintable campaign token ledgers with capability-gated minting"
);

// =============================================================================
// Types
// =============================================================================

/// Display metadata for a ledger, immutable after creation.
#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// =============================================================================
// Storage
// =============================================================================

#[contracttype]
pub enum DataKey {
    LedgerCount,
    Meta(u32),
    Minter(u32),
    Supply(u32),
    Balance(u32, Address),
}

// =============================================================================
// Errors
// =============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    LedgerNotFound = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    BalanceOverflow = 5,
}

// =============================================================================
// Contract
// =============================================================================

/// A fungible-balance store hosting one ledger per presale campaign.
///
/// Each ledger has a single minter, fixed at creation: the presale contract
/// that owns the campaign. Supply only grows through `mint`, so
/// `supply(id) == sum of balances` holds for every ledger.
#[contract]
pub struct CampaignToken;

#[contractimpl]
impl CampaignToken {
    /// Create a new ledger and mint `initial_supply` to `recipient`.
    ///
    /// The initial supply is the campaign owner's keep allocation, separate
    /// from the claim pool minted later by the presale. Returns the ledger id.
    pub fn create(
        env: Env,
        minter: Address,
        recipient: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_supply: i128,
    ) -> Result<u32, Error> {
        if initial_supply < 0 {
            return Err(Error::InvalidAmount);
        }

        let id = Self::ledger_count(env.clone()) + 1;
        let meta = TokenMetadata {
            name,
            symbol,
            decimals,
        };
        env.storage().persistent().set(&DataKey::Meta(id), &meta);
        env.storage()
            .persistent()
            .set(&DataKey::Minter(id), &minter);
        env.storage()
            .persistent()
            .set(&DataKey::Supply(id), &initial_supply);
        if initial_supply > 0 {
            env.storage()
                .persistent()
                .set(&DataKey::Balance(id, recipient.clone()), &initial_supply);
        }
        env.storage().instance().set(&DataKey::LedgerCount, &id);

        env.events().publish(
            (symbol_short!("token"), symbol_short!("created")),
            (id, minter, recipient, initial_supply),
        );
        Ok(id)
    }

    /// Mint `amount` to `to`. Only the ledger's minter may call this.
    pub fn mint(env: Env, minter: Address, id: u32, to: Address, amount: i128) -> Result<(), Error> {
        minter.require_auth();

        let stored: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Minter(id))
            .ok_or(Error::LedgerNotFound)?;
        if stored != minter {
            return Err(Error::Unauthorized);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let balance = Self::balance(env.clone(), id, to.clone());
        let new_balance = balance.checked_add(amount).ok_or(Error::BalanceOverflow)?;
        let supply = Self::supply(env.clone(), id);
        let new_supply = supply.checked_add(amount).ok_or(Error::BalanceOverflow)?;

        env.storage()
            .persistent()
            .set(&DataKey::Balance(id, to.clone()), &new_balance);
        env.storage()
            .persistent()
            .set(&DataKey::Supply(id), &new_supply);

        env.events()
            .publish((symbol_short!("token"), symbol_short!("mint")), (id, to, amount));
        Ok(())
    }

    /// Move `amount` from `from` to `to` within a ledger.
    pub fn transfer(
        env: Env,
        from: Address,
        id: u32,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        from.require_auth();

        if !env.storage().persistent().has(&DataKey::Meta(id)) {
            return Err(Error::LedgerNotFound);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let from_balance = Self::balance(env.clone(), id, from.clone());
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        let to_balance = Self::balance(env.clone(), id, to.clone());
        let new_to = to_balance.checked_add(amount).ok_or(Error::BalanceOverflow)?;

        env.storage()
            .persistent()
            .set(&DataKey::Balance(id, from.clone()), &(from_balance - amount));
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id, to.clone()), &new_to);

        env.events().publish(
            (symbol_short!("token"), symbol_short!("transfer")),
            (id, from, to, amount),
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn balance(env: Env, id: u32, addr: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id, addr))
            .unwrap_or(0)
    }

    pub fn supply(env: Env, id: u32) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Supply(id))
            .unwrap_or(0)
    }

    pub fn minter(env: Env, id: u32) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Minter(id))
            .ok_or(Error::LedgerNotFound)
    }

    pub fn name(env: Env, id: u32) -> Result<String, Error> {
        Self::meta(&env, id).map(|m| m.name)
    }

    pub fn symbol(env: Env, id: u32) -> Result<String, Error> {
        Self::meta(&env, id).map(|m| m.symbol)
    }

    pub fn decimals(env: Env, id: u32) -> Result<u32, Error> {
        Self::meta(&env, id).map(|m| m.decimals)
    }

    pub fn ledger_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::LedgerCount)
            .unwrap_or(0)
    }

    fn meta(env: &Env, id: u32) -> Result<TokenMetadata, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Meta(id))
            .ok_or(Error::LedgerNotFound)
    }
}
