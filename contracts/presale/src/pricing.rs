//! Two-tier contribution pricing.
//!
//! Contributions are priced at `price` while the running total stays at or
//! below the soft cap, and at `soft_cap_price` beyond it. A single
//! contribution that straddles the threshold is split at
//! `soft_cap - total_before` and the two portions are priced separately.

use crate::errors::Error;
use crate::types::{CampaignConfig, UNIT};

/// Token amount (in `UNIT`-scaled smallest units) bought by `amount` currency
/// units, given the total contributed before this call.
pub fn token_amount(cfg: &CampaignConfig, total_before: i128, amount: i128) -> Result<i128, Error> {
    if cfg.soft_cap == 0 {
        return tokens_at(amount, cfg.price);
    }
    if total_before >= cfg.soft_cap {
        return tokens_at(amount, cfg.soft_cap_price);
    }

    let below_cap = cfg.soft_cap - total_before;
    if amount <= below_cap {
        return tokens_at(amount, cfg.price);
    }

    let base = tokens_at(below_cap, cfg.price)?;
    let above = tokens_at(amount - below_cap, cfg.soft_cap_price)?;
    base.checked_add(above).ok_or(Error::MathOverflow)
}

fn tokens_at(amount: i128, price: i128) -> Result<i128, Error> {
    amount
        .checked_mul(UNIT)
        .ok_or(Error::MathOverflow)?
        .checked_div(price)
        .ok_or(Error::MathOverflow)
}
