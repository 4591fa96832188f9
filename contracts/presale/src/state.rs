//! Derived campaign state.
//!
//! There is no stored state enum: every public operation re-derives the
//! campaign's phase from a single timestamp snapshot and the accumulated
//! totals. All predicates live here so no two call sites can disagree on the
//! boundary conditions. The time window is `[start_time, end_time)`: at
//! exactly `end_time` the window counts as closed.

use crate::types::CampaignConfig;

pub fn has_started(cfg: &CampaignConfig, now: u64) -> bool {
    now >= cfg.start_time
}

pub fn has_ended(cfg: &CampaignConfig, now: u64) -> bool {
    cfg.end_time != 0 && now >= cfg.end_time
}

/// Failed is the one irreversible negative outcome: window closed, soft cap
/// configured, soft cap never reached. `soft_cap_reached` is one-way, so a
/// campaign that was ever failed stays failed.
pub fn is_failed(cfg: &CampaignConfig, now: u64, soft_cap_reached: bool) -> bool {
    has_ended(cfg, now) && cfg.soft_cap > 0 && !soft_cap_reached
}
