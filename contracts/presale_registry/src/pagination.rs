//! Paginated views over the append-only campaign index.
//!
//! Pages are 1-indexed; page 0, an empty page size, or a skip past the end
//! all yield an empty result rather than an error. Descending pagination is
//! index arithmetic over the same stored sequence, walking from
//! `len - 1 - skip` downward; there is no second reverse-ordered index.

use soroban_sdk::{Env, Vec};

/// Fixed page size of the ascending view.
pub const PAGE_SIZE: u32 = 10;

pub fn page_ascending(env: &Env, entries: &Vec<u32>, page: u32, page_size: u32) -> Vec<u32> {
    let mut out = Vec::new(env);
    if page == 0 || page_size == 0 {
        return out;
    }
    let len = entries.len() as u64;
    let skip = (page as u64 - 1) * page_size as u64;
    if skip >= len {
        return out;
    }

    let end = (skip + page_size as u64).min(len);
    let mut i = skip;
    while i < end {
        out.push_back(entries.get_unchecked(i as u32));
        i += 1;
    }
    out
}

pub fn page_descending(env: &Env, entries: &Vec<u32>, page: u32, page_size: u32) -> Vec<u32> {
    let mut out = Vec::new(env);
    if page == 0 || page_size == 0 {
        return out;
    }
    let len = entries.len() as u64;
    let skip = (page as u64 - 1) * page_size as u64;
    if skip >= len {
        return out;
    }

    let mut idx = len - 1 - skip;
    let mut taken = 0u32;
    loop {
        out.push_back(entries.get_unchecked(idx as u32));
        taken += 1;
        if taken == page_size || idx == 0 {
            break;
        }
        idx -= 1;
    }
    out
}
