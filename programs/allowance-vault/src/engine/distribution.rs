//! Whole-registry and bounded-range distribution.
//!
//! Both entry points plan the full credit first (overflow and funds checks),
//! move the credited sum from custody into the reserve, and only then write
//! ledger balances. A failure at any step leaves no credit behind.
//!
//! There is no per-period guard: calling either entry point again credits
//! every covered principal again, funds permitting.

use core::ops::Range;

use anchor_lang::prelude::Pubkey;

use crate::constants::MAX_BATCH_SIZE;
use crate::engine::access::require_admin;
use crate::engine::custody::CustodyToken;
use crate::error::VaultError;
use crate::state::{LedgerTotals, Registry, VaultState};
use crate::utils::BusyGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distribution {
    pub start: u32,
    pub end: u32,
    /// Active principals credited.
    pub principals: u32,
    pub amount: u64,
    pub total_distributed: u64,
}

/// Admin only. Credits every active principal by its monthly amount.
///
/// Unbounded: the whole registry is walked in one call. Registries larger than
/// `MAX_BATCH_SIZE` slots should be distributed with `distribute_range`.
pub fn distribute_all<C: CustodyToken>(
    caller: &Pubkey,
    state: &mut VaultState,
    registry: &mut Registry,
    custody: &mut C,
) -> Result<Distribution, VaultError> {
    require_admin(&state.roles, caller)?;
    let _guard = BusyGuard::enter(&mut state.busy)?;

    if state.totals.total_expected_monthly == 0 {
        return Err(VaultError::EmptyRegistry);
    }
    let slots = registry.slot_count();
    let distribution = credit(&mut state.totals, registry, 0..slots, custody)?;
    debug_assert_eq!(distribution.amount, state.totals.total_expected_monthly);
    Ok(distribution)
}

/// Admin only. Credits active principals in slots `[start, end)`.
///
/// Funds are checked for this slice alone; sufficiency for later ranges is the
/// caller's concern.
pub fn distribute_range<C: CustodyToken>(
    caller: &Pubkey,
    state: &mut VaultState,
    registry: &mut Registry,
    start: u32,
    end: u32,
    custody: &mut C,
) -> Result<Distribution, VaultError> {
    require_admin(&state.roles, caller)?;
    let _guard = BusyGuard::enter(&mut state.busy)?;

    let range = checked_range(registry, start, end)?;
    credit(&mut state.totals, registry, range, custody)
}

fn checked_range(registry: &Registry, start: u32, end: u32) -> Result<Range<usize>, VaultError> {
    let (start, end) = (start as usize, end as usize);
    if start >= end {
        return Err(VaultError::InvalidRange);
    }
    if end > registry.slot_count() {
        return Err(VaultError::IndexOutOfBounds);
    }
    if end - start > MAX_BATCH_SIZE {
        return Err(VaultError::BatchTooLarge);
    }
    Ok(start..end)
}

fn credit<C: CustodyToken>(
    totals: &mut LedgerTotals,
    registry: &mut Registry,
    range: Range<usize>,
    custody: &mut C,
) -> Result<Distribution, VaultError> {
    let mut amount: u64 = 0;
    let mut principals: u32 = 0;
    for entry in registry.entries[range.clone()].iter().filter(|e| e.is_active) {
        entry
            .ledger_balance
            .checked_add(entry.monthly_amount)
            .ok_or(VaultError::MathOverflow)?;
        amount = amount
            .checked_add(entry.monthly_amount)
            .ok_or(VaultError::MathOverflow)?;
        principals += 1;
    }
    if principals == 0 {
        return Err(VaultError::EmptyRange);
    }
    let total_distributed = totals
        .total_distributed
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;
    if custody.custody_balance() < amount {
        return Err(VaultError::InsufficientFunds);
    }

    custody.reserve(amount)?;

    for entry in registry.entries[range.clone()].iter_mut().filter(|e| e.is_active) {
        // Checked while planning.
        entry.ledger_balance += entry.monthly_amount;
    }
    totals.total_distributed = total_distributed;

    Ok(Distribution {
        start: range.start as u32,
        end: range.end as u32,
        principals,
        amount,
        total_distributed,
    })
}
