//! Read-side queries over the ledger and registry.

use anchor_lang::prelude::Pubkey;

use crate::constants::MAX_BATCH_SIZE;
use crate::error::VaultError;
use crate::state::{PrincipalEntry, Registry, VaultState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrincipalInfo {
    pub index: u32,
    pub entry: PrincipalEntry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchInfo {
    pub slot_count: u32,
    pub active_count: u32,
    pub max_batch_size: u32,
    /// `ceil(slot_count / max_batch_size)`.
    pub estimated_batches: u32,
    /// The registry no longer fits one `distribute_range` call; `distribute_all`
    /// is past its tested ceiling and may exceed the compute budget.
    pub requires_batching: bool,
}

/// Ties the cumulative counters to the actual token balances.
///
/// Expectations saturate at zero. Unsolicited transfers into custody can be
/// distributed without ever being acknowledged, which makes
/// `total_distributed` exceed `total_deposited`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconciliation {
    /// Sum of every slot's ledger balance.
    pub outstanding: u64,
    /// `total_distributed - total_spent`.
    pub accounted_outstanding: u64,
    /// `total_deposited - total_distributed - total_withdrawn`.
    pub expected_custody: u64,
    pub custody_balance: u64,
    pub reserve_balance: u64,
    /// Credited balances the reserve cannot cover.
    pub shortfall: u64,
}

impl Reconciliation {
    /// Ledger sums agree with the counters and both token accounts cover
    /// what the ledger says they should hold. Unsolicited transfers into
    /// either account show up as surplus, which is allowed.
    pub fn is_consistent(&self) -> bool {
        self.outstanding == self.accounted_outstanding
            && self.custody_balance >= self.expected_custody
            && self.shortfall == 0
    }
}

pub fn balance_of(registry: &Registry, identity: &Pubkey) -> u64 {
    registry.balance_of(identity)
}

pub fn total_expected(state: &VaultState) -> u64 {
    state.totals.total_expected_monthly
}

pub fn total_distributed(state: &VaultState) -> u64 {
    state.totals.total_distributed
}

pub fn at(registry: &Registry, index: u32) -> Result<&PrincipalEntry, VaultError> {
    registry
        .at(index as usize)
        .ok_or(VaultError::IndexOutOfBounds)
}

/// Any identity ever registered, active or removed.
pub fn principal(registry: &Registry, identity: &Pubkey) -> Result<PrincipalInfo, VaultError> {
    let index = registry
        .position(identity)
        .ok_or(VaultError::PrincipalNotFound)?;
    Ok(PrincipalInfo {
        index: index as u32,
        entry: registry.entries[index],
    })
}

pub fn batch_info(registry: &Registry) -> BatchInfo {
    let slot_count = registry.slot_count() as u32;
    let max_batch_size = MAX_BATCH_SIZE as u32;
    BatchInfo {
        slot_count,
        active_count: registry.active_count,
        max_batch_size,
        estimated_batches: slot_count.div_ceil(max_batch_size),
        requires_batching: slot_count > max_batch_size,
    }
}

pub fn reconcile(
    state: &VaultState,
    registry: &Registry,
    custody_balance: u64,
    reserve_balance: u64,
) -> Result<Reconciliation, VaultError> {
    let totals = &state.totals;
    let outstanding =
        u64::try_from(registry.outstanding()).map_err(|_| VaultError::MathOverflow)?;
    let accounted_outstanding = totals.total_distributed.saturating_sub(totals.total_spent);
    let expected_custody = totals
        .total_deposited
        .saturating_sub(totals.total_distributed)
        .saturating_sub(totals.total_withdrawn);
    Ok(Reconciliation {
        outstanding,
        accounted_outstanding,
        expected_custody,
        custody_balance,
        reserve_balance,
        shortfall: outstanding.saturating_sub(reserve_balance),
    })
}
