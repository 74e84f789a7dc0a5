use anchor_lang::prelude::*;

use crate::state::RoleSet;

/// Aggregate ledger counters, all in token minor units.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct LedgerTotals {
    /// Sum of `monthly_amount` over active principals, maintained incrementally.
    pub total_expected_monthly: u64,
    /// Cumulative amount credited to ledger balances.
    pub total_distributed: u64,
    /// Cumulative amount acknowledged through `deposit`.
    pub total_deposited: u64,
    /// Cumulative amount principals have transferred out.
    pub total_spent: u64,
    /// Cumulative amount pulled out of custody by admins.
    pub total_withdrawn: u64,
    /// Cumulative amount pulled out of the reserve by `withdraw_all`. Ledger
    /// balances are not reduced, so this is credit left without backing.
    pub total_reclaimed: u64,
}

/// Singleton vault state PDA. Signs for the custody and reserve token accounts.
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct VaultState {
    /// Custody token mint.
    pub mint: Pubkey,
    pub roles: RoleSet,
    pub totals: LedgerTotals,
    /// Set while an operation that calls out to the token program is running.
    pub busy: bool,
    pub bump: u8,
    pub custody_bump: u8,
    pub reserve_bump: u8,
}
