use core::ops::Range;

use anchor_lang::prelude::*;

use crate::constants::MAX_PRINCIPALS;

/// One registry slot. The slot index is the principal's registration index
/// and never changes: removal clears `is_active` and leaves the slot in place.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PrincipalEntry {
    pub identity: Pubkey,
    /// Recurring credit in token minor units.
    pub monthly_amount: u64,
    /// Spendable allowance, backed by the reserve token account.
    pub ledger_balance: u64,
    pub is_active: bool,
}

/// PDA holding every principal slot in registration order.
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Registry {
    /// Slots with `is_active` set.
    pub active_count: u32,
    #[max_len(MAX_PRINCIPALS)]
    pub entries: Vec<PrincipalEntry>,
}

impl Registry {
    /// Size of the index space addressed by `at` and range distribution.
    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of active principals.
    pub fn count(&self) -> usize {
        self.active_count as usize
    }

    pub fn at(&self, index: usize) -> Option<&PrincipalEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, identity: &Pubkey) -> Option<usize> {
        self.entries.iter().position(|e| e.identity == *identity)
    }

    pub fn get(&self, identity: &Pubkey) -> Option<&PrincipalEntry> {
        self.entries.iter().find(|e| e.identity == *identity)
    }

    pub fn is_active(&self, identity: &Pubkey) -> bool {
        self.get(identity).map_or(false, |e| e.is_active)
    }

    /// Ledger balance of `identity`; zero when never registered.
    pub fn balance_of(&self, identity: &Pubkey) -> u64 {
        self.get(identity).map_or(0, |e| e.ledger_balance)
    }

    pub fn active(&self) -> impl Iterator<Item = &PrincipalEntry> {
        self.entries.iter().filter(|e| e.is_active)
    }

    /// Active identities in registration order.
    pub fn all(&self) -> Vec<Pubkey> {
        self.active().map(|e| e.identity).collect()
    }

    /// Sum of active monthly amounts over `range`, `None` on overflow.
    pub fn expected_sum(&self, range: Range<usize>) -> Option<u64> {
        self.entries
            .get(range)?
            .iter()
            .filter(|e| e.is_active)
            .try_fold(0u64, |acc, e| acc.checked_add(e.monthly_amount))
    }

    /// Sum of every slot's ledger balance, removed principals included.
    pub fn outstanding(&self) -> u128 {
        self.entries.iter().map(|e| e.ledger_balance as u128).sum()
    }
}
