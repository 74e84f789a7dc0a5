//! Principal-initiated spend of their own ledger balance.

use anchor_lang::prelude::Pubkey;

use crate::engine::custody::CustodyToken;
use crate::error::VaultError;
use crate::state::{Registry, VaultState};
use crate::utils::BusyGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spend {
    pub amount: u64,
    pub remaining_balance: u64,
    pub total_spent: u64,
}

/// Debits `caller` by `amount` and pays it out of the reserve to
/// `destination`. If the payout fails the debit is restored.
pub fn transfer<C: CustodyToken>(
    caller: &Pubkey,
    state: &mut VaultState,
    registry: &mut Registry,
    destination: &Pubkey,
    amount: u64,
    custody: &mut C,
) -> Result<Spend, VaultError> {
    let _guard = BusyGuard::enter(&mut state.busy)?;

    let index = registry
        .position(caller)
        .filter(|&i| registry.entries[i].is_active)
        .ok_or(VaultError::NotActivePrincipal)?;
    if amount == 0 {
        return Err(VaultError::InvalidAmount);
    }
    if *destination == Pubkey::default() {
        return Err(VaultError::InvalidPubkey);
    }
    let total_spent = state
        .totals
        .total_spent
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;

    let previous = registry.entries[index].ledger_balance;
    let remaining_balance = previous
        .checked_sub(amount)
        .ok_or(VaultError::InsufficientBalance)?;
    registry.entries[index].ledger_balance = remaining_balance;

    if let Err(err) = custody.pay_out(destination, amount) {
        registry.entries[index].ledger_balance = previous;
        return Err(err);
    }
    state.totals.total_spent = total_spent;

    Ok(Spend {
        amount,
        remaining_balance,
        total_spent,
    })
}
