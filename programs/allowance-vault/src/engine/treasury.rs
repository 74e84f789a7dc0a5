//! Deposit acknowledgement and admin withdrawals.
//!
//! Withdrawals never touch ledger balances or the expected total.
//! `emergency_withdraw` draws on the unallocated custody pool only.
//! `withdraw_all` also empties the reserve, which leaves credited balances
//! unbacked until the reserve is refilled.

use anchor_lang::prelude::Pubkey;

use crate::engine::access::require_admin;
use crate::engine::custody::CustodyToken;
use crate::error::VaultError;
use crate::state::VaultState;
use crate::utils::BusyGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Withdrawal {
    /// Total paid to the admin.
    pub amount: u64,
    /// Part of `amount` taken from the reserve.
    pub reclaimed: u64,
    pub custody_balance: u64,
    pub reserve_balance: u64,
    pub total_withdrawn: u64,
    pub total_reclaimed: u64,
}

/// The deposit source must hold the vault's mint and belong to the signer.
pub fn check_deposit_source(
    state: &VaultState,
    depositor: &Pubkey,
    source_mint: &Pubkey,
    source_owner: &Pubkey,
) -> Result<(), VaultError> {
    if *source_mint != state.mint {
        return Err(VaultError::InvalidTokenMint);
    }
    if source_owner != depositor {
        return Err(VaultError::InvalidTokenAccount);
    }
    Ok(())
}

/// Records a deposit into custody. Open to anyone; the token movement itself
/// is authorized by the depositor's signature.
pub fn acknowledge_deposit(state: &mut VaultState, amount: u64) -> Result<u64, VaultError> {
    if amount == 0 {
        return Err(VaultError::InvalidAmount);
    }
    let total_deposited = state
        .totals
        .total_deposited
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;
    state.totals.total_deposited = total_deposited;
    Ok(total_deposited)
}

/// Admin only. Pays `amount` out of custody to the calling admin.
pub fn emergency_withdraw<C: CustodyToken>(
    caller: &Pubkey,
    state: &mut VaultState,
    amount: u64,
    custody: &mut C,
) -> Result<Withdrawal, VaultError> {
    require_admin(&state.roles, caller)?;
    let _guard = BusyGuard::enter(&mut state.busy)?;

    if amount == 0 {
        return Err(VaultError::InvalidAmount);
    }
    if amount > custody.custody_balance() {
        return Err(VaultError::InsufficientFunds);
    }
    let total_withdrawn = state
        .totals
        .total_withdrawn
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;

    custody.withdraw(caller, amount)?;
    state.totals.total_withdrawn = total_withdrawn;

    Ok(Withdrawal {
        amount,
        reclaimed: 0,
        custody_balance: custody.custody_balance(),
        reserve_balance: custody.reserve_balance(),
        total_withdrawn,
        total_reclaimed: state.totals.total_reclaimed,
    })
}

/// Admin only. Drains custody and the reserve to the calling admin; fails
/// when both are already empty. Ledger balances stay as they are, so funds
/// credited to removed principals can be recovered here.
pub fn withdraw_all<C: CustodyToken>(
    caller: &Pubkey,
    state: &mut VaultState,
    custody: &mut C,
) -> Result<Withdrawal, VaultError> {
    require_admin(&state.roles, caller)?;
    let _guard = BusyGuard::enter(&mut state.busy)?;

    let from_custody = custody.custody_balance();
    let from_reserve = custody.reserve_balance();
    if from_custody == 0 && from_reserve == 0 {
        return Err(VaultError::NoBalanceToWithdraw);
    }
    let amount = from_custody
        .checked_add(from_reserve)
        .ok_or(VaultError::MathOverflow)?;
    let total_withdrawn = state
        .totals
        .total_withdrawn
        .checked_add(from_custody)
        .ok_or(VaultError::MathOverflow)?;
    let total_reclaimed = state
        .totals
        .total_reclaimed
        .checked_add(from_reserve)
        .ok_or(VaultError::MathOverflow)?;

    if from_custody > 0 {
        custody.withdraw(caller, from_custody)?;
    }
    if from_reserve > 0 {
        custody.pay_out(caller, from_reserve)?;
    }
    state.totals.total_withdrawn = total_withdrawn;
    state.totals.total_reclaimed = total_reclaimed;

    Ok(Withdrawal {
        amount,
        reclaimed: from_reserve,
        custody_balance: custody.custody_balance(),
        reserve_balance: custody.reserve_balance(),
        total_withdrawn,
        total_reclaimed,
    })
}
