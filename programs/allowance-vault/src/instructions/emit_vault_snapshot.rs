use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::engine::ledger;
use crate::error::VaultError;
use crate::state::{Registry, VaultState};

/// Emits aggregate counters, batch metadata and the reconciliation check.
pub fn emit_vault_snapshot(ctx: Context<EmitVaultSnapshot>) -> Result<()> {
    let st = &ctx.accounts.vault_state;
    let registry = &ctx.accounts.registry;
    let batch = ledger::batch_info(registry);
    let rec = ledger::reconcile(
        st,
        registry,
        ctx.accounts.custody.amount,
        ctx.accounts.reserve.amount,
    )?;

    emit!(VaultSnapshot {
        total_expected: ledger::total_expected(st),
        total_distributed: ledger::total_distributed(st),
        total_deposited: st.totals.total_deposited,
        total_spent: st.totals.total_spent,
        total_withdrawn: st.totals.total_withdrawn,
        total_reclaimed: st.totals.total_reclaimed,
        custody_balance: rec.custody_balance,
        reserve_balance: rec.reserve_balance,
        outstanding: rec.outstanding,
        shortfall: rec.shortfall,
        consistent: rec.is_consistent(),
        active_count: batch.active_count,
        slot_count: batch.slot_count,
        max_batch_size: batch.max_batch_size,
        estimated_batches: batch.estimated_batches,
        requires_batching: batch.requires_batching,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVaultSnapshot<'info> {
    #[account(seeds = [b"vault_state"], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        seeds = [b"registry", vault_state.key().as_ref()],
        bump
    )]
    pub registry: Box<Account<'info, Registry>>,

    #[account(
        seeds = [b"custody", vault_state.key().as_ref()],
        bump = vault_state.custody_bump,
        constraint = custody.mint == vault_state.mint @ VaultError::InvalidTokenMint,
    )]
    pub custody: Account<'info, TokenAccount>,

    #[account(
        seeds = [b"reserve", vault_state.key().as_ref()],
        bump = vault_state.reserve_bump,
        constraint = reserve.mint == vault_state.mint @ VaultError::InvalidTokenMint,
    )]
    pub reserve: Account<'info, TokenAccount>,
}

#[event]
pub struct VaultSnapshot {
    pub total_expected: u64,
    pub total_distributed: u64,
    pub total_deposited: u64,
    pub total_spent: u64,
    pub total_withdrawn: u64,
    pub total_reclaimed: u64,
    pub custody_balance: u64,
    pub reserve_balance: u64,
    pub outstanding: u64,
    pub shortfall: u64,
    pub consistent: bool,
    pub active_count: u32,
    pub slot_count: u32,
    pub max_batch_size: u32,
    pub estimated_batches: u32,
    pub requires_batching: bool,
}
