use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::engine::treasury::{self, Withdrawal};
use crate::error::VaultError;
use crate::state::VaultState;
use crate::utils::SplCustody;

// NOTE: Ledger balances and the expected monthly total are never adjusted.
// `withdraw_all` also empties the reserve, so credited balances can be left
// unbacked.

pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    withdraw(ctx, Some(amount))
}

pub fn withdraw_all(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    withdraw(ctx, None)
}

/// The payout account must be owned by the signing admin; `SplCustody`
/// rejects any other destination.
fn withdraw(ctx: Context<EmergencyWithdraw>, amount: Option<u64>) -> Result<()> {
    let bump = ctx.accounts.vault_state.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[b"vault_state", &[bump]]];
    let mut custody = SplCustody::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_state.to_account_info(),
        signer_seeds,
        &ctx.accounts.custody,
        &ctx.accounts.reserve,
    )
    .with_destination(&ctx.accounts.admin_destination);

    let admin = ctx.accounts.admin.key();
    let st = &mut ctx.accounts.vault_state;
    let w: Withdrawal = match amount {
        Some(amount) => treasury::emergency_withdraw(&admin, st, amount, &mut custody)?,
        None => treasury::withdraw_all(&admin, st, &mut custody)?,
    };
    msg!(
        "emergency withdrawal of {} ({} from reserve), custody left {}",
        w.amount,
        w.reclaimed,
        w.custody_balance
    );

    emit!(EmergencyWithdrawn {
        admin,
        amount: w.amount,
        reclaimed: w.reclaimed,
        custody_balance: w.custody_balance,
        reserve_balance: w.reserve_balance,
        total_withdrawn: w.total_withdrawn,
        total_reclaimed: w.total_reclaimed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(mut, seeds = [b"vault_state"], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [b"custody", vault_state.key().as_ref()],
        bump = vault_state.custody_bump,
        constraint = custody.mint == vault_state.mint @ VaultError::InvalidTokenMint,
    )]
    pub custody: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"reserve", vault_state.key().as_ref()],
        bump = vault_state.reserve_bump,
        constraint = reserve.mint == vault_state.mint @ VaultError::InvalidTokenMint,
    )]
    pub reserve: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_destination.mint == vault_state.mint @ VaultError::InvalidTokenMint,
    )]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct EmergencyWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
    pub reclaimed: u64,
    pub custody_balance: u64,
    pub reserve_balance: u64,
    pub total_withdrawn: u64,
    pub total_reclaimed: u64,
}
