use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::engine::transfer;
use crate::error::VaultError;
use crate::state::{Registry, VaultState};
use crate::utils::SplCustody;

/// Spends `amount` of the signing principal's allowance, paid from the
/// reserve into `destination`.
pub fn transfer_allowance(ctx: Context<TransferAllowance>, amount: u64) -> Result<()> {
    let bump = ctx.accounts.vault_state.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[b"vault_state", &[bump]]];
    let mut custody = SplCustody::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_state.to_account_info(),
        signer_seeds,
        &ctx.accounts.custody,
        &ctx.accounts.reserve,
    )
    .with_destination(&ctx.accounts.destination);

    let principal = ctx.accounts.principal.key();
    let to = ctx.accounts.destination.owner;
    let spend = transfer::transfer(
        &principal,
        &mut ctx.accounts.vault_state,
        &mut ctx.accounts.registry,
        &to,
        amount,
        &mut custody,
    )?;

    emit!(AllowanceTransferred {
        from: principal,
        to,
        amount: spend.amount,
        remaining_balance: spend.remaining_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferAllowance<'info> {
    #[account(mut, seeds = [b"vault_state"], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
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
        mut,
        seeds = [b"reserve", vault_state.key().as_ref()],
        bump = vault_state.reserve_bump,
        constraint = reserve.mint == vault_state.mint @ VaultError::InvalidTokenMint,
    )]
    pub reserve: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == vault_state.mint @ VaultError::InvalidTokenMint,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub principal: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AllowanceTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub remaining_balance: u64,
}
