use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::engine::distribution;
use crate::error::VaultError;
use crate::state::{Registry, VaultState};
use crate::utils::SplCustody;

/// Credits active principals in registry slots `[start, end)`, at most
/// `MAX_BATCH_SIZE` slots per call.
pub fn distribute_range(ctx: Context<DistributeRange>, start: u32, end: u32) -> Result<()> {
    let bump = ctx.accounts.vault_state.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[b"vault_state", &[bump]]];
    let mut custody = SplCustody::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_state.to_account_info(),
        signer_seeds,
        &ctx.accounts.custody,
        &ctx.accounts.reserve,
    );

    let admin = ctx.accounts.admin.key();
    let d = distribution::distribute_range(
        &admin,
        &mut ctx.accounts.vault_state,
        &mut ctx.accounts.registry,
        start,
        end,
        &mut custody,
    )?;

    emit!(BatchDistribution {
        admin,
        start: d.start,
        end: d.end,
        principals: d.principals,
        amount: d.amount,
        total_distributed: d.total_distributed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DistributeRange<'info> {
    #[account(mut, seeds = [b"vault_state"], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [b"registry", vault_state.key().as_ref()],
        bump
    )]
    pub registry: Box<Account<'info, Registry>>,

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

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct BatchDistribution {
    pub admin: Pubkey,
    pub start: u32,
    pub end: u32,
    pub principals: u32,
    pub amount: u64,
    pub total_distributed: u64,
}
