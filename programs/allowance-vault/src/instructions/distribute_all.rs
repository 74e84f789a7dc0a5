use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::engine::distribution;
use crate::error::VaultError;
use crate::state::{Registry, VaultState};
use crate::utils::SplCustody;

pub fn distribute_all(ctx: Context<DistributeAll>) -> Result<()> {
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
    let d = distribution::distribute_all(
        &admin,
        &mut ctx.accounts.vault_state,
        &mut ctx.accounts.registry,
        &mut custody,
    )?;
    msg!("distributed {} to {} principals", d.amount, d.principals);

    emit!(MonthlyDistribution {
        admin,
        principals: d.principals,
        amount: d.amount,
        total_distributed: d.total_distributed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DistributeAll<'info> {
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
pub struct MonthlyDistribution {
    pub admin: Pubkey,
    pub principals: u32,
    pub amount: u64,
    pub total_distributed: u64,
}
