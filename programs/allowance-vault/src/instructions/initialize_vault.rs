use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VaultError;
use crate::state::{LedgerTotals, Registry, RoleSet, VaultState};

pub fn initialize_vault(ctx: Context<InitializeVault>, admin: Pubkey) -> Result<()> {
    require!(admin != Pubkey::default(), VaultError::InvalidPubkey);

    let st = &mut ctx.accounts.vault_state;
    st.mint = ctx.accounts.mint.key();
    st.roles = RoleSet::with_admin(admin);
    st.totals = LedgerTotals::default();
    st.busy = false;
    st.bump = ctx.bumps.vault_state;
    st.custody_bump = ctx.bumps.custody;
    st.reserve_bump = ctx.bumps.reserve;

    let registry = &mut ctx.accounts.registry;
    registry.active_count = 0;
    registry.entries = Vec::new();

    emit!(VaultInitialized {
        mint: st.mint,
        admin,
        custody: ctx.accounts.custody.key(),
        reserve: ctx.accounts.reserve.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + VaultState::INIT_SPACE,
        seeds = [b"vault_state"],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        init,
        payer = payer,
        space = 8 + Registry::INIT_SPACE,
        seeds = [b"registry", vault_state.key().as_ref()],
        bump
    )]
    pub registry: Box<Account<'info, Registry>>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = vault_state,
        seeds = [b"custody", vault_state.key().as_ref()],
        bump
    )]
    pub custody: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = vault_state,
        seeds = [b"reserve", vault_state.key().as_ref()],
        bump
    )]
    pub reserve: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VaultInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub custody: Pubkey,
    pub reserve: Pubkey,
}
