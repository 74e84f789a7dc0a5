use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::engine::treasury;
use crate::error::VaultError;
use crate::state::VaultState;

/// Pulls `amount` from the depositor's token account into custody. Only the
/// custody balance moves; ledger balances and totals other than
/// `total_deposited` are untouched.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let source = &ctx.accounts.depositor_token_account;
    treasury::check_deposit_source(
        &ctx.accounts.vault_state,
        &ctx.accounts.depositor.key(),
        &source.mint,
        &source.owner,
    )?;

    let total_deposited = treasury::acknowledge_deposit(&mut ctx.accounts.vault_state, amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.custody.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.custody.reload()?;

    emit!(FundsDeposited {
        depositor: ctx.accounts.depositor.key(),
        amount,
        custody_balance: ctx.accounts.custody.amount,
        total_deposited,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut, seeds = [b"vault_state"], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [b"custody", vault_state.key().as_ref()],
        bump = vault_state.custody_bump,
        constraint = custody.mint == vault_state.mint @ VaultError::InvalidTokenMint,
    )]
    pub custody: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FundsDeposited {
    pub depositor: Pubkey,
    pub amount: u64,
    pub custody_balance: u64,
    pub total_deposited: u64,
}
