use anchor_lang::prelude::*;

use crate::engine::principals;
use crate::state::{Registry, VaultState};

pub fn register_principal(
    ctx: Context<RegisterPrincipal>,
    identity: Pubkey,
    monthly_amount: u64,
) -> Result<()> {
    let operator = ctx.accounts.operator.key();
    let registration = principals::register(
        &operator,
        &mut ctx.accounts.vault_state,
        &mut ctx.accounts.registry,
        identity,
        monthly_amount,
    )?;

    emit!(PrincipalRegistered {
        operator,
        identity,
        monthly_amount,
        index: registration.index,
        retained_balance: registration.retained_balance,
        reactivated: registration.reactivated,
        total_expected: registration.total_expected,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterPrincipal<'info> {
    #[account(mut, seeds = [b"vault_state"], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [b"registry", vault_state.key().as_ref()],
        bump
    )]
    pub registry: Box<Account<'info, Registry>>,

    pub operator: Signer<'info>,
}

#[event]
pub struct PrincipalRegistered {
    pub operator: Pubkey,
    pub identity: Pubkey,
    pub monthly_amount: u64,
    pub index: u32,
    pub retained_balance: u64,
    pub reactivated: bool,
    pub total_expected: u64,
}
