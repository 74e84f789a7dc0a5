use anchor_lang::prelude::*;

use crate::engine::principals;
use crate::state::{Registry, VaultState};

pub fn update_principal_amount(
    ctx: Context<UpdatePrincipalAmount>,
    identity: Pubkey,
    new_amount: u64,
) -> Result<()> {
    let operator = ctx.accounts.operator.key();
    let update = principals::update_amount(
        &operator,
        &mut ctx.accounts.vault_state,
        &mut ctx.accounts.registry,
        &identity,
        new_amount,
    )?;

    emit!(PrincipalUpdated {
        operator,
        identity,
        old_amount: update.old_amount,
        new_amount: update.new_amount,
        total_expected: update.total_expected,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdatePrincipalAmount<'info> {
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
pub struct PrincipalUpdated {
    pub operator: Pubkey,
    pub identity: Pubkey,
    pub old_amount: u64,
    pub new_amount: u64,
    pub total_expected: u64,
}
