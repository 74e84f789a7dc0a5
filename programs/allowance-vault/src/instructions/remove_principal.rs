use anchor_lang::prelude::*;

use crate::engine::principals;
use crate::state::{Registry, VaultState};

pub fn remove_principal(ctx: Context<RemovePrincipal>, identity: Pubkey) -> Result<()> {
    let operator = ctx.accounts.operator.key();
    let removal = principals::remove(
        &operator,
        &mut ctx.accounts.vault_state,
        &mut ctx.accounts.registry,
        &identity,
    )?;

    emit!(PrincipalRemoved {
        operator,
        identity,
        index: removal.index,
        retained_balance: removal.retained_balance,
        total_expected: removal.total_expected,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RemovePrincipal<'info> {
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
pub struct PrincipalRemoved {
    pub operator: Pubkey,
    pub identity: Pubkey,
    pub index: u32,
    /// Ledger balance the removed principal keeps.
    pub retained_balance: u64,
    pub total_expected: u64,
}
