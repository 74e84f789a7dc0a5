use anchor_lang::prelude::*;

use crate::engine::ledger;
use crate::state::{Registry, VaultState};

pub fn emit_principal_info(ctx: Context<EmitPrincipalInfo>, identity: Pubkey) -> Result<()> {
    let info = ledger::principal(&ctx.accounts.registry, &identity)?;

    emit!(PrincipalSnapshot {
        identity,
        index: info.index,
        monthly_amount: info.entry.monthly_amount,
        ledger_balance: info.entry.ledger_balance,
        is_active: info.entry.is_active,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitPrincipalInfo<'info> {
    #[account(seeds = [b"vault_state"], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        seeds = [b"registry", vault_state.key().as_ref()],
        bump
    )]
    pub registry: Box<Account<'info, Registry>>,
}

#[event]
pub struct PrincipalSnapshot {
    pub identity: Pubkey,
    pub index: u32,
    pub monthly_amount: u64,
    pub ledger_balance: u64,
    pub is_active: bool,
}
