use anchor_lang::prelude::*;

use crate::engine::access;
use crate::state::{Role, VaultState};

pub fn grant_staff(ctx: Context<ManageRoles>, account: Pubkey) -> Result<()> {
    grant(ctx, Role::Staff, account)
}

pub fn revoke_staff(ctx: Context<ManageRoles>, account: Pubkey) -> Result<()> {
    revoke(ctx, Role::Staff, account)
}

pub fn grant_admin(ctx: Context<ManageRoles>, account: Pubkey) -> Result<()> {
    grant(ctx, Role::Admin, account)
}

pub fn revoke_admin(ctx: Context<ManageRoles>, account: Pubkey) -> Result<()> {
    revoke(ctx, Role::Admin, account)
}

fn grant(ctx: Context<ManageRoles>, role: Role, account: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    access::grant(&admin, &mut ctx.accounts.vault_state.roles, role, account)?;
    emit!(RoleGranted {
        admin,
        account,
        role,
    });
    Ok(())
}

fn revoke(ctx: Context<ManageRoles>, role: Role, account: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    access::revoke(&admin, &mut ctx.accounts.vault_state.roles, role, &account)?;
    emit!(RoleRevoked {
        admin,
        account,
        role,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ManageRoles<'info> {
    #[account(mut, seeds = [b"vault_state"], bump = vault_state.bump)]
    pub vault_state: Account<'info, VaultState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct RoleGranted {
    pub admin: Pubkey,
    pub account: Pubkey,
    pub role: Role,
}

#[event]
pub struct RoleRevoked {
    pub admin: Pubkey,
    pub account: Pubkey,
    pub role: Role,
}
