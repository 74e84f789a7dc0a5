use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("DtYJ6EUTAqjspyFwXX4TkqDoqei7VVL17QeHidmGi571");

#[program]
pub mod allowance_vault {
    use super::*;

    pub fn initialize_vault(ctx: Context<InitializeVault>, admin: Pubkey) -> Result<()> {
        instructions::initialize_vault::initialize_vault(ctx, admin)
    }

    pub fn register_principal(
        ctx: Context<RegisterPrincipal>,
        identity: Pubkey,
        monthly_amount: u64,
    ) -> Result<()> {
        instructions::register_principal::register_principal(ctx, identity, monthly_amount)
    }

    pub fn update_principal_amount(
        ctx: Context<UpdatePrincipalAmount>,
        identity: Pubkey,
        new_amount: u64,
    ) -> Result<()> {
        instructions::update_principal_amount::update_principal_amount(ctx, identity, new_amount)
    }

    pub fn remove_principal(ctx: Context<RemovePrincipal>, identity: Pubkey) -> Result<()> {
        instructions::remove_principal::remove_principal(ctx, identity)
    }

    pub fn grant_staff(ctx: Context<ManageRoles>, account: Pubkey) -> Result<()> {
        instructions::manage_roles::grant_staff(ctx, account)
    }

    pub fn revoke_staff(ctx: Context<ManageRoles>, account: Pubkey) -> Result<()> {
        instructions::manage_roles::revoke_staff(ctx, account)
    }

    pub fn grant_admin(ctx: Context<ManageRoles>, account: Pubkey) -> Result<()> {
        instructions::manage_roles::grant_admin(ctx, account)
    }

    pub fn revoke_admin(ctx: Context<ManageRoles>, account: Pubkey) -> Result<()> {
        instructions::manage_roles::revoke_admin(ctx, account)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }

    pub fn distribute_all(ctx: Context<DistributeAll>) -> Result<()> {
        instructions::distribute_all::distribute_all(ctx)
    }

    pub fn distribute_range(ctx: Context<DistributeRange>, start: u32, end: u32) -> Result<()> {
        instructions::distribute_range::distribute_range(ctx, start, end)
    }

    pub fn transfer_allowance(ctx: Context<TransferAllowance>, amount: u64) -> Result<()> {
        instructions::transfer_allowance::transfer_allowance(ctx, amount)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        instructions::emergency_withdraw::emergency_withdraw(ctx, amount)
    }

    pub fn withdraw_all(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::withdraw_all(ctx)
    }

    pub fn emit_vault_snapshot(ctx: Context<EmitVaultSnapshot>) -> Result<()> {
        instructions::emit_vault_snapshot::emit_vault_snapshot(ctx)
    }

    pub fn emit_principal_info(ctx: Context<EmitPrincipalInfo>, identity: Pubkey) -> Result<()> {
        instructions::emit_principal_info::emit_principal_info(ctx, identity)
    }
}
