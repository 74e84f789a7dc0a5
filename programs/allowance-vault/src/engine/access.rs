//! Role checks and role-set administration.

use anchor_lang::prelude::Pubkey;

use crate::error::VaultError;
use crate::state::{Role, RoleSet};

pub fn require_admin(roles: &RoleSet, caller: &Pubkey) -> Result<(), VaultError> {
    if !roles.has_role(caller, Role::Admin) {
        return Err(VaultError::UnauthorizedAdmin);
    }
    Ok(())
}

pub fn require_operator(roles: &RoleSet, caller: &Pubkey) -> Result<(), VaultError> {
    if !roles.is_operator(caller) {
        return Err(VaultError::UnauthorizedOperator);
    }
    Ok(())
}

/// Admin only.
pub fn grant(
    caller: &Pubkey,
    roles: &mut RoleSet,
    role: Role,
    account: Pubkey,
) -> Result<(), VaultError> {
    require_admin(roles, caller)?;
    if account == Pubkey::default() {
        return Err(VaultError::InvalidPubkey);
    }
    if roles.has_role(&account, role) {
        return Err(VaultError::RoleAlreadyGranted);
    }
    let members = roles.members_mut(role);
    if members.len() >= role.capacity() {
        return Err(VaultError::RoleSetFull);
    }
    members.push(account);
    Ok(())
}

/// Admin only. The admin set can never become empty.
pub fn revoke(
    caller: &Pubkey,
    roles: &mut RoleSet,
    role: Role,
    account: &Pubkey,
) -> Result<(), VaultError> {
    require_admin(roles, caller)?;
    let members = roles.members_mut(role);
    let pos = members
        .iter()
        .position(|m| m == account)
        .ok_or(VaultError::RoleNotHeld)?;
    if role == Role::Admin && members.len() == 1 {
        return Err(VaultError::LastAdmin);
    }
    members.remove(pos);
    Ok(())
}
