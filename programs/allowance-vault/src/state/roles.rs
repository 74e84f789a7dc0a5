use anchor_lang::prelude::*;

use crate::constants::{MAX_ADMINS, MAX_STAFF};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    pub const fn capacity(self) -> usize {
        match self {
            Role::Admin => MAX_ADMINS,
            Role::Staff => MAX_STAFF,
        }
    }
}

/// Two-tier role membership. Admin is a super-role: it passes every Staff gate
/// without being listed in `staff`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RoleSet {
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,
    #[max_len(MAX_STAFF)]
    pub staff: Vec<Pubkey>,
}

impl RoleSet {
    pub fn with_admin(admin: Pubkey) -> Self {
        Self {
            admins: vec![admin],
            staff: Vec::new(),
        }
    }

    pub fn has_role(&self, who: &Pubkey, role: Role) -> bool {
        self.members(role).contains(who)
    }

    /// Admin or Staff.
    pub fn is_operator(&self, who: &Pubkey) -> bool {
        self.has_role(who, Role::Admin) || self.has_role(who, Role::Staff)
    }

    pub fn members(&self, role: Role) -> &Vec<Pubkey> {
        match role {
            Role::Admin => &self.admins,
            Role::Staff => &self.staff,
        }
    }

    pub fn members_mut(&mut self, role: Role) -> &mut Vec<Pubkey> {
        match role {
            Role::Admin => &mut self.admins,
            Role::Staff => &mut self.staff,
        }
    }
}
