use anchor_lang::prelude::*;

/// Custom error codes for the allowance vault program.
#[error_code]
#[derive(PartialEq, Eq)]
pub enum VaultError {
    #[msg("Unauthorized: admin role required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: admin or staff role required")]
    UnauthorizedOperator,

    #[msg("Caller is not an active registered principal")]
    NotActivePrincipal,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Invalid batch range")]
    InvalidRange,

    #[msg("Index out of bounds")]
    IndexOutOfBounds,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Principal already registered")]
    DuplicatePrincipal,

    #[msg("Registry is full")]
    RegistryFull,

    #[msg("Role already granted")]
    RoleAlreadyGranted,

    #[msg("Role set is full")]
    RoleSetFull,

    #[msg("Cannot revoke the last admin")]
    LastAdmin,

    #[msg("Principal not registered")]
    PrincipalNotFound,

    #[msg("Role not held")]
    RoleNotHeld,

    #[msg("No principals registered")]
    EmptyRegistry,

    #[msg("No active principals in range")]
    EmptyRange,

    #[msg("Insufficient custody balance")]
    InsufficientFunds,

    #[msg("No balance to withdraw")]
    NoBalanceToWithdraw,

    #[msg("Insufficient ledger balance")]
    InsufficientBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Reentrant call")]
    ReentrantCall,

    #[msg("Custody token transfer failed")]
    CustodyTransferFailed,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Coarse failure classes reported to callers alongside the specific code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    InvalidArgument,
    Conflict,
    NotFound,
    InsufficientFunds,
    InsufficientBalance,
    Internal,
}

impl VaultError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnauthorizedAdmin | Self::UnauthorizedOperator | Self::NotActivePrincipal => {
                ErrorKind::Unauthorized
            }
            Self::InvalidPubkey
            | Self::InvalidAmount
            | Self::InvalidRange
            | Self::IndexOutOfBounds
            | Self::BatchTooLarge
            | Self::InvalidTokenMint
            | Self::InvalidTokenAccount => ErrorKind::InvalidArgument,
            Self::DuplicatePrincipal
            | Self::RegistryFull
            | Self::RoleAlreadyGranted
            | Self::RoleSetFull
            | Self::LastAdmin => ErrorKind::Conflict,
            Self::PrincipalNotFound | Self::RoleNotHeld | Self::EmptyRegistry | Self::EmptyRange => {
                ErrorKind::NotFound
            }
            Self::InsufficientFunds | Self::NoBalanceToWithdraw => ErrorKind::InsufficientFunds,
            Self::InsufficientBalance => ErrorKind::InsufficientBalance,
            Self::ReentrantCall | Self::CustodyTransferFailed | Self::MathOverflow => {
                ErrorKind::Internal
            }
        }
    }
}
