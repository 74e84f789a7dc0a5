//! Boundary to the external custody token.

use anchor_lang::prelude::Pubkey;

use crate::error::VaultError;

/// Value-transfer primitives the engine needs from the custody token.
///
/// The vault keeps two balances with the token: `custody` (unallocated pool)
/// and `reserve` (backing for credited ledger balances). Every method either
/// moves the full amount or fails without moving anything.
pub trait CustodyToken {
    /// Unallocated funds held by the vault.
    fn custody_balance(&self) -> u64;

    /// Funds backing credited ledger balances.
    fn reserve_balance(&self) -> u64;

    /// Moves `amount` from custody into the reserve.
    fn reserve(&mut self, amount: u64) -> Result<(), VaultError>;

    /// Pays `amount` out of the reserve to `destination`.
    fn pay_out(&mut self, destination: &Pubkey, amount: u64) -> Result<(), VaultError>;

    /// Pays `amount` out of custody to `destination`.
    fn withdraw(&mut self, destination: &Pubkey, amount: u64) -> Result<(), VaultError>;
}
