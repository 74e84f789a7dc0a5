//! Ledger engine: role-gated state transitions over `VaultState` and
//! `Registry`, with the custody token reached only through `CustodyToken`.
//!
//! Instruction handlers validate accounts, build the token adapter and
//! delegate here; nothing in this module depends on the Solana runtime.

pub mod access;
pub mod custody;
pub mod distribution;
pub mod ledger;
pub mod principals;
pub mod transfer;
pub mod treasury;

#[cfg(test)]
mod tests;

pub use custody::CustodyToken;
