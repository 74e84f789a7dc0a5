//! Scoped reentrancy guard over the vault's `busy` flag.

use crate::error::VaultError;

/// Holds the `busy` flag for the lifetime of an operation and clears it on
/// drop, so every exit path (including `?` returns) releases it.
#[must_use]
pub struct BusyGuard<'a> {
    busy: &'a mut bool,
}

impl<'a> BusyGuard<'a> {
    pub fn enter(busy: &'a mut bool) -> Result<Self, VaultError> {
        if *busy {
            return Err(VaultError::ReentrantCall);
        }
        *busy = true;
        Ok(Self { busy })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.busy = false;
    }
}
