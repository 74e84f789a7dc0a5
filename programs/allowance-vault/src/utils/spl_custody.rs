//! `CustodyToken` over the vault's SPL token accounts.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::engine::CustodyToken;
use crate::error::VaultError;

/// Moves tokens out of the custody and reserve accounts with SPL `transfer`
/// CPIs signed by the vault state PDA. Balances are tracked locally from the
/// amounts loaded at instruction start, since the deserialized token accounts
/// are not refreshed after a CPI.
pub struct SplCustody<'a, 'info> {
    token_program: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
    custody: AccountInfo<'info>,
    reserve: AccountInfo<'info>,
    custody_amount: u64,
    reserve_amount: u64,
    /// Owner wallet and token account of the one payout target this
    /// instruction was given.
    destination: Option<(Pubkey, AccountInfo<'info>)>,
}

impl<'a, 'info> SplCustody<'a, 'info> {
    pub fn new(
        token_program: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
        custody: &Account<'info, TokenAccount>,
        reserve: &Account<'info, TokenAccount>,
    ) -> Self {
        Self {
            token_program,
            authority,
            signer_seeds,
            custody: custody.to_account_info(),
            reserve: reserve.to_account_info(),
            custody_amount: custody.amount,
            reserve_amount: reserve.amount,
            destination: None,
        }
    }

    pub fn with_destination(mut self, destination: &Account<'info, TokenAccount>) -> Self {
        self.destination = Some((destination.owner, destination.to_account_info()));
        self
    }

    fn destination_for(&self, owner: &Pubkey) -> std::result::Result<AccountInfo<'info>, VaultError> {
        match &self.destination {
            Some((wallet, info)) if wallet == owner => Ok(info.clone()),
            _ => Err(VaultError::InvalidTokenAccount),
        }
    }

    fn send(
        &self,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        amount: u64,
    ) -> std::result::Result<(), VaultError> {
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from,
                    to,
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
        .map_err(|err| {
            msg!("custody transfer of {} failed: {:?}", amount, err);
            VaultError::CustodyTransferFailed
        })
    }
}

impl CustodyToken for SplCustody<'_, '_> {
    fn custody_balance(&self) -> u64 {
        self.custody_amount
    }

    fn reserve_balance(&self) -> u64 {
        self.reserve_amount
    }

    fn reserve(&mut self, amount: u64) -> std::result::Result<(), VaultError> {
        let custody_amount = self
            .custody_amount
            .checked_sub(amount)
            .ok_or(VaultError::InsufficientFunds)?;
        let reserve_amount = self
            .reserve_amount
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        self.send(self.custody.clone(), self.reserve.clone(), amount)?;
        self.custody_amount = custody_amount;
        self.reserve_amount = reserve_amount;
        Ok(())
    }

    fn pay_out(&mut self, destination: &Pubkey, amount: u64) -> std::result::Result<(), VaultError> {
        let to = self.destination_for(destination)?;
        let reserve_amount = self
            .reserve_amount
            .checked_sub(amount)
            .ok_or(VaultError::CustodyTransferFailed)?;
        self.send(self.reserve.clone(), to, amount)?;
        self.reserve_amount = reserve_amount;
        Ok(())
    }

    fn withdraw(&mut self, destination: &Pubkey, amount: u64) -> std::result::Result<(), VaultError> {
        let to = self.destination_for(destination)?;
        let custody_amount = self
            .custody_amount
            .checked_sub(amount)
            .ok_or(VaultError::InsufficientFunds)?;
        self.send(self.custody.clone(), to, amount)?;
        self.custody_amount = custody_amount;
        Ok(())
    }
}
