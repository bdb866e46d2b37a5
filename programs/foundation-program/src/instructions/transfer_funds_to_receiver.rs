use anchor_lang::prelude::*;

use crate::state::{FoundationError, FoundationState, FundsSent, RegistryEntry};

#[derive(Accounts)]
pub struct TransferFundsToReceiver<'info> {
    pub authority: Signer<'info>,

    /// CHECK: Must be the receiver the foundation was constructed with
    #[account(
        mut,
        address = foundation.receiver @ FoundationError::ReceiverMismatch
    )]
    pub receiver: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [b"foundation", foundation.description.as_str().as_bytes(), foundation.owner.key().as_ref()],
        bump = foundation.bump
    )]
    pub foundation: Account<'info, FoundationState>,

    #[account(
        seeds = [b"registry", foundation.key().as_ref()],
        bump = registry_entry.bump,
        constraint = registry_entry.foundation == foundation.key() @ FoundationError::InvalidAddress,
        constraint = registry_entry.owner == authority.key() @ FoundationError::UnauthorizedAccess
    )]
    pub registry_entry: Account<'info, RegistryEntry>,
}

impl<'info> TransferFundsToReceiver<'info> {
    pub fn transfer_funds_to_receiver(&mut self, amount: u64) -> Result<()> {
        // Registry gate first; the foundation's own owner check stays in force
        self.registry_entry.assert_owner(&self.authority.key())?;
        self.foundation.assert_owner(&self.authority.key())?;

        self.foundation.record_disbursement(amount)?;

        self.foundation.to_account_info().sub_lamports(amount)?;
        self.receiver.add_lamports(amount)?;

        emit!(FundsSent {
            foundation: self.foundation.key(),
            receiver: self.receiver.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp
        });
        Ok(())
    }
}
