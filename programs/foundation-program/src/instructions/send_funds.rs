use anchor_lang::prelude::*;

use crate::state::{FoundationError, FoundationState, FundsSent};

#[derive(Accounts)]
pub struct SendFunds<'info> {
    pub owner: Signer<'info>,

    /// CHECK: Must be the receiver the foundation was constructed with
    #[account(
        mut,
        address = foundation.receiver @ FoundationError::ReceiverMismatch
    )]
    pub receiver: AccountInfo<'info>,

    #[account(
        mut,
        constraint = foundation.owner == owner.key() @ FoundationError::OwnableUnauthorizedAccount,
        seeds = [b"foundation", foundation.description.as_str().as_bytes(), foundation.owner.key().as_ref()],
        bump = foundation.bump
    )]
    pub foundation: Account<'info, FoundationState>,
}

impl<'info> SendFunds<'info> {
    pub fn send_funds(&mut self, amount: u64) -> Result<()> {
        self.foundation.assert_owner(&self.owner.key())?;

        self.foundation.record_disbursement(amount)?;

        // The foundation PDA holds the donated lamports itself, so the
        // disbursement is a direct lamport move out of program-owned funds
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
