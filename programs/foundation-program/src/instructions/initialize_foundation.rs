use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::state::{FoundationState, FundReceived};

/// Direct constructor path, no registry entry is written. A foundation
/// created this way can still take donations and disburse funds, but
/// registry lookups for it will fail.
#[derive(Accounts)]
#[instruction(description: String, amount: u64)]
pub struct InitializeFoundation<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: This is the receiver public key, only its address is recorded
    pub receiver: AccountInfo<'info>,

    #[account(
        init,
        payer = owner,
        space = FoundationState::INIT_SPACE,
        seeds = [b"foundation", description.as_str().as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub foundation: Account<'info, FoundationState>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeFoundation<'info> {
    pub fn initialize_foundation(
        &mut self,
        description: String,
        amount: u64,
        bumps: &InitializeFoundationBumps,
    ) -> Result<()> {
        FoundationState::validate_description(&description)?;
        FoundationState::validate_receiver(&self.receiver.key())?;

        self.foundation.set_inner(FoundationState {
            owner: self.owner.key(),
            receiver: self.receiver.key(),
            description,
            total_donated: 0,
            total_sent: 0,
            bump: bumps.foundation,
        });

        // Initial value is optional here, zero means start empty
        if amount > 0 {
            self.foundation.record_donation(amount)?;

            let cpi_program = self.system_program.to_account_info();

            let cpi_accounts = Transfer {
                from: self.owner.to_account_info(),
                to: self.foundation.to_account_info(),
            };

            let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
            transfer(cpi_ctx, amount)?;

            emit!(FundReceived {
                foundation: self.foundation.key(),
                donor: self.owner.key(),
                amount,
                timestamp: Clock::get()?.unix_timestamp
            });
        }

        Ok(())
    }
}
