use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::state::{FoundationState, FundReceived};

#[derive(Accounts)]
pub struct Donate<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(
        mut,
        seeds = [b"foundation", foundation.description.as_str().as_bytes(), foundation.owner.key().as_ref()],
        bump = foundation.bump
    )]
    pub foundation: Account<'info, FoundationState>,

    pub system_program: Program<'info, System>,
}

impl<'info> Donate<'info> {
    pub fn donate(&mut self, amount: u64) -> Result<()> {
        self.foundation.record_donation(amount)?;

        let cpi_program = self.system_program.to_account_info();

        let cpi_accounts = Transfer {
            from: self.donor.to_account_info(),
            to: self.foundation.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        transfer(cpi_ctx, amount)?;

        emit!(FundReceived {
            foundation: self.foundation.key(),
            donor: self.donor.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp
        });
        Ok(())
    }
}
