use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::state::{FoundationCreated, FoundationState, FundReceived, RegistryEntry};

#[derive(Accounts)]
#[instruction(description: String, amount: u64)]
pub struct CreateFoundation<'info> {
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

    #[account(
        init,
        payer = owner,
        space = RegistryEntry::INIT_SPACE,
        seeds = [b"registry", foundation.key().as_ref()],
        bump
    )]
    pub registry_entry: Account<'info, RegistryEntry>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateFoundation<'info> {
    pub fn create_foundation(
        &mut self,
        description: String,
        amount: u64,
        bumps: &CreateFoundationBumps,
    ) -> Result<Pubkey> {
        FoundationState::validate_description(&description)?;
        FoundationState::validate_receiver(&self.receiver.key())?;

        self.foundation.set_inner(FoundationState {
            owner: self.owner.key(),
            receiver: self.receiver.key(),
            description: description.clone(),
            total_donated: 0,
            total_sent: 0,
            bump: bumps.foundation,
        });
        self.registry_entry.set_inner(RegistryEntry {
            foundation: self.foundation.key(),
            owner: self.owner.key(),
            description: description.clone(),
            bump: bumps.registry_entry,
        });

        // The attached value is an ordinary donation, same rules apply
        self.foundation.record_donation(amount)?;

        let cpi_program = self.system_program.to_account_info();

        let cpi_accounts = Transfer {
            from: self.owner.to_account_info(),
            to: self.foundation.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        transfer(cpi_ctx, amount)?;

        emit!(FoundationCreated {
            foundation: self.foundation.key(),
            owner: self.owner.key(),
            description,
            timestamp: Clock::get()?.unix_timestamp
        });
        emit!(FundReceived {
            foundation: self.foundation.key(),
            donor: self.owner.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp
        });

        Ok(self.foundation.key())
    }
}
