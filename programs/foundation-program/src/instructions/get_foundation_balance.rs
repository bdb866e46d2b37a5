use anchor_lang::prelude::*;

use crate::state::{FoundationError, FoundationState, RegistryEntry};

#[derive(Accounts)]
pub struct GetFoundationBalance<'info> {
    pub foundation: Account<'info, FoundationState>,

    #[account(
        seeds = [b"registry", foundation.key().as_ref()],
        bump = registry_entry.bump,
        constraint = registry_entry.foundation == foundation.key() @ FoundationError::InvalidAddress
    )]
    pub registry_entry: Account<'info, RegistryEntry>,
}

impl<'info> GetFoundationBalance<'info> {
    pub fn get_foundation_balance(&self) -> Result<u64> {
        let balance = self.foundation.available_balance()?;
        msg!("Foundation balance: {} lamports", balance);
        Ok(balance)
    }
}
