#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;

use crate::instructions::*;

declare_id!("HWGSS8t2B8YUX6LYT1dugpXDiBJek4Njr3RbxuTKbtfJ");

#[program]
pub mod foundation_program {
    use super::*;

    pub fn create_foundation(ctx: Context<CreateFoundation>, description: String, amount: u64) -> Result<Pubkey> {
        ctx.accounts.create_foundation(description, amount, &ctx.bumps)
    }

    pub fn initialize_foundation(ctx: Context<InitializeFoundation>, description: String, amount: u64) -> Result<()> {
        ctx.accounts.initialize_foundation(description, amount, &ctx.bumps)?;
        Ok(())
    }
    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        ctx.accounts.donate(amount)?;
        Ok(())
    }
    pub fn send_funds(ctx: Context<SendFunds>, amount: u64) -> Result<()> {
        ctx.accounts.send_funds(amount)?;
        Ok(())
    }
    pub fn transfer_funds_to_receiver(ctx: Context<TransferFundsToReceiver>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_funds_to_receiver(amount)?;
        Ok(())
    }
    pub fn get_foundation_balance(ctx: Context<GetFoundationBalance>) -> Result<u64> {
        ctx.accounts.get_foundation_balance()
    }
}
