use anchor_lang::prelude::*;

#[account]
pub struct FoundationState {
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub description: String,
    pub total_donated: u64,
    pub total_sent: u64,
    pub bump: u8,
}

impl Space for FoundationState {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // owner: Pubkey
        + 32    // receiver: Pubkey
        + 4 + 32 // description: String (max 32 bytes)
        + 8     // total_donated: u64
        + 8     // total_sent: u64
        + 1;    // bump: u8
}

impl FoundationState {
    pub fn validate_description(description: &str) -> Result<()> {
        require!(
            description.len() >= 4 && description.len() <= 32,
            FoundationError::DescriptionLengthInvalid
        );
        Ok(())
    }

    pub fn validate_receiver(receiver: &Pubkey) -> Result<()> {
        require!(
            *receiver != Pubkey::default(),
            FoundationError::InvalidReceiver
        );
        Ok(())
    }

    /// Direct-path owner gate.
    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(
            self.owner == *caller,
            FoundationError::OwnableUnauthorizedAccount
        );
        Ok(())
    }

    /// Donated funds still held by the foundation. Rent lamports are not
    /// part of the accounting, only what came in through donations.
    pub fn available_balance(&self) -> Result<u64> {
        Ok(self
            .total_donated
            .checked_sub(self.total_sent)
            .ok_or(FoundationError::MathOverflow)?)
    }

    pub fn record_donation(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, FoundationError::DonationAmountMustBeGreaterThanZero);

        self.total_donated = self
            .total_donated
            .checked_add(amount)
            .ok_or(FoundationError::MathOverflow)?;
        Ok(())
    }

    pub fn record_disbursement(&mut self, amount: u64) -> Result<()> {
        let available = self.available_balance()?;
        require!(amount <= available, FoundationError::InsufficientBalance);

        self.total_sent = self
            .total_sent
            .checked_add(amount)
            .ok_or(FoundationError::MathOverflow)?;
        Ok(())
    }
}

#[event]
pub struct FoundationCreated {
    pub foundation: Pubkey,
    pub owner: Pubkey,
    pub description: String,
    pub timestamp: i64,
}

#[event]
pub struct FundReceived {
    pub foundation: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct FundsSent {
    pub foundation: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[error_code]
pub enum FoundationError {

    #[msg("Donation amount must be greater than 0")]
    DonationAmountMustBeGreaterThanZero,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Caller is not the foundation owner")]
    OwnableUnauthorizedAccount,

    #[msg("Caller is not the recorded owner of this foundation")]
    UnauthorizedAccess,

    #[msg("Registry entry does not match this foundation")]
    InvalidAddress,

    #[msg("Receiver cannot be the default address")]
    InvalidReceiver,

    #[msg("Receiver account does not match the foundation receiver")]
    ReceiverMismatch,

    #[msg("Description must be between 4 and 32 characters")]
    DescriptionLengthInvalid,

    #[msg("Math overflow error")]
    MathOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foundation(donated: u64, sent: u64) -> FoundationState {
        FoundationState {
            owner: Pubkey::new_unique(),
            receiver: Pubkey::new_unique(),
            description: "Main Foundation".to_string(),
            total_donated: donated,
            total_sent: sent,
            bump: 255,
        }
    }

    #[test]
    fn donations_and_disbursements_conserve_balance() {
        let mut f = foundation(0, 0);
        f.record_donation(1_000_000_000).unwrap();
        f.record_donation(250).unwrap();
        f.record_disbursement(500_000_000).unwrap();

        assert_eq!(f.available_balance().unwrap(), 500_000_250);
        assert_eq!(f.total_donated, 1_000_000_250);
        assert_eq!(f.total_sent, 500_000_000);
    }

    #[test]
    fn zero_donation_is_rejected() {
        let mut f = foundation(0, 0);

        assert_eq!(
            f.record_donation(0),
            Err(FoundationError::DonationAmountMustBeGreaterThanZero.into())
        );
        assert_eq!(f.total_donated, 0);
    }

    #[test]
    fn disbursement_above_balance_is_rejected() {
        let mut f = foundation(1_000_000_000, 0);

        assert_eq!(
            f.record_disbursement(2_000_000_000),
            Err(FoundationError::InsufficientBalance.into())
        );
        // rejected transfer must not touch the counters
        assert_eq!(f.total_sent, 0);
        assert_eq!(f.available_balance().unwrap(), 1_000_000_000);
    }

    #[test]
    fn disbursement_can_drain_balance_to_zero() {
        let mut f = foundation(1_000_000_000, 0);
        f.record_disbursement(1_000_000_000).unwrap();

        assert_eq!(f.available_balance().unwrap(), 0);
        assert_eq!(
            f.record_disbursement(1),
            Err(FoundationError::InsufficientBalance.into())
        );
    }

    #[test]
    fn send_funds_by_non_owner_is_rejected() {
        let f = foundation(1_000_000_000, 0);
        let outsider = Pubkey::new_unique();

        assert_eq!(
            f.assert_owner(&outsider),
            Err(FoundationError::OwnableUnauthorizedAccount.into())
        );
        // rejected caller causes no state change
        assert_eq!(f.available_balance().unwrap(), 1_000_000_000);

        f.assert_owner(&f.owner).unwrap();
    }

    #[test]
    fn description_bounds_are_enforced() {
        FoundationState::validate_description("Main Foundation").unwrap();

        assert_eq!(
            FoundationState::validate_description("abc"),
            Err(FoundationError::DescriptionLengthInvalid.into())
        );
        assert_eq!(
            FoundationState::validate_description(&"x".repeat(33)),
            Err(FoundationError::DescriptionLengthInvalid.into())
        );
    }

    #[test]
    fn default_receiver_is_rejected() {
        FoundationState::validate_receiver(&Pubkey::new_unique()).unwrap();

        assert_eq!(
            FoundationState::validate_receiver(&Pubkey::default()),
            Err(FoundationError::InvalidReceiver.into())
        );
    }

    #[test]
    fn donation_overflow_is_rejected() {
        let mut f = foundation(u64::MAX, 0);

        assert_eq!(
            f.record_donation(1),
            Err(FoundationError::MathOverflow.into())
        );
        assert_eq!(f.total_donated, u64::MAX);
    }
}
