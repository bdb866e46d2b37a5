use anchor_lang::prelude::*;

use crate::state::foundation::FoundationError;

#[account]
pub struct RegistryEntry {
    pub foundation: Pubkey,  // Foundation this entry was created for
    pub owner: Pubkey,       // Owner recorded at creation time
    pub description: String, // Label copied from the foundation
    pub bump: u8,            // PDA bump
}

impl Space for RegistryEntry {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // foundation: Pubkey
        + 32    // owner: Pubkey
        + 4 + 32 // description: String (max 32 bytes)
        + 1;    // bump: u8
}

impl RegistryEntry {
    /// Registry-path owner gate.
    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(
            self.owner == *caller,
            FoundationError::UnauthorizedAccess
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> RegistryEntry {
        RegistryEntry {
            foundation: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            description: "Main Foundation".to_string(),
            bump: 254,
        }
    }

    #[test]
    fn registry_gate_rejects_unrecorded_caller() {
        let e = entry();

        assert_eq!(
            e.assert_owner(&Pubkey::new_unique()),
            Err(FoundationError::UnauthorizedAccess.into())
        );
        e.assert_owner(&e.owner).unwrap();
    }
}
