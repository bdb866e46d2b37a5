pub mod create_foundation;
pub mod donate;
pub mod get_foundation_balance;
pub mod initialize_foundation;
pub mod send_funds;
pub mod transfer_funds_to_receiver;

pub use create_foundation::*;
pub use donate::*;
pub use get_foundation_balance::*;
pub use initialize_foundation::*;
pub use send_funds::*;
pub use transfer_funds_to_receiver::*;
