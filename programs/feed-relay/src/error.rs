//! Program error codes

use pinocchio::program_error::ProgramError;

/// Errors returned by the feed relay program as `ProgramError::Custom`
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayError {
    /// Instruction data is empty or carries an unknown discriminator
    InvalidInstruction = 0,
    /// Aggregator account is not owned by the Chainlink store program
    InvalidFeedOwner = 1,
    /// Aggregator account data does not hold a readable transmission
    InvalidFeedData = 2,
    /// Price feed account was not passed as writable
    PriceAccountNotWritable = 3,
    /// Price feed account is not owned by this program
    InvalidPriceAccountOwner = 4,
}

impl From<RelayError> for ProgramError {
    fn from(e: RelayError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
