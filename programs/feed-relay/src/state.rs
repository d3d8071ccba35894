//! Price feed account state

use borsh::{BorshDeserialize, BorshSerialize};
use pinocchio::program_error::ProgramError;

/// Size of PriceFeedAccount: 16 bytes
pub const PRICE_FEED_ACCOUNT_SIZE: usize = 16;

/// Relay-owned account holding the latest oracle answer
///
/// `answer` is stored exactly as the aggregator reported it. A freshly
/// allocated (zeroed) account decodes to `answer == 0`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriceFeedAccount {
    /// Latest observed answer, or 0 if none was ever observed
    pub answer: i128,
}

impl PriceFeedAccount {
    pub const LEN: usize = PRICE_FEED_ACCOUNT_SIZE;

    /// Decode from the leading bytes of account data, ignoring any trailing space
    pub fn load(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::AccountDataTooSmall);
        }
        Self::deserialize(&mut &data[..Self::LEN]).map_err(|_| ProgramError::BorshIoError)
    }

    /// Encode into the leading bytes of account data
    pub fn store(&self, data: &mut [u8]) -> Result<(), ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::AccountDataTooSmall);
        }
        self.serialize(&mut &mut data[..Self::LEN])
            .map_err(|_| ProgramError::BorshIoError)
    }

    /// Record an oracle reading, substituting zero when the oracle had none
    pub fn record(&mut self, price: Option<i128>) {
        self.answer = price.unwrap_or(0);
    }
}
