//! Feed relay instruction handlers

use crate::{error::RelayError, feed, state::PriceFeedAccount};
use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;

/// Feed relay instruction discriminators
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayInstruction {
    /// Refresh the stored answer from the aggregator
    UpdatePrice = 0,
}

impl RelayInstruction {
    /// Split instruction data into the instruction and its payload
    pub fn unpack(data: &[u8]) -> Result<(Self, &[u8]), ProgramError> {
        let (&discriminator, rest) = data
            .split_first()
            .ok_or(ProgramError::from(RelayError::InvalidInstruction))?;

        let instruction = match discriminator {
            0 => Self::UpdatePrice,
            _ => return Err(RelayError::InvalidInstruction.into()),
        };
        Ok((instruction, rest))
    }
}

/// Update the stored price from the aggregator
///
/// Accounts:
/// 0. `[writable]` Price feed account (owned by this program)
/// 1. `[]` Chainlink aggregator account
///
/// Instruction data: none
pub fn process_update_price(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    _data: &[u8],
) -> ProgramResult {
    let [price_account, feed_account, ..] = accounts else {
        msg!("Error: UpdatePrice requires 2 accounts");
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !price_account.is_writable() {
        msg!("Error: Price feed account must be writable");
        return Err(RelayError::PriceAccountNotWritable.into());
    }

    if !price_account.is_owned_by(program_id) {
        msg!("Error: Price feed account not owned by program");
        return Err(RelayError::InvalidPriceAccountOwner.into());
    }

    if !feed_account.is_owned_by(&feed::CHAINLINK_STORE_ID) {
        msg!("Error: Aggregator account not owned by Chainlink store");
        return Err(RelayError::InvalidFeedOwner.into());
    }

    let feed_data = feed_account.try_borrow_data()?;
    let mut price_data = price_account.try_borrow_mut_data()?;

    // Answers are displayed with DECIMALS (9) fractional digits
    match relay_price(&feed_data, &mut price_data)? {
        Some(price) => {
            log!("Price is {:.9}", price);
        }
        None => msg!("No current price"),
    }

    Ok(())
}

/// Copy the aggregator's latest answer into price feed account data
///
/// Stores zero when the aggregator has not reported a round yet. Returns the
/// reading that was observed.
pub fn relay_price(feed_data: &[u8], price_data: &mut [u8]) -> Result<Option<i128>, ProgramError> {
    let price = feed::get_price(feed_data)?;

    let mut account = PriceFeedAccount::load(price_data)?;
    account.record(price);
    account.store(price_data)?;

    Ok(price)
}
