//! Chainlink aggregator account reader
//!
//! Aggregator accounts are owned by the Chainlink OCR2 store program and laid
//! out as:
//!
//! ```text
//! discriminator: [u8; 8]
//! header (192 bytes, packed):
//!   version: u8                 @ 0
//!   state: u8                   @ 1
//!   owner: Pubkey               @ 2
//!   proposed_owner: Pubkey      @ 34
//!   writer: Pubkey              @ 66
//!   description: [u8; 32]       @ 98
//!   decimals: u8                @ 130
//!   flagging_threshold: u32     @ 131
//!   latest_round_id: u32        @ 135
//!   granularity: u8             @ 139
//!   live_length: u32            @ 140
//!   live_cursor: u32            @ 144
//!   historical_cursor: u32      @ 148
//! live ring buffer: [Transmission; live_length]
//!   slot: u64                   @ 0
//!   timestamp: u32              @ 8
//!   _padding0: u32              @ 12
//!   answer: i128                @ 16
//!   _padding1: [u64; 2]         @ 32
//! ```

use crate::error::RelayError;
use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use pinocchio_pubkey::pubkey;

/// Chainlink OCR2 store program, owner of every aggregator account
pub const CHAINLINK_STORE_ID: Pubkey = pubkey!("HEvSKofvBgfaexv23kMabbYqxasxU3mQ4ibBMEmJWHny");

pub const DISCRIMINATOR_SIZE: usize = 8;
pub const HEADER_SIZE: usize = 192;
pub const TRANSMISSION_SIZE: usize = 48;

/// Offset of the first live transmission
pub const TRANSMISSIONS_OFFSET: usize = DISCRIMINATOR_SIZE + HEADER_SIZE;

pub const DECIMALS_OFFSET: usize = DISCRIMINATOR_SIZE + 130;
pub const LATEST_ROUND_ID_OFFSET: usize = DISCRIMINATOR_SIZE + 135;
pub const LIVE_LENGTH_OFFSET: usize = DISCRIMINATOR_SIZE + 140;
pub const LIVE_CURSOR_OFFSET: usize = DISCRIMINATOR_SIZE + 144;

const SLOT_OFFSET: usize = 0;
const TIMESTAMP_OFFSET: usize = 8;
const ANSWER_OFFSET: usize = 16;

/// Latest round reported by an aggregator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub round_id: u32,
    pub slot: u64,
    pub timestamp: u32,
    pub answer: i128,
    /// Fractional digits the feed publishes its answers with
    pub decimals: u8,
}

/// Current price of an aggregator, `None` if no round has been reported yet
pub fn get_price(data: &[u8]) -> Result<Option<i128>, ProgramError> {
    Ok(read_latest_round(data)?.map(|round| round.answer))
}

/// Read the most recent live transmission of an aggregator account
pub fn read_latest_round(data: &[u8]) -> Result<Option<Round>, ProgramError> {
    if data.len() < TRANSMISSIONS_OFFSET {
        return Err(RelayError::InvalidFeedData.into());
    }

    let round_id = read_u32(data, LATEST_ROUND_ID_OFFSET)?;
    if round_id == 0 {
        return Ok(None);
    }

    let live_length = read_u32(data, LIVE_LENGTH_OFFSET)?;
    if live_length == 0 {
        return Err(RelayError::InvalidFeedData.into());
    }
    let live_cursor = read_u32(data, LIVE_CURSOR_OFFSET)?;

    // The cursor points at the next slot to be written
    let index = (live_cursor as u64 + live_length as u64 - 1) % live_length as u64;
    let base = TRANSMISSIONS_OFFSET + index as usize * TRANSMISSION_SIZE;

    Ok(Some(Round {
        round_id,
        slot: read_u64(data, base + SLOT_OFFSET)?,
        timestamp: read_u32(data, base + TIMESTAMP_OFFSET)?,
        answer: read_i128(data, base + ANSWER_OFFSET)?,
        decimals: data[DECIMALS_OFFSET],
    }))
}

fn read_bytes<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], ProgramError> {
    data.get(offset..offset + N)
        .and_then(|bytes| <[u8; N]>::try_from(bytes).ok())
        .ok_or_else(|| RelayError::InvalidFeedData.into())
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, ProgramError> {
    read_bytes(data, offset).map(u32::from_le_bytes)
}

fn read_u64(data: &[u8], offset: usize) -> Result<u64, ProgramError> {
    read_bytes(data, offset).map(u64::from_le_bytes)
}

fn read_i128(data: &[u8], offset: usize) -> Result<i128, ProgramError> {
    read_bytes(data, offset).map(i128::from_le_bytes)
}
