//! Feed Relay Integration Tests
//!
//! Drives the full relay flow without a validator: the client builds the
//! update instruction, the program's relay step runs against in-memory
//! account data, and the client decodes the result.
//!
//! Tests against the compiled program live in `programs/feed-relay/tests` and
//! run under `cargo test-sbf`.

use feed_relay_program::feed::{
    LATEST_ROUND_ID_OFFSET, LIVE_CURSOR_OFFSET, LIVE_LENGTH_OFFSET, TRANSMISSIONS_OFFSET,
    TRANSMISSION_SIZE,
};
use feed_relay_program::{PriceFeedAccount, CHAINLINK_STORE_ID};
use solana_sdk::{account::Account, pubkey::Pubkey};

/// In-memory stand-in for a Chainlink aggregator account
pub struct MockFeed {
    pub round_id: u32,
    pub answers: Vec<i128>,
}

impl MockFeed {
    /// Aggregator that has never reported a round
    pub fn empty() -> Self {
        Self {
            round_id: 0,
            answers: vec![0],
        }
    }

    /// Aggregator whose latest round reported `answer`
    pub fn with_answer(answer: i128) -> Self {
        Self {
            round_id: 1,
            answers: vec![answer],
        }
    }

    /// Push a new round into the live ring
    pub fn report(&mut self, answer: i128) {
        self.round_id += 1;
        self.answers.push(answer);
    }

    /// Account data in the store program's transmissions layout
    pub fn data(&self) -> Vec<u8> {
        let live_length = self.answers.len() as u32;
        let mut data = vec![0u8; TRANSMISSIONS_OFFSET + self.answers.len() * TRANSMISSION_SIZE];

        data[LATEST_ROUND_ID_OFFSET..LATEST_ROUND_ID_OFFSET + 4]
            .copy_from_slice(&self.round_id.to_le_bytes());
        data[LIVE_LENGTH_OFFSET..LIVE_LENGTH_OFFSET + 4].copy_from_slice(&live_length.to_le_bytes());
        // Cursor wraps back to the start once the ring is full
        data[LIVE_CURSOR_OFFSET..LIVE_CURSOR_OFFSET + 4].copy_from_slice(&0u32.to_le_bytes());

        for (i, answer) in self.answers.iter().enumerate() {
            let base = TRANSMISSIONS_OFFSET + i * TRANSMISSION_SIZE + 16;
            data[base..base + 16].copy_from_slice(&answer.to_le_bytes());
        }
        data
    }

    pub fn account(&self) -> Account {
        Account {
            lamports: 1_000_000_000,
            data: self.data(),
            owner: Pubkey::new_from_array(CHAINLINK_STORE_ID),
            executable: false,
            rent_epoch: 0,
        }
    }
}

/// Freshly allocated price feed account owned by `program_id`
pub fn new_price_account(program_id: &Pubkey) -> Account {
    Account {
        lamports: 1_000_000,
        data: vec![0; PriceFeedAccount::LEN],
        owner: *program_id,
        executable: false,
        rent_epoch: 0,
    }
}
