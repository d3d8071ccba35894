//! End-to-end relay flow against in-memory accounts
//!
//! Each scenario follows the client's update instruction to the accounts it
//! names, runs the program's relay step on their data and reads the answer
//! back through the client decoder.

use feed_relay_client::{decode_price_account, tx_builder, ClientError};
use feed_relay_integration_tests::{new_price_account, MockFeed};
use feed_relay_program::{
    entrypoint::process_instruction, instructions::relay_price, Decimal, RelayInstruction,
    CHAINLINK_STORE_ID, DECIMALS,
};
use proptest::prelude::*;
use solana_sdk::{account::Account, pubkey::Pubkey};
use std::collections::HashMap;

struct Ledger {
    program_id: Pubkey,
    price_key: Pubkey,
    feed_key: Pubkey,
    accounts: HashMap<Pubkey, Account>,
}

impl Ledger {
    fn new(feed: &MockFeed) -> Self {
        let program_id = Pubkey::new_unique();
        let price_key = Pubkey::new_unique();
        let feed_key = Pubkey::new_unique();

        let mut accounts = HashMap::new();
        accounts.insert(price_key, new_price_account(&program_id));
        accounts.insert(feed_key, feed.account());

        Self {
            program_id,
            price_key,
            feed_key,
            accounts,
        }
    }

    fn set_feed(&mut self, feed: &MockFeed) {
        self.accounts.insert(self.feed_key, feed.account());
    }

    /// Execute the client's update instruction the way the program handler does
    fn request_price_update(&mut self) -> Option<i128> {
        let ix = tx_builder::build_update_price_instruction(
            &self.program_id,
            &self.price_key,
            &self.feed_key,
        );
        assert_eq!(ix.program_id, self.program_id);

        let (instruction, _) = RelayInstruction::unpack(&ix.data).unwrap();
        assert_eq!(instruction, RelayInstruction::UpdatePrice);

        let price_meta = &ix.accounts[0];
        let feed_meta = &ix.accounts[1];
        assert!(price_meta.is_writable);

        let feed = self.accounts[&feed_meta.pubkey].clone();
        assert_eq!(feed.owner, Pubkey::new_from_array(CHAINLINK_STORE_ID));

        let price = self.accounts.get_mut(&price_meta.pubkey).unwrap();
        assert_eq!(price.owner, self.program_id);

        relay_price(&feed.data, &mut price.data).unwrap()
    }

    fn read_latest_price(&self) -> Result<i128, ClientError> {
        decode_price_account(&self.price_key, self.accounts.get(&self.price_key))
    }
}

#[test]
fn test_fresh_account_reads_zero() {
    let ledger = Ledger::new(&MockFeed::with_answer(1));
    assert_eq!(ledger.read_latest_price().unwrap(), 0);
}

#[test]
fn test_oracle_without_price_stores_zero() {
    let mut feed = MockFeed::with_answer(9_000_000_000);
    let mut ledger = Ledger::new(&feed);

    ledger.request_price_update();
    assert_eq!(ledger.read_latest_price().unwrap(), 9_000_000_000);

    // Aggregator replaced by one that has not reported yet
    feed = MockFeed::empty();
    ledger.set_feed(&feed);

    assert_eq!(ledger.request_price_update(), None);
    assert_eq!(ledger.read_latest_price().unwrap(), 0);
}

#[test]
fn test_oracle_price_stored_exactly() {
    let mut ledger = Ledger::new(&MockFeed::with_answer(14_703_512_345));

    assert_eq!(ledger.request_price_update(), Some(14_703_512_345));
    assert_eq!(ledger.read_latest_price().unwrap(), 14_703_512_345);
}

#[test]
fn test_follows_latest_round() {
    let mut feed = MockFeed::with_answer(100);
    let mut ledger = Ledger::new(&feed);
    ledger.request_price_update();

    feed.report(200);
    feed.report(-300);
    ledger.set_feed(&feed);
    ledger.request_price_update();

    assert_eq!(ledger.read_latest_price().unwrap(), -300);
}

#[test]
fn test_missing_account_fails_read() {
    let mut ledger = Ledger::new(&MockFeed::with_answer(1));
    let price_key = ledger.price_key;
    ledger.accounts.remove(&price_key);

    let err = ledger.read_latest_price().unwrap_err();
    assert!(matches!(err, ClientError::AccountNotFound(key) if key == price_key));
}

#[test]
fn test_displayed_price() {
    let mut ledger = Ledger::new(&MockFeed::with_answer(142_500_000_000));
    ledger.request_price_update();

    let answer = ledger.read_latest_price().unwrap();
    assert_eq!(Decimal::new(answer, DECIMALS).to_string(), "142.500000000");
}

#[test]
fn test_entrypoint_rejects_unknown_instruction() {
    let program_id = [7u8; 32];
    assert!(process_instruction(&program_id, &[], &[9]).is_err());
    assert!(process_instruction(&program_id, &[], &[]).is_err());
}

#[test]
fn test_entrypoint_requires_accounts() {
    let program_id = [7u8; 32];
    assert!(process_instruction(&program_id, &[], &[0]).is_err());
}

proptest! {
    #[test]
    fn prop_read_path_reproduces_stored_answer(answer: i128) {
        let mut ledger = Ledger::new(&MockFeed::with_answer(answer));
        ledger.request_price_update();
        prop_assert_eq!(ledger.read_latest_price().unwrap(), answer);
    }
}
