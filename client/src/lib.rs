//! Feed Relay Client
//!
//! Asks the feed relay program to copy the latest Chainlink answer into its
//! price feed account and reads the stored answer back.

pub mod config;
pub mod error;
pub mod relay;
pub mod tx_builder;

pub use config::Config;
pub use error::ClientError;
pub use relay::{
    check_program, decode_price_account, ensure_price_account, price_account_address,
    read_latest_price, request_price_update,
};
