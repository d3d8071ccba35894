//! Feed Relay Program
//!
//! Reads the latest answer from a Chainlink aggregator account and keeps a copy
//! of it in a program-owned price feed account.
//!
//! ## Instructions
//!
//! - **UpdatePrice** (0): Read the aggregator and overwrite the stored answer
//!
//! ## Account Structure
//!
//! ```text
//! PriceFeedAccount (16 bytes, borsh):
//!   answer: i128         - Latest oracle answer, unscaled (0 if none observed)
//! ```
//!
//! Scaling to a decimal value happens only when displaying, see [`Decimal`].

#![cfg_attr(target_os = "solana", no_std)]

pub mod decimal;
pub mod entrypoint;
pub mod error;
pub mod feed;
pub mod instructions;
pub mod state;

// Panic handler for no_std builds (only for Solana BPF)
#[cfg(all(target_os = "solana", not(test)))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

pub use decimal::{Decimal, DECIMALS};
pub use error::RelayError;
pub use feed::{Round, CHAINLINK_STORE_ID};
pub use instructions::RelayInstruction;
pub use state::{PriceFeedAccount, PRICE_FEED_ACCOUNT_SIZE};
