//! Transaction builder for the feed relay program

use feed_relay_program::{PriceFeedAccount, RelayInstruction};
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction,
    transaction::Transaction,
};

/// Build update_price instruction
///
/// The price feed account is written by the program, the aggregator is only
/// read. Neither signs.
pub fn build_update_price_instruction(
    program_id: &Pubkey,
    price_account: &Pubkey,
    feed: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*price_account, false),
        AccountMeta::new_readonly(*feed, false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: vec![RelayInstruction::UpdatePrice as u8],
    }
}

/// Build the instruction allocating a price feed account derived from `payer` and `seed`
pub fn build_create_price_account_instruction(
    payer: &Pubkey,
    price_account: &Pubkey,
    seed: &str,
    lamports: u64,
    program_id: &Pubkey,
) -> Instruction {
    system_instruction::create_account_with_seed(
        payer,
        price_account,
        payer,
        seed,
        lamports,
        PriceFeedAccount::LEN as u64,
        program_id,
    )
}

/// Build a transaction paid and signed by `payer`
pub fn build_transaction(
    instructions: &[Instruction],
    payer: &Keypair,
    recent_blockhash: Hash,
) -> Transaction {
    Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &[payer],
        recent_blockhash,
    )
}
