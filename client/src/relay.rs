//! Client side of the price relay: request an update, read the stored answer

use crate::{config::Config, error::ClientError, tx_builder};
use feed_relay_program::PriceFeedAccount;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    account::Account,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};

/// Fail unless `program_id` is a deployed, executable program
pub async fn check_program(client: &RpcClient, program_id: &Pubkey) -> Result<(), ClientError> {
    let account = client
        .get_account_with_commitment(program_id, client.commitment())
        .await?
        .value
        .ok_or(ClientError::ProgramNotDeployed(*program_id))?;

    if !account.executable {
        return Err(ClientError::ProgramNotExecutable(*program_id));
    }

    log::debug!("Program {} is deployed", program_id);
    Ok(())
}

/// Address of the price feed account derived from the payer and seed
pub fn price_account_address(
    payer: &Pubkey,
    seed: &str,
    program_id: &Pubkey,
) -> Result<Pubkey, ClientError> {
    Ok(Pubkey::create_with_seed(payer, seed, program_id)?)
}

/// Create the price feed account if it does not exist yet
pub async fn ensure_price_account(
    client: &RpcClient,
    config: &Config,
    payer: &Keypair,
) -> Result<Pubkey, ClientError> {
    let address = price_account_address(&payer.pubkey(), &config.account_seed, &config.program_id)?;

    let existing = client
        .get_account_with_commitment(&address, client.commitment())
        .await?
        .value;

    if let Some(account) = existing {
        if account.owner != config.program_id {
            return Err(ClientError::AccountNotOwnedByProgram(address, config.program_id));
        }
        log::debug!("Price feed account {} already exists", address);
        return Ok(address);
    }

    log::info!("Creating price feed account {}", address);

    let lamports = client
        .get_minimum_balance_for_rent_exemption(PriceFeedAccount::LEN)
        .await?;
    let instruction = tx_builder::build_create_price_account_instruction(
        &payer.pubkey(),
        &address,
        &config.account_seed,
        lamports,
        &config.program_id,
    );

    let recent_blockhash = client.get_latest_blockhash().await?;
    let transaction = tx_builder::build_transaction(&[instruction], payer, recent_blockhash);
    let signature = client.send_and_confirm_transaction(&transaction).await?;

    log::info!("Price feed account created: {}", signature);
    Ok(address)
}

/// Ask the program to refresh the stored answer from the configured aggregator
pub async fn request_price_update(
    client: &RpcClient,
    config: &Config,
    payer: &Keypair,
) -> Result<Signature, ClientError> {
    let price_account =
        price_account_address(&payer.pubkey(), &config.account_seed, &config.program_id)?;

    log::info!("Requesting price update from feed {}", config.feed);

    let instruction =
        tx_builder::build_update_price_instruction(&config.program_id, &price_account, &config.feed);
    let recent_blockhash = client.get_latest_blockhash().await?;
    let transaction = tx_builder::build_transaction(&[instruction], payer, recent_blockhash);

    let signature = client.send_and_confirm_transaction(&transaction).await?;
    log::info!("Price update confirmed: {}", signature);

    Ok(signature)
}

/// Fetch the price feed account and return its stored answer
pub async fn read_latest_price(
    client: &RpcClient,
    price_account: &Pubkey,
) -> Result<i128, ClientError> {
    log::debug!("Reading price feed account {}", price_account);

    let account = client
        .get_account_with_commitment(price_account, client.commitment())
        .await?
        .value;

    decode_price_account(price_account, account.as_ref())
}

/// Decode the stored answer, failing if the account does not exist
pub fn decode_price_account(
    address: &Pubkey,
    account: Option<&Account>,
) -> Result<i128, ClientError> {
    let account = account.ok_or(ClientError::AccountNotFound(*address))?;

    let state = PriceFeedAccount::load(&account.data).map_err(ClientError::Decode)?;
    Ok(state.answer)
}
