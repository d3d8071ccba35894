//! Feed Relay CLI
//!
//! Off-chain driver for the feed relay program: creates the price feed
//! account, requests price updates and reports the stored answer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feed_relay_client::{relay, Config};
use feed_relay_program::{Decimal, DECIMALS};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{Keypair, Signer},
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "feed-relay", version, about = "Relay Chainlink prices on Solana")]
struct Cli {
    /// Path to the config file, defaults to $FEED_RELAY_CONFIG or feed-relay.toml
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Write the default devnet config to the config path
    InitConfig,
    #[command(flatten)]
    Relay(RelayCommand),
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum RelayCommand {
    /// Check the program is deployed and create the price feed account
    Setup,
    /// Ask the program to refresh the stored price
    Update,
    /// Print the stored price
    Report,
    /// Setup, update and report
    Run,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(|| Config::path().into());
    let command = match cli.command.unwrap_or(Command::Relay(RelayCommand::Run)) {
        Command::InitConfig => return Config::write_default(&config_path),
        Command::Relay(command) => command,
    };

    // Load configuration
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        log::warn!("{:#}, using default devnet config", e);
        Config::default_devnet()
    });

    log::info!("Connected to RPC: {}", config.rpc_url);
    log::info!("Feed relay program: {}", config.program_id);

    let client = RpcClient::new_with_commitment(config.rpc_url.clone(), CommitmentConfig::confirmed());

    let payer = load_keypair(&config.keypair_path)?;
    log::info!("Payer wallet: {}", payer.pubkey());

    match command {
        RelayCommand::Setup => setup(&client, &config, &payer).await?,
        RelayCommand::Update => {
            relay::request_price_update(&client, &config, &payer).await?;
        }
        RelayCommand::Report => report(&client, &config, &payer).await?,
        RelayCommand::Run => {
            setup(&client, &config, &payer).await?;
            relay::request_price_update(&client, &config, &payer).await?;
            report(&client, &config, &payer).await?;
        }
    }

    Ok(())
}

async fn setup(client: &RpcClient, config: &Config, payer: &Keypair) -> Result<()> {
    relay::check_program(client, &config.program_id).await?;
    let price_account = relay::ensure_price_account(client, config, payer).await?;
    log::info!("Price feed account: {}", price_account);
    Ok(())
}

async fn report(client: &RpcClient, config: &Config, payer: &Keypair) -> Result<()> {
    let price_account =
        relay::price_account_address(&payer.pubkey(), &config.account_seed, &config.program_id)?;
    let answer = relay::read_latest_price(client, &price_account).await?;

    println!(
        "Current price is {} (raw answer {})",
        Decimal::new(answer, DECIMALS),
        answer
    );
    Ok(())
}

/// Load payer keypair from file
fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded_path = shellexpand::tilde(path);
    let bytes = std::fs::read(expanded_path.as_ref())
        .context(format!("Failed to read keypair from {}", path))?;

    let keypair = if bytes.first() == Some(&b'[') {
        // JSON format
        let json_data: Vec<u8> =
            serde_json::from_slice(&bytes).context("Failed to parse keypair JSON")?;
        Keypair::try_from(&json_data[..]).context("Failed to create keypair from bytes")?
    } else {
        // Binary format
        Keypair::try_from(&bytes[..]).context("Failed to create keypair from bytes")?
    };

    Ok(keypair)
}
