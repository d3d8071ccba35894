//! Client errors

use pinocchio::program_error::ProgramError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot find the price feed account {0}")]
    AccountNotFound(Pubkey),

    #[error("program {0} is not deployed")]
    ProgramNotDeployed(Pubkey),

    #[error("program {0} is not executable")]
    ProgramNotExecutable(Pubkey),

    #[error("price feed account {0} is not owned by program {1}")]
    AccountNotOwnedByProgram(Pubkey, Pubkey),

    #[error("failed to decode price feed account: {0:?}")]
    Decode(ProgramError),

    #[error(transparent)]
    Seed(#[from] solana_sdk::pubkey::PubkeyError),

    #[error(transparent)]
    Rpc(#[from] solana_client::client_error::ClientError),
}
