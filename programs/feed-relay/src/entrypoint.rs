//! Feed relay program entrypoint

use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};

use crate::instructions::{self, RelayInstruction};

#[cfg(not(feature = "no-entrypoint"))]
pinocchio::entrypoint!(process_instruction);

/// Process feed relay instruction
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let (instruction, data) = RelayInstruction::unpack(instruction_data).inspect_err(|_| {
        msg!("Error: Unknown instruction");
    })?;

    match instruction {
        RelayInstruction::UpdatePrice => {
            msg!("Instruction: UpdatePrice");
            instructions::process_update_price(program_id, accounts, data)
        }
    }
}
