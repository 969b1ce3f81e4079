use log::debug;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
    sysvar,
};

use crate::{errors::Result, instructions::TreasuryInstruction, pda};

/// Initialize the treasury program
///
/// Accounts expected by this instruction:
///   0. `[signer]` The account funding the instruction
///   1. `[]` The token mint every treasury will hold
///   2. `[writable]` The global settings program account
///   3. `[]` Rent sysvar
///   4. `[]` System program
pub fn initialize(program_id: &Pubkey, funder: &Pubkey, mint: &Pubkey) -> Result<Instruction> {
    let (settings, _) = pda::settings_address(program_id)?;

    let accounts = vec![
        AccountMeta::new_readonly(*funder, true),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(settings, false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    debug!("initialize: settings {settings} for mint {mint}");
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: TreasuryInstruction::Initialize.pack(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_accounts() {
        let program_id = Pubkey::new_unique();
        let funder = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let ix = initialize(&program_id, &funder, &mint).unwrap();
        let (settings, _) = pda::settings_address(&program_id).unwrap();

        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.data, vec![0]);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new_readonly(funder, true),
                AccountMeta::new_readonly(mint, false),
                AccountMeta::new(settings, false),
                AccountMeta::new_readonly(sysvar::rent::id(), false),
                AccountMeta::new_readonly(system_program::id(), false),
            ]
        );
    }
}
