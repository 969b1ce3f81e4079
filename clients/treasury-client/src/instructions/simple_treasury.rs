use log::debug;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
    sysvar,
};

use crate::{
    errors::{Result, TreasuryClientError},
    instructions::{create_fund_account, TreasuryInstruction},
    pda,
    state::SimpleTreasuryMode,
};

/// Create Simple Treasury
///
/// The treasury is a fresh keypair account that signs its own creation.
/// Its fund account must already exist.
///
/// Accounts expected by this instruction:
///   0. `[signer, writable]` The account funding the instruction
///   1. `[]` The treasury authority
///   2. `[signer, writable]` The new treasury account
///   3. `[]` The treasury fund account
///   4. `[]` The token mint
///   5. `[]` The global settings program account
///   6. `[]` Rent sysvar
///   7. `[]` The SPL Token program
///   8. `[]` System program
pub fn create_simple_treasury(
    program_id: &Pubkey,
    funder: &Pubkey,
    treasury: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    mode: SimpleTreasuryMode,
) -> Result<Instruction> {
    let (settings, _) = pda::settings_address(program_id)?;
    let fund = pda::simple_treasury_fund(program_id, treasury, mint)?;

    let accounts = vec![
        AccountMeta::new(*funder, true),
        AccountMeta::new_readonly(*authority, false),
        AccountMeta::new(*treasury, true),
        AccountMeta::new_readonly(fund.fund, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(settings, false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    debug!("create simple treasury {treasury} ({mode:?}) for {authority}");
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: TreasuryInstruction::CreateSimpleTreasury { mode }.pack(),
    })
}

/// Fund account creation followed by treasury creation. The order is part of
/// the protocol and the pair must be submitted as one transaction.
pub fn create_simple_treasury_and_fund_account(
    program_id: &Pubkey,
    funder: &Pubkey,
    treasury: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    mode: SimpleTreasuryMode,
) -> Result<Vec<Instruction>> {
    let fund = pda::simple_treasury_fund(program_id, treasury, mint)?;
    Ok(vec![
        create_fund_account(funder, &fund.authority, mint),
        create_simple_treasury(program_id, funder, treasury, authority, mint, mode)?,
    ])
}

/// Withdraw from a Simple Treasury
///
/// Accounts expected by this instruction:
///   0. `[signer, writable]` The account funding the instruction
///   1. `[signer]` The treasury authority
///   2. `[writable]` The treasury account
///   3. `[]` The treasury fund authority
///   4. `[writable]` The treasury fund account
///   5. `[writable]` The recipient token account
///   6. `[]` The token mint
///   7. `[]` The global settings program account
///   8. `[]` The SPL Token program
pub fn withdraw_simple(
    program_id: &Pubkey,
    funder: &Pubkey,
    treasury: &Pubkey,
    authority: &Pubkey,
    recipient: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Instruction> {
    if amount == 0 {
        return Err(TreasuryClientError::invalid_argument(
            "amount",
            "must be greater than zero",
        ));
    }

    let (settings, _) = pda::settings_address(program_id)?;
    let fund = pda::simple_treasury_fund(program_id, treasury, mint)?;

    let accounts = vec![
        AccountMeta::new(*funder, true),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*treasury, false),
        AccountMeta::new_readonly(fund.authority, false),
        AccountMeta::new(fund.fund, false),
        AccountMeta::new(*recipient, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(settings, false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];

    debug!("withdraw {amount} from simple treasury {treasury} to {recipient}");
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: TreasuryInstruction::WithdrawSimple { amount }.pack(),
    })
}
