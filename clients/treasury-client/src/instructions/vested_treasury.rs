use log::debug;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
    sysvar,
};

use crate::{
    errors::Result,
    instructions::{create_fund_account, TreasuryInstruction},
    pda,
    state::validate_vesting_terms,
};

/// Create Vested Treasury
///
/// Vesting starts at the cluster clock time the instruction executes.
///
/// Accounts expected by this instruction:
///   0. `[signer, writable]` The account funding the instruction
///   1. `[]` The treasury authority
///   2. `[signer, writable]` The new treasury account
///   3. `[]` The treasury fund account
///   4. `[]` The token mint
///   5. `[]` The global settings program account
///   6. `[]` Rent sysvar
///   7. `[]` Clock sysvar
///   8. `[]` The SPL Token program
///   9. `[]` System program
#[allow(clippy::too_many_arguments)]
pub fn create_vested_treasury(
    program_id: &Pubkey,
    funder: &Pubkey,
    treasury: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    amount: u64,
    period: u64,
    percentage: u16,
) -> Result<Instruction> {
    validate_vesting_terms(amount, period, percentage)?;

    let (settings, _) = pda::settings_address(program_id)?;
    let fund = pda::vested_treasury_fund(program_id, treasury, mint)?;

    let accounts = vec![
        AccountMeta::new(*funder, true),
        AccountMeta::new_readonly(*authority, false),
        AccountMeta::new(*treasury, true),
        AccountMeta::new_readonly(fund.fund, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(settings, false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(sysvar::clock::id(), false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    debug!(
        "create vested treasury {treasury} for {authority}: {amount} at {percentage} bps every {period}s"
    );
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: TreasuryInstruction::CreateVestedTreasury {
            amount,
            period,
            percentage,
        }
        .pack(),
    })
}

/// Fund account creation followed by vested treasury creation, to be
/// submitted together in this order
#[allow(clippy::too_many_arguments)]
pub fn create_vested_treasury_and_fund_account(
    program_id: &Pubkey,
    funder: &Pubkey,
    treasury: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    amount: u64,
    period: u64,
    percentage: u16,
) -> Result<Vec<Instruction>> {
    validate_vesting_terms(amount, period, percentage)?;

    let fund = pda::vested_treasury_fund(program_id, treasury, mint)?;
    Ok(vec![
        create_fund_account(funder, &fund.authority, mint),
        create_vested_treasury(
            program_id, funder, treasury, authority, mint, amount, period, percentage,
        )?,
    ])
}

/// Withdraw Vested
///
/// Moves everything unlocked so far into the authority's associated token
/// account. The program computes elapsed time from the clock sysvar.
///
/// Accounts expected by this instruction:
///   0. `[signer, writable]` The account funding the instruction
///   1. `[signer]` The treasury authority
///   2. `[writable]` The treasury account
///   3. `[]` The treasury fund authority
///   4. `[writable]` The treasury fund account
///   5. `[writable]` The authority's token account
///   6. `[]` The token mint
///   7. `[]` The global settings program account
///   8. `[]` Clock sysvar
///   9. `[]` The SPL Token program
pub fn withdraw_vested(
    program_id: &Pubkey,
    funder: &Pubkey,
    treasury: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
) -> Result<Instruction> {
    let (settings, _) = pda::settings_address(program_id)?;
    let fund = pda::vested_treasury_fund(program_id, treasury, mint)?;
    let recipient = pda::associated_fund_address(authority, mint);

    let accounts = vec![
        AccountMeta::new(*funder, true),
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*treasury, false),
        AccountMeta::new_readonly(fund.authority, false),
        AccountMeta::new(fund.fund, false),
        AccountMeta::new(recipient, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(settings, false),
        AccountMeta::new_readonly(sysvar::clock::id(), false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];

    debug!("withdraw vested from {treasury} to {recipient}");
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: TreasuryInstruction::WithdrawVested.pack(),
    })
}
