//! Program-derived addresses used by the treasury program.
//!
//! Every seed path here mirrors the on-chain derivation exactly. Seed
//! literals come from [`crate::constants`] and never appear inline.

use log::debug;
use solana_program::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

use crate::{
    constants::*,
    errors::{Result, TreasuryClientError},
    state::valid_community_name,
};

/// Fund authority PDA of a treasury together with the token account it owns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FundAccounts {
    pub authority: Pubkey,
    pub authority_bump: u8,
    pub fund: Pubkey,
}

/// Search for the canonical program address of `seeds`.
///
/// Fails with [`TreasuryClientError::DerivationExhausted`] when every bump
/// lands on the curve. Retrying with the same inputs cannot succeed.
pub fn derive_address(program_id: &Pubkey, seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    let (address, bump) = Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(TreasuryClientError::DerivationExhausted)?;
    debug!("derived {address} (bump {bump}) under program {program_id}");
    Ok((address, bump))
}

pub fn settings_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[SETTINGS_SEED])
}

pub fn simple_treasury_fund_authority(
    program_id: &Pubkey,
    treasury: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[SIMPLE_FUND_AUTHORITY_SEED, treasury.as_ref()])
}

pub fn vested_treasury_fund_authority(
    program_id: &Pubkey,
    treasury: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[VESTED_FUND_AUTHORITY_SEED, treasury.as_ref()])
}

/// Associated token account of `fund_authority` for `mint` under the SPL
/// Token program. Off-curve owners are allowed.
pub fn associated_fund_address(fund_authority: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(fund_authority, mint)
}

pub fn simple_treasury_fund(
    program_id: &Pubkey,
    treasury: &Pubkey,
    mint: &Pubkey,
) -> Result<FundAccounts> {
    let (authority, authority_bump) = simple_treasury_fund_authority(program_id, treasury)?;
    Ok(FundAccounts {
        authority,
        authority_bump,
        fund: associated_fund_address(&authority, mint),
    })
}

pub fn vested_treasury_fund(
    program_id: &Pubkey,
    treasury: &Pubkey,
    mint: &Pubkey,
) -> Result<FundAccounts> {
    let (authority, authority_bump) = vested_treasury_fund_authority(program_id, treasury)?;
    Ok(FundAccounts {
        authority,
        authority_bump,
        fund: associated_fund_address(&authority, mint),
    })
}

pub fn user_community_address(program_id: &Pubkey, user: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[USER_COMMUNITY_SEED, user.as_ref()])
}

/// Address of a named community. The name is validated before deriving.
pub fn zoints_community_address(program_id: &Pubkey, name: &[u8]) -> Result<(Pubkey, u8)> {
    valid_community_name(name)?;
    derive_address(program_id, &[ZOINTS_COMMUNITY_SEED, name])
}

/// Simple treasury address in the authority-derived protocol generation.
///
/// Builders in this crate address treasuries by a fresh keypair instead;
/// this stays available for reading accounts created under the older scheme.
pub fn legacy_simple_treasury_address(
    program_id: &Pubkey,
    authority: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[SIMPLE_TREASURY_SEED, authority.as_ref()])
}

/// Fund account in the authority-derived protocol generation
pub fn legacy_simple_treasury_fund_address(
    program_id: &Pubkey,
    authority: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive_address(program_id, &[SIMPLE_TREASURY_FUND_SEED, authority.as_ref()])
}
