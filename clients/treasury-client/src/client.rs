//! Thin orchestration over the ledger transport.
//!
//! The transport is reached only through [`AccountFetcher`] and
//! [`InstructionSubmitter`]; retries, commitment and signing keys all
//! belong to the implementor.

use chrono::{DateTime, Utc};
use log::debug;
use solana_program::{clock::UnixTimestamp, instruction::Instruction, pubkey::Pubkey};

use crate::{
    codec::{self, AccountRecord},
    errors::{Result, TreasuryClientError},
    instructions, pda,
    state::{
        Settings, SimpleTreasury, SimpleTreasuryMode, UserCommunity, VestedTreasury,
        ZointsCommunity,
    },
    vesting::{self, VestingStatus},
};

pub trait AccountFetcher {
    /// Raw data of the account at `address`, `None` if it does not exist
    fn fetch_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;
}

pub trait InstructionSubmitter {
    type Receipt;

    /// Sign with the keys behind `signers` and submit `instructions` as a
    /// single transaction, in the given order. Partial submission is a failure.
    fn submit(&self, instructions: &[Instruction], signers: &[Pubkey]) -> Result<Self::Receipt>;
}

pub struct TreasuryClient<F> {
    fetcher: F,
    program_id: Pubkey,
}

impl<F: AccountFetcher> TreasuryClient<F> {
    pub fn new(fetcher: F, program_id: Pubkey) -> Self {
        Self {
            fetcher,
            program_id,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    fn fetch<T: AccountRecord>(&self, address: &Pubkey) -> Result<T> {
        let data = self
            .fetcher
            .fetch_account_data(address)?
            .ok_or(TreasuryClientError::NotFound {
                record: T::LAYOUT.record,
                address: *address,
            })?;
        debug!("fetched {} bytes of {} at {address}", data.len(), T::LAYOUT.record);
        codec::decode(&data)
    }

    pub fn settings(&self) -> Result<Settings> {
        let (address, _) = pda::settings_address(&self.program_id)?;
        self.fetch(&address)
    }

    pub fn simple_treasury(&self, address: &Pubkey) -> Result<SimpleTreasury> {
        self.fetch(address)
    }

    pub fn vested_treasury(&self, address: &Pubkey) -> Result<VestedTreasury> {
        self.fetch(address)
    }

    pub fn user_community(&self, user: &Pubkey) -> Result<UserCommunity> {
        let (address, _) = pda::user_community_address(&self.program_id, user)?;
        self.fetch(&address)
    }

    pub fn zoints_community(&self, name: &[u8]) -> Result<ZointsCommunity> {
        let (address, _) = pda::zoints_community_address(&self.program_id, name)?;
        self.fetch(&address)
    }

    /// Unlocked and withdrawable amounts of a vested treasury at `now`.
    /// A treasury that has paid out more than it unlocked is an error.
    pub fn vesting_status(&self, address: &Pubkey, now: UnixTimestamp) -> Result<VestingStatus> {
        let treasury = self.vested_treasury(address)?;
        vesting::check_withdrawn(address, &treasury, now)
    }

    pub fn vesting_status_at(&self, address: &Pubkey, now: DateTime<Utc>) -> Result<VestingStatus> {
        self.vesting_status(address, vesting::unix_seconds(now))
    }

    pub fn initialize<S: InstructionSubmitter>(
        &self,
        submitter: &S,
        funder: &Pubkey,
        mint: &Pubkey,
    ) -> Result<S::Receipt> {
        let ix = instructions::initialize(&self.program_id, funder, mint)?;
        submitter.submit(&[ix], &[*funder])
    }

    /// Create the fund account and a simple treasury for the deployment token
    pub fn create_simple_treasury<S: InstructionSubmitter>(
        &self,
        submitter: &S,
        funder: &Pubkey,
        treasury: &Pubkey,
        authority: &Pubkey,
        mode: SimpleTreasuryMode,
    ) -> Result<S::Receipt> {
        let settings = self.settings()?;
        let ixs = instructions::create_simple_treasury_and_fund_account(
            &self.program_id,
            funder,
            treasury,
            authority,
            &settings.token,
            mode,
        )?;
        submitter.submit(&ixs, &signers(funder, treasury))
    }

    /// Create the fund account and a vested treasury for the deployment token
    #[allow(clippy::too_many_arguments)]
    pub fn create_vested_treasury<S: InstructionSubmitter>(
        &self,
        submitter: &S,
        funder: &Pubkey,
        treasury: &Pubkey,
        authority: &Pubkey,
        amount: u64,
        period: u64,
        percentage: u16,
    ) -> Result<S::Receipt> {
        let settings = self.settings()?;
        let ixs = instructions::create_vested_treasury_and_fund_account(
            &self.program_id,
            funder,
            treasury,
            authority,
            &settings.token,
            amount,
            period,
            percentage,
        )?;
        submitter.submit(&ixs, &signers(funder, treasury))
    }

    pub fn withdraw_simple<S: InstructionSubmitter>(
        &self,
        submitter: &S,
        funder: &Pubkey,
        treasury: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<S::Receipt> {
        let state = self.simple_treasury(treasury)?;
        let ix = instructions::withdraw_simple(
            &self.program_id,
            funder,
            treasury,
            &state.authority,
            recipient,
            &state.mint,
            amount,
        )?;
        submitter.submit(&[ix], &signers(funder, &state.authority))
    }

    pub fn withdraw_vested<S: InstructionSubmitter>(
        &self,
        submitter: &S,
        funder: &Pubkey,
        treasury: &Pubkey,
    ) -> Result<S::Receipt> {
        let state = self.vested_treasury(treasury)?;
        let ix = instructions::withdraw_vested(
            &self.program_id,
            funder,
            treasury,
            &state.authority,
            &state.mint,
        )?;
        submitter.submit(&[ix], &signers(funder, &state.authority))
    }
}

fn signers(funder: &Pubkey, other: &Pubkey) -> Vec<Pubkey> {
    if funder == other {
        vec![*funder]
    } else {
        vec![*funder, *other]
    }
}
