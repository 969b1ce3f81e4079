pub mod initialize;
pub mod simple_treasury;
pub mod vested_treasury;

pub use initialize::*;
pub use simple_treasury::*;
pub use vested_treasury::*;

use solana_program::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::codec::{
    FieldReader, FieldWriter, Layout, CREATE_SIMPLE_TREASURY_LAYOUT,
    CREATE_VESTED_TREASURY_LAYOUT, INITIALIZE_LAYOUT, WITHDRAW_SIMPLE_LAYOUT,
    WITHDRAW_VESTED_LAYOUT,
};
use crate::errors::{DecodeFailure, Result, TreasuryClientError};
use crate::state::SimpleTreasuryMode;

/// Instruction payloads understood by the treasury program.
///
/// The first payload byte is the discriminant; the remaining bytes follow
/// the matching layout in [`crate::codec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreasuryInstruction {
    /// One-time creation of the settings account
    Initialize,
    CreateSimpleTreasury {
        mode: SimpleTreasuryMode,
    },
    WithdrawSimple {
        amount: u64,
    },
    CreateVestedTreasury {
        amount: u64,
        period: u64,
        percentage: u16,
    },
    /// Withdraw everything currently unlocked; the program reads the clock
    WithdrawVested,
}

impl TreasuryInstruction {
    pub const INITIALIZE: u8 = 0;
    pub const CREATE_SIMPLE_TREASURY: u8 = 1;
    pub const WITHDRAW_SIMPLE: u8 = 2;
    pub const CREATE_VESTED_TREASURY: u8 = 3;
    pub const WITHDRAW_VESTED: u8 = 4;

    pub const fn discriminant(&self) -> u8 {
        match self {
            Self::Initialize => Self::INITIALIZE,
            Self::CreateSimpleTreasury { .. } => Self::CREATE_SIMPLE_TREASURY,
            Self::WithdrawSimple { .. } => Self::WITHDRAW_SIMPLE,
            Self::CreateVestedTreasury { .. } => Self::CREATE_VESTED_TREASURY,
            Self::WithdrawVested => Self::WITHDRAW_VESTED,
        }
    }

    pub fn layout(&self) -> &'static Layout {
        match self {
            Self::Initialize => &INITIALIZE_LAYOUT,
            Self::CreateSimpleTreasury { .. } => &CREATE_SIMPLE_TREASURY_LAYOUT,
            Self::WithdrawSimple { .. } => &WITHDRAW_SIMPLE_LAYOUT,
            Self::CreateVestedTreasury { .. } => &CREATE_VESTED_TREASURY_LAYOUT,
            Self::WithdrawVested => &WITHDRAW_VESTED_LAYOUT,
        }
    }

    fn layout_of(discriminant: u8) -> Option<&'static Layout> {
        match discriminant {
            Self::INITIALIZE => Some(&INITIALIZE_LAYOUT),
            Self::CREATE_SIMPLE_TREASURY => Some(&CREATE_SIMPLE_TREASURY_LAYOUT),
            Self::WITHDRAW_SIMPLE => Some(&WITHDRAW_SIMPLE_LAYOUT),
            Self::CREATE_VESTED_TREASURY => Some(&CREATE_VESTED_TREASURY_LAYOUT),
            Self::WITHDRAW_VESTED => Some(&WITHDRAW_VESTED_LAYOUT),
            _ => None,
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut writer = FieldWriter::new(self.layout());
        writer.write_u8(self.discriminant());
        match self {
            Self::Initialize | Self::WithdrawVested => {}
            Self::CreateSimpleTreasury { mode } => {
                writer.write_u8(mode.as_u8());
            }
            Self::WithdrawSimple { amount } => {
                writer.write_u64(*amount);
            }
            Self::CreateVestedTreasury {
                amount,
                period,
                percentage,
            } => {
                writer
                    .write_u64(*amount)
                    .write_u64(*period)
                    .write_u16(*percentage);
            }
        }
        writer.finish()
    }

    pub fn unpack(data: &[u8]) -> Result<Self> {
        let (&discriminant, _) = data.split_first().ok_or_else(|| {
            TreasuryClientError::decode(
                "TreasuryInstruction",
                DecodeFailure::TooShort {
                    expected: 1,
                    actual: 0,
                },
            )
        })?;
        let layout = Self::layout_of(discriminant).ok_or_else(|| {
            TreasuryClientError::decode(
                "TreasuryInstruction",
                DecodeFailure::UnknownDiscriminant(discriminant),
            )
        })?;

        let mut reader = FieldReader::new(layout, data)?;
        if data.len() != layout.width() {
            return Err(TreasuryClientError::decode(
                layout.record,
                DecodeFailure::TrailingBytes {
                    expected: layout.width(),
                    actual: data.len(),
                },
            ));
        }
        reader.read_u8()?;
        let instruction = match discriminant {
            Self::INITIALIZE => Self::Initialize,
            Self::CREATE_SIMPLE_TREASURY => Self::CreateSimpleTreasury {
                mode: reader.read_enum(SimpleTreasuryMode::from_u8)?,
            },
            Self::WITHDRAW_SIMPLE => Self::WithdrawSimple {
                amount: reader.read_u64()?,
            },
            Self::CREATE_VESTED_TREASURY => Self::CreateVestedTreasury {
                amount: reader.read_u64()?,
                period: reader.read_u64()?,
                percentage: reader.read_u16()?,
            },
            Self::WITHDRAW_VESTED => Self::WithdrawVested,
            unknown => {
                return Err(TreasuryClientError::decode(
                    "TreasuryInstruction",
                    DecodeFailure::UnknownDiscriminant(unknown),
                ))
            }
        };
        Ok(instruction)
    }
}

/// Create the associated token account a fund authority holds `mint` in.
/// Always precedes the treasury creation that references it.
pub fn create_fund_account(funder: &Pubkey, fund_authority: &Pubkey, mint: &Pubkey) -> Instruction {
    create_associated_token_account(funder, fund_authority, mint, &spl_token::id())
}
