//! Client library for the Zoints treasury program.
//!
//! Derives program addresses, decodes program accounts, builds instructions
//! and computes vested treasury availability. Talking to a cluster goes
//! through the [`client::AccountFetcher`] and [`client::InstructionSubmitter`]
//! traits.

pub mod client;
pub mod codec;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod vesting;

pub use client::{AccountFetcher, InstructionSubmitter, TreasuryClient};
pub use errors::{DecodeFailure, Result, TreasuryClientError};
pub use instructions::TreasuryInstruction;
pub use state::*;
pub use vesting::VestingStatus;
