//! Unlock schedule of a vested treasury.
//!
//! Mirrors the program's integer arithmetic: whole elapsed ticks times the
//! per-tick basis points, multiplied before dividing by 10000 in 128-bit
//! width and capped at the initial amount.

use chrono::{DateTime, Utc};
use log::warn;
use solana_program::{clock::UnixTimestamp, pubkey::Pubkey};

use crate::constants::MAX_BPS;
use crate::errors::{Result, TreasuryClientError};
use crate::state::VestedTreasury;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingStatus {
    /// Cumulative amount unlocked so far
    pub unlocked: u64,
    /// Unlocked minus already withdrawn
    pub available: u64,
}

/// Whole seconds since the epoch, flooring any sub-second part
pub fn unix_seconds(now: DateTime<Utc>) -> UnixTimestamp {
    now.timestamp()
}

/// Cumulative amount unlocked at `now`, never more than `initial_amount`
pub fn maximum_available(treasury: &VestedTreasury, now: UnixTimestamp) -> u64 {
    let elapsed = (now as i128) - (treasury.start as i128);
    if elapsed <= 0 {
        return 0;
    }
    // A zero period never decodes; treat one built by hand as never unlocking
    let ticks = match (elapsed as u128).checked_div(treasury.vestment_period as u128) {
        Some(ticks) => ticks,
        None => return 0,
    };

    let unlocked_bps = ticks.saturating_mul(treasury.vestment_percentage as u128);
    if unlocked_bps >= MAX_BPS as u128 {
        return treasury.initial_amount;
    }
    // unlocked_bps < MAX_BPS here, so the quotient is below initial_amount
    let amount = (treasury.initial_amount as u128) * unlocked_bps / (MAX_BPS as u128);
    amount as u64
}

/// Amount the authority may withdraw at `now`
pub fn available(treasury: &VestedTreasury, now: UnixTimestamp) -> u64 {
    let unlocked = maximum_available(treasury, now);
    if treasury.withdrawn > unlocked {
        warn!(
            "vested treasury reports {} withdrawn but only {} unlocked at {}",
            treasury.withdrawn, unlocked, now
        );
    }
    unlocked.saturating_sub(treasury.withdrawn)
}

pub fn vesting_status(treasury: &VestedTreasury, now: UnixTimestamp) -> VestingStatus {
    VestingStatus {
        unlocked: maximum_available(treasury, now),
        available: available(treasury, now),
    }
}

/// Surface a withdrawn amount exceeding the unlocked amount as an error
/// instead of clamping it away
pub fn check_withdrawn(
    address: &Pubkey,
    treasury: &VestedTreasury,
    now: UnixTimestamp,
) -> Result<VestingStatus> {
    let unlocked = maximum_available(treasury, now);
    if treasury.withdrawn > unlocked {
        return Err(TreasuryClientError::IntegrityViolation {
            address: *address,
            withdrawn: treasury.withdrawn,
            unlocked,
        });
    }
    Ok(VestingStatus {
        unlocked,
        available: unlocked - treasury.withdrawn,
    })
}
