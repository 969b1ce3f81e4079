use solana_program::{clock::UnixTimestamp, pubkey::Pubkey};

use crate::codec::{AccountRecord, FieldReader, FieldWriter, Layout, VESTED_TREASURY_LAYOUT};
use crate::constants::MAX_BPS;
use crate::errors::{DecodeFailure, Result, TreasuryClientError};

/// Time-released fund. Every `vestment_period` seconds after `start` another
/// `vestment_percentage` basis points of `initial_amount` unlock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestedTreasury {
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub initial_amount: u64,
    pub start: UnixTimestamp,
    /// Seconds per vesting tick, never zero
    pub vestment_period: u64,
    /// Basis points unlocked per tick (denominator 10000)
    pub vestment_percentage: u16,
    pub withdrawn: u64,
}

impl VestedTreasury {
    /// Build a fresh treasury snapshot, enforcing the program's creation rules
    pub fn new(
        mint: Pubkey,
        authority: Pubkey,
        initial_amount: u64,
        start: UnixTimestamp,
        vestment_period: u64,
        vestment_percentage: u16,
    ) -> Result<Self> {
        validate_vesting_terms(initial_amount, vestment_period, vestment_percentage)?;
        Ok(Self {
            mint,
            authority,
            initial_amount,
            start,
            vestment_period,
            vestment_percentage,
            withdrawn: 0,
        })
    }
}

/// Creation-time domain of the vesting parameters
pub fn validate_vesting_terms(amount: u64, period: u64, percentage: u16) -> Result<()> {
    if amount == 0 {
        return Err(TreasuryClientError::invalid_argument(
            "amount",
            "must be greater than zero",
        ));
    }
    if period == 0 {
        return Err(TreasuryClientError::invalid_argument(
            "period",
            "must be greater than zero",
        ));
    }
    if percentage == 0 || percentage > MAX_BPS {
        return Err(TreasuryClientError::invalid_argument(
            "percentage",
            format!("{percentage} is outside 1..={MAX_BPS} basis points"),
        ));
    }
    Ok(())
}

impl AccountRecord for VestedTreasury {
    const LAYOUT: &'static Layout = &VESTED_TREASURY_LAYOUT;

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        let mint = reader.read_pubkey()?;
        let authority = reader.read_pubkey()?;
        let initial_amount = reader.read_u64()?;
        let start = reader.read_i64()?;
        let vestment_period = reader.read_u64()?;
        if vestment_period == 0 {
            return Err(TreasuryClientError::decode(
                reader.layout().record,
                DecodeFailure::InvalidFieldValue {
                    field: "vestment_period",
                },
            ));
        }
        let vestment_percentage = reader.read_u16()?;
        let withdrawn = reader.read_u64()?;

        Ok(Self {
            mint,
            authority,
            initial_amount,
            start,
            vestment_period,
            vestment_percentage,
            withdrawn,
        })
    }

    fn write_fields(&self, writer: &mut FieldWriter) {
        writer
            .write_pubkey(&self.mint)
            .write_pubkey(&self.authority)
            .write_u64(self.initial_amount)
            .write_i64(self.start)
            .write_u64(self.vestment_period)
            .write_u16(self.vestment_percentage)
            .write_u64(self.withdrawn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    fn sample() -> VestedTreasury {
        VestedTreasury {
            mint: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            initial_amount: 100_000,
            start: 1_625_000_000,
            vestment_period: 10,
            vestment_percentage: 1000,
            withdrawn: 10_000,
        }
    }

    #[test]
    fn test_field_offsets() {
        let treasury = sample();
        let bytes = encode(&treasury);

        assert_eq!(bytes.len(), 98);
        assert_eq!(&bytes[0..32], treasury.mint.as_ref());
        assert_eq!(&bytes[32..64], treasury.authority.as_ref());
        assert_eq!(&bytes[64..72], &100_000u64.to_le_bytes());
        assert_eq!(&bytes[72..80], &1_625_000_000i64.to_le_bytes());
        assert_eq!(&bytes[80..88], &10u64.to_le_bytes());
        assert_eq!(&bytes[88..90], &1000u16.to_le_bytes());
        assert_eq!(&bytes[90..98], &10_000u64.to_le_bytes());
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let mut bytes = encode(&sample());
        bytes[80..88].copy_from_slice(&0u64.to_le_bytes());
        assert_matches!(
            decode::<VestedTreasury>(&bytes),
            Err(TreasuryClientError::Decode {
                reason: DecodeFailure::InvalidFieldValue { field: "vestment_period" },
                ..
            })
        );
    }

    #[test]
    fn test_short_buffer_never_partially_decodes() {
        let bytes = encode(&sample());
        for len in 0..bytes.len() {
            assert_matches!(
                decode::<VestedTreasury>(&bytes[..len]),
                Err(TreasuryClientError::Decode {
                    reason: DecodeFailure::TooShort { .. },
                    ..
                })
            );
        }
    }

    #[test]
    fn test_new_validates_terms() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        assert!(VestedTreasury::new(mint, authority, 1, 0, 1, 10_000).is_ok());
        assert_matches!(
            VestedTreasury::new(mint, authority, 0, 0, 1, 1),
            Err(TreasuryClientError::InvalidArgument { field: "amount", .. })
        );
        assert_matches!(
            VestedTreasury::new(mint, authority, 1, 0, 0, 1),
            Err(TreasuryClientError::InvalidArgument { field: "period", .. })
        );
        assert_matches!(
            VestedTreasury::new(mint, authority, 1, 0, 1, 0),
            Err(TreasuryClientError::InvalidArgument { field: "percentage", .. })
        );
        assert_matches!(
            VestedTreasury::new(mint, authority, 1, 0, 1, 10_001),
            Err(TreasuryClientError::InvalidArgument { field: "percentage", .. })
        );
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            mint in any::<[u8; 32]>(),
            authority in any::<[u8; 32]>(),
            initial_amount in any::<u64>(),
            start in any::<i64>(),
            vestment_period in 1..=u64::MAX,
            vestment_percentage in any::<u16>(),
            withdrawn in any::<u64>(),
        ) {
            let treasury = VestedTreasury {
                mint: Pubkey::new_from_array(mint),
                authority: Pubkey::new_from_array(authority),
                initial_amount,
                start,
                vestment_period,
                vestment_percentage,
                withdrawn,
            };
            let bytes = encode(&treasury);
            prop_assert_eq!(bytes.len(), VestedTreasury::LEN);
            prop_assert_eq!(decode::<VestedTreasury>(&bytes).unwrap(), treasury);
        }

        #[test]
        fn prop_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 98)) {
            prop_assume!(bytes[80..88] != [0u8; 8]);
            let treasury = decode::<VestedTreasury>(&bytes).unwrap();
            prop_assert_eq!(encode(&treasury), bytes);
        }
    }
}
