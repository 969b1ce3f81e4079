use solana_program::pubkey::Pubkey;

use crate::codec::{AccountRecord, FieldReader, FieldWriter, Layout, SIMPLE_TREASURY_LAYOUT};
use crate::errors::{Result, TreasuryClientError};

/// Withdrawal gate of a simple treasury
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SimpleTreasuryMode {
    #[default]
    Locked = 0,
    Unlocked = 1,
}

impl SimpleTreasuryMode {
    /// Every defined on-wire value; anything else is not a mode
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Locked),
            1 => Some(Self::Unlocked),
            _ => None,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SimpleTreasuryMode {
    type Error = TreasuryClientError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_u8(value).ok_or_else(|| {
            TreasuryClientError::invalid_argument(
                "mode",
                format!("{value} is neither Locked (0) nor Unlocked (1)"),
            )
        })
    }
}

/// Lock/unlock gated fund controlled by a single authority
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleTreasury {
    /// Must equal `Settings::token` of the deployment
    pub mint: Pubkey,
    pub mode: SimpleTreasuryMode,
    pub authority: Pubkey,
}

impl AccountRecord for SimpleTreasury {
    const LAYOUT: &'static Layout = &SIMPLE_TREASURY_LAYOUT;

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            mint: reader.read_pubkey()?,
            mode: reader.read_enum(SimpleTreasuryMode::from_u8)?,
            authority: reader.read_pubkey()?,
        })
    }

    fn write_fields(&self, writer: &mut FieldWriter) {
        writer
            .write_pubkey(&self.mint)
            .write_u8(self.mode.as_u8())
            .write_pubkey(&self.authority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};
    use crate::errors::DecodeFailure;
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use test_case::test_case;

    fn sample(mode: SimpleTreasuryMode) -> SimpleTreasury {
        SimpleTreasury {
            mint: Pubkey::new_unique(),
            mode,
            authority: Pubkey::new_unique(),
        }
    }

    #[test_case(SimpleTreasuryMode::Locked, 0 ; "locked")]
    #[test_case(SimpleTreasuryMode::Unlocked, 1 ; "unlocked")]
    fn test_mode_byte_sits_between_keys(mode: SimpleTreasuryMode, byte: u8) {
        let treasury = sample(mode);
        let bytes = encode(&treasury);

        assert_eq!(bytes.len(), 65);
        assert_eq!(&bytes[..32], treasury.mint.as_ref());
        assert_eq!(bytes[32], byte);
        assert_eq!(&bytes[33..], treasury.authority.as_ref());
        assert_eq!(decode::<SimpleTreasury>(&bytes).unwrap(), treasury);
    }

    #[test]
    fn test_sixty_four_bytes_is_too_short() {
        assert_matches!(
            decode::<SimpleTreasury>(&[0u8; 64]),
            Err(TreasuryClientError::Decode {
                record: "SimpleTreasury",
                reason: DecodeFailure::TooShort { expected: 65, actual: 64 },
            })
        );
    }

    #[test_case(2)]
    #[test_case(0x7f)]
    #[test_case(0xff)]
    fn test_undefined_mode_is_decode_error(value: u8) {
        let mut bytes = encode(&sample(SimpleTreasuryMode::Locked));
        bytes[32] = value;
        assert_matches!(
            decode::<SimpleTreasury>(&bytes),
            Err(TreasuryClientError::Decode {
                reason: DecodeFailure::InvalidEnumValue { field: "mode", value: v },
                ..
            }) if v == value
        );
    }

    #[test]
    fn test_mode_argument_conversion() {
        assert_eq!(SimpleTreasuryMode::try_from(0).unwrap(), SimpleTreasuryMode::Locked);
        assert_eq!(SimpleTreasuryMode::try_from(1).unwrap(), SimpleTreasuryMode::Unlocked);
        assert_matches!(
            SimpleTreasuryMode::try_from(2),
            Err(TreasuryClientError::InvalidArgument { field: "mode", .. })
        );
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let treasury = sample(SimpleTreasuryMode::Unlocked);
        let mut bytes = encode(&treasury);
        bytes.extend_from_slice(&[9u8; 16]);
        assert_eq!(decode::<SimpleTreasury>(&bytes).unwrap(), treasury);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            mint in any::<[u8; 32]>(),
            unlocked in any::<bool>(),
            authority in any::<[u8; 32]>(),
        ) {
            let mode = if unlocked {
                SimpleTreasuryMode::Unlocked
            } else {
                SimpleTreasuryMode::Locked
            };
            let treasury = SimpleTreasury {
                mint: Pubkey::new_from_array(mint),
                mode,
                authority: Pubkey::new_from_array(authority),
            };
            let bytes = encode(&treasury);
            prop_assert_eq!(bytes.len(), 65);
            prop_assert_eq!(decode::<SimpleTreasury>(&bytes).unwrap(), treasury);
        }

        #[test]
        fn prop_any_defined_mode_decodes(
            mut bytes in proptest::collection::vec(any::<u8>(), 65),
            mode in 0u8..=1,
        ) {
            bytes[32] = mode;
            let treasury = decode::<SimpleTreasury>(&bytes).unwrap();
            prop_assert_eq!(encode(&treasury), bytes);
        }
    }
}
