use solana_program::pubkey::Pubkey;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreasuryClientError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreasuryClientError {
    #[error("Failed to decode {record}: {reason}")]
    Decode {
        record: &'static str,
        reason: DecodeFailure,
    },

    #[error("No {record} account found at {address}")]
    NotFound {
        record: &'static str,
        address: Pubkey,
    },

    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    #[error("Unable to find a viable program address bump seed")]
    DerivationExhausted,

    #[error("Vested treasury {address} reports {withdrawn} withdrawn but only {unlocked} unlocked")]
    IntegrityViolation {
        address: Pubkey,
        withdrawn: u64,
        unlocked: u64,
    },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Why a byte buffer did not decode into a record or instruction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    #[error("expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("expected exactly {expected} bytes, got {actual}")]
    TrailingBytes { expected: usize, actual: usize },

    #[error("field `{field}` holds undefined variant {value}")]
    InvalidEnumValue { field: &'static str, value: u8 },

    #[error("field `{field}` holds an invalid value")]
    InvalidFieldValue { field: &'static str },

    #[error("unknown instruction discriminant {0}")]
    UnknownDiscriminant(u8),
}

impl TreasuryClientError {
    pub(crate) fn decode(record: &'static str, reason: DecodeFailure) -> Self {
        Self::Decode { record, reason }
    }

    pub(crate) fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}
