/// PDA seeds, matched byte-for-byte against the treasury program
pub const SETTINGS_SEED: &[u8] = b"settings";
pub const SIMPLE_TREASURY_SEED: &[u8] = b"simple";
pub const SIMPLE_TREASURY_FUND_SEED: &[u8] = b"simple fund";
pub const SIMPLE_FUND_AUTHORITY_SEED: &[u8] = b"simple authority";
pub const VESTED_FUND_AUTHORITY_SEED: &[u8] = b"vested authority";
pub const USER_COMMUNITY_SEED: &[u8] = b"user";
pub const ZOINTS_COMMUNITY_SEED: &[u8] = b"zoints";

/// Every seed phrase the program derives with, in one place for tests
pub const ALL_SEED_PHRASES: [&[u8]; 7] = [
    SETTINGS_SEED,
    SIMPLE_TREASURY_SEED,
    SIMPLE_TREASURY_FUND_SEED,
    SIMPLE_FUND_AUTHORITY_SEED,
    VESTED_FUND_AUTHORITY_SEED,
    USER_COMMUNITY_SEED,
    ZOINTS_COMMUNITY_SEED,
];

/// Vestment percentage constants
pub const MAX_BPS: u16 = 10000;

/// Community creation fees, in base token units
pub const USER_COMMUNITY_FEE: u64 = 1_000;
pub const ZOINTS_COMMUNITY_FEE: u64 = 5_000;

/// Longest community name accepted as a seed
pub const MAX_COMMUNITY_NAME_LEN: usize = solana_program::pubkey::MAX_SEED_LEN;
