use solana_program::pubkey::Pubkey;

use crate::codec::{AccountRecord, FieldReader, FieldWriter, Layout, SETTINGS_LAYOUT};
use crate::errors::Result;

/// Deployment-wide configuration, one per program at the settings PDA
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Mint of the token every treasury in this deployment holds
    pub token: Pubkey,
}

impl AccountRecord for Settings {
    const LAYOUT: &'static Layout = &SETTINGS_LAYOUT;

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            token: reader.read_pubkey()?,
        })
    }

    fn write_fields(&self, writer: &mut FieldWriter) {
        writer.write_pubkey(&self.token);
    }
}
