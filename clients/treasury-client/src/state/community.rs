use solana_program::pubkey::Pubkey;

use crate::codec::{
    AccountRecord, FieldReader, FieldWriter, Layout, USER_COMMUNITY_LAYOUT,
    ZOINTS_COMMUNITY_LAYOUT,
};
use crate::constants::MAX_COMMUNITY_NAME_LEN;
use crate::errors::{Result, TreasuryClientError};

/// Community owned by a single user, addressed by that user's key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserCommunity {
    pub authority: Pubkey,
}

/// Community registered under a unique name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZointsCommunity {
    pub authority: Pubkey,
}

impl AccountRecord for UserCommunity {
    const LAYOUT: &'static Layout = &USER_COMMUNITY_LAYOUT;

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            authority: reader.read_pubkey()?,
        })
    }

    fn write_fields(&self, writer: &mut FieldWriter) {
        writer.write_pubkey(&self.authority);
    }
}

impl AccountRecord for ZointsCommunity {
    const LAYOUT: &'static Layout = &ZOINTS_COMMUNITY_LAYOUT;

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            authority: reader.read_pubkey()?,
        })
    }

    fn write_fields(&self, writer: &mut FieldWriter) {
        writer.write_pubkey(&self.authority);
    }
}

fn valid_name_character(c: u8) -> bool {
    matches!(c, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'(' | b')')
}

/// Community names double as PDA seeds, so they must fit in one seed and
/// stay within a URL-safe character set.
pub fn valid_community_name(name: &[u8]) -> Result<()> {
    if name.is_empty() {
        return Err(TreasuryClientError::invalid_argument("name", "too short"));
    }
    if name.len() > MAX_COMMUNITY_NAME_LEN {
        return Err(TreasuryClientError::invalid_argument(
            "name",
            format!("longer than {MAX_COMMUNITY_NAME_LEN} bytes"),
        ));
    }
    if !name.iter().all(|&c| valid_name_character(c)) {
        return Err(TreasuryClientError::invalid_argument(
            "name",
            "contains invalid characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(b"a" ; "single character")]
    #[test_case(b"valid_name" ; "underscore")]
    #[test_case(b"aAzZ09-_.()" ; "full charset")]
    #[test_case(b"00000000000000000000000000000000" ; "thirty two bytes")]
    fn test_valid_names(name: &[u8]) {
        assert_eq!(valid_community_name(name), Ok(()));
    }

    #[test_case(b"" ; "empty")]
    #[test_case(b"000000000000000000000000000000001" ; "thirty three bytes")]
    #[test_case(b"invalid name" ; "space")]
    #[test_case(b"%" ; "percent")]
    #[test_case(b"%20" ; "escaped space")]
    #[test_case(b"random{word" ; "brace")]
    fn test_invalid_names(name: &[u8]) {
        assert!(matches!(
            valid_community_name(name),
            Err(TreasuryClientError::InvalidArgument { field: "name", .. })
        ));
    }

    #[test]
    fn test_community_records_are_bare_authority() {
        let user = UserCommunity {
            authority: Pubkey::new_unique(),
        };
        let bytes = encode(&user);
        assert_eq!(bytes.as_slice(), user.authority.as_ref());
        assert_eq!(decode::<UserCommunity>(&bytes).unwrap(), user);

        let zoints = ZointsCommunity {
            authority: Pubkey::new_unique(),
        };
        let bytes = encode(&zoints);
        assert_eq!(ZointsCommunity::LEN, 32);
        assert_eq!(decode::<ZointsCommunity>(&bytes).unwrap(), zoints);
    }

    proptest! {
        #[test]
        fn prop_community_round_trip(authority in any::<[u8; 32]>()) {
            let authority = Pubkey::new_from_array(authority);

            let user = UserCommunity { authority };
            let bytes = encode(&user);
            prop_assert_eq!(bytes.len(), 32);
            prop_assert_eq!(decode::<UserCommunity>(&bytes).unwrap(), user);

            let zoints = ZointsCommunity { authority };
            let bytes = encode(&zoints);
            prop_assert_eq!(bytes.len(), 32);
            prop_assert_eq!(decode::<ZointsCommunity>(&bytes).unwrap(), zoints);
        }
    }
}
