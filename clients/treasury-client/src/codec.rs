//! Fixed-width little-endian codec shared with the treasury program.
//!
//! Every byte layout the client reads or writes is declared once in the
//! table below. Records and instruction payloads walk their layout with a
//! [`FieldReader`] or [`FieldWriter`]; a read that disagrees with the
//! declared field kind is rejected rather than silently reinterpreted.
//!
//! Layout rules: addresses are 32 raw bytes, integers are little-endian,
//! enums are a single byte, fields are packed in declaration order.

use solana_program::pubkey::Pubkey;

use crate::errors::{DecodeFailure, Result, TreasuryClientError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Pubkey,
    U8,
    U16,
    U64,
    I64,
}

impl FieldKind {
    pub const fn width(self) -> usize {
        match self {
            FieldKind::Pubkey => 32,
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U64 | FieldKind::I64 => 8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> Field {
    Field { name, kind }
}

/// Ordered field list of one record type or instruction payload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub record: &'static str,
    pub fields: &'static [Field],
}

impl Layout {
    /// Total encoded width in bytes
    pub const fn width(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].kind.width();
            i += 1;
        }
        total
    }
}

pub const SETTINGS_LAYOUT: Layout = Layout {
    record: "Settings",
    fields: &[field("token", FieldKind::Pubkey)],
};

pub const SIMPLE_TREASURY_LAYOUT: Layout = Layout {
    record: "SimpleTreasury",
    fields: &[
        field("mint", FieldKind::Pubkey),
        field("mode", FieldKind::U8),
        field("authority", FieldKind::Pubkey),
    ],
};

pub const VESTED_TREASURY_LAYOUT: Layout = Layout {
    record: "VestedTreasury",
    fields: &[
        field("mint", FieldKind::Pubkey),
        field("authority", FieldKind::Pubkey),
        field("initial_amount", FieldKind::U64),
        field("start", FieldKind::I64),
        field("vestment_period", FieldKind::U64),
        field("vestment_percentage", FieldKind::U16),
        field("withdrawn", FieldKind::U64),
    ],
};

pub const USER_COMMUNITY_LAYOUT: Layout = Layout {
    record: "UserCommunity",
    fields: &[field("authority", FieldKind::Pubkey)],
};

pub const ZOINTS_COMMUNITY_LAYOUT: Layout = Layout {
    record: "ZointsCommunity",
    fields: &[field("authority", FieldKind::Pubkey)],
};

pub const INITIALIZE_LAYOUT: Layout = Layout {
    record: "Initialize",
    fields: &[field("discriminant", FieldKind::U8)],
};

pub const CREATE_SIMPLE_TREASURY_LAYOUT: Layout = Layout {
    record: "CreateSimpleTreasury",
    fields: &[
        field("discriminant", FieldKind::U8),
        field("mode", FieldKind::U8),
    ],
};

pub const WITHDRAW_SIMPLE_LAYOUT: Layout = Layout {
    record: "WithdrawSimple",
    fields: &[
        field("discriminant", FieldKind::U8),
        field("amount", FieldKind::U64),
    ],
};

pub const CREATE_VESTED_TREASURY_LAYOUT: Layout = Layout {
    record: "CreateVestedTreasury",
    fields: &[
        field("discriminant", FieldKind::U8),
        field("amount", FieldKind::U64),
        field("period", FieldKind::U64),
        field("percentage", FieldKind::U16),
    ],
};

pub const WITHDRAW_VESTED_LAYOUT: Layout = Layout {
    record: "WithdrawVested",
    fields: &[field("discriminant", FieldKind::U8)],
};

pub const ACCOUNT_LAYOUTS: [&Layout; 5] = [
    &SETTINGS_LAYOUT,
    &SIMPLE_TREASURY_LAYOUT,
    &VESTED_TREASURY_LAYOUT,
    &USER_COMMUNITY_LAYOUT,
    &ZOINTS_COMMUNITY_LAYOUT,
];

pub const INSTRUCTION_LAYOUTS: [&Layout; 5] = [
    &INITIALIZE_LAYOUT,
    &CREATE_SIMPLE_TREASURY_LAYOUT,
    &WITHDRAW_SIMPLE_LAYOUT,
    &CREATE_VESTED_TREASURY_LAYOUT,
    &WITHDRAW_VESTED_LAYOUT,
];

/// Sequential reader over a buffer already checked to cover the whole layout
#[derive(Debug)]
pub struct FieldReader<'a> {
    layout: &'static Layout,
    data: &'a [u8],
    offset: usize,
    index: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(layout: &'static Layout, data: &'a [u8]) -> Result<Self> {
        let expected = layout.width();
        if data.len() < expected {
            return Err(TreasuryClientError::decode(
                layout.record,
                DecodeFailure::TooShort {
                    expected,
                    actual: data.len(),
                },
            ));
        }
        Ok(Self {
            layout,
            data,
            offset: 0,
            index: 0,
        })
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Name of the field the next read will consume
    pub fn next_field_name(&self) -> &'static str {
        self.layout
            .fields
            .get(self.index)
            .map(|f| f.name)
            .unwrap_or("<end>")
    }

    fn take<const N: usize>(&mut self, kind: FieldKind) -> Result<(&'static str, &'a [u8; N])> {
        let name = self.next_field_name();
        let declared = self.layout.fields.get(self.index).map(|f| f.kind);
        if declared != Some(kind) || kind.width() != N {
            return Err(self.invalid(name));
        }
        let data: &'a [u8] = self.data;
        let end = self.offset + N;
        let slice = data
            .get(self.offset..end)
            .ok_or_else(|| self.invalid(name))?;
        let bytes = bytemuck::try_from_bytes::<[u8; N]>(slice).map_err(|_| self.invalid(name))?;
        self.offset = end;
        self.index += 1;
        Ok((name, bytes))
    }

    fn invalid(&self, field: &'static str) -> TreasuryClientError {
        TreasuryClientError::decode(
            self.layout.record,
            DecodeFailure::InvalidFieldValue { field },
        )
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey> {
        let (_, bytes) = self.take::<32>(FieldKind::Pubkey)?;
        Ok(Pubkey::new_from_array(*bytes))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let (_, bytes) = self.take::<1>(FieldKind::U8)?;
        Ok(bytes[0])
    }

    /// Read a one-byte enum and map it through `parse`, which must
    /// enumerate every defined variant
    pub fn read_enum<T>(&mut self, parse: impl FnOnce(u8) -> Option<T>) -> Result<T> {
        let (name, bytes) = self.take::<1>(FieldKind::U8)?;
        let value = bytes[0];
        parse(value).ok_or_else(|| {
            TreasuryClientError::decode(
                self.layout.record,
                DecodeFailure::InvalidEnumValue { field: name, value },
            )
        })
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let (_, bytes) = self.take::<2>(FieldKind::U16)?;
        Ok(u16::from_le_bytes(*bytes))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let (_, bytes) = self.take::<8>(FieldKind::U64)?;
        Ok(u64::from_le_bytes(*bytes))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let (_, bytes) = self.take::<8>(FieldKind::I64)?;
        Ok(i64::from_le_bytes(*bytes))
    }
}

/// Sequential writer producing exactly `layout.width()` bytes
#[derive(Debug)]
pub struct FieldWriter {
    layout: &'static Layout,
    buf: Vec<u8>,
    index: usize,
}

impl FieldWriter {
    pub fn new(layout: &'static Layout) -> Self {
        Self {
            layout,
            buf: Vec::with_capacity(layout.width()),
            index: 0,
        }
    }

    fn put(&mut self, kind: FieldKind, bytes: &[u8]) -> &mut Self {
        debug_assert_eq!(
            self.layout.fields.get(self.index).map(|f| f.kind),
            Some(kind),
            "{} field {} written out of layout order",
            self.layout.record,
            self.index
        );
        self.buf.extend_from_slice(bytes);
        self.index += 1;
        self
    }

    pub fn write_pubkey(&mut self, value: &Pubkey) -> &mut Self {
        self.put(FieldKind::Pubkey, value.as_ref())
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.put(FieldKind::U8, &[value])
    }

    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.put(FieldKind::U16, &value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.put(FieldKind::U64, &value.to_le_bytes())
    }

    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        self.put(FieldKind::I64, &value.to_le_bytes())
    }

    pub fn finish(self) -> Vec<u8> {
        debug_assert_eq!(self.buf.len(), self.layout.width());
        self.buf
    }
}

/// A persisted account type with a fixed layout
pub trait AccountRecord: Sized {
    const LAYOUT: &'static Layout;
    const LEN: usize = Self::LAYOUT.width();

    fn read_fields(reader: &mut FieldReader<'_>) -> Result<Self>;
    fn write_fields(&self, writer: &mut FieldWriter);
}

/// Decode a record from raw account data. Trailing bytes are ignored;
/// either every field decodes or nothing is returned.
pub fn decode<T: AccountRecord>(data: &[u8]) -> Result<T> {
    let mut reader = FieldReader::new(T::LAYOUT, data)?;
    T::read_fields(&mut reader)
}

pub fn encode<T: AccountRecord>(record: &T) -> Vec<u8> {
    let mut writer = FieldWriter::new(T::LAYOUT);
    record.write_fields(&mut writer);
    writer.finish()
}
