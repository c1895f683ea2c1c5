//! Fixed-offset little-endian field layout.
//!
//! Every record field is an unsigned integer stored least-significant byte first
//! at a fixed byte range `[offset, offset + width)`. Bytes between fields are
//! reserved and never interpreted.

use crate::error::InfoError;
use byteorder::{ByteOrder, WriteBytesExt, LE};
use std::io::{Cursor, Seek, SeekFrom};

/// Storage width of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    Byte,
    U24,
}

impl FieldWidth {
    pub const fn bytes(self) -> usize {
        match self {
            FieldWidth::Byte => 1,
            FieldWidth::U24 => 3,
        }
    }

    pub const fn max_value(self) -> u32 {
        match self {
            FieldWidth::Byte => 0xFF,
            FieldWidth::U24 => 0xFF_FFFF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub width: FieldWidth,
}

impl FieldSpec {
    pub const fn new(name: &'static str, offset: usize, width: FieldWidth) -> Self {
        Self { name, offset, width }
    }

    /// Exclusive end of the byte range.
    pub const fn end(&self) -> usize {
        self.offset + self.width.bytes()
    }
}

/// What to do when the buffer ends before a field does.
///
/// The policy is picked once per run and applies to every field of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Missing bytes read as zero high-order bytes. A field lying entirely past
    /// the end of the buffer decodes to 0.
    #[default]
    ZeroPad,
    /// Any short field fails the whole record with [`InfoError::Truncated`].
    Reject,
}

pub struct RecordReader<'a> {
    data: &'a [u8],
    record: &'static str,
    policy: TruncationPolicy,
    padded: Vec<&'static str>,
}

impl<'a> RecordReader<'a> {
    pub fn new(data: &'a [u8], record: &'static str, policy: TruncationPolicy) -> Self {
        Self {
            data,
            record,
            policy,
            padded: Vec::new(),
        }
    }

    pub fn field(&mut self, spec: &FieldSpec) -> Result<u32, InfoError> {
        let width = spec.width.bytes();
        let present = self.data.len().saturating_sub(spec.offset).min(width);

        if present < width {
            match self.policy {
                TruncationPolicy::Reject => {
                    return Err(InfoError::Truncated {
                        record: self.record,
                        field: spec.name,
                        offset: spec.offset,
                        needed: width,
                        available: self.data.len(),
                    });
                }
                TruncationPolicy::ZeroPad => {
                    tracing::warn!(
                        record = self.record,
                        field = spec.name,
                        offset = spec.offset,
                        present,
                        "truncated field, missing bytes read as zero"
                    );
                    self.padded.push(spec.name);
                }
            }
        }

        let mut scratch = [0u8; 4];
        if present > 0 {
            scratch[..present].copy_from_slice(&self.data[spec.offset..spec.offset + present]);
        }
        Ok(LE::read_uint(&scratch[..width], width) as u32)
    }

    /// Names of fields that were zero-padded so far.
    pub fn padded_fields(&self) -> &[&'static str] {
        &self.padded
    }
}

/// Builds a record image in memory. Reserved bytes stay zero.
pub struct RecordWriter {
    cursor: Cursor<Vec<u8>>,
}

impl RecordWriter {
    pub fn new(len: usize) -> Self {
        Self {
            cursor: Cursor::new(vec![0u8; len]),
        }
    }

    /// Stores `value` masked to the field width.
    pub fn field(&mut self, spec: &FieldSpec, value: u32) -> Result<(), InfoError> {
        self.cursor.seek(SeekFrom::Start(spec.offset as u64))?;
        let value = value & spec.width.max_value();
        match spec.width {
            FieldWidth::Byte => self.cursor.write_u8(value as u8)?,
            FieldWidth::U24 => self.cursor.write_u24::<LE>(value)?,
        }
        Ok(())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.cursor.into_inner()
    }
}
