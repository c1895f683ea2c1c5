use crate::error::InfoError;
use crate::field::{FieldSpec, FieldWidth, RecordReader, RecordWriter, TruncationPolicy};
use serde::{Deserialize, Serialize};

/// Bytes needed to hold every field of either record.
pub const RECORD_LEN: usize = 11;

/// A fixed-layout record decoded from one metadata file.
///
/// `FIELDS` lists the layout in print order; `values` and `from_values` use the
/// same order.
pub trait Record: Sized + Serialize {
    const KIND: &'static str;
    const DEFAULT_FILE: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn from_values(values: &[u32]) -> Self;
    fn values(&self) -> Vec<u32>;
}

pub fn decode<R: Record>(data: &[u8], policy: TruncationPolicy) -> Result<R, InfoError> {
    let mut reader = RecordReader::new(data, R::KIND, policy);
    let mut values = Vec::with_capacity(R::FIELDS.len());
    for spec in R::FIELDS {
        values.push(reader.field(spec)?);
    }
    tracing::debug!(
        record = R::KIND,
        len = data.len(),
        padded = reader.padded_fields().len(),
        "decoded record"
    );
    Ok(R::from_values(&values))
}

pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, InfoError> {
    let mut writer = RecordWriter::new(RECORD_LEN);
    for (spec, value) in R::FIELDS.iter().zip(record.values()) {
        writer.field(spec, value)?;
    }
    Ok(writer.into_inner())
}

/// Crash dump layout. `pagecount` and `imagenumber` are single bytes at
/// offsets 4 and 6; bytes 3, 5 and 7 are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CrashInfo {
    pub pagesize: u32,
    pub pagecount: u32,
    pub imagenumber: u32,
    pub imagesize: u32,
}

impl Record for CrashInfo {
    const KIND: &'static str = "crash-info";
    const DEFAULT_FILE: &'static str = "crashinfo.dat";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("pagesize", 0, FieldWidth::U24),
        FieldSpec::new("pagecount", 4, FieldWidth::Byte),
        FieldSpec::new("imagenumber", 6, FieldWidth::Byte),
        FieldSpec::new("imagesize", 8, FieldWidth::U24),
    ];

    fn from_values(values: &[u32]) -> Self {
        Self {
            pagesize: values[0],
            pagecount: values[1],
            imagenumber: values[2],
            imagesize: values[3],
        }
    }

    fn values(&self) -> Vec<u32> {
        vec![self.pagesize, self.pagecount, self.imagenumber, self.imagesize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventInfo {
    pub records: u32,
    pub rsize: u32,
    pub rtype: u32,
}

impl Record for EventInfo {
    const KIND: &'static str = "event-info";
    const DEFAULT_FILE: &'static str = "eventinfo.dat";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("records", 0, FieldWidth::U24),
        FieldSpec::new("rsize", 4, FieldWidth::U24),
        FieldSpec::new("rtype", 8, FieldWidth::U24),
    ];

    fn from_values(values: &[u32]) -> Self {
        Self {
            records: values[0],
            rsize: values[1],
            rtype: values[2],
        }
    }

    fn values(&self) -> Vec<u32> {
        vec![self.records, self.rsize, self.rtype]
    }
}
