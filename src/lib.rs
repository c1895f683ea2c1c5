//! # readinfo
//!
//! Readers for the two small fixed-layout metadata files written alongside a
//! device dump:
//! - **crash-info** (`crashinfo.dat`): `pagesize pagecount imagenumber imagesize`
//! - **event-info** (`eventinfo.dat`): `records rsize rtype`
//!
//! Both are little-endian, headerless and unversioned. Multi-byte fields are
//! 3 bytes wide and sit on 4-byte strides; the gap bytes are reserved.
//!
//! ## Quick Start
//!
//! ```no_run
//! use readinfo::field::TruncationPolicy;
//! use readinfo::record::{decode, CrashInfo};
//!
//! let data = readinfo::loader::load(std::path::Path::new("crashinfo.dat"))?;
//! let info: CrashInfo = decode(&data, TruncationPolicy::ZeroPad)?;
//! println!("{}", readinfo::report::format_plain(&info));
//! # Ok::<(), readinfo::InfoError>(())
//! ```
//!
//! ## Truncated files
//!
//! A file shorter than a field is handled by one [`field::TruncationPolicy`]
//! applied to every field: missing bytes either read as zero (the default) or
//! fail the record.

pub mod error;
pub mod field;
pub mod record;
pub mod loader;
pub mod report;
pub mod cli;

pub use error::InfoError;
pub use record::{CrashInfo, EventInfo, Record};
