use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("Can't open: {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Can't read: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Truncated {record} record: field `{field}` needs bytes {offset}..{end}, buffer has {available}", end = .offset + .needed)]
    Truncated {
        record: &'static str,
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl InfoError {
    /// Process exit code for this failure. Success is always 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            InfoError::Open { .. } | InfoError::Read { .. } => 1,
            InfoError::Truncated { .. } => 2,
            InfoError::Json(_) | InfoError::Io(_) => 3,
        }
    }
}
