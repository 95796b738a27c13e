use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::io_error_msg;

/// The file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Open,
    Read,
    Create,
    Write,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            IoOp::Open => "open",
            IoOp::Read => "read",
            IoOp::Create => "create",
            IoOp::Write => "write",
        };
        f.write_str(verb)
    }
}

/// Errors raised by the load, index, sort and write pipeline.
/// Every variant is fatal to a run.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("cannot {} '{}': {}", .op, .path.display(), io_error_msg(.source))]
    Io {
        op: IoOp,
        path: PathBuf,
        source: io::Error,
    },

    #[error("memory exhausted while loading '{}' ({} bytes)", .path.display(), .size)]
    Alloc { path: PathBuf, size: u64 },

    #[error("malformed input: extracted {extracted} of {expected} expected lines")]
    MalformedInput { expected: usize, extracted: usize },
}

impl SortError {
    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SortError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Classify a failed read of a `size`-byte file: running out of memory
    /// becomes `Alloc`, anything else is a read error.
    pub(crate) fn read(path: &Path, size: u64, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::OutOfMemory {
            SortError::Alloc {
                path: path.to_path_buf(),
                size,
            }
        } else {
            SortError::io(IoOp::Read, path, source)
        }
    }
}
