use std::ops::Deref;
use std::path::Path;

use super::error::{IoOp, SortError};
use crate::common::io::{open_noatime, read_open_file};

/// The whole input file, owned and immutable after loading.
/// Dereferences to `&[u8]`; every `LineView` points into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Read the file at `path` into a freshly allocated buffer.
    ///
    /// The file handle is scoped to this call and closed on every path,
    /// including failures.
    pub fn load(path: &Path) -> Result<Self, SortError> {
        let file = open_noatime(path).map_err(|e| SortError::io(IoOp::Open, path, e))?;
        let metadata = file
            .metadata()
            .map_err(|e| SortError::io(IoOp::Read, path, e))?;
        let data = read_open_file(&file, &metadata)
            .map_err(|e| SortError::read(path, metadata.len(), e))?;
        Ok(Buffer { data })
    }

    /// Size of the loaded content in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}
