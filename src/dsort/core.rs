//! Core pipeline for fdsort: load, index, sort twice, write twice.
//!
//! The input is held in one owned buffer; both sorts permute lightweight
//! (start, len) views into it and output goes straight from the buffer via
//! vectored writes, so line bytes are never copied.

use std::fs::File;
use std::io::{self, IoSlice, Write};
use std::path::{Path, PathBuf};

use super::buffer::Buffer;
use super::compare::{Backward, Forward, LineComparator};
use super::error::{IoOp, SortError};
use super::index::{LineIndex, LineView};

/// Maximum IoSlices per writev call (Linux IOV_MAX = 1024).
const IOV_BATCH: usize = 1024;

/// Paths for one dual-sort run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualSortConfig {
    pub input: PathBuf,
    pub forward_output: PathBuf,
    pub backward_output: PathBuf,
}

/// What a completed run processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualSortSummary {
    pub bytes: usize,
    pub estimated_lines: usize,
    pub lines: usize,
}

/// Both orderings of one line set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualSort {
    pub forward: Vec<LineView>,
    pub backward: Vec<LineView>,
}

/// Return a sorted copy of `lines`; `lines` itself is left in file order.
///
/// Uses pdqsort (`sort_unstable_by`): lines the comparator deems equal may
/// come out in any relative order.
pub fn sort_lines<C>(data: &[u8], lines: &[LineView], cmp: &C) -> Vec<LineView>
where
    C: LineComparator + ?Sized,
{
    tracing::trace!(order = cmp.name(), lines = lines.len(), "sorting");
    let mut sorted = lines.to_vec();
    sorted.sort_unstable_by(|a, b| cmp.compare(a.bytes(data), b.bytes(data)));
    sorted
}

/// Sort the same line set with the forward and the backward comparator.
pub fn dual_sort(data: &[u8], lines: &[LineView]) -> DualSort {
    DualSort {
        forward: sort_lines(data, lines, &Forward),
        backward: sort_lines(data, lines, &Backward),
    }
}

/// Write all IoSlices, handling partial writes and batching.
fn write_all_slices(out: &mut impl Write, slices: &[IoSlice<'_>]) -> io::Result<()> {
    let mut offset = 0;
    while offset < slices.len() {
        let end = (offset + IOV_BATCH).min(slices.len());
        let n = out.write_vectored(&slices[offset..end])?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "failed to write any data",
            ));
        }
        let mut remaining = n;
        while offset < end && remaining >= slices[offset].len() {
            remaining -= slices[offset].len();
            offset += 1;
        }
        if remaining > 0 && offset < end {
            out.write_all(&slices[offset][remaining..])?;
            offset += 1;
        }
    }
    Ok(())
}

/// Write each view's bytes followed by `\n`, in order.
/// IoSlice entries point directly into `data`, no intermediate copies.
pub fn write_lines(data: &[u8], lines: &[LineView], out: &mut impl Write) -> io::Result<()> {
    let mut slices: Vec<IoSlice<'_>> = Vec::with_capacity(IOV_BATCH.min(lines.len() * 2));
    for line in lines {
        slices.push(IoSlice::new(line.bytes(data)));
        slices.push(IoSlice::new(b"\n"));
        if slices.len() >= IOV_BATCH {
            write_all_slices(out, &slices)?;
            slices.clear();
        }
    }
    if !slices.is_empty() {
        write_all_slices(out, &slices)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write `lines` into it.
/// Slices go to the file with writev, unbuffered; the file is closed before
/// returning, on success and on failure.
pub fn write_to_path(path: &Path, data: &[u8], lines: &[LineView]) -> Result<(), SortError> {
    let mut file = File::create(path).map_err(|e| SortError::io(IoOp::Create, path, e))?;
    write_lines(data, lines, &mut file).map_err(|e| SortError::io(IoOp::Write, path, e))
}

/// Run the whole pipeline described by `config`.
///
/// A truncated line index is reported as `MalformedInput` before anything is
/// sorted or written.
pub fn run(config: &DualSortConfig) -> Result<DualSortSummary, SortError> {
    let buffer = Buffer::load(&config.input)?;
    tracing::debug!(path = %config.input.display(), bytes = buffer.len(), "loaded input");

    let index = LineIndex::build(&buffer);
    tracing::debug!(
        estimated = index.estimated(),
        extracted = index.len(),
        "indexed lines"
    );
    index.check()?;

    let data = buffer.as_bytes();
    let sorted = dual_sort(data, index.lines());
    write_to_path(&config.forward_output, data, &sorted.forward)?;
    tracing::debug!(path = %config.forward_output.display(), "wrote forward order");
    write_to_path(&config.backward_output, data, &sorted.backward)?;
    tracing::debug!(path = %config.backward_output.display(), "wrote backward order");

    Ok(DualSortSummary {
        bytes: buffer.len(),
        estimated_lines: index.estimated(),
        lines: index.len(),
    })
}
