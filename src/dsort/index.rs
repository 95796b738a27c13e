//! Line extraction over a loaded buffer.
//! Lines are recorded as (start, len) pairs into the buffer; no line bytes are copied.

use super::error::SortError;

/// A non-owning view of one line: `len` bytes starting at `start` in the buffer
/// it was extracted from. The terminating `\n` is not part of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineView {
    start: usize,
    len: usize,
}

impl LineView {
    #[inline]
    pub fn new(start: usize, len: usize) -> Self {
        LineView { start, len }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The referenced bytes. `data` must be the buffer this view was taken from.
    #[inline]
    pub fn bytes<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.start + self.len]
    }
}

/// Count lines the way extraction expects them: one more than the number of
/// `\n` bytes, so a trailing newline yields a final empty line.
#[inline]
pub fn count_lines(data: &[u8]) -> usize {
    memchr::memchr_iter(b'\n', data).count() + 1
}

/// Lines of a buffer in file order, together with the count that was
/// expected before the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    lines: Vec<LineView>,
    estimated: usize,
}

impl LineIndex {
    /// Index `data` using its own newline count as the estimate.
    pub fn build(data: &[u8]) -> Self {
        Self::extract(data, count_lines(data))
    }

    /// Walk `data` once, recording up to `estimated` lines.
    ///
    /// Each line ends at the next `\n` (exclusive) or at end of buffer. If the
    /// buffer runs out before line `estimated` is reached, the walk stops there
    /// and only the lines extracted so far are kept.
    pub fn extract(data: &[u8], estimated: usize) -> Self {
        // Never trust the estimate for allocation: a line needs at least one
        // byte of buffer except for the final one.
        let mut lines = Vec::with_capacity(estimated.min(data.len() + 1));
        let mut start = 0usize;

        while lines.len() < estimated {
            match memchr::memchr(b'\n', &data[start..]) {
                Some(rel) => {
                    lines.push(LineView::new(start, rel));
                    start += rel + 1;
                }
                None => {
                    lines.push(LineView::new(start, data.len() - start));
                    break;
                }
            }
        }

        if lines.len() < estimated {
            tracing::warn!(
                expected = estimated,
                extracted = lines.len(),
                "line extraction stopped before the expected count"
            );
        }

        LineIndex { lines, estimated }
    }

    /// Lines actually extracted, in file order.
    #[inline]
    pub fn lines(&self) -> &[LineView] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line count expected before extraction.
    #[inline]
    pub fn estimated(&self) -> usize {
        self.estimated
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.lines.len() < self.estimated
    }

    /// Fail with `MalformedInput` if extraction stopped early.
    pub fn check(&self) -> Result<&Self, SortError> {
        if self.is_truncated() {
            return Err(SortError::MalformedInput {
                expected: self.estimated,
                extracted: self.lines.len(),
            });
        }
        Ok(self)
    }
}
