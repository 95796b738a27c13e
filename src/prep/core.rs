use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::io::{open_noatime, read_open_file};
use crate::dsort::{IoOp, SortError};

/// Bytes a chapter-number line may consist of: Roman numerals, dots,
/// spaces, and the Windows-1251 Cyrillic `Х` (0xD5) often typed for `X`.
pub const CHAPTER_NUMBER_BYTES: &[u8] = b"IVXL. \xD5";

/// Chapter heading marker `ГЛАВА` in Windows-1251.
pub const CHAPTER_MARKER: &[u8] = b"\xC3\xCB\xC0\xC2\xC0";

/// Prefix prepended to the input file name when no output path is given.
pub const DEFAULT_OUTPUT_PREFIX: &str = "ans_";

/// Paths for one preprocessing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl PrepConfig {
    /// Use `output`, or `ans_<file name>` next to the input.
    pub fn new(input: PathBuf, output: Option<PathBuf>) -> Self {
        let output = output.unwrap_or_else(|| default_output_path(&input));
        PrepConfig { input, output }
    }
}

pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(DEFAULT_OUTPUT_PREFIX);
    if let Some(file_name) = input.file_name() {
        name.push(file_name);
    }
    input.with_file_name(name)
}

/// True for lines made only of chapter-number bytes (empty lines included).
#[inline]
pub fn is_chapter_number(line: &[u8]) -> bool {
    line.iter().all(|b| CHAPTER_NUMBER_BYTES.contains(b))
}

/// Clean one terminator-stripped line of text.
///
/// Returns `None` when the line should be dropped (blank, chapter number,
/// or chapter heading). Otherwise removes `{...}` footnotes, each together
/// with one space right before it; an unclosed `{` cuts the rest of the line.
pub fn filter_line(line: &[u8]) -> Option<Cow<'_, [u8]>> {
    if is_chapter_number(line) || line.starts_with(CHAPTER_MARKER) {
        return None;
    }
    if memchr::memchr(b'{', line).is_none() {
        return Some(Cow::Borrowed(line));
    }
    Some(Cow::Owned(strip_footnotes(line)))
}

fn strip_footnotes(line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = memchr::memchr(b'{', rest) {
        out.extend_from_slice(&rest[..open]);
        if out.last() == Some(&b' ') {
            out.pop();
        }
        match memchr::memchr(b'}', &rest[open + 1..]) {
            Some(close) => rest = &rest[open + 1 + close + 1..],
            None => return out,
        }
    }
    out.extend_from_slice(rest);
    out
}

/// Filter every `\n`-separated line of `data` and write the survivors,
/// each followed by `\n`. Returns the number of lines written.
pub fn preprocess(data: &[u8], out: &mut impl Write) -> io::Result<usize> {
    let mut written = 0;
    let mut start = 0;

    for pos in memchr::memchr_iter(b'\n', data) {
        written += emit(&data[start..pos], out)?;
        start = pos + 1;
    }

    // Handle last line without trailing newline
    if start < data.len() {
        written += emit(&data[start..], out)?;
    }

    Ok(written)
}

#[inline]
fn emit(line: &[u8], out: &mut impl Write) -> io::Result<usize> {
    match filter_line(line) {
        Some(kept) => {
            out.write_all(&kept)?;
            out.write_all(b"\n")?;
            Ok(1)
        }
        None => Ok(0),
    }
}

/// Read `config.input`, filter it, and write the result to `config.output`.
/// Errors name the file and the operation that failed.
pub fn preprocess_file(config: &PrepConfig) -> Result<usize, SortError> {
    let input = config.input.as_path();
    let output = config.output.as_path();

    let file = open_noatime(input).map_err(|e| SortError::io(IoOp::Open, input, e))?;
    let metadata = file
        .metadata()
        .map_err(|e| SortError::io(IoOp::Read, input, e))?;
    let data = read_open_file(&file, &metadata)
        .map_err(|e| SortError::read(input, metadata.len(), e))?;
    drop(file);

    let out = File::create(output).map_err(|e| SortError::io(IoOp::Create, output, e))?;
    let mut writer = BufWriter::new(out);
    let written = preprocess(&data, &mut writer)
        .and_then(|n| writer.flush().map(|()| n))
        .map_err(|e| SortError::io(IoOp::Write, output, e))?;
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        lines = written,
        "preprocessed"
    );
    Ok(written)
}
