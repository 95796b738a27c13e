//! Alphabetic byte classification for single-byte text.
//!
//! Covers ASCII letters and the Windows-1251 Cyrillic letter block:
//! uppercase `А`..`Я` at 0xC0..=0xDF and lowercase `а`..`я` at 0xE0..=0xFF.
//! Classification is pure ordinal comparison and never consults the locale.

/// First and last byte of the uppercase Cyrillic block.
pub const UPPER_RANGE: (u8, u8) = (0xC0, 0xDF);
/// First and last byte of the lowercase Cyrillic block.
pub const LOWER_RANGE: (u8, u8) = (0xE0, 0xFF);

const fn build_alpha_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        table[i] = b.is_ascii_alphabetic()
            || (b >= UPPER_RANGE.0 && b <= UPPER_RANGE.1)
            || (b >= LOWER_RANGE.0 && b <= LOWER_RANGE.1);
        i += 1;
    }
    table
}

static ALPHA_TABLE: [bool; 256] = build_alpha_table();

/// True if `b` is a letter: `a-z`, `A-Z`, or a Windows-1251 Cyrillic letter.
#[inline(always)]
pub fn is_alpha(b: u8) -> bool {
    ALPHA_TABLE[b as usize]
}
