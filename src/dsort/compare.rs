//! Line comparators that look only at alphabetic bytes.
//! Both directions are allocation-free and walk the two lines in lockstep.

use std::cmp::Ordering;

use super::alpha::is_alpha;

/// A three-way ordering over raw line bytes, used to parameterize the sorter.
pub trait LineComparator {
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering;

    /// Short label for diagnostics.
    fn name(&self) -> &'static str;
}

/// Orders lines by their alphabetic bytes read from the start of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Forward;

/// Orders lines by their alphabetic bytes read from the end of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Backward;

impl LineComparator for Forward {
    #[inline]
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        compare_forward(a, b)
    }

    fn name(&self) -> &'static str {
        "forward"
    }
}

impl LineComparator for Backward {
    #[inline]
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        compare_backward(a, b)
    }

    fn name(&self) -> &'static str {
        "backward"
    }
}

/// Compare from the first byte toward the last, skipping non-alphabetic bytes.
pub fn compare_forward(a: &[u8], b: &[u8]) -> Ordering {
    compare_alpha_seq(a.iter().copied(), b.iter().copied())
}

/// Compare from the last byte toward the first, skipping non-alphabetic bytes.
pub fn compare_backward(a: &[u8], b: &[u8]) -> Ordering {
    compare_alpha_seq(a.iter().rev().copied(), b.iter().rev().copied())
}

/// Match alphabetic bytes pairwise and decide on the first unequal pair.
/// A side that runs out of alphabetic bytes first sorts first; lines that
/// run out together are equal.
#[inline]
fn compare_alpha_seq(
    mut ai: impl Iterator<Item = u8>,
    mut bi: impl Iterator<Item = u8>,
) -> Ordering {
    loop {
        let na = next_alpha(&mut ai);
        let nb = next_alpha(&mut bi);
        match (na, nb) {
            (Some(ca), Some(cb)) => match ca.cmp(&cb) {
                Ordering::Equal => continue,
                other => return other,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

#[inline]
fn next_alpha(iter: &mut impl Iterator<Item = u8>) -> Option<u8> {
    iter.find(|&b| is_alpha(b))
}
