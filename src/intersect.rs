//! Merge-based set intersection over sorted adjacency slices.
//!
//! Both primitives are classic two-pointer merges and rely on the hard CSR
//! invariant that every adjacency slice is sorted ascending. They perform no
//! allocation; the buffered variant writes into a caller-supplied
//! [`FixedBuf`] and caps the result at its capacity.

use crate::memory::FixedBuf;

/// Returns `|a ∩ b|` for two ascending slices.
#[inline]
pub fn intersect_size_only(a: &[u32], b: &[u32]) -> usize {
    let mut ia = 0;
    let mut ib = 0;
    let mut count = 0;
    while ia < a.len() && ib < b.len() {
        let va = a[ia];
        let vb = b[ib];
        if va == vb {
            count += 1;
            ia += 1;
            ib += 1;
        } else if va < vb {
            ia += 1;
        } else {
            ib += 1;
        }
    }
    count
}

/// Materializes `a ∩ b` into `out` and returns the number of ids written.
///
/// `out` is cleared first. When the true intersection exceeds `out`'s
/// capacity the merge stops early and the result is a truncated prefix;
/// callers must treat the returned count — never the mathematical
/// intersection size — as authoritative. Truncation degrades the final
/// motif count, not memory safety.
pub fn intersect_into(a: &[u32], b: &[u32], out: &mut FixedBuf) -> usize {
    out.clear();
    let mut ia = 0;
    let mut ib = 0;
    while ia < a.len() && ib < b.len() {
        let va = a[ia];
        let vb = b[ib];
        if va == vb {
            if !out.push(va) {
                break;
            }
            ia += 1;
            ib += 1;
        } else if va < vb {
            ia += 1;
        } else {
            ib += 1;
        }
    }
    out.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_only_basic() {
        assert_eq!(intersect_size_only(&[1, 3, 5, 7], &[2, 3, 4, 7, 9]), 2);
        assert_eq!(intersect_size_only(&[], &[1, 2]), 0);
        assert_eq!(intersect_size_only(&[4], &[4]), 1);
    }

    #[test]
    fn size_only_disjoint() {
        assert_eq!(intersect_size_only(&[1, 2, 3], &[4, 5, 6]), 0);
    }

    #[test]
    fn buffered_matches_size_only() {
        let a = [0, 2, 4, 6, 8, 10];
        let b = [1, 2, 3, 4, 10, 12];
        let mut out = FixedBuf::new(16);
        let written = intersect_into(&a, &b, &mut out);
        assert_eq!(written, intersect_size_only(&a, &b));
        assert_eq!(out.as_slice(), &[2, 4, 10]);
    }

    #[test]
    fn buffered_truncates_at_capacity() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 2, 3, 4, 5];
        let mut out = FixedBuf::new(3);
        let written = intersect_into(&a, &b, &mut out);
        assert_eq!(written, 3);
        assert_eq!(out.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn buffered_clears_previous_contents() {
        let mut out = FixedBuf::new(8);
        intersect_into(&[1, 2], &[2, 3], &mut out);
        intersect_into(&[5], &[6], &mut out);
        assert!(out.is_empty());
    }
}
