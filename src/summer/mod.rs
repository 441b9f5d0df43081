use anyhow::{bail, Result};
use rayon::prelude::*;
use std::ops::Range;

/// Half-open interval `[begin, end)` of array positions handled as one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub begin: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end);
        Self { begin, end }
    }

    /// Range covered by chunk number `chunk_index` when `[0, total)` is cut
    /// into chunks of `chunk_size` indices.
    pub fn for_chunk(chunk_index: usize, chunk_size: usize, total: usize) -> Self {
        let begin = (chunk_index * chunk_size).min(total);
        let end = (begin + chunk_size).min(total);
        Self::new(begin, end)
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.begin..self.end
    }
}

/// Splits `[0, total)` into consecutive ranges of at most `chunk_size` indices.
///
/// The ranges come out in order, so they zip with `par_chunks_mut(chunk_size)`.
pub fn partition(
    total: usize,
    chunk_size: usize,
) -> impl IndexedParallelIterator<Item = IndexRange> {
    assert!(chunk_size > 0, "chunk size must be at least 1");
    (0..total.div_ceil(chunk_size))
        .into_par_iter()
        .map(move |chunk_index| IndexRange::for_chunk(chunk_index, chunk_size, total))
}

/// Per-chunk unit of work: `out[k] = a[range.begin + k] + b[range.begin + k]`.
///
/// `out` is the slice of the result array owned by this chunk, so it must be
/// exactly `range.len()` long.
pub fn sum_range(a: &[i32], b: &[i32], out: &mut [i32], range: IndexRange) {
    let a = &a[range.as_range()];
    let b = &b[range.as_range()];
    debug_assert_eq!(out.len(), range.len());

    for ((out, a), b) in out.iter_mut().zip(a).zip(b) {
        *out = a + b;
    }
}

/// Single-threaded baseline: fully overwrites `out` with `a[i] + b[i]`.
pub fn sum_sequential(a: &[i32], b: &[i32], out: &mut [i32]) -> Result<()> {
    check_lengths(a, b, out)?;

    for ((out, a), b) in out.iter_mut().zip(a).zip(b) {
        *out = a + b;
    }

    Ok(())
}

pub(crate) fn check_lengths(a: &[i32], b: &[i32], out: &[i32]) -> Result<()> {
    if a.len() != b.len() || a.len() != out.len() {
        bail!(
            "Array length mismatch: a={}, b={}, out={}",
            a.len(),
            b.len(),
            out.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_sum() {
        let a = [0, 1, 1, 2, 3];
        let b = [0, 1, 1, 2, 3];
        let mut out = [-7; 5];
        sum_sequential(&a, &b, &mut out).unwrap();
        assert_eq!(out, [0, 2, 2, 4, 6]);
    }

    #[test]
    fn test_sequential_rejects_length_mismatch() {
        let mut out = [0; 2];
        assert!(sum_sequential(&[1, 2, 3], &[1, 2, 3], &mut out).is_err());
        assert!(sum_sequential(&[1, 2], &[1, 2, 3], &mut out).is_err());
    }

    #[test]
    fn test_sum_range_writes_only_its_chunk() {
        let a = [10, 20, 30, 40, 50];
        let b = [1, 2, 3, 4, 5];
        let mut out = [0; 2];
        sum_range(&a, &b, &mut out, IndexRange::new(2, 4));
        assert_eq!(out, [33, 44]);
    }

    #[test]
    fn test_partition_covers_range_once() {
        let ranges: Vec<_> = partition(10, 4).collect();
        assert_eq!(partition(10, 4).len(), 3);
        assert_eq!(
            ranges,
            vec![
                IndexRange::new(0, 4),
                IndexRange::new(4, 8),
                IndexRange::new(8, 10)
            ]
        );

        for (chunk_size, total) in [(1, 7), (3, 9), (100, 5), (7, 1000)] {
            let mut next = 0;
            for range in partition(total, chunk_size).collect::<Vec<_>>() {
                assert_eq!(range.begin, next);
                assert!(!range.is_empty() && range.len() <= chunk_size);
                next = range.end;
            }
            assert_eq!(next, total);
        }
    }

    #[test]
    fn test_for_chunk_matches_partition() {
        let ranges: Vec<_> = partition(1003, 100).collect();
        assert_eq!(ranges.len(), 11);
        for (k, range) in ranges.into_iter().enumerate() {
            assert_eq!(IndexRange::for_chunk(k, 100, 1003), range);
        }
        assert_eq!(partition(0, 5).count(), 0);
    }

    #[test]
    #[should_panic(expected = "chunk size must be at least 1")]
    fn test_partition_rejects_zero_chunk() {
        let _ = partition(10, 0).count();
    }
}
