use anyhow::Result;
use std::fmt;

use crate::summer::check_lengths;

/// One index where the sequential and parallel results disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    pub a: i32,
    pub b: i32,
    pub sequential: i32,
    pub parallel: i32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} = {} AND {}",
            self.a, self.b, self.sequential, self.parallel
        )
    }
}

/// Scans every index and collects the ones where `sequential` and `parallel` differ.
///
/// All four slices must have the same length.
pub fn find_mismatches(
    a: &[i32],
    b: &[i32],
    sequential: &[i32],
    parallel: &[i32],
) -> Result<Vec<Mismatch>> {
    check_lengths(a, b, sequential)?;
    check_lengths(a, b, parallel)?;

    let mismatches = sequential
        .iter()
        .zip(parallel)
        .enumerate()
        .filter(|(_, (s, p))| s != p)
        .map(|(index, (&sequential, &parallel))| Mismatch {
            index,
            a: a[index],
            b: b[index],
            sequential,
            parallel,
        })
        .collect();

    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_results_have_no_mismatch() {
        let a = [0, 1, 1, 2, 3];
        let sum = [0, 2, 2, 4, 6];
        assert!(find_mismatches(&a, &a, &sum, &sum).unwrap().is_empty());
    }

    #[test]
    fn test_reports_every_differing_index() {
        let a = [0, 1, 1, 2, 3];
        let seq = [0, 2, 2, 4, 6];
        let par = [0, 2, 9, 4, 0];
        let mismatches = find_mismatches(&a, &a, &seq, &par).unwrap();

        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].index, 2);
        assert_eq!(mismatches[1].index, 4);
        assert_eq!(mismatches[0].to_string(), "1 + 1 = 2 AND 9");
        assert_eq!(mismatches[1].to_string(), "3 + 3 = 6 AND 0");
    }

    #[test]
    fn test_truncated_result_is_an_error() {
        let a = [0, 1, 1, 2, 3];
        let seq = [0, 2, 2, 4, 6];
        let err = find_mismatches(&a, &a, &seq, &[0, 2, 2]).unwrap_err();
        assert!(err.to_string().contains("length mismatch"), "{}", err);
        assert!(find_mismatches(&a, &a, &[0, 2, 2], &seq).is_err());
    }

    #[test]
    fn test_short_operands_are_an_error() {
        assert!(find_mismatches(&[1], &[1], &[0, 5], &[0, 6]).is_err());
        assert!(find_mismatches(&[1, 2], &[1], &[2, 4], &[2, 4]).is_err());
    }
}
