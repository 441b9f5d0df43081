use anyhow::{bail, Result};

/// Bound applied to every generated value, so that summing two of them
/// never overflows an `i32`.
pub const MODULUS: i32 = i32::MAX / 2;

/// Smallest array size the recurrence is defined for.
pub const MIN_ARRAY_SIZE: usize = 3;

/// The two read-only source arrays of the benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArrays {
    pub a: Vec<i32>,
    pub b: Vec<i32>,
}

impl SourceArrays {
    /// Fills `a` and `b` with the recurrence `x[i] = (x[i-1] + x[i-2]) mod MODULUS`,
    /// starting from `0, 1`. Both arrays hold identical values.
    pub fn generate(n: usize) -> Result<Self> {
        if n < MIN_ARRAY_SIZE {
            bail!(
                "Invalid array size: expected at least {}, got {}",
                MIN_ARRAY_SIZE,
                n
            );
        }

        let mut a = vec![0i32; n];
        a[1] = 1;
        for i in 2..n {
            a[i] = next_term(a[i - 1], a[i - 2]);
        }
        let b = a.clone();

        Ok(Self { a, b })
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

fn next_term(prev: i32, prev2: i32) -> i32 {
    // Both terms are below MODULUS, so the sum fits in an i32.
    (prev + prev2) % MODULUS
}
