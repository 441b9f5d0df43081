use anyhow::{bail, Result};
use std::mem::size_of;

use crate::generator::MIN_ARRAY_SIZE;
use crate::parallel::DEFAULT_CHUNK_SIZE;

/// Largest element count a single `Vec<i32>` can hold.
pub const MAX_ARRAY_SIZE: usize = isize::MAX as usize / size_of::<i32>();

/// Validated settings for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub array_size: usize,
    pub chunk_size: usize,
    pub threads: Option<usize>,
    pub strict: bool,
}

impl BenchConfig {
    pub fn new(array_size: usize) -> Result<Self> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&array_size) {
            bail!("Array size ({}) must be an integer > 2", array_size);
        }

        Ok(Self {
            array_size,
            chunk_size: DEFAULT_CHUNK_SIZE,
            threads: None,
            strict: false,
        })
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            bail!("Chunk size must be at least 1");
        }
        self.chunk_size = chunk_size;
        Ok(self)
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Result<Self> {
        if threads == Some(0) {
            bail!("Thread count must be at least 1");
        }
        self.threads = threads;
        Ok(self)
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Parses the array size argument, which must be a decimal integer > 2.
pub fn parse_array_size(arg: &str) -> Result<usize> {
    match arg.trim().parse::<usize>() {
        Ok(n) if (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&n) => Ok(n),
        _ => bail!("Array size ({}) must be an integer > 2", arg),
    }
}
