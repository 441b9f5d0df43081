use anyhow::{bail, Context, Result};
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::summer::{check_lengths, partition, sum_range};

pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Chunked parallel summer running on its own bounded rayon pool.
pub struct ParallelProcessor {
    pool: ThreadPool,
    num_workers: usize,
    chunk_size: usize,
}

impl ParallelProcessor {
    pub fn new(num_workers: Option<usize>, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            bail!("Chunk size must be at least 1");
        }

        let num_workers = num_workers.unwrap_or_else(num_cpus::get);
        if num_workers == 0 {
            bail!("Worker count must be at least 1");
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .thread_name(|i| format!("arraysum-worker-{}", i))
            .build()
            .with_context(|| format!("Failed to start {} worker threads", num_workers))?;

        debug!(
            "worker pool ready: {} threads, chunk size {}",
            num_workers, chunk_size
        );

        Ok(Self {
            pool,
            num_workers,
            chunk_size,
        })
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Computes `out[i] = a[i] + b[i]` chunk by chunk on the pool, returning
    /// once every chunk is done.
    pub fn sum(&self, a: &[i32], b: &[i32], out: &mut [i32]) -> Result<()> {
        check_lengths(a, b, out)?;

        let chunk_size = self.chunk_size;
        let total = out.len();

        // Each task owns one disjoint output chunk; the inputs are shared read-only.
        self.pool.install(|| {
            out.par_chunks_mut(chunk_size)
                .zip(partition(total, chunk_size))
                .for_each(|(chunk, range)| sum_range(a, b, chunk, range));
        });

        Ok(())
    }
}
