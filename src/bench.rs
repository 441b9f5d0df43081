use anyhow::{bail, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Duration;

use crate::config::BenchConfig;
use crate::generator::SourceArrays;
use crate::parallel::ParallelProcessor;
use crate::summer::sum_sequential;
use crate::timing::{ticks, timed};
use crate::verify::{find_mismatches, Mismatch};

/// Outcome of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub sequential_time: Duration,
    pub parallel_time: Duration,
    pub mismatches: Vec<Mismatch>,
}

impl BenchReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Applies the mismatch policy: mismatches are diagnostic only, unless
    /// `strict` is set, in which case any mismatch is an error.
    pub fn check(&self, strict: bool) -> Result<()> {
        if strict && !self.is_consistent() {
            bail!(
                "Sequential and parallel sums disagree at {} indices",
                self.mismatches.len()
            );
        }
        Ok(())
    }

    /// Sequential time divided by parallel time.
    pub fn speedup(&self) -> f64 {
        self.sequential_time.as_secs_f64() / self.parallel_time.as_secs_f64().max(f64::MIN_POSITIVE)
    }

    /// Writes the mismatch lines followed by the two timing lines.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for mismatch in &self.mismatches {
            writeln!(out, "{}", mismatch)?;
        }
        writeln!(out, "1T summing time:  {} ticks", ticks(self.sequential_time))?;
        writeln!(out, "parallel summing time: {} ticks", ticks(self.parallel_time))?;
        Ok(())
    }
}

/// Generates the inputs, runs both summers under the timer, verifies them and
/// writes the report to `out`.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<BenchReport> {
    // The pool is started outside the timed region.
    let processor = ParallelProcessor::new(config.threads, config.chunk_size)?;
    info!(
        "summing {} elements with {} workers, chunk size {}",
        config.array_size,
        processor.num_workers(),
        processor.chunk_size()
    );

    let arrays = SourceArrays::generate(config.array_size)?;
    let mut sum_sequential_out = vec![0i32; arrays.len()];
    let mut sum_parallel_out = vec![0i32; arrays.len()];

    let (result, sequential_time) =
        timed(|| sum_sequential(&arrays.a, &arrays.b, &mut sum_sequential_out));
    result?;
    debug!("sequential sum finished in {:.2?}", sequential_time);

    let (result, parallel_time) =
        timed(|| processor.sum(&arrays.a, &arrays.b, &mut sum_parallel_out));
    result?;
    debug!("parallel sum finished in {:.2?}", parallel_time);

    let mismatches = find_mismatches(
        &arrays.a,
        &arrays.b,
        &sum_sequential_out,
        &sum_parallel_out,
    )?;
    debug!("{} mismatched indices", mismatches.len());

    let report = BenchReport {
        sequential_time,
        parallel_time,
        mismatches,
    };
    report.write_to(out)?;
    info!("speedup: {:.2}x", report.speedup());

    Ok(report)
}
