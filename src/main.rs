use anyhow::Result;
use clap::Parser;
use log::debug;
use std::io::{self, Write};

use arraysum::bench;
use arraysum::config::{parse_array_size, BenchConfig};
use arraysum::parallel::DEFAULT_CHUNK_SIZE;

#[derive(Parser, Debug)]
#[command(name = "arraysum")]
#[command(about = "Sum two arrays sequentially and in parallel chunks, then compare", long_about = None)]
struct Args {
    /// Number of elements in each array (integer > 2)
    #[arg(value_name = "ARRAY_SIZE", allow_negative_numbers = true)]
    array_size: String,

    /// Maximum number of indices per parallel chunk
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Number of worker threads (defaults to number of CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Exit with an error if the two results disagree
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _ = env_logger::try_init();

    // Everything is validated before any array is allocated.
    let array_size = parse_array_size(&args.array_size)?;
    let config = BenchConfig::new(array_size)?
        .with_chunk_size(args.chunk_size)?
        .with_threads(args.threads)?
        .with_strict(args.strict);
    debug!("config: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = bench::run(&config, &mut out)?;
    out.flush()?;

    report.check(config.strict)?;

    Ok(())
}
