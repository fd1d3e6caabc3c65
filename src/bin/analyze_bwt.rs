//! Developer-facing smoke binary: loads a raw BWT file and prints its
//! run/character/LCP summary statistics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rlbwt_lcp::io::load_raw_bwt;
use rlbwt_lcp::stats::TextStatistics;
use rlbwt_lcp::Error;

#[derive(Parser)]
#[command(name = "analyze_bwt", about = "Prints run/character/LCP statistics for a raw BWT file")]
struct Args {
    /// Path to a raw BWT file: one byte per symbol, exactly one 0x00 end-marker.
    #[arg(short, long)]
    input: PathBuf,
}

fn init_tracing() {
    let level = std::env::var("STOOL_LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(1);
    let filter = match level {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

fn run(args: Args) -> Result<(), Error> {
    let bwt = load_raw_bwt(&args.input)?;
    tracing::info!(bytes = bwt.len(), "loaded raw BWT");
    let stats = TextStatistics::from_bwt_bytes(&bwt)?;

    println!("n: {}", stats.n);
    println!("runs: {}", stats.run_count);
    println!("alphabet_size: {}", stats.alphabet_size);
    print!("alphabet:");
    for c in stats.alphabet() {
        print!(" {:#04x}", c);
    }
    println!();
    for c in stats.alphabet() {
        println!("  char_count[{:#04x}]: {}", c, stats.char_counter[c as usize]);
    }
    println!("max_lcp: {}", stats.max_lcp);
    println!("avg_lcp: {:.4}", stats.avg_lcp);
    println!("delta: {:.4}", stats.delta);
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::from(0),
        Err(err @ Error::Io(_)) => {
            tracing::error!(%err, "I/O error");
            ExitCode::from(1)
        }
        Err(err) => {
            tracing::error!(%err, "bad input");
            ExitCode::from(2)
        }
    }
}
