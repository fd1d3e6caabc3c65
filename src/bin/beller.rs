//! Developer-facing binary driving the RLBWT / Beller machinery directly:
//! a smoke test, the LCP-interval enumerator, wavelet-tree construction
//! timing, and a raw-BWT-to-int-vector converter.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use vers_vecs::WaveletMatrix;

use rlbwt_lcp::io::load_raw_bwt;
use rlbwt_lcp::lf::backward_isa_iterator;
use rlbwt_lcp::rlbwt::DenseFposIndex;
use rlbwt_lcp::{BellerEnumerator, EnumMode, Error, Rlbwt};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Test,
    Compute,
    Wt,
    Iv,
}

#[derive(Parser)]
#[command(name = "beller", about = "RLBWT / Beller LCP enumerator driver")]
struct Args {
    /// Path to a raw BWT file: one byte per symbol, exactly one 0x00 end-marker.
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Mode::Compute)]
    mode: Mode,
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

fn run_test(bwt: &[u8]) -> Result<(), Error> {
    let rlbwt = Rlbwt::<DenseFposIndex>::from_bwt_bytes(bwt.iter().copied())?;
    assert!(rlbwt.run_count() > 0, "RLBWT must have at least one run");
    assert_eq!(rlbwt.len(), bwt.len() as u64, "RLBWT length must match input length");

    for i in 1..rlbwt.run_count() {
        assert_ne!(
            rlbwt.head_char(i - 1),
            rlbwt.head_char(i),
            "adjacent runs must have distinct head characters"
        );
    }

    let chain: Vec<u64> = backward_isa_iterator(&rlbwt)
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(chain.len() as u64, rlbwt.len(), "backward ISA chain must visit every position exactly once");

    let mut enumerator = BellerEnumerator::new(&rlbwt, EnumMode::Intervals);
    let mut last_lcp = 0u64;
    let mut count = 0u64;
    for item in &mut enumerator {
        let interval = item?;
        assert!(interval.i <= interval.j, "interval bounds must be ordered");
        assert!(interval.lcp >= last_lcp, "intervals must be emitted in nondecreasing depth order");
        last_lcp = interval.lcp;
        count += 1;
    }
    assert!(count > 0, "at least the root interval must be emitted");

    tracing::info!(runs = rlbwt.run_count(), intervals = count, "all invariants held");
    println!("ok: {} runs, {} intervals", rlbwt.run_count(), count);
    Ok(())
}

fn run_compute(bwt: &[u8]) -> Result<(), Error> {
    let rlbwt = Rlbwt::<DenseFposIndex>::from_bwt_bytes(bwt.iter().copied())?;
    let enumerator = BellerEnumerator::new(&rlbwt, EnumMode::Intervals);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for item in enumerator {
        let interval = item?;
        writeln!(out, "{} {} {}", interval.i, interval.j, interval.lcp)?;
    }
    Ok(())
}

fn run_wt(bwt: &[u8]) -> Result<(), Error> {
    let values: Vec<u64> = bwt.iter().map(|&b| b as u64).collect();
    let start = Instant::now();
    let wm = WaveletMatrix::from_slice(&values, 8);
    let elapsed = start.elapsed();
    println!("bits: {}", wm.heap_size() * 8);
    println!("construction_time_us: {}", elapsed.as_micros());
    Ok(())
}

fn run_iv(bwt: &[u8]) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for &b in bwt {
        out.write_all(&(b as u64).to_le_bytes())?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Error> {
    let bwt = load_raw_bwt(&args.input)?;
    match args.mode {
        Mode::Test => run_test(&bwt),
        Mode::Compute => run_compute(&bwt),
        Mode::Wt => run_wt(&bwt),
        Mode::Iv => run_iv(&bwt),
    }
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
