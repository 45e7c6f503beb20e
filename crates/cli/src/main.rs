//! # addsub
//!
//! Adds and subtracts two fixed four-element arrays with the SIMD kernel and
//! prints the results:
//!
//! ```text
//! Sum: 5, 11, 19, 29
//! Diff: -3, -7, -13, -21
//! ```
//!
//! Logs go to stderr so stdout stays exactly those two lines.

use addsub_kernel::{BackendType, CombineContext};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io;

mod driver;

/// Add and subtract two fixed arrays with the SIMD kernel
#[derive(Parser, Debug)]
#[command(name = "addsub")]
#[command(about = "Element-wise add/subtract driver")]
#[command(version)]
struct Cli {
    /// Backend to run the kernel on
    #[arg(short, long, value_enum, default_value_t = BackendChoice::Auto, env = "ADDSUB_BACKEND")]
    backend: BackendChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Backend selection as accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BackendChoice {
    /// Widest backend the CPU supports
    Auto,
    /// Portable loop, one element at a time
    Scalar,
    /// x86_64 AVX2, four lanes per instruction
    Avx2,
    /// x86_64 AVX-512F, eight lanes (needs the `avx512` build feature)
    Avx512,
    /// aarch64 NEON, two lanes per instruction
    Neon,
}

impl BackendChoice {
    fn backend_type(self) -> Option<BackendType> {
        match self {
            BackendChoice::Auto => None,
            BackendChoice::Scalar => Some(BackendType::Scalar),
            BackendChoice::Avx2 => Some(BackendType::Avx2),
            BackendChoice::Avx512 => Some(BackendType::Avx512),
            BackendChoice::Neon => Some(BackendType::Neon),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("parsed arguments: {cli:?}");

    let ctx = match cli.backend.backend_type() {
        None => CombineContext::new(),
        Some(backend) => CombineContext::with_backend(backend)
            .with_context(|| format!("Cannot run on the '{backend}' backend"))?,
    };
    log::info!("using backend: {}", ctx.backend_name());

    let stdout = io::stdout();
    driver::run(&ctx, &mut stdout.lock())
}

/// `RUST_LOG` wins; otherwise the level follows the `-v` count
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
