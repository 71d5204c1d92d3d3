mod cache;
mod collectors;
mod config;
mod error;
mod models;
mod provider;
mod util;

use cache::CacheStore;
use clap::Parser;
use config::Config;
use error::{DfError, DfResult};
use provider::{StatsProvider, StatsResult};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mrtgdf",
    version,
    about = "Report filesystem block and inode usage in MRTG format",
    long_about = "Report filesystem block and inode usage in MRTG format.\n\n\
                  When PATH is not currently mounted, the last statistics seen \
                  while it was mounted are reported instead."
)]
struct Cli {
    /// Filesystem path to report on
    path: PathBuf,

    /// Print a JSON snapshot instead of the four MRTG lines
    #[arg(long)]
    json: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(c)  => c,
        Err(e) => {
            // --help and --version come through here too
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

// stdout carries the monitoring payload, so logs always go to stderr.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("mrtgdf=warn"),
        1 => EnvFilter::new("mrtgdf=info"),
        _ => EnvFilter::new("mrtgdf=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> DfResult<()> {
    let (cfg, home) = Config::load()?;
    let hostname = match &cfg.output.hostname {
        Some(h) => h.clone(),
        None    => collectors::host::hostname()?,
    };
    let store = CacheStore::new(cfg.cache_dir(&home));
    debug!("cache directory {}", store.dir().display());

    let provider = StatsProvider::new(store);
    let result = provider.get_stats(&cli.path)?;

    let text = if cli.json {
        let snapshot = util::report::json(&cli.path, &result, &hostname);
        format!("{}\n", serde_json::to_string_pretty(&snapshot)?)
    } else {
        util::report::mrtg(&result, &hostname)
    };
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(DfError::Stdout)?;

    // The placeholder block is out; the miss still fails the run.
    match result {
        StatsResult::Unknown(e) => Err(e),
        StatsResult::Live(_) | StatsResult::Cached(_) => Ok(()),
    }
}
