//! `automat` — run one grid epidemic and print the summary table.
//!
//! Run with:
//!   cargo run -p ca-cli --release -- 200 10 3 5
//!
//! Logs go to stderr; stdout carries only the summary block.

mod args;


use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use ca_output::{CounterLog, CounterLogObserver, write_summary};
use ca_sim::{NoopObserver, SimBuilder, SimReport};

use args::{Args, USAGE};

fn main() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("Incorrect program arguments.\n{e}");
            eprint!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    };

    init_tracing(args.verbose)?;

    let config = args.sim_config(wall_clock_seed())?;
    info!(
        seed = config.seed,
        grid_size = config.grid_size,
        max_days = config.max_days,
        initial_infected = config.initial_infected,
        trips_per_day = config.trips_per_day,
        travel_radius = config.travel_radius,
        "starting simulation"
    );

    let mut sim = SimBuilder::new(config).build()?;
    let report = run(&mut sim, &args)?;

    write_summary(&mut io::stdout().lock(), &report)?;

    if !args.per_day {
        if let Some(path) = &args.counter_file {
            let log = CounterLog::new(path);
            if let Err(err) = log.append_status(&report.counts, args.counter) {
                warn!(%err, "counter file not updated");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Run to completion, streaming the per-day counter series when requested.
fn run(sim: &mut ca_sim::Sim, args: &Args) -> Result<SimReport> {
    match (&args.counter_file, args.per_day) {
        (Some(path), true) => {
            let mut observer = CounterLogObserver::new(CounterLog::new(path), args.counter);
            let report = sim.run(&mut observer)?;
            if let Some(err) = observer.take_error() {
                warn!(%err, "per-day counter series incomplete");
            }
            Ok(report)
        }
        _ => Ok(sim.run(&mut NoopObserver)?),
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
