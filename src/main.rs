mod io;
mod report;
mod state;
mod types;

use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

/// A copy of `/proc/net/tcp`, relative to the working directory.
const INPUT_PATH: &str = "./tcp";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut tally = state::Tally::default();
    let (mut headers, mut unrecognised) = (0usize, 0usize);

    let mut reader = io::TcpTableReader::load(INPUT_PATH)?;
    for result in reader.by_ref() {
        let row = result?;
        match tally.process(&row) {
            state::Classified::Counted(state) => trace!(%state, "counted"),
            state::Classified::Header => headers += 1,
            state::Classified::Unrecognised => {
                trace!(state = %row.state, "unrecognised state code");
                unrecognised += 1;
            }
        }
    }

    debug!(
        counted = tally.total(),
        headers,
        unrecognised,
        skipped = reader.skipped(),
        "parsed connection table"
    );

    // The table is read before the argument is checked
    let report = report::Report::from_args(std::env::args_os().skip(1))?;

    report.write(&tally, std::io::stdout().lock())?;

    Ok(())
}
