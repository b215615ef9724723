// ============================================================================
// Console Calculator
// Interactive entry point for the decimal calculator
// ============================================================================

use clap::Parser;
use decimal_calculator::console::{
    configure, parse_yes_no, ConsoleObserver, ConsoleSession, Prompter, SharedWriter,
};
use decimal_calculator::numeric::MAX_PRECISION;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

/// Two-operand calculator with half-up rounding and an optional ban on
/// negative results. Options not given on the command line are prompted for.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Decimal places to round results to
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64))]
    precision: Option<u32>,

    /// Allow negative results (y/n)
    #[arg(long, value_parser = parse_yes_no)]
    allow_negative: Option<bool>,
}

#[cfg(feature = "logging")]
fn init_logging() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn run(args: Args) -> io::Result<()> {
    let stdout = SharedWriter::new(io::stdout());
    let mut prompter = Prompter::new(io::stdin().lock(), stdout.clone());

    let Some(config) = configure(&mut prompter, args.precision, args.allow_negative)? else {
        return Ok(());
    };

    let observer = Arc::new(ConsoleObserver::new(stdout));
    let mut session = ConsoleSession::new(prompter, config, observer);
    session.run()?;

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("calc: {}", err);
            ExitCode::FAILURE
        },
    }
}
