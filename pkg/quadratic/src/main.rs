extern crate clap;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

extern crate quadratic;

use std::io::{self, Write};

use clap::{App, AppSettings, Arg, ArgMatches};
use tracing::Level;

use quadratic::errors::*;
use quadratic::input::{coefficients_from_args, parse_precision, CoefficientReader};
use quadratic::report;
use quadratic::{Coefficients, Solver, PRECISION};

fn log_level(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Gets the coefficients either from the command line or by prompting on
/// stdin.
fn read_coefficients(matches: &ArgMatches) -> Result<Coefficients> {
    let args = matches
        .values_of("coefficients")
        .map(|values| values.collect::<Vec<_>>())
        .unwrap_or_default();

    if let Some(coefficients) = coefficients_from_args(&args)? {
        return Ok(coefficients);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", report::banner())?;
    out.flush()?;

    let stdin = io::stdin();
    let mut reader = CoefficientReader::new(stdin.lock(), out);
    reader.read()
}

fn main() -> Result<()> {
    let matches = App::new("Quadratic equation solver")
        .about("Solves ax2 + bx + c = 0 over the complex numbers")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("coefficients")
                .value_name("A B C")
                .help("Coefficients of the equation. Prompts on stdin if omitted")
                .multiple(true),
        )
        .arg(
            Arg::with_name("precision")
                .long("precision")
                .value_name("EPSILON")
                .help("Values closer than this are considered equal")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Increases logging verbosity"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_max_level(log_level(matches.occurrences_of("verbose")))
        .with_writer(io::stderr)
        .init();

    let precision = match matches.value_of("precision") {
        Some(v) => parse_precision(v)?,
        None => PRECISION,
    };
    let coefficients = read_coefficients(&matches)?;
    info!("Solving with precision {}", precision);

    println!("{}", coefficients);

    let solution = Solver::with_precision(precision).solve(&coefficients);
    debug!("{:?}", solution);

    println!("{}", report::describe(&solution));

    Ok(())
}
