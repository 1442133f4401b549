/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::Parser;
use std::process;

use eevalue::{parse_notation, EeError, EeValue, FitMode, Series, SERIES};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// EE value fitter
///
/// Parses EE shorthand values (4k7, 4.7k, 100R, 3.1) and fits them
/// to the standard E-series of preferred values.
struct Args {
    #[clap(long, short)]
    /// Fit to these series only; defaults to all of E3..E192.
    series: Vec<Series>,
    #[clap(long, short, value_enum, default_value_t = FitMode::Round)]
    /// Rounding mode.
    mode: FitMode,
    #[clap(long)]
    /// Use the exact geometric values instead of the historical
    /// E24 substitutions.
    exact: bool,
    #[clap(long, short, default_value_t = 2)]
    /// Display precision (fractional digits).
    precision: i64,
    #[clap(long, short)]
    /// Output a JSON representation.
    json: bool,
    /// The values to fit.
    value: Vec<String>,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1)
        }
    }
}

fn run(args: &Args) -> Result<(), EeError> {
    let series = match args.series.is_empty() {
        true => &SERIES[..],
        false => &args.series[..],
    };

    for input in &args.value {
        let val = EeValue::try_new(parse_notation(input)?, args.precision)?;
        println!("{} = {}", input, val);
        for s in series {
            let fitted = val.fit(*s, args.mode, !args.exact);
            match args.json {
                false => println!("  {}: {}", s, fitted),
                true => println!(
                    "  {}: {}",
                    s,
                    serde_json::to_string(&fitted)
                        .expect("serialization failed!?")
                ),
            }
        }
    }

    Ok(())
}
