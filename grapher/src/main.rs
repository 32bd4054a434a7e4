//! # grapher
//!
//! A CLI for sampling mathematical functions into fixed-width text tables.
//!
//! ## Overview
//!
//! grapher is built on top of grapherlib and wires one function (sine,
//! constant, or linear) into the table engine: it samples the function
//! over `--min..--max` by `--step`, then prints the table with the
//! configured padding, header, and delimiter.
//!
//! ## Usage
//!
//! ```bash
//! # One period of sine, sampled every pi/16
//! grapher sine --min 0 --max 6.2831853 --step 0.19634954 --header "Table {n}"
//!
//! # A constant function over an integer range
//! grapher constant --value 6 --min 4 --max 17
//!
//! # y = 3x + 4, half steps, space padding
//! grapher linear --slope 3 --intercept 4 --min 0 --max 5 --step 0.5 --pad-char " "
//!
//! # Machine-readable samples
//! grapher sine --min 0 --max 3.14 --step 0.5 --output json
//! ```

use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use grapherlib::{
    render_to_string, Function, KeyPadding, RenderOptions, SampleRange, Table, TableStore,
};
use serde::Serialize;

/// JSON payload for `--output json`
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    pad_length: usize,
    pad_char: char,
    tables: &'a [Table],
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("grapher")
        .version(env!("CARGO_PKG_VERSION"))
        .author("William Leverone")
        .about("Sample a mathematical function into a fixed-width text table")
        .arg(
            Arg::new("function")
                .value_parser(["sine", "constant", "linear"])
                .required(true)
                .help("Function to sample"),
        )
        .arg(
            Arg::new("value")
                .long("value")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .default_value("0")
                .help("Output of the constant function"),
        )
        .arg(
            Arg::new("slope")
                .long("slope")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .default_value("1")
                .help("Slope of the linear function"),
        )
        .arg(
            Arg::new("intercept")
                .long("intercept")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .default_value("0")
                .help("Y-intercept of the linear function"),
        )
        .arg(
            Arg::new("min")
                .long("min")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .default_value("0")
                .help("First input value"),
        )
        .arg(
            Arg::new("max")
                .long("max")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .default_value("10")
                .help("Inclusive upper bound on input values"),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64))
                .default_value("1")
                .help("Increment between inputs (must be positive)"),
        )
        .arg(
            Arg::new("pad-length")
                .long("pad-length")
                .value_parser(clap::value_parser!(usize))
                .default_value("12")
                .help("Cell width in characters"),
        )
        .arg(
            Arg::new("pad-char")
                .long("pad-char")
                .default_value("=")
                .help("Fill character for cells (single character)"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .help("Header template printed above each table ({n} = table number)"),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .default_value("")
                .help("String printed between tables"),
        )
        .arg(
            Arg::new("legacy-keys")
                .long("legacy-keys")
                .action(ArgAction::SetTrue)
                .help("Emit key cells unpadded (historical byte-compatible output)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Build the selected function from its arguments
fn build_function(matches: &ArgMatches) -> Function {
    match matches.get_one::<String>("function").map(String::as_str) {
        Some("constant") => Function::constant(*matches.get_one::<f64>("value").unwrap()),
        Some("linear") => Function::linear(
            *matches.get_one::<f64>("slope").unwrap(),
            *matches.get_one::<f64>("intercept").unwrap(),
        ),
        // clap's value_parser restricts us to the three known names
        _ => Function::sine(),
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let pad_length = *matches.get_one::<usize>("pad-length").unwrap();
    let pad_char_arg = matches.get_one::<String>("pad-char").unwrap();
    let mut chars = pad_char_arg.chars();
    let pad_char = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => bail!("--pad-char must be a single character, got '{}'", pad_char_arg),
    };
    if pad_length < 1 {
        bail!("--pad-length must be at least 1");
    }

    let range = SampleRange::new(
        *matches.get_one::<f64>("min").unwrap(),
        *matches.get_one::<f64>("max").unwrap(),
    )
    .step(*matches.get_one::<f64>("step").unwrap());

    let function = build_function(matches);

    let mut store = TableStore::with_padding(pad_length, pad_char);
    store
        .add_function(&function, range)
        .context("failed to sample function")?;

    if matches.get_one::<String>("output").map(String::as_str) == Some("json") {
        let payload = JsonOutput {
            pad_length,
            pad_char,
            tables: store.tables(),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let mut options = RenderOptions::new()
        .delimiter(matches.get_one::<String>("delimiter").unwrap().clone());
    if let Some(header) = matches.get_one::<String>("header") {
        options = options.header(header.clone());
    }
    if matches.get_flag("legacy-keys") {
        options = options.key_padding(KeyPadding::LegacyUnpadded);
    }

    let rendered = render_to_string(&store, &options).context("failed to render tables")?;
    print!("{}", rendered);
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let label = Style::new().red().bold().apply_to("error:");
            eprintln!("{} {:#}", label, err);
            ExitCode::FAILURE
        }
    }
}
