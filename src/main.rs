use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use tracing::debug;

use portions::language::{update, Event, Settings};
use portions::{output, rendering, scaling};

fn main() {
    tracing_subscriber::fmt::init();

    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("portions")
        .version(VERSION)
        .propagate_version(true)
        .about("Scale the quantities in a recipe to a different number of portions.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("convert")
                .about("Rescale every leading quantity in the given recipe")
                .arg(
                    Arg::new("portions")
                        .short('p')
                        .long("portions")
                        .value_name("ORIG:NEW")
                        .conflicts_with("multiplier")
                        .help("Original and new serving counts, separated by a colon, for example 4:8."),
                )
                .arg(
                    Arg::new("multiplier")
                        .short('m')
                        .long("multiplier")
                        .value_name("FACTOR")
                        .help("Factor to scale every quantity by directly."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Write the converted recipe to FILE instead of standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the recipe you want to convert. Use \"-\" to read from standard input."),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show which lines carry quantities and how they would round")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the line reports as JSON instead of a terminal listing."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the recipe you want to inspect. Use \"-\" to read from standard input."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("convert", submatches)) => {
            run_convert(submatches);
        }
        Some(("inspect", submatches)) => {
            run_inspect(submatches);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: portions [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn run_convert(submatches: &ArgMatches) {
    let settings = gather_settings(submatches);

    if !settings.is_valid() {
        fail("conversion settings must be positive numbers");
    }

    let ratio = settings
        .mode()
        .ratio();
    debug!(ratio);

    let content = load_content(submatches);

    let converted = match scaling::convert_checked(&content, ratio) {
        Some(converted) => converted,
        None => fail("conversion settings must produce a finite positive ratio"),
    };

    let target = submatches
        .get_one::<String>("output")
        .map(Path::new);

    output::emit(target, &converted);
}

fn run_inspect(submatches: &ArgMatches) {
    let content = load_content(submatches);

    let reports = rendering::survey(&content);

    let rendered = if submatches.get_flag("json") {
        rendering::render_json(&reports)
    } else {
        rendering::render_terminal(&reports)
    };

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
}

fn load_content(submatches: &ArgMatches) -> String {
    let filename = match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => fail("a recipe filename is required"),
    };

    match scaling::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", error.full_details());
            std::process::exit(1);
        }
    }
}

/// Build the conversion settings from the command line the same way the
/// interactive form would: select a mode, then enter the numbers. Values
/// that fail to parse become NaN and are caught by the validity gate.
fn gather_settings(submatches: &ArgMatches) -> Settings {
    let portions = submatches.get_one::<String>("portions");
    let multiplier = submatches.get_one::<String>("multiplier");

    match (portions, multiplier) {
        (Some(portions), None) => {
            let (orig, new) = match portions.split_once(':') {
                Some(pair) => pair,
                None => fail("--portions takes ORIG:NEW, for example 4:8"),
            };

            let settings = update(Settings::default(), Event::SelectPortions);
            let settings = update(settings, Event::SetOrigPortions(parse_field(orig)));
            update(settings, Event::SetNewPortions(parse_field(new)))
        }
        (None, Some(factor)) => {
            let settings = update(Settings::default(), Event::SelectMultiplier);
            update(settings, Event::SetMultiplier(parse_field(factor)))
        }
        _ => fail("specify either --portions ORIG:NEW or --multiplier FACTOR"),
    }
}

/// Numeric command line fields accept ',' as the decimal separator, the
/// same as quantities in the recipe text.
fn parse_field(text: &str) -> f64 {
    text.trim()
        .replace(',', ".")
        .parse()
        .unwrap_or(f64::NAN)
}

fn fail(message: &str) -> ! {
    eprintln!("{}: {}", "error".bright_red(), message);
    std::process::exit(1);
}
