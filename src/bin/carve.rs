//! Brush subtraction tool: carves a level file with one of its subtractive brushes.
//!
//! Usage: cargo run --release --bin carve -- --input <PATH> [OPTIONS]
//!
//! Options:
//!   --input <PATH>     Level JSON to read (required)
//!   --output <PATH>    Where to write the result (default: print to stdout)
//!   --tool <INDEX>     Index of the subtractive brush (default: last subtractive brush)
//!   --epsilon <E>      Smallest fragment extent kept (default: 0.01)

use std::path::PathBuf;
use std::str::FromStr;

use brushwork::brush::SubtractConfig;
use brushwork::core::{logging, Result};
use brushwork::level::Level;

const USAGE: &str = "Usage: carve --input <PATH> [--output <PATH>] [--tool <INDEX>] [--epsilon <E>]";

/// Parsed command line
#[derive(Debug, PartialEq)]
struct Options {
    input: PathBuf,
    output: Option<PathBuf>,
    tool: Option<usize>,
    epsilon: f32,
}

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    if let Err(e) = run(&options) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<()> {
    let config = SubtractConfig { epsilon: options.epsilon };
    let mut level = Level::load(&options.input)?;

    // Without --tool, carve with the most recently added subtractive brush
    let stats = match options.tool {
        Some(index) => level.subtract_at(index, &config)?,
        None => level.subtract_last(&config)?,
    };
    log::info!(
        "Carved {} brushes ({} removed, {} fragments)",
        stats.carved, stats.removed, stats.fragments
    );

    match &options.output {
        Some(path) => level.save(path)?,
        None => println!("{}", level.to_json_string()?),
    }
    Ok(())
}

fn parse_options(args: &[String]) -> std::result::Result<Options, String> {
    let input = parse_arg(args, "--input")?.ok_or("missing --input <PATH>")?;
    let epsilon = parse_arg(args, "--epsilon")?.unwrap_or(SubtractConfig::default().epsilon);
    if !(epsilon.is_finite() && epsilon >= 0.0) {
        return Err(format!("--epsilon must be a non-negative number, got {}", epsilon));
    }

    Ok(Options {
        input,
        output: parse_arg(args, "--output")?,
        tool: parse_arg(args, "--tool")?,
        epsilon,
    })
}

/// Value after `flag`: `Ok(None)` when the flag is absent, `Err` when its value is missing or malformed.
fn parse_arg<T: FromStr>(args: &[String], flag: &str) -> std::result::Result<Option<T>, String> {
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let raw = args.get(i + 1).ok_or_else(|| format!("{} needs a value", flag))?;
    raw.parse()
        .map(Some)
        .map_err(|_| format!("invalid value '{}' for {}", raw, flag))
}
