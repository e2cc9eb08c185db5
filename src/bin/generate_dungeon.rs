//! Dungeon generator binary: carves rooms and corridors out of a solid block.
//!
//! Usage: cargo run --release --bin generate_dungeon -- [OPTIONS]
//!
//! Options:
//!   --output <PATH>   Level JSON to write (default: "levels/dungeon.json")
//!   --seed <SEED>     Random seed (default: 12345)
//!   --rooms <N>       Rooms to place (default: 6)
//!   --width <W>       Block width in world units (default: 64)
//!   --depth <D>       Block depth in world units (default: 64)
//!   --keep-tools      Leave the subtractive brushes in the level

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use brushwork::core::{logging, Result};
use brushwork::generation::{self, DungeonConfig};

const USAGE: &str = "Usage: generate_dungeon [--output <PATH>] [--seed <SEED>] [--rooms <N>] \
                     [--width <W>] [--depth <D>] [--keep-tools]";

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let (config, output) = match parse_options(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    if let Err(e) = run(&config, output) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &DungeonConfig, output: PathBuf) -> Result<()> {
    println!("=== Brushwork Dungeon Generator ===");
    println!("Seed:   {}", config.seed);
    println!("Block:  {} x {} x {}", config.width, config.height, config.depth);
    println!("Rooms:  {}", config.room_count);
    println!("Output: {}", output.display());

    let start = Instant::now();
    let dungeon = generation::generate(config)?;
    log::info!(
        "{} rooms, {} brushes in {:.1}ms",
        dungeon.rooms.len(),
        dungeon.level.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    dungeon.level.save(&output)
}

fn parse_options(args: &[String]) -> std::result::Result<(DungeonConfig, PathBuf), String> {
    let defaults = DungeonConfig::default();
    let config = DungeonConfig {
        seed: parse_arg(args, "--seed")?.unwrap_or(defaults.seed),
        room_count: parse_arg(args, "--rooms")?.unwrap_or(defaults.room_count),
        width: parse_arg(args, "--width")?.unwrap_or(defaults.width),
        depth: parse_arg(args, "--depth")?.unwrap_or(defaults.depth),
        keep_tools: args.iter().any(|a| a == "--keep-tools"),
        ..defaults
    };
    let output = parse_arg(args, "--output")?
        .unwrap_or_else(|| PathBuf::from("levels/dungeon.json"));
    Ok((config, output))
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
