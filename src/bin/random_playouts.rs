//! Seeded random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin random_playouts`
//! `cargo run --release --bin random_playouts -- --games 50 --seed 7 --verbose`

use hotseat_chess::controller::game_config::GameConfig;
use hotseat_chess::utils::random_playout::{play_random_series, PlayoutConfig, PlayoutSeriesConfig};

fn main() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let mut series = PlayoutSeriesConfig {
        games: 20,
        base_seed: 1234,
        per_game: PlayoutConfig {
            max_plies: 300,
            game: GameConfig::from_env().map_err(|err| err.to_string())?,
        },
        verbose: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => series.verbose = true,
            "--games" => series.games = parse_value(&arg, args.next())?,
            "--seed" => series.base_seed = parse_value(&arg, args.next())?,
            "--max-plies" => series.per_game.max_plies = parse_value(&arg, args.next())?,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    let stats = play_random_series(&series).map_err(|err| err.to_string())?;
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} expects a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}
