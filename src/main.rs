//! Interactive entry point.
//!
//! Each player runs one process. The three flags must line up across the
//! table: `--seed` and `--num-players` identical everywhere, and a unique
//! `--player-index` per player. The process prints its starting checksum
//! (read it aloud — everyone should hear the same word) and then reads
//! commands from stdin until `quit` or EOF.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;

use policy_deck::commands::{self, Command};
use policy_deck::game::GameEngine;

/// Deterministic policy-deck simulator for seed-synchronized play.
#[derive(Debug, Parser)]
#[command(name = "policy-deck", version, about)]
struct Cli {
    /// Seed for the random number generator. This must be the same for all
    /// players.
    #[arg(long)]
    seed: u64,

    /// The total number of players (5-10). This must be the same for all
    /// players.
    #[arg(long)]
    num_players: u8,

    /// Your player index, between 1 and the total number of players. This
    /// must be unique for each player.
    #[arg(long)]
    player_index: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let mut engine = match GameEngine::new(cli.seed, cli.num_players, cli.player_index) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    info!(
        seed = cli.seed,
        num_players = cli.num_players,
        player_index = cli.player_index,
        "session started"
    );

    println!("Starting {}", engine.checksum_line());

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!(">> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim().to_lowercase();
        if line.is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match commands::execute(&mut engine, &command) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
