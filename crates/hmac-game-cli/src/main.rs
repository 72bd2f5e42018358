//! HMAC Game command-line front end
//!
//! Plays one round of generalized rock-paper-scissors against the computer.
//! The computer's move is committed with HMAC-SHA256 before the player
//! chooses; the key is printed afterwards so the player can check it.

mod prompt;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hmac_game_core::crypto::verify_reveal;
use hmac_game_core::{GameSession, KeyedHashFunction, VerificationRecord};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "hmac-game",
    version,
    about = "Provably fair rock-paper-scissors with any odd number of moves",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Moves in cycle order: an odd number >= 3 of distinct names
    #[arg(value_name = "MOVES")]
    moves: Vec<String>,

    /// Also print the reveal as a JSON verification record
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "HMAC_GAME_LOG", default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a revealed key and move against a published HMAC
    Verify {
        /// HMAC shown before the move (hex)
        #[arg(long)]
        hmac: String,

        /// Key revealed after the move (hex)
        #[arg(long)]
        key: String,

        /// Computer move revealed after the round
        #[arg(value_name = "MOVE")]
        move_name: String,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_game(moves: Vec<String>, json: bool) -> Result<()> {
    let mut session = GameSession::new(moves).context("cannot start game")?;
    info!(session = %session.id(), moves = %session.moves(), "game started");

    let stdin = io::stdin();
    let reveal = prompt::play(&mut session, stdin.lock(), io::stdout())?;

    if let (Some(reveal), true) = (reveal, json) {
        let record = VerificationRecord::new(
            session.id(),
            session.hasher().algorithm(),
            session.moves(),
            &reveal,
        );
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}

fn run_verify(hmac: &str, key: &str, move_name: &str) -> Result<()> {
    if verify_reveal(hmac, key, move_name)? {
        println!("OK: HMAC matches move '{move_name}'");
        Ok(())
    } else {
        bail!("HMAC does not match move '{move_name}' under the given key");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Some(Command::Verify {
            hmac,
            key,
            move_name,
        }) => run_verify(&hmac, &key, &move_name),
        None => run_game(cli.moves, cli.json),
    }
}
