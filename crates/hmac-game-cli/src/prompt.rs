//! Interactive prompt: show the commitment, read a choice, reveal.

use anyhow::{Context, Result};
use hmac_game_core::{
    help_table, GameSession, KeyedHashFunction, RevealPayload, SecureRandomSource,
};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// One line of player input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    /// Zero-based index into the move set
    Choose(usize),
    Invalid,
}

/// Parse a line typed at the prompt; moves are numbered from 1
pub fn parse_command(input: &str, move_count: usize) -> Command {
    match input.trim() {
        "0" => Command::Exit,
        "?" => Command::Help,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=move_count).contains(&n) => Command::Choose(n - 1),
            _ => Command::Invalid,
        },
    }
}

/// Play one round on `input`/`out`
///
/// The commitment is printed before the first line is read. Returns the
/// reveal, or `None` if the player exits or input ends first.
pub fn play<R, H, I, W>(
    session: &mut GameSession<R, H>,
    mut input: I,
    mut out: W,
) -> Result<Option<RevealPayload>>
where
    R: SecureRandomSource,
    H: KeyedHashFunction,
    I: BufRead,
    W: Write,
{
    let commitment = session.start().context("failed to commit to computer move")?;
    writeln!(out, "HMAC: {commitment}")?;
    print_menu(session, &mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "\nEnter your move: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!(session = %session.id(), "input closed before a move was chosen");
            session.close();
            return Ok(None);
        }

        match parse_command(&line, session.moves().len()) {
            Command::Exit => {
                writeln!(out, "Goodbye!")?;
                session.close();
                return Ok(None);
            }
            Command::Help => {
                let table = help_table(session.moves())?;
                writeln!(out, "\nHelp Table:\n{table}")?;
            }
            Command::Choose(index) => {
                let player_move = session.moves()[index].clone();
                match session.submit_player_move(&player_move) {
                    Ok(reveal) => {
                        print_reveal(&reveal, &mut out)?;
                        return Ok(session.close());
                    }
                    Err(e) if e.is_recoverable() => {
                        warn!(error = %e, "move rejected");
                        writeln!(out, "Invalid input. Please try again.")?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Command::Invalid => {
                writeln!(out, "Invalid input. Please try again.")?;
            }
        }
    }
}

fn print_menu<R, H, W: Write>(session: &GameSession<R, H>, out: &mut W) -> Result<()>
where
    R: SecureRandomSource,
    H: KeyedHashFunction,
{
    writeln!(out, "\nAvailable moves:")?;
    for (i, name) in session.moves().iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, name)?;
    }
    writeln!(out, "0 - Exit")?;
    writeln!(out, "? - Help")?;
    Ok(())
}

fn print_reveal<W: Write>(reveal: &RevealPayload, out: &mut W) -> Result<()> {
    writeln!(out, "Your move: {}", reveal.player_move)?;
    writeln!(out, "Computer move: {}", reveal.opponent_move)?;
    writeln!(out, "{}", reveal.outcome.announcement())?;
    writeln!(out, "HMAC key: {}", reveal.secret_key.to_hex())?;
    Ok(())
}
