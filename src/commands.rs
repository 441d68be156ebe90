//! Textual command dispatch — the thin boundary between a line of input
//! and an engine operation.
//!
//! A line is tokenized on whitespace; the first token picks a [`Command`]
//! variant, the rest become typed arguments. Parse problems are
//! [`EngineError::Argument`]s; everything else is whatever the engine
//! returns. The loop in `main` prints either the output or the error and
//! keeps reading — no command failure ends the session.

use crate::core::{CardId, EngineError, EngineResult, Policy};
use crate::game::GameEngine;

/// Per-command help, printed by `help`.
pub const HELP: &str = "\
role : Get your role
draw : Look at the top 3 cards of the deck
look : Look at the value of the given card(s). This can be any one of the top 3 cards. Example: look 8 10
check : Check which policies have been enacted so far
investigate : Learn the party membership of another player. Example: investigate 3
log : List the actions recorded so far
enact : Enact a policy. Example: enact liberal
reveal : Enact the policy at the top of the deck
veto : Discard the top 3 cards without enacting anything
undo : Undo the last action played
help : Show this message
quit : Leave the session";

/// A parsed player command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Role,
    Draw,
    Look(Vec<CardId>),
    Check,
    Investigate(u8),
    Log,
    Enact(Policy),
    Reveal,
    Veto,
    Undo,
    Help,
    Quit,
}

impl Command {
    /// Parse one whitespace-tokenized input line.
    pub fn parse(line: &str) -> EngineResult<Command> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(EngineError::argument("empty command"));
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            "role" => Command::Role,
            "draw" => Command::Draw,
            "look" => {
                if args.is_empty() {
                    return Err(EngineError::argument(
                        "look takes at least one card id; try `help`?",
                    ));
                }
                let cards = args
                    .iter()
                    .map(|token| parse_card(token))
                    .collect::<EngineResult<Vec<CardId>>>()?;
                return Ok(Command::Look(cards));
            }
            "check" => Command::Check,
            "investigate" => {
                let [token] = args.as_slice() else {
                    return Err(EngineError::argument(
                        "investigate takes exactly one seat number; try `help`?",
                    ));
                };
                let seat = token.parse::<u8>().map_err(|_| {
                    EngineError::argument(format!("`{token}` is not a seat number"))
                })?;
                return Ok(Command::Investigate(seat));
            }
            "log" => Command::Log,
            "enact" => {
                let [token] = args.as_slice() else {
                    return Err(EngineError::argument(
                        "enact takes exactly one policy value; try `help`?",
                    ));
                };
                return Ok(Command::Enact(token.parse()?));
            }
            "reveal" => Command::Reveal,
            "veto" => Command::Veto,
            "undo" => Command::Undo,
            "help" => Command::Help,
            "quit" | "q" => Command::Quit,
            other => {
                return Err(EngineError::argument(format!(
                    "unknown command `{other}`; try `help`?"
                )))
            }
        };

        if !args.is_empty() {
            return Err(EngineError::argument(format!(
                "{name} takes no arguments; try `help`?"
            )));
        }
        Ok(command)
    }
}

fn parse_card(token: &str) -> EngineResult<CardId> {
    token
        .parse::<u8>()
        .map(CardId::new)
        .map_err(|_| EngineError::argument(format!("`{token}` is not a card id")))
}

/// Run a parsed command against the engine.
///
/// Returns the text to print, or `None` for commands with no output
/// ([`Command::Quit`] is handled by the caller before this point).
pub fn execute(engine: &mut GameEngine, command: &Command) -> EngineResult<Option<String>> {
    match command {
        Command::Role => Ok(Some(engine.role().to_string())),
        Command::Draw => {
            let pairs = engine.draw();
            if pairs.is_empty() {
                return Ok(Some("the draw pile is empty".to_string()));
            }
            let lines: Vec<String> = pairs
                .iter()
                .map(|(card, value)| format!("{card} {value}"))
                .collect();
            Ok(Some(lines.join("\n")))
        }
        Command::Look(cards) => {
            let values = engine.look(cards)?;
            let words: Vec<&str> = values.iter().map(|value| value.as_str()).collect();
            Ok(Some(words.join(", ")))
        }
        Command::Check => Ok(Some(engine.status_line())),
        Command::Investigate(target) => {
            let party = engine.investigate(*target)?;
            Ok(Some(format!("player {target} is {party}")))
        }
        Command::Log => {
            let transcript = engine.transcript();
            if transcript.is_empty() {
                return Ok(Some("no actions recorded yet".to_string()));
            }
            let lines: Vec<String> = transcript
                .entries()
                .iter()
                .enumerate()
                .map(|(i, action)| format!("{} {action}", i + 1))
                .collect();
            Ok(Some(lines.join("\n")))
        }
        Command::Enact(policy) => engine.enact(*policy).map(Some),
        Command::Reveal => engine.reveal().map(Some),
        Command::Veto => engine.veto().map(Some),
        Command::Undo => engine.undo().map(Some),
        Command::Help => Ok(Some(HELP.to_string())),
        Command::Quit => Ok(None),
    }
}
