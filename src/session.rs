//! Input-driven state machine for the guessing game.
//!
//! The session consumes one line of input at a time and appends its response
//! to an owned output buffer; the console driver decides when to print and
//! when to read. No I/O happens here.
//!
//! # State Machine
//! - `ModeSelection` → `SinglePlayer` → back to `ModeSelection` on a correct guess
//! - `ModeSelection` → `PlayerSetup` → `Multiplayer` → back to `ModeSelection`
//! - Terminal state: `Finished` (any selection other than 1 or 2)

use crate::generator::NumberGenerator;
use log::debug;
use std::cmp::Ordering;

/// Menu shown at startup and after every round ends.
pub const SELECT_MODE_MESSAGE: &str =
    "1: Single player game\n2: Multiplayer game\n3: Exit\nEnter selection: ";

const SINGLE_PLAYER_START: &str =
    "Single player game\nI'm thinking of a number between 1 and 100.\nEnter your guess: \n";
const TOO_LOW_REPLY: &str = "Your guess is too low.\nEnter your guess: \n";
const TOO_HIGH_REPLY: &str = "Your guess is too high.\nEnter your guess: \n";
const NOT_A_NUMBER_REPLY: &str = "Please enter a number.\nEnter your guess: \n";
const PLAYER_SETUP_PROMPT: &str = "Multiplayer game\nEnter player names separated with commas: ";
const THINKING_OF_A_NUMBER: &str = "I'm thinking of a number between 1 and 100.\n";

enum Phase {
    ModeSelection,
    PlayerSetup,
    SinglePlayer { secret: u32, tries: u32 },
    Multiplayer { players: Vec<String>, secret: u32, tries: u32 },
    Finished,
}

/// One interactive game session: mode selection, any number of rounds, exit.
///
/// The driver protocol is: while `!is_completed()`, print `flush_output()`,
/// read a line, pass it to `process_input()`.
pub struct GameSession<G> {
    generator: G,
    output: String,
    phase: Phase,
}

impl<G: NumberGenerator> GameSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            output: SELECT_MODE_MESSAGE.to_string(),
            phase: Phase::ModeSelection,
        }
    }

    /// True once the player has chosen to exit. No further input changes state.
    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Returns everything buffered since the last flush and clears the buffer.
    pub fn flush_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Interprets one line of input according to the current phase.
    pub fn process_input(&mut self, input: &str) {
        let phase = std::mem::replace(&mut self.phase, Phase::Finished);
        self.phase = match phase {
            Phase::ModeSelection => self.select_mode(input),
            Phase::PlayerSetup => self.start_multiplayer(input),
            Phase::SinglePlayer { secret, tries } => self.single_guess(input, secret, tries),
            Phase::Multiplayer {
                players,
                secret,
                tries,
            } => self.multiplayer_guess(input, players, secret, tries),
            Phase::Finished => Phase::Finished,
        };
    }

    fn select_mode(&mut self, input: &str) -> Phase {
        match input {
            "1" => {
                self.output.push_str(SINGLE_PLAYER_START);
                let secret = self.generator.generate();
                debug!("single player round started");
                Phase::SinglePlayer { secret, tries: 1 }
            }
            "2" => {
                self.output.push_str(PLAYER_SETUP_PROMPT);
                Phase::PlayerSetup
            }
            _ => {
                debug!("selection {input:?}, session complete");
                Phase::Finished
            }
        }
    }

    fn start_multiplayer(&mut self, input: &str) -> Phase {
        let players: Vec<String> = input
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if players.is_empty() {
            // Blank or comma-only input: ask again.
            self.output.push_str(PLAYER_SETUP_PROMPT);
            return Phase::PlayerSetup;
        }
        self.output.push_str(THINKING_OF_A_NUMBER);
        let secret = self.generator.generate();
        debug!("multiplayer round started with {} players", players.len());
        self.prompt_player(&players, 1);
        Phase::Multiplayer {
            players,
            secret,
            tries: 1,
        }
    }

    fn single_guess(&mut self, input: &str, secret: u32, tries: u32) -> Phase {
        let Some(guess) = parse_guess(input) else {
            self.output.push_str(NOT_A_NUMBER_REPLY);
            return Phase::SinglePlayer { secret, tries };
        };
        match guess.cmp(&i64::from(secret)) {
            Ordering::Less => {
                self.output.push_str(TOO_LOW_REPLY);
                Phase::SinglePlayer {
                    secret,
                    tries: tries + 1,
                }
            }
            Ordering::Greater => {
                self.output.push_str(TOO_HIGH_REPLY);
                Phase::SinglePlayer {
                    secret,
                    tries: tries + 1,
                }
            }
            Ordering::Equal => {
                let noun = if tries == 1 { "guess" } else { "guesses" };
                self.output.push_str(&format!("Correct! {tries} {noun}.\n"));
                self.output.push_str(SELECT_MODE_MESSAGE);
                debug!("single player round won in {tries} tries");
                Phase::ModeSelection
            }
        }
    }

    fn multiplayer_guess(
        &mut self,
        input: &str,
        players: Vec<String>,
        secret: u32,
        tries: u32,
    ) -> Phase {
        let Some(guess) = parse_guess(input) else {
            self.output.push_str("Please enter a number.\n");
            self.prompt_player(&players, tries);
            return Phase::Multiplayer {
                players,
                secret,
                tries,
            };
        };
        let player = current_player(&players, tries);
        match guess.cmp(&i64::from(secret)) {
            Ordering::Less => {
                self.output.push_str(&format!("{player}'s guess is too low.\n"));
                self.prompt_player(&players, tries + 1);
                Phase::Multiplayer {
                    players,
                    secret,
                    tries: tries + 1,
                }
            }
            Ordering::Greater => {
                self.output
                    .push_str(&format!("{player}'s guess is too high.\n"));
                self.prompt_player(&players, tries + 1);
                Phase::Multiplayer {
                    players,
                    secret,
                    tries: tries + 1,
                }
            }
            Ordering::Equal => {
                self.output.push_str(&format!("Correct! {player} wins.\n"));
                self.output.push_str(SELECT_MODE_MESSAGE);
                debug!("multiplayer round won on try {tries}");
                Phase::ModeSelection
            }
        }
    }

    fn prompt_player(&mut self, players: &[String], tries: u32) {
        let player = current_player(players, tries);
        self.output.push_str(&format!("Enter {player}'s guess: "));
    }
}

// Turn order: attempt N (1-based) belongs to players[(N-1) mod len].
fn current_player(players: &[String], tries: u32) -> &str {
    &players[(tries as usize - 1) % players.len()]
}

fn parse_guess(input: &str) -> Option<i64> {
    match input.trim().parse() {
        Ok(guess) => Some(guess),
        Err(err) => {
            debug!("rejected guess {input:?}: {err}");
            None
        }
    }
}
