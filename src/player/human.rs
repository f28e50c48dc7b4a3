//! Interactive contestant fed by a request/response prompter.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use log::warn;
use rand::rngs::SmallRng;

use super::{Player, PlayerError};
use crate::board::Board;
use crate::common::{Coord, Direction};
use crate::config::{GameConfig, ShipSpec};

/// Source of a person's choices. Implementations re-ask until the answer
/// is well formed, so callers only ever see valid directions and integer
/// pairs.
pub trait Prompter {
    /// Show `text` to the person.
    fn show(&mut self, text: &str) -> Result<(), PlayerError>;

    /// Orientation for `ship`.
    fn direction(&mut self, ship: &ShipSpec) -> Result<Direction, PlayerError>;

    /// A row and column typed after `prompt`.
    fn coordinate(&mut self, prompt: &str) -> Result<Coord, PlayerError>;
}

/// [`Prompter`] over line-oriented text streams.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<BufReader<Stdin>, Stdout> {
    /// Prompter on the process's stdin and stdout. The one byte buffer
    /// leaves unread input in stdin, so two prompters can share it.
    pub fn stdio() -> Self {
        Self::new(BufReader::with_capacity(1, io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PlayerError> {
        write!(self.output, "{prompt}").map_err(closed)?;
        self.output.flush().map_err(closed)?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(PlayerError::InputClosed),
            Ok(_) => Ok(line),
            Err(e) => Err(closed(e)),
        }
    }
}

fn closed(err: io::Error) -> PlayerError {
    warn!("terminal I/O failed: {err}");
    PlayerError::InputClosed
}

/// First two whitespace separated integers of `line`; anything after them
/// is ignored.
fn parse_pair(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some((row, col))
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn show(&mut self, text: &str) -> Result<(), PlayerError> {
        writeln!(self.output, "{text}").map_err(closed)
    }

    fn direction(&mut self, ship: &ShipSpec) -> Result<Direction, PlayerError> {
        loop {
            let prompt = format!(
                "Enter h or v for direction of {} (length {}): ",
                ship.name, ship.length
            );
            match self.ask(&prompt)?.chars().next() {
                Some('h') => return Ok(Direction::Horizontal),
                Some('v') => return Ok(Direction::Vertical),
                _ => self.show("Direction must be h or v.")?,
            }
        }
    }

    fn coordinate(&mut self, prompt: &str) -> Result<Coord, PlayerError> {
        loop {
            match parse_pair(&self.ask(prompt)?) {
                Some((row, col)) => return Ok(Coord::new(row, col)),
                None => self.show("You must enter two integers.")?,
            }
        }
    }
}

/// Contestant whose placement and targets are chosen by a person.
pub struct HumanPlayer<'g, P> {
    name: String,
    config: &'g GameConfig,
    prompter: P,
}

impl<'g, P: Prompter> HumanPlayer<'g, P> {
    pub fn new(name: impl Into<String>, config: &'g GameConfig, prompter: P) -> Self {
        Self {
            name: name.into(),
            config,
            prompter,
        }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }
}

impl<P: Prompter> Player for HumanPlayer<'_, P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), PlayerError> {
        let config = self.config;
        for (id, ship) in config.ships().iter().enumerate() {
            self.prompter.show(&board.render(false))?;
            let direction = self.prompter.direction(ship)?;
            let prompt = match direction {
                Direction::Horizontal => "Enter row and column of leftmost cell (e.g., 3 5): ",
                Direction::Vertical => "Enter row and column of topmost cell (e.g., 3 5): ",
            };
            loop {
                let anchor = self.prompter.coordinate(prompt)?;
                match board.place_ship(anchor, id, direction) {
                    Ok(()) => break,
                    Err(_) => self.prompter.show("The ship cannot be placed there.")?,
                }
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Result<Coord, PlayerError> {
        self.prompter
            .coordinate("Enter the row and column to attack (e.g., 3 5): ")
    }
}
