//! Contestants and their attack strategies.
//!
//! Every contestant implements [`Player`]:
//! - [`AwfulPlayer`]: fixed layout and a blind reverse sweep
//! - [`MediocrePlayer`]: random search, then random probing around a hit
//! - [`GoodPlayer`]: random search, cross probing, then tracking along the
//!   ship's axis
//! - `HumanPlayer` (std): choices come from a [`Prompter`](human::Prompter)

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShipId, Shot};
use crate::config::GameConfig;
use crate::placement::PlacementError;

mod awful;
mod good;
#[cfg(feature = "std")]
pub mod human;
mod mediocre;

pub use awful::AwfulPlayer;
pub use good::{Belief, GoodPlayer};
#[cfg(feature = "std")]
pub use human::{HumanPlayer, Prompter, TerminalPrompter};
pub use mediocre::MediocrePlayer;

/// Failures a contestant can report to the match loop.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error("ship {0} could not be placed: {1}")]
    ShipRejected(ShipId, #[source] BoardError),
    #[error("input closed before a choice was made")]
    InputClosed,
}

/// Interface implemented by every contestant.
///
/// The match loop owns both boards and lends the contestant's own board
/// only while it places its fleet. Strategies learn about the opponent
/// solely through the `record_*` callbacks.
pub trait Player {
    fn name(&self) -> &str;

    /// Whether choices come from a person, which changes what the match
    /// shows them.
    fn is_human(&self) -> bool {
        false
    }

    /// Place the entire fleet on `board`.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), PlayerError>;

    /// Choose the next cell to attack.
    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Coord, PlayerError>;

    /// Outcome of the last recommended attack; `None` when the board
    /// rejected it as out of bounds or already attacked.
    fn record_attack_result(&mut self, _target: Coord, _outcome: Option<Shot>) {}

    /// The opponent just fired at `target` on this player's board.
    fn record_attack_by_opponent(&mut self, _target: Coord) {}
}

/// The closed set of contestant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PlayerKind {
    Human,
    Awful,
    Mediocre,
    Good,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::Human,
        PlayerKind::Awful,
        PlayerKind::Mediocre,
        PlayerKind::Good,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Awful => "awful",
            PlayerKind::Mediocre => "mediocre",
            PlayerKind::Good => "good",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown player type {0:?}")]
pub struct UnknownPlayerKind(pub String);

impl FromStr for PlayerKind {
    type Err = UnknownPlayerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownPlayerKind(s.into()))
    }
}

/// Build a contestant of the given kind. Humans read from stdin and write
/// to stdout.
#[cfg(feature = "std")]
pub fn create_player<'g>(
    kind: PlayerKind,
    name: impl Into<String>,
    config: &'g GameConfig,
) -> Box<dyn Player + 'g> {
    let name = name.into();
    match create_computer_player(kind, name.clone(), config) {
        Some(player) => player,
        None => Box::new(HumanPlayer::new(name, config, TerminalPrompter::stdio())),
    }
}

/// Build an algorithmic contestant; `None` for [`PlayerKind::Human`].
pub fn create_computer_player<'g>(
    kind: PlayerKind,
    name: impl Into<String>,
    config: &'g GameConfig,
) -> Option<Box<dyn Player + 'g>> {
    let name = name.into();
    let player: Box<dyn Player + 'g> = match kind {
        PlayerKind::Human => return None,
        PlayerKind::Awful => Box::new(AwfulPlayer::new(name, config)),
        PlayerKind::Mediocre => Box::new(MediocrePlayer::new(name, config)),
        PlayerKind::Good => Box::new(GoodPlayer::new(name, config)),
    };
    Some(player)
}
