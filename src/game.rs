//! Turn orchestration between two contestants.

use alloc::string::String;
use log::{debug, info};
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::board::Board;
use crate::common::{Coord, Shot};
use crate::config::GameConfig;
use crate::player::{Player, PlayerError};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("the fleet has no ships")]
    EmptyFleet,
    #[error("{name} could not place their ships: {source}")]
    Placement {
        name: String,
        #[source]
        source: PlayerError,
    },
    #[error("{name} stopped playing: {source}")]
    Forfeit {
        name: String,
        #[source]
        source: PlayerError,
    },
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Index (0 or 1) of the contestant who destroyed the other's fleet.
    pub winner: usize,
    /// Attacks made by each contestant, wasted ones included.
    pub shots: [usize; 2],
}

/// One resolved half-turn, as shown to a [`Spectator`].
#[derive(Debug, Clone, Copy)]
pub struct AttackReport<'a, 'g> {
    pub attacker: &'a str,
    /// Whether the attacker is a person; their view of the defender's board
    /// hides intact ships.
    pub attacker_is_human: bool,
    pub target: Coord,
    /// `None` for a wasted shot.
    pub outcome: Option<Shot>,
    pub defender_board: &'a Board<'g>,
}

impl AttackReport<'_, '_> {
    /// Name of the ship destroyed by this attack, if any.
    pub fn destroyed_ship(&self) -> Option<&str> {
        let id = self.outcome?.destroyed()?;
        self.defender_board.config().ship(id).map(|s| s.name.as_str())
    }
}

/// Observer of a match. Every method defaults to doing nothing.
pub trait Spectator {
    /// `player` is about to place its fleet of `ships` ships.
    fn placing(&mut self, _player: &dyn Player, _ships: usize) {}

    /// `attacker` is about to choose a target on `board`.
    fn turn_started(&mut self, _attacker: &dyn Player, _defender: &dyn Player, _board: &Board<'_>) {}

    fn attack_resolved(&mut self, _report: &AttackReport<'_, '_>) {}

    fn match_won(&mut self, _winner: &dyn Player) {}

    /// Both contestants have been notified of the last attack.
    fn half_turn_finished(&mut self) {}
}

/// A spectator that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Spectator for Silent {}

/// Two boards sharing one configuration, played out by two contestants.
#[derive(Debug)]
pub struct Match<'g> {
    boards: [Board<'g>; 2],
}

impl<'g> Match<'g> {
    pub fn new(config: &'g GameConfig) -> Result<Self, MatchError> {
        if config.ship_count() == 0 {
            return Err(MatchError::EmptyFleet);
        }
        Ok(Self {
            boards: [Board::new(config), Board::new(config)],
        })
    }

    /// Board owned by contestant `index`.
    pub fn board(&self, index: usize) -> &Board<'g> {
        &self.boards[index]
    }

    /// Place both fleets, then alternate attacks starting with
    /// `players[0]` until one fleet is destroyed.
    pub fn play(
        &mut self,
        mut players: [&mut dyn Player; 2],
        rng: &mut SmallRng,
        spectator: &mut dyn Spectator,
    ) -> Result<MatchOutcome, MatchError> {
        for (player, board) in players.iter_mut().zip(self.boards.iter_mut()) {
            spectator.placing(&**player, board.config().ship_count());
            player
                .place_ships(rng, board)
                .map_err(|source| MatchError::Placement {
                    name: player.name().into(),
                    source,
                })?;
        }

        let mut shots = [0usize; 2];
        let mut attacker = 0;
        loop {
            let defender = 1 - attacker;
            spectator.turn_started(&*players[attacker], &*players[defender], &self.boards[defender]);
            let target = players[attacker]
                .recommend_attack(rng)
                .map_err(|source| MatchError::Forfeit {
                    name: players[attacker].name().into(),
                    source,
                })?;
            shots[attacker] += 1;

            let outcome = match self.boards[defender].attack(target) {
                Ok(shot) => Some(shot),
                Err(e) => {
                    debug!("{} wasted a shot: {e}", players[attacker].name());
                    None
                }
            };
            spectator.attack_resolved(&AttackReport {
                attacker: players[attacker].name(),
                attacker_is_human: players[attacker].is_human(),
                target,
                outcome,
                defender_board: &self.boards[defender],
            });

            if outcome.is_some() && self.boards[defender].all_ships_destroyed() {
                info!(
                    "{} wins after {} shots",
                    players[attacker].name(),
                    shots[attacker]
                );
                spectator.match_won(&*players[attacker]);
                return Ok(MatchOutcome {
                    winner: attacker,
                    shots,
                });
            }
            players[attacker].record_attack_result(target, outcome);
            players[defender].record_attack_by_opponent(target);
            spectator.half_turn_finished();
            attacker = defender;
        }
    }
}
