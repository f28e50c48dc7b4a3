#![cfg(feature = "std")]

use std::io::{self, Stdout, Write};

use crate::board::Board;
use crate::common::Shot;
use crate::game::{AttackReport, Spectator};
use crate::player::Player;

/// [`Spectator`] narrating the match as text, optionally waiting for enter
/// on stdin after every half-turn.
pub struct ConsoleSpectator<W = Stdout> {
    out: W,
    pause: bool,
}

impl ConsoleSpectator<Stdout> {
    pub fn stdout(pause: bool) -> Self {
        Self::new(io::stdout(), pause)
    }
}

impl<W: Write> ConsoleSpectator<W> {
    pub fn new(out: W, pause: bool) -> Self {
        Self { out, pause }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Narration is best effort; a closed stdout must not abort the match.
    fn say(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write> Spectator for ConsoleSpectator<W> {
    fn placing(&mut self, player: &dyn Player, ships: usize) {
        if player.is_human() {
            self.say(&format!("{} must place {ships} ships.\n", player.name()));
        }
    }

    fn turn_started(&mut self, attacker: &dyn Player, defender: &dyn Player, board: &Board<'_>) {
        self.say(&format!(
            "{}'s turn. Board for {}:\n{}",
            attacker.name(),
            defender.name(),
            board.render(attacker.is_human())
        ));
    }

    fn attack_resolved(&mut self, report: &AttackReport<'_, '_>) {
        let target = report.target;
        let verdict = match report.outcome {
            None => {
                self.say(&format!("{} wasted a shot at {target}.\n", report.attacker));
                return;
            }
            Some(Shot::Miss) => "missed".to_string(),
            Some(Shot::Hit) => "hit something".to_string(),
            Some(Shot::Destroyed(_)) => {
                format!("destroyed the {}", report.destroyed_ship().unwrap_or("ship"))
            }
        };
        self.say(&format!(
            "{} attacked {target} and {verdict}, resulting in:\n{}",
            report.attacker,
            report.defender_board.render(report.attacker_is_human)
        ));
    }

    fn match_won(&mut self, winner: &dyn Player) {
        self.say(&format!("{} wins!\n", winner.name()));
    }

    fn half_turn_finished(&mut self) {
        if self.pause {
            self.say("Press enter to continue: ");
            let mut line = String::new();
            let _ = io::stdin().read_line(&mut line);
        }
    }
}
