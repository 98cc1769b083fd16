use super::moves::Move;
use super::outcome::Outcome;
use super::round::Round;
use super::standing::Standing;

/// Running totals for one session.
///
/// Owned by a single session and mutated only through [`Scoreboard::record`],
/// so `rounds` always equals the number of recorded rounds and
/// `player + computer + ties == rounds`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    player: usize,
    computer: usize,
    rounds: usize,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }
    /// Resolves a round and applies it. The returned round carries the
    /// outcome; `self` now holds the updated counters.
    pub fn record(&mut self, player: Move, computer: Move) -> Round {
        let round = Round::new(player, computer);
        match round.outcome() {
            Outcome::PlayerWins => self.player += 1,
            Outcome::ComputerWins => self.computer += 1,
            Outcome::Tie => {}
        }
        self.rounds += 1;
        round
    }
    pub fn player(&self) -> usize {
        self.player
    }
    pub fn computer(&self) -> usize {
        self.computer
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn ties(&self) -> usize {
        self.rounds - self.player - self.computer
    }
    /// Session result over the current totals.
    pub fn summary(&self) -> Standing {
        Standing::compare(self.player, self.computer)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Score:")?;
        writeln!(f, "You: {}  |  Computer: {}", self.player, self.computer)?;
        write!(f, "Rounds Played: {}", self.rounds)
    }
}
