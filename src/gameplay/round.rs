use super::moves::Move;
use super::outcome::Outcome;

/// One resolved pair of moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    player: Move,
    computer: Move,
    outcome: Outcome,
}

impl Round {
    pub fn new(player: Move, computer: Move) -> Self {
        Self {
            player,
            computer,
            outcome: Outcome::determine(player, computer),
        }
    }
    pub fn player(&self) -> Move {
        self.player
    }
    pub fn computer(&self) -> Move {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "--- Round Result ---")?;
        writeln!(f, "Your choice: {}", self.player)?;
        writeln!(f, "Computer's choice: {}", self.computer)?;
        write!(f, "{}", self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_is_derived() {
        let round = Round::new(Move::Scissors, Move::Paper);
        assert_eq!(round.outcome(), Outcome::PlayerWins);
        assert_eq!(round.player(), Move::Scissors);
        assert_eq!(round.computer(), Move::Paper);
    }

    #[test]
    fn report_names_both_moves() {
        let report = Round::new(Move::Rock, Move::Paper).to_string();
        assert!(report.contains("Your choice: Rock"));
        assert!(report.contains("Computer's choice: Paper"));
        assert!(report.contains("Computer wins this round!"));
    }
}
