use super::moves::Move;

/// Result of a single round, from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl Outcome {
    /// Winner determination over the dominance table. Total over all nine pairs.
    pub fn determine(player: Move, computer: Move) -> Self {
        if player == computer {
            Outcome::Tie
        } else if player.beats() == computer {
            Outcome::PlayerWins
        } else {
            Outcome::ComputerWins
        }
    }
    /// Same round seen from the other seat.
    pub fn flip(&self) -> Self {
        match self {
            Outcome::PlayerWins => Outcome::ComputerWins,
            Outcome::ComputerWins => Outcome::PlayerWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((player, computer): (Move, Move)) -> Self {
        Self::determine(player, computer)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        match self {
            Outcome::Tie => write!(f, "{}", "It's a tie!".yellow()),
            Outcome::PlayerWins => write!(f, "{}", "You win this round!".green()),
            Outcome::ComputerWins => write!(f, "{}", "Computer wins this round!".red()),
        }
    }
}
