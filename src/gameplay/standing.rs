/// Overall result of a session, compared on final scores.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Standing {
    PlayerWon,
    ComputerWon,
    Tied,
}

impl Standing {
    pub fn compare(player: usize, computer: usize) -> Self {
        match player.cmp(&computer) {
            std::cmp::Ordering::Greater => Standing::PlayerWon,
            std::cmp::Ordering::Less => Standing::ComputerWon,
            std::cmp::Ordering::Equal => Standing::Tied,
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        match self {
            Standing::PlayerWon => write!(f, "{}", "Congratulations! You won the game!".green()),
            Standing::ComputerWon => write!(
                f,
                "{}",
                "Computer won the game. Better luck next time!".red()
            ),
            Standing::Tied => write!(f, "{}", "It's a tie game! Well played!".yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison() {
        assert_eq!(Standing::compare(2, 1), Standing::PlayerWon);
        assert_eq!(Standing::compare(0, 3), Standing::ComputerWon);
        assert_eq!(Standing::compare(0, 0), Standing::Tied);
        assert_eq!(Standing::compare(4, 4), Standing::Tied);
    }
}
