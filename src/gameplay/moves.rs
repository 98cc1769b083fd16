/// One of the three hand shapes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Menu order. Position `i` is selected by the token `i + 1`.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub const fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
    /// 1-based menu index.
    pub const fn index(&self) -> usize {
        match self {
            Move::Rock => 1,
            Move::Paper => 2,
            Move::Scissors => 3,
        }
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

/// str isomorphism, accepting menu indices and case-insensitive names
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_ascii_lowercase();
        Move::ALL
            .into_iter()
            .find(|m| s == m.name() || s == m.index().to_string())
            .ok_or_else(|| anyhow::anyhow!("not a move: {:?}", s))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Rock => "Rock",
                Move::Paper => "Paper",
                Move::Scissors => "Scissors",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_is_a_cycle() {
        for m in Move::ALL {
            assert!(m.beats() != m);
            assert!(m.beats().beats().beats() == m);
        }
    }

    #[test]
    fn indices_follow_menu_order() {
        for (i, m) in Move::ALL.iter().enumerate() {
            assert_eq!(m.index(), i + 1);
        }
    }

    #[test]
    fn parses_indices() {
        assert_eq!(Move::try_from("1").unwrap(), Move::Rock);
        assert_eq!(Move::try_from("2").unwrap(), Move::Paper);
        assert_eq!(Move::try_from("3").unwrap(), Move::Scissors);
    }

    #[test]
    fn parses_names_in_any_case() {
        assert_eq!(Move::try_from("rock").unwrap(), Move::Rock);
        assert_eq!(Move::try_from("PAPER").unwrap(), Move::Paper);
        assert_eq!(Move::try_from("  ScIsSoRs\n").unwrap(), Move::Scissors);
    }

    #[test]
    fn rejects_everything_else() {
        for s in ["", "0", "4", "5", "banana", "r", "rocks", "1.0"] {
            assert!(Move::try_from(s).is_err(), "{:?} should not parse", s);
        }
    }
}
