use super::moves::Move;

/// A validated answer to the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Play(Move),
    Quit,
}

impl Token {
    /// Menu index of the quit entry.
    pub const QUIT: usize = Move::ALL.len() + 1;
}

/// Rejection here is an invalid move token; callers re-prompt.
impl TryFrom<&str> for Token {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if s == Self::QUIT.to_string() || s.eq_ignore_ascii_case("quit") {
            Ok(Token::Quit)
        } else {
            Move::try_from(s).map(Token::Play)
        }
    }
}

/// Answer to the play-again prompt. Only "yes" continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Again,
    Stop,
}

impl From<&str> for Reply {
    fn from(s: &str) -> Self {
        match s.trim().eq_ignore_ascii_case("yes") {
            true => Reply::Again,
            false => Reply::Stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_by_index_or_word() {
        assert_eq!(Token::try_from("4").unwrap(), Token::Quit);
        assert_eq!(Token::try_from("quit").unwrap(), Token::Quit);
        assert_eq!(Token::try_from("QUIT ").unwrap(), Token::Quit);
    }

    #[test]
    fn moves_pass_through() {
        assert_eq!(Token::try_from("1").unwrap(), Token::Play(Move::Rock));
        assert_eq!(Token::try_from("Paper").unwrap(), Token::Play(Move::Paper));
        assert_eq!(Token::try_from("3").unwrap(), Token::Play(Move::Scissors));
    }

    #[test]
    fn invalid_tokens() {
        for s in ["banana", "", "0", "5", "44", "q", "exit"] {
            assert!(Token::try_from(s).is_err(), "{:?} should not parse", s);
        }
    }

    #[test]
    fn only_yes_continues() {
        assert_eq!(Reply::from("yes"), Reply::Again);
        assert_eq!(Reply::from("YES"), Reply::Again);
        assert_eq!(Reply::from("Yes\n"), Reply::Again);
        for s in ["no", "", "y", "yess", "sure", "1"] {
            assert_eq!(Reply::from(s), Reply::Stop, "{:?} should decline", s);
        }
    }
}
