use super::Player;
use crate::gameplay::Move;

/// Replays a fixed sequence of moves, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct Scripted {
    moves: Vec<Move>,
    cursor: usize,
}

impl Scripted {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let moves = moves.into_iter().collect::<Vec<_>>();
        assert!(!moves.is_empty(), "scripted player needs at least one move");
        Self { moves, cursor: 0 }
    }
    /// Number of moves handed out so far.
    pub fn thrown(&self) -> usize {
        self.cursor
    }
}

impl Player for Scripted {
    fn throw(&mut self) -> Move {
        let m = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        m
    }
}
