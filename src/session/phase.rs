use crate::gameplay::Round;

/// Where a session stands between prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    RoundResolved(Round),
    SessionEnded,
}

impl Phase {
    pub fn ended(&self) -> bool {
        matches!(self, Phase::SessionEnded)
    }
}
