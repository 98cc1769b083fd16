//! The interaction shell: prompts, retries, continuation and the final report.
//!
//! A [`Session`] owns its [`Scoreboard`] and walks the phase machine
//!
//! ```text
//! AwaitingMove  -(invalid)->   AwaitingMove
//! AwaitingMove  -(quit)->      SessionEnded
//! AwaitingMove  -(move)->      RoundResolved
//! RoundResolved -(yes)->       AwaitingMove
//! RoundResolved -(otherwise)-> SessionEnded
//! ```
//!
//! Entering `SessionEnded` prints the summary, once.
mod phase;

pub use phase::*;

use crate::console::Console;
use crate::gameplay::*;
use crate::players::Player;

pub const MOVE_PROMPT: &str = "Enter your choice (1-4)";
pub const AGAIN_PROMPT: &str = "Do you want to play another round? (yes/no)";
pub const REJECTED: &str = "Invalid choice. Please try again.";

pub struct Session<P, C> {
    opponent: P,
    console: C,
    scoreboard: Scoreboard,
    phase: Phase,
}

impl<P: Player, C: Console> Session<P, C> {
    pub fn new(opponent: P, console: C) -> Self {
        Self {
            opponent,
            console,
            scoreboard: Scoreboard::new(),
            phase: Phase::AwaitingMove,
        }
    }
    pub fn phase(&self) -> &Phase {
        &self.phase
    }
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
    pub fn console(&self) -> &C {
        &self.console
    }
    pub fn opponent(&self) -> &P {
        &self.opponent
    }

    /// Greets, then steps until the session ends. Returns the session result.
    pub fn play(&mut self) -> anyhow::Result<Standing> {
        log::info!("session started");
        self.console
            .say("Rock-Paper-Scissors\nWelcome! Let's play Rock-Paper-Scissors.")?;
        while !self.phase.ended() {
            self.step()?;
        }
        Ok(self.scoreboard.summary())
    }

    /// Advances the phase machine by one transition.
    pub fn step(&mut self) -> anyhow::Result<()> {
        self.phase = match self.phase {
            Phase::AwaitingMove => self.await_move()?,
            Phase::RoundResolved(_) => self.await_reply()?,
            Phase::SessionEnded => return Ok(()),
        };
        if self.phase.ended() {
            self.report()?;
        }
        Ok(())
    }

    fn await_move(&mut self) -> anyhow::Result<Phase> {
        self.console.say(&Self::menu())?;
        let Some(line) = self.console.ask(MOVE_PROMPT)? else {
            log::debug!("input closed at move prompt");
            return Ok(Phase::SessionEnded);
        };
        match Token::try_from(line.as_str()) {
            Err(e) => {
                log::debug!("rejected move token: {}", e);
                self.console.say(REJECTED)?;
                Ok(Phase::AwaitingMove)
            }
            Ok(Token::Quit) => Ok(Phase::SessionEnded),
            Ok(Token::Play(player)) => {
                let computer = self.opponent.throw();
                let round = self.scoreboard.record(player, computer);
                log::debug!(
                    "round {}: {} vs {} -> {:?}",
                    self.scoreboard.rounds(),
                    player,
                    computer,
                    round.outcome()
                );
                self.console.say(&format!("\n{}\n\n{}", round, self.scoreboard))?;
                Ok(Phase::RoundResolved(round))
            }
        }
    }

    fn await_reply(&mut self) -> anyhow::Result<Phase> {
        let reply = self
            .console
            .ask(AGAIN_PROMPT)?
            .as_deref()
            .map(Reply::from)
            .unwrap_or(Reply::Stop);
        match reply {
            Reply::Again => Ok(Phase::AwaitingMove),
            Reply::Stop => Ok(Phase::SessionEnded),
        }
    }

    fn report(&mut self) -> anyhow::Result<()> {
        let ref board = self.scoreboard;
        log::info!(
            "session ended after {} rounds ({}-{})",
            board.rounds(),
            board.player(),
            board.computer()
        );
        let text = format!(
            "\nFinal Game Statistics\nTotal Rounds Played: {}\nYour Score: {}\nComputer Score: {}\n\n{}",
            board.rounds(),
            board.player(),
            board.computer(),
            board.summary()
        );
        self.console.say(&text)
    }

    fn menu() -> String {
        Move::ALL
            .iter()
            .map(|m| format!("{}. {}", m.index(), m))
            .chain(std::iter::once(format!("{}. Quit", Token::QUIT)))
            .fold(String::from("\nChoose your move:"), |menu, line| menu + "\n" + &line)
    }
}
