//! Move suppliers for the computer's side of the table.
//!
//! - [`Random`] — uniform over the three moves, entropy or seed driven
//! - [`Scripted`] — replays a fixed sequence, for tests and demos
mod random;
mod scripted;

pub use random::*;
pub use scripted::*;

use crate::gameplay::Move;

/// Anything that can produce the computer's move for a round.
///
/// Called exactly once per resolved round, never for rejected input.
pub trait Player {
    fn throw(&mut self) -> Move;
}
