pub mod moves;
pub use moves::*;

pub mod outcome;
pub use outcome::*;

pub mod round;
pub use round::*;

pub mod scoreboard;
pub use scoreboard::*;

pub mod standing;
pub use standing::*;

pub mod token;
pub use token::*;
