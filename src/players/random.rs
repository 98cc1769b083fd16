use super::Player;
use crate::gameplay::Move;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Uniform random opponent.
pub struct Random(SmallRng);

impl Random {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Random {
    fn throw(&mut self) -> Move {
        Move::ALL[self.0.random_range(0..Move::ALL.len())]
    }
}

impl std::fmt::Debug for Random {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Random")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn uniform_over_moves() {
        const N: usize = 30_000;
        let ref mut player = Random::seeded(0xC0FFEE);
        let mut counts = HashMap::<Move, usize>::new();
        for _ in 0..N {
            *counts.entry(player.throw()).or_default() += 1;
        }
        let expected = N / Move::ALL.len();
        for m in Move::ALL {
            let n = counts.get(&m).copied().unwrap_or(0);
            // sd ~ 82 at this sample size
            assert!(n.abs_diff(expected) < 600, "{} drawn {} times", m, n);
        }
    }

    #[test]
    fn seeds_are_reproducible() {
        let mut x = Random::seeded(7);
        let mut y = Random::seeded(7);
        let xs = (0..64).map(|_| x.throw()).collect::<Vec<_>>();
        let ys = (0..64).map(|_| y.throw()).collect::<Vec<_>>();
        assert_eq!(xs, ys);
    }

    #[test]
    fn entropy_player_throws() {
        let mut player = Random::new();
        assert!(Move::ALL.contains(&player.throw()));
    }
}
