//! The memory game: each turn the players speak the gap between the last
//! two turns the previous number was spoken on, or `0` if it was new.

use std::{fmt, iter::FusedIterator, str::FromStr};
use thiserror::Error;

#[cfg(test)]
macro_rules! backend_tests {
    ($Game:ty) => {
        use super::*;
        use crate::game::recital;

        fn start(seed: &[u32], max_turns: u32) -> $Game {
            <$Game>::from_seed(seed, max_turns).unwrap()
        }

        #[test]
        fn first_turns() {
            let mut game = start(&[0, 3, 6], 10);
            let spoken = recital(&mut game).collect::<Vec<_>>();
            assert_eq!(
                spoken,
                vec![(4, 0), (5, 3), (6, 3), (7, 1), (8, 0), (9, 4), (10, 0)]
            );
            assert_eq!(game.turn(), 10);
        }

        #[test]
        fn examples_2020() {
            let examples: [([u32; 3], u32); 7] = [
                ([0, 3, 6], 436),
                ([1, 3, 2], 1),
                ([2, 1, 3], 10),
                ([1, 2, 3], 27),
                ([2, 3, 1], 78),
                ([3, 2, 1], 438),
                ([3, 1, 2], 1836),
            ];

            for (seed, expected) in &examples {
                let mut game = start(seed, 2020);
                assert_eq!(game.play_until(2020), Ok(*expected), "{:?}", seed);
            }
        }

        #[test]
        #[ignore = "slow, 30 million turns per example"]
        fn examples_30m() {
            let examples: [([u32; 3], u32); 7] = [
                ([0, 3, 6], 175_594),
                ([1, 3, 2], 2_578),
                ([2, 1, 3], 3_544_142),
                ([1, 2, 3], 261_214),
                ([2, 3, 1], 6_895_259),
                ([3, 2, 1], 18),
                ([3, 1, 2], 362),
            ];

            for (seed, expected) in &examples {
                let mut game = start(seed, 30_000_000);
                assert!(game.play_until(2020).is_ok());
                assert_eq!(
                    game.play_until(30_000_000),
                    Ok(*expected),
                    "{:?}",
                    seed
                );
            }
        }

        #[test]
        fn resume_matches_replay() {
            let mut resumed = start(&[0, 3, 6], 2020);
            assert_eq!(resumed.play_until(10), Ok(0));
            let at_1000 = resumed.play_until(1000);
            assert_eq!(start(&[0, 3, 6], 2020).play_until(1000), at_1000);
            assert_eq!(resumed.play_until(2020), Ok(436));
        }

        #[test]
        fn same_turn_returns_last_seed() {
            let mut game = start(&[0, 3, 6], 2020);
            assert_eq!(game.turn(), 3);
            assert_eq!(game.play_until(3), Ok(6));
            assert_eq!(game.turn(), 3);
            assert_eq!(game.last_spoken(), 6);
            assert_eq!(game.play_until(4), Ok(0));
        }

        #[test]
        fn repeated_starting_number() {
            let mut game = start(&[1, 1], 6);
            let spoken = recital(&mut game).map(|(_, n)| n).collect::<Vec<_>>();
            assert_eq!(spoken, vec![1, 1, 1, 1]);
        }

        #[test]
        fn seed_fills_horizon() {
            let mut game = start(&[2, 0, 1], 3);
            assert_eq!(game.play_until(3), Ok(1));
            assert_eq!(recital(&mut game).next(), None);
            assert_eq!(
                game.play_until(4),
                Err(GameError::TurnOutOfRange {
                    target: 4,
                    max_turns: 3
                })
            );
        }

        #[test]
        fn bad_seeds() {
            assert_eq!(
                <$Game>::from_seed(&[], 10).unwrap_err(),
                GameError::EmptySeed
            );
            assert_eq!(
                <$Game>::from_seed(&[0, 10], 10).unwrap_err(),
                GameError::SeedOutOfRange {
                    value: 10,
                    max_turns: 10
                }
            );
            assert_eq!(
                <$Game>::from_seed(&[0, 1, 0], 2).unwrap_err(),
                GameError::SeedTooLong {
                    len: 3,
                    max_turns: 2
                }
            );
        }

        #[test]
        fn errors_leave_state_alone() {
            let mut game = start(&[0, 3, 6], 100);
            assert_eq!(game.play_until(9), Ok(4));
            assert_eq!(
                game.play_until(5),
                Err(GameError::TurnInPast {
                    target: 5,
                    current: 9
                })
            );
            assert_eq!(
                game.play_until(101),
                Err(GameError::TurnOutOfRange {
                    target: 101,
                    max_turns: 100
                })
            );
            assert_eq!(game.turn(), 9);
            assert_eq!(game.last_spoken(), 4);
            assert_eq!(game.play_until(10), Ok(0));
        }
    };
}

mod error;
pub mod flat;
pub mod sparse;

pub(crate) use error::{check_seed, check_target};
pub use error::GameError;
pub use flat::FlatGame;
pub use sparse::SparseGame;

pub trait Game {
    /// Plays on until `turn` and returns the number spoken on it. Asking for
    /// the current turn again returns the last spoken number.
    fn play_until(&mut self, turn: u32) -> Result<u32, GameError>;

    /// Turns played so far.
    fn turn(&self) -> u32;

    /// The number spoken on `turn()`.
    fn last_spoken(&self) -> u32;

    /// The last turn this game can reach.
    fn max_turns(&self) -> u32;

    /// Entries held by the turn table.
    fn size(&self) -> usize;
}

/// `(turn, spoken)` for every turn after the current one, up to
/// `max_turns`.
#[derive(Debug)]
pub struct Recital<'a, G: ?Sized> {
    game: &'a mut G,
}

pub fn recital<G: Game + ?Sized>(game: &mut G) -> Recital<'_, G> {
    Recital { game }
}

impl<G: Game + ?Sized> Iterator for Recital<'_, G> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let turn = self
            .game
            .turn()
            .checked_add(1)
            .filter(|&turn| turn <= self.game.max_turns())?;
        self.game.play_until(turn).ok().map(|spoken| (turn, spoken))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.game.max_turns() - self.game.turn()) as usize;
        (left, Some(left))
    }
}

impl<G: Game + ?Sized> ExactSizeIterator for Recital<'_, G> {}
impl<G: Game + ?Sized> FusedIterator for Recital<'_, G> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Flat,
    Sparse,
}

impl Backend {
    pub fn start(
        self,
        seed: &[u32],
        max_turns: u32,
    ) -> Result<Box<dyn Game>, GameError> {
        Ok(match self {
            Backend::Flat => Box::new(FlatGame::from_seed(seed, max_turns)?),
            Backend::Sparse => {
                Box::new(SparseGame::from_seed(seed, max_turns)?)
            },
        })
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Flat
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Flat => write!(f, "flat"),
            Backend::Sparse => write!(f, "sparse"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown backend {0:?}, expected `flat` or `sparse`")]
pub struct BackendParseError(String);

impl FromStr for Backend {
    type Err = BackendParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(Backend::Flat),
            "sparse" => Ok(Backend::Sparse),
            _ => Err(BackendParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};
    use std::convert::TryFrom;

    const HORIZON: u32 = 4096;

    fn seed_from(raw: Vec<u8>) -> Vec<u32> {
        raw.into_iter().map(u32::from).collect()
    }

    /// Maps `n` onto a turn between the end of the seed and the horizon.
    fn turn_after(seed: &[u32], n: u16) -> u32 {
        let len = u32::try_from(seed.len()).unwrap();
        len + u32::from(n) % (HORIZON - len + 1)
    }

    #[test]
    fn resuming_is_replaying() {
        fn prop(raw: Vec<u8>, a: u16, b: u16) -> TestResult {
            let seed = seed_from(raw);
            if seed.is_empty() {
                return TestResult::discard();
            }
            let (a, b) = (turn_after(&seed, a), turn_after(&seed, b));
            let (lo, hi) = (a.min(b), a.max(b));

            let mut resumed = FlatGame::from_seed(&seed, HORIZON).unwrap();
            resumed.play_until(lo).unwrap();
            let resumed = resumed.play_until(hi).unwrap();

            let mut fresh = FlatGame::from_seed(&seed, HORIZON).unwrap();
            TestResult::from_bool(fresh.play_until(hi) == Ok(resumed))
        }

        QuickCheck::new()
            .tests(200)
            .quickcheck(prop as fn(Vec<u8>, u16, u16) -> TestResult);
    }

    #[test]
    fn backends_agree() {
        fn prop(raw: Vec<u8>) -> TestResult {
            let seed = seed_from(raw);
            if seed.is_empty() {
                return TestResult::discard();
            }

            let mut flat = Backend::Flat.start(&seed, HORIZON).unwrap();
            let mut sparse = Backend::Sparse.start(&seed, HORIZON).unwrap();
            TestResult::from_bool(recital(&mut *flat).eq(recital(&mut *sparse)))
        }

        QuickCheck::new()
            .tests(100)
            .quickcheck(prop as fn(Vec<u8>) -> TestResult);
    }

    #[test]
    fn spoken_below_turn() {
        fn prop(raw: Vec<u8>) -> TestResult {
            let seed = seed_from(raw);
            if seed.is_empty() {
                return TestResult::discard();
            }

            let mut game = FlatGame::from_seed(&seed, HORIZON).unwrap();
            TestResult::from_bool(recital(&mut game).all(|(turn, n)| n < turn))
        }

        QuickCheck::new()
            .tests(100)
            .quickcheck(prop as fn(Vec<u8>) -> TestResult);
    }

    #[test]
    fn recital_length() {
        let mut game = SparseGame::from_seed(&[0, 3, 6], 20).unwrap();
        let turns = recital(&mut game);
        assert_eq!(turns.len(), 17);
        assert_eq!(turns.count(), 17);
    }

    #[test]
    fn backend_names() {
        assert_eq!("flat".parse(), Ok(Backend::Flat));
        assert_eq!("Sparse".parse(), Ok(Backend::Sparse));
        assert_eq!(Backend::default().to_string(), "flat");
        assert_eq!(
            "tree".parse::<Backend>(),
            Err(BackendParseError("tree".to_owned()))
        );
    }

    #[test]
    fn boxed_game_resumes() {
        let mut game = Backend::Sparse.start(&[3, 1, 2], 2020).unwrap();
        assert_eq!(game.play_until(2019).map(|_| ()), Ok(()));
        assert_eq!(game.play_until(2020), Ok(1836));
    }
}
