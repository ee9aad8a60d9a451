use super::{check_seed, check_target, Game, GameError};
use log::debug;
use std::{fmt, mem};

/// The game with a direct-indexed table: entry `n` holds the turn `n` was
/// last spoken on, `0` if it never was. Spoken numbers are always below the
/// turn count, so `max_turns` entries cover every number the game can reach.
pub struct FlatGame {
    table: Vec<u32>,
    turn: u32,
    spoken: u32,
    /// Turn `spoken` was heard before `turn`, or `turn` if it was new.
    prev_turn: u32,
}

impl FlatGame {
    pub fn from_seed(seed: &[u32], max_turns: u32) -> Result<Self, GameError> {
        let len = check_seed(seed, max_turns)?;
        debug!(
            "allocating {} turns for {} starting numbers",
            max_turns, len
        );

        let mut table = vec![0; max_turns as usize];
        let mut prev_turn = 0;
        for (turn, &n) in (1..).zip(seed) {
            prev_turn = match mem::replace(&mut table[n as usize], turn) {
                0 => turn,
                tp => tp,
            };
        }

        Ok(Self {
            table,
            turn: len,
            spoken: seed[seed.len() - 1],
            prev_turn,
        })
    }
}

impl Game for FlatGame {
    fn play_until(&mut self, target: u32) -> Result<u32, GameError> {
        check_target(self.turn, target, self.max_turns())?;

        let table = &mut self.table[..];
        let (mut turn, mut prev_turn, mut spoken) =
            (self.turn, self.prev_turn, self.spoken);

        while turn < target {
            spoken = turn - prev_turn;
            turn += 1;
            prev_turn = match mem::replace(&mut table[spoken as usize], turn) {
                0 => turn,
                tp => tp,
            };
        }

        self.turn = turn;
        self.prev_turn = prev_turn;
        self.spoken = spoken;
        Ok(spoken)
    }

    #[inline]
    fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    fn last_spoken(&self) -> u32 {
        self.spoken
    }

    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn max_turns(&self) -> u32 {
        self.table.len() as u32
    }

    fn size(&self) -> usize {
        self.table.len()
    }
}

impl fmt::Debug for FlatGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatGame")
            .field("turn", &self.turn)
            .field("spoken", &self.spoken)
            .field("prev_turn", &self.prev_turn)
            .field("max_turns", &self.table.len())
            .finish()
    }
}
