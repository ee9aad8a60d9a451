use super::{check_seed, check_target, Game, GameError};
use common::HashMap;

/// The game keyed by a hash map, holding only the numbers spoken so far.
#[derive(Debug, Clone)]
pub struct SparseGame {
    mem: HashMap<u32, u32>,
    turn: u32,
    spoken: u32,
    prev_turn: u32,
    max_turns: u32,
}

impl SparseGame {
    pub fn from_seed(seed: &[u32], max_turns: u32) -> Result<Self, GameError> {
        let len = check_seed(seed, max_turns)?;

        let mut mem = HashMap::default();
        let mut prev_turn = 0;
        for (turn, &n) in (1..).zip(seed) {
            prev_turn = mem.insert(n, turn).unwrap_or(turn);
        }

        Ok(Self {
            mem,
            turn: len,
            spoken: seed[seed.len() - 1],
            prev_turn,
            max_turns,
        })
    }
}

impl Game for SparseGame {
    fn play_until(&mut self, target: u32) -> Result<u32, GameError> {
        check_target(self.turn, target, self.max_turns)?;

        while self.turn < target {
            self.spoken = self.turn - self.prev_turn;
            self.turn += 1;
            self.prev_turn =
                self.mem.insert(self.spoken, self.turn).unwrap_or(self.turn);
        }

        Ok(self.spoken)
    }

    #[inline]
    fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    fn last_spoken(&self) -> u32 {
        self.spoken
    }

    #[inline]
    fn max_turns(&self) -> u32 {
        self.max_turns
    }

    fn size(&self) -> usize {
        self.mem.len()
    }
}
