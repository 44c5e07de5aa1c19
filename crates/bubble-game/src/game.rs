use crate::order::{is_ordered, SortOrder};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Fewest tiles a game can have.
pub const MIN_COUNT: usize = 2;
/// Most tiles a game can have.
pub const MAX_COUNT: usize = 10;
/// Tile count used when nothing else is requested.
pub const DEFAULT_COUNT: usize = 5;

/// Clamp a raw, possibly out-of-range count into `MIN_COUNT..=MAX_COUNT`.
pub fn clamp_count(requested: i64) -> usize {
    requested.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as usize
}

/// Errors from building a game out of an explicit sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The sequence is shorter than [`MIN_COUNT`] or longer than [`MAX_COUNT`].
    #[error("sequence length {0} is outside {MIN_COUNT}..={MAX_COUNT}")]
    InvalidLength(usize),
    /// The values are not exactly `1..=N`, each once.
    #[error("sequence is not a permutation of 1..={0}")]
    NotPermutation(usize),
}

/// What a call to [`Game::decide`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The game was already finished; nothing changed.
    Ignored,
    /// The decision was counted and the cursor moved.
    Taken {
        /// The pair was exchanged.
        swapped: bool,
        /// The pass reached its boundary; the cursor wrapped and a round was
        /// counted.
        pass_complete: bool,
        /// The sequence is now fully ordered.
        finished: bool,
    },
}

/// A bubble sort performed one human decision at a time.
///
/// The pair under comparison is always `(cursor, cursor + 1)`.  Each pass
/// shrinks by one from the right, exactly like textbook bubble sort, and the
/// game is finished as soon as the whole sequence is ordered, whichever pass
/// the player is in.
#[derive(Debug, Clone)]
pub struct Game {
    sequence: Vec<u8>,
    cursor: usize,
    rounds: u32,
    comparisons: u32,
    order: SortOrder,
    finished: bool,
    rng: StdRng,
}

impl Game {
    /// Start a game with `count` shuffled tiles, seeded from the OS.
    pub fn new(count: usize, order: SortOrder) -> Self {
        Self::with_rng(count, order, StdRng::from_entropy())
    }

    /// Start a game whose shuffles are fully determined by `seed`.
    pub fn seeded(count: usize, order: SortOrder, seed: u64) -> Self {
        Self::with_rng(count, order, StdRng::seed_from_u64(seed))
    }

    /// Start from an explicit arrangement instead of a shuffle.
    ///
    /// Later resets shuffle with an OS-seeded generator.
    pub fn from_sequence(sequence: Vec<u8>, order: SortOrder) -> Result<Self, GameError> {
        let len = sequence.len();
        if !(MIN_COUNT..=MAX_COUNT).contains(&len) {
            return Err(GameError::InvalidLength(len));
        }
        let mut sorted = sequence.clone();
        sorted.sort_unstable();
        if !sorted.iter().copied().eq(1..=len as u8) {
            return Err(GameError::NotPermutation(len));
        }
        Ok(Self {
            sequence,
            cursor: 0,
            rounds: 0,
            comparisons: 0,
            order,
            finished: false,
            rng: StdRng::from_entropy(),
        })
    }

    fn with_rng(count: usize, order: SortOrder, rng: StdRng) -> Self {
        let mut game = Self {
            sequence: Vec::new(),
            cursor: 0,
            rounds: 0,
            comparisons: 0,
            order,
            finished: false,
            rng,
        };
        game.resize(count);
        game
    }

    /// Reshuffle with `count` tiles (clamped) and clear all progress.
    ///
    /// The sort order is kept.
    pub fn resize(&mut self, count: usize) {
        let count = count.clamp(MIN_COUNT, MAX_COUNT);
        self.sequence = (1..=count as u8).collect();
        self.sequence.shuffle(&mut self.rng);
        self.cursor = 0;
        self.rounds = 0;
        self.comparisons = 0;
        self.finished = false;
    }

    /// Reshuffle with the current tile count and clear all progress.
    pub fn reset(&mut self) {
        self.resize(self.sequence.len());
    }

    /// Change the target direction.  Progress and completion are left alone
    /// until the next decision.
    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Record the player's decision about the highlighted pair.
    pub fn decide(&mut self, swap: bool) -> Step {
        if self.finished {
            return Step::Ignored;
        }

        self.comparisons += 1;
        if swap {
            self.sequence.swap(self.cursor, self.cursor + 1);
        }

        let boundary = self.sequence.len().saturating_sub(self.rounds as usize);
        let pass_complete = self.cursor + 2 >= boundary;
        if pass_complete {
            self.cursor = 0;
            self.rounds += 1;
        } else {
            self.cursor += 1;
        }

        self.finished = is_ordered(&self.sequence, self.order);

        Step::Taken {
            swapped: swap,
            pass_complete,
            finished: self.finished,
        }
    }

    /// Current arrangement of the tiles.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false; a game has at least [`MIN_COUNT`] tiles.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Index of the left tile of the highlighted pair.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Indices of the highlighted pair.
    pub fn pair(&self) -> (usize, usize) {
        (self.cursor, self.cursor + 1)
    }

    /// Completed passes.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Decisions made since the last reset.
    pub fn comparisons(&self) -> u32 {
        self.comparisons
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The pass boundary has shrunk down to the first pair and neither
    /// keeping nor swapping that pair orders the sequence.  From here only
    /// tiles 0 and 1 are ever compared, so the game cannot be completed
    /// without a reset.
    pub fn is_stalled(&self) -> bool {
        if self.finished || (self.rounds as usize + 1) < self.sequence.len() {
            return false;
        }
        let mut swapped = self.sequence.clone();
        swapped.swap(0, 1);
        !is_ordered(&swapped, self.order)
    }
}
