//! The state machine behind the bubble sort drill.
//!
//! A [`Game`] holds a shuffled permutation of `1..=N` and a cursor over the
//! adjacent pair currently under comparison.  A human player calls
//! [`Game::decide`] for every pair, choosing whether to swap it; the game
//! advances the cursor with bubble-sort pass semantics and reports when the
//! sequence is fully ordered for the selected [`SortOrder`].
//!
//! Nothing here sorts on its own.  The game only verifies and drives the
//! player's progress.
//!
//! ```
//! use bubble_game::{Game, SortOrder, Step};
//!
//! let mut game = Game::from_sequence(vec![2, 1], SortOrder::Ascending).unwrap();
//! let step = game.decide(true);
//! assert_eq!(game.sequence(), &[1, 2]);
//! assert!(matches!(step, Step::Taken { finished: true, .. }));
//! assert_eq!(game.decide(false), Step::Ignored);
//! ```

pub mod game;
pub mod order;

pub use game::{clamp_count, Game, GameError, Step, DEFAULT_COUNT, MAX_COUNT, MIN_COUNT};
pub use order::{is_ordered, ParseSortOrderError, SortOrder};
