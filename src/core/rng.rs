//! Card-dealing randomness.
//!
//! The controller only needs a sequence of commands when it deals hands, so
//! the dependency is expressed as the [`CommandSource`] trait:
//!
//! - [`GameRng`]: seeded ChaCha8 stream drawing uniformly from [`Command::ALL`]
//! - [`ScriptedCommands`]: fixed, repeating sequence for tests and replays
//!
//! ```
//! use robo_rally_engine::core::{CommandSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same deal.
//! for _ in 0..10 {
//!     assert_eq!(a.next_command(), b.next_command());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Command;

/// Producer of freshly dealt commands.
pub trait CommandSource {
    /// The command on the next dealt card.
    fn next_command(&mut self) -> Command;
}

/// Deterministic RNG for dealing cards.
///
/// Uses ChaCha8 for speed while keeping the stream reproducible from the seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl CommandSource for GameRng {
    fn next_command(&mut self) -> Command {
        Command::ALL[self.gen_range_usize(0..Command::ALL.len())]
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A fixed sequence of commands, repeated forever.
///
/// An empty script deals `Forward` cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedCommands {
    script: Vec<Command>,
    cursor: usize,
}

impl ScriptedCommands {
    /// Cycle through `script` in order.
    #[must_use]
    pub fn new(script: Vec<Command>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Deal the same command every time.
    #[must_use]
    pub fn repeat(command: Command) -> Self {
        Self::new(vec![command])
    }
}

impl CommandSource for ScriptedCommands {
    fn next_command(&mut self) -> Command {
        if self.script.is_empty() {
            return Command::Forward;
        }
        let command = self.script[self.cursor % self.script.len()];
        self.cursor = (self.cursor + 1) % self.script.len();
        command
    }
}
