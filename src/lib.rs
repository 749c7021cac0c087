//! # robo-rally-engine
//!
//! Rule engine for a programmable-robot race played on a toroidal grid.
//!
//! ## How a round works
//!
//! 1. **Programming**: every player is dealt a hand of command cards and moves
//!    some of them into their program registers.
//! 2. **Activation**: registers execute in lock-step. Register 0 runs for every
//!    player in player order, then register 1, and so on.
//! 3. **Player interaction**: an interactive card pauses execution until its
//!    owner picks one of the card's options.
//! 4. When the last register has run, a new programming phase starts.
//!
//! ## Design Principles
//!
//! - **No errors during play**: invalid calls (unknown players, occupied
//!   targets, wrong phase) are ignored. Only board construction can fail.
//! - **Explicit change events**: every observable change is recorded as a
//!   `BoardEvent` and published to subscribers after each operation.
//! - **Injectable randomness**: cards are dealt from a `CommandSource`, so
//!   tests can script the deal.
//!
//! ## Modules
//!
//! - `core`: Players, headings, phases, RNG, configuration
//! - `cards`: Commands, cards and card slots
//! - `board`: Grid and shared game state
//! - `events`: Change events and the observer bus
//! - `rules`: The turn controller
//!
//! ## Example
//!
//! ```
//! use robo_rally_engine::{BoardConfig, FieldRef, Phase, PlayerId, TurnController};
//!
//! let mut game = TurnController::from_config(&BoardConfig::new(2).with_seed(7)).unwrap();
//!
//! game.initialize_programming_phase();
//! let p0 = PlayerId::new(0);
//! assert!(game.move_cards(FieldRef::hand(p0, 0), FieldRef::register(p0, 0)));
//!
//! game.finish_programming_phase();
//! assert_eq!(game.board().phase(), Phase::Activation);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, PlayerSetup, CARD_COUNT, DEFAULT_HISTORY_CAPACITY, REGISTER_COUNT,
    Heading, Phase, Controls,
    Player, PlayerId,
    CommandSource, GameRng, GameRngState, ScriptedCommands,
};

pub use crate::cards::{Command, Interaction, CommandCard, CommandCardField, FieldRef, FieldSlot};

pub use crate::board::{Board, BoardId, PendingInteraction, Position, Space};

pub use crate::events::{BoardEvent, BoardObserver, EventBus, ObserverId};

pub use crate::rules::{Turn, TurnController};

pub use crate::error::ConfigError;
