//! Core engine types: players, headings, phases, RNG, configuration.
//!
//! These are the building blocks the board and the turn controller are made of.

pub mod config;
pub mod heading;
pub mod phase;
pub mod player;
pub mod rng;

pub use config::{BoardConfig, PlayerSetup, CARD_COUNT, DEFAULT_HISTORY_CAPACITY, REGISTER_COUNT};
pub use heading::Heading;
pub use phase::{Controls, Phase};
pub use player::{Player, PlayerId};
pub use rng::{CommandSource, GameRng, GameRngState, ScriptedCommands};
