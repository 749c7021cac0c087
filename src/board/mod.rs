//! The playing field: a toroidal grid of spaces plus the shared game state.
//!
//! - `Position`, `Space`: grid coordinates and cells
//! - `Board`: grid, players, phase and execution cursor
//! - `PendingInteraction`: what the game is waiting for while paused

pub mod space;
pub mod state;

pub use space::{Position, Space};
pub use state::{Board, BoardId, PendingInteraction};
