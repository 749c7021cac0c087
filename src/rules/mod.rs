//! Game rules: the turn controller.
//!
//! `TurnController` owns the board and implements every game operation:
//! - Execution: `execute_step`, `execute_programs`, `execute_players_option`
//! - Movement: `move_forward`, `fast_forward`, `turn_right`, `turn_left`
//! - Programming: `initialize_programming_phase`, `finish_programming_phase`,
//!   `move_cards`

mod controller;
mod movement;
mod programming;

pub use controller::TurnController;
pub use movement::Turn;
