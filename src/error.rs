//! Error types for board construction.
//!
//! Game operations never fail: invalid calls are ignored. The only fallible
//! step is building a [`Board`](crate::board::Board) from a
//! [`BoardConfig`](crate::core::BoardConfig).

use std::fmt;

use crate::board::Position;

/// Reasons a board configuration is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyBoard {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Width times height does not fit in a `usize`.
    BoardTooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Player count outside 1..=255.
    PlayerCount(usize),
    /// More players than spaces to put them on.
    TooManyPlayers {
        /// Number of players.
        players: usize,
        /// Number of spaces on the board.
        spaces: usize,
    },
    /// A player needs at least one program register.
    NoRegisters,
    /// A player needs at least one hand slot.
    NoHandSlots,
    /// A start position lies outside the board.
    PositionOutOfBounds(Position),
    /// Two players start on the same space.
    PositionTaken(Position),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard { width, height } => {
                write!(f, "board must be at least 1x1, got {width}x{height}")
            }
            ConfigError::BoardTooLarge { width, height } => {
                write!(f, "board of {width}x{height} spaces is too large")
            }
            ConfigError::PlayerCount(count) => {
                write!(f, "player count must be 1-255, got {count}")
            }
            ConfigError::TooManyPlayers { players, spaces } => {
                write!(f, "{players} players do not fit on {spaces} spaces")
            }
            ConfigError::NoRegisters => write!(f, "register count must be at least 1"),
            ConfigError::NoHandSlots => write!(f, "hand size must be at least 1"),
            ConfigError::PositionOutOfBounds(pos) => {
                write!(f, "start position {pos} is outside the board")
            }
            ConfigError::PositionTaken(pos) => {
                write!(f, "start position {pos} is used by more than one player")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
