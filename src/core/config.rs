//! Board configuration.
//!
//! Callers configure a game at startup by providing:
//! - `PlayerSetup`: name, color, start position and heading of one robot
//! - `BoardConfig`: board size, register and hand sizes, players, RNG seed
//!
//! Anything left unset falls back to the defaults of the physical game:
//! an 8x8 board, five registers and eight cards per hand.

use serde::{Deserialize, Serialize};

use super::heading::Heading;
use crate::board::Position;
use crate::error::ConfigError;

/// Program registers per player unless configured otherwise.
pub const REGISTER_COUNT: usize = 5;

/// Hand slots per player unless configured otherwise.
pub const CARD_COUNT: usize = 8;

/// Default board width.
pub const DEFAULT_WIDTH: usize = 8;

/// Default board height.
pub const DEFAULT_HEIGHT: usize = 8;

/// Events a board keeps in its history unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1024;

/// Colors handed out to players without an explicit setup.
const PLAYER_COLORS: [&str; 6] = ["red", "green", "blue", "orange", "grey", "magenta"];

/// Start state of one robot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    /// Human-readable name.
    pub name: String,

    /// Display color (opaque to the engine).
    pub color: String,

    /// Start position.
    pub position: Position,

    /// Start heading.
    pub heading: Heading,
}

impl PlayerSetup {
    /// Create a setup facing the default heading.
    pub fn new(name: impl Into<String>, color: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            position,
            heading: Heading::default(),
        }
    }

    /// Set the start heading.
    #[must_use]
    pub fn facing(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }
}

/// Complete board configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Number of players (1-255).
    pub player_count: usize,

    /// Program registers per player.
    pub register_count: usize,

    /// Hand slots per player.
    pub hand_size: usize,

    /// Explicit player setups, by player index.
    ///
    /// Players without an entry get a generated name, color and position.
    pub players: Vec<PlayerSetup>,

    /// Seed for the card-dealing RNG.
    pub seed: u64,

    /// Most recent events kept in the board history. 0 disables it.
    pub history_capacity: usize,
}

impl BoardConfig {
    /// Create a configuration for `player_count` players with default sizes.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            player_count,
            register_count: REGISTER_COUNT,
            hand_size: CARD_COUNT,
            players: Vec::new(),
            seed: 0,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of program registers.
    #[must_use]
    pub fn with_register_count(mut self, count: usize) -> Self {
        self.register_count = count;
        self
    }

    /// Set the number of hand slots.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Add an explicit setup for the next player index.
    #[must_use]
    pub fn with_player(mut self, setup: PlayerSetup) -> Self {
        self.players.push(setup);
        self
    }

    /// Set the card-dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many events the board history keeps.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Setup for player `index`.
    ///
    /// Generated players are named "Player N" and start on consecutive
    /// spaces in row-major order.
    #[must_use]
    pub fn player_setup(&self, index: usize) -> PlayerSetup {
        if let Some(setup) = self.players.get(index) {
            return setup.clone();
        }
        let width = self.width.max(1);
        let position = Position::new(index % width, index / width);
        PlayerSetup::new(
            format!("Player {}", index + 1),
            PLAYER_COLORS[index % PLAYER_COLORS.len()],
            position,
        )
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.player_count == 0 || self.player_count > 255 {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        let spaces = self
            .width
            .checked_mul(self.height)
            .ok_or(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            })?;
        if self.player_count > spaces {
            return Err(ConfigError::TooManyPlayers {
                players: self.player_count,
                spaces,
            });
        }
        if self.register_count == 0 {
            return Err(ConfigError::NoRegisters);
        }
        if self.hand_size == 0 {
            return Err(ConfigError::NoHandSlots);
        }

        let mut taken: Vec<Position> = Vec::with_capacity(self.player_count);
        for index in 0..self.player_count {
            let position = self.player_setup(index).position;
            if position.x >= self.width || position.y >= self.height {
                return Err(ConfigError::PositionOutOfBounds(position));
            }
            if taken.contains(&position) {
                return Err(ConfigError::PositionTaken(position));
            }
            taken.push(position);
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();

        assert_eq!(config.width, 8);
        assert_eq!(config.height, 8);
        assert_eq!(config.player_count, 2);
        assert_eq!(config.register_count, REGISTER_COUNT);
        assert_eq!(config.hand_size, CARD_COUNT);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(3)
            .with_size(4, 3)
            .with_register_count(2)
            .with_hand_size(4)
            .with_seed(99);

        assert_eq!((config.width, config.height), (4, 3));
        assert_eq!(config.register_count, 2);
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_generated_player_setup() {
        let config = BoardConfig::new(5).with_size(3, 3);

        let first = config.player_setup(0);
        assert_eq!(first.name, "Player 1");
        assert_eq!(first.color, "red");
        assert_eq!(first.position, Position::new(0, 0));
        assert_eq!(first.heading, Heading::South);

        assert_eq!(config.player_setup(4).position, Position::new(1, 1));
    }

    #[test]
    fn test_explicit_player_setup() {
        let config = BoardConfig::new(2).with_player(
            PlayerSetup::new("Ada", "blue", Position::new(5, 5)).facing(Heading::East),
        );

        let ada = config.player_setup(0);
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.heading, Heading::East);

        // Player 1 still gets a generated setup.
        assert_eq!(config.player_setup(1).name, "Player 2");
    }

    #[test]
    fn test_validate_rejects_empty_board() {
        let config = BoardConfig::new(1).with_size(0, 4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyBoard { width: 0, height: 4 })
        );
    }

    #[test]
    fn test_validate_rejects_overflowing_size() {
        let config = BoardConfig::new(1).with_size(usize::MAX, 2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooLarge { width: usize::MAX, height: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_player_counts() {
        assert_eq!(BoardConfig::new(0).validate(), Err(ConfigError::PlayerCount(0)));
        assert_eq!(BoardConfig::new(256).validate(), Err(ConfigError::PlayerCount(256)));
        assert_eq!(
            BoardConfig::new(5).with_size(2, 2).validate(),
            Err(ConfigError::TooManyPlayers { players: 5, spaces: 4 })
        );
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert_eq!(
            BoardConfig::new(1).with_register_count(0).validate(),
            Err(ConfigError::NoRegisters)
        );
        assert_eq!(
            BoardConfig::new(1).with_hand_size(0).validate(),
            Err(ConfigError::NoHandSlots)
        );
    }

    #[test]
    fn test_validate_rejects_bad_positions() {
        let outside = BoardConfig::new(1)
            .with_size(2, 2)
            .with_player(PlayerSetup::new("A", "red", Position::new(2, 0)));
        assert_eq!(
            outside.validate(),
            Err(ConfigError::PositionOutOfBounds(Position::new(2, 0)))
        );

        let clash = BoardConfig::new(2)
            .with_player(PlayerSetup::new("A", "red", Position::new(1, 1)))
            .with_player(PlayerSetup::new("B", "blue", Position::new(1, 1)));
        assert_eq!(clash.validate(), Err(ConfigError::PositionTaken(Position::new(1, 1))));
    }
}
