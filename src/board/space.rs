//! Grid coordinates and spaces.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A cell coordinate. `x` grows east, `y` grows south.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One cell of the board, holding at most one robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    position: Position,
    player: Option<PlayerId>,
}

impl Space {
    pub(crate) const fn new(position: Position) -> Self {
        Self {
            position,
            player: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The robot standing here.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        self.player
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.player.is_none()
    }

    pub(crate) fn set_player(&mut self, player: Option<PlayerId>) {
        self.player = player;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }

    #[test]
    fn test_space_occupancy() {
        let mut space = Space::new(Position::new(1, 2));
        assert!(space.is_free());
        assert_eq!(space.position(), Position::new(1, 2));

        space.set_player(Some(PlayerId::new(0)));
        assert!(!space.is_free());
        assert_eq!(space.player(), Some(PlayerId::new(0)));
    }
}
