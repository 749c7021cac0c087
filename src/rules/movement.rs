//! Robot movement and rotation.
//!
//! The grid wraps at every edge. A move into an occupied space is a bump: the
//! robot stays where it is and nothing is reported to the caller.

use super::controller::TurnController;
use crate::core::PlayerId;

/// Direction of a 90° rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Clockwise.
    Right,
    /// Counter-clockwise.
    Left,
}

impl TurnController {
    /// Move `player` one space along its heading.
    pub fn move_forward(&mut self, player: PlayerId) {
        self.advance(player);
        self.publish();
    }

    /// Move `player` two spaces, one at a time. The second move can be
    /// blocked even when the first one succeeded.
    pub fn fast_forward(&mut self, player: PlayerId) {
        self.advance(player);
        self.advance(player);
        self.publish();
    }

    /// Rotate `player` 90° clockwise.
    pub fn turn_right(&mut self, player: PlayerId) {
        self.turn(player, Turn::Right);
    }

    /// Rotate `player` 90° counter-clockwise.
    pub fn turn_left(&mut self, player: PlayerId) {
        self.turn(player, Turn::Left);
    }

    /// Rotate `player` 90° in direction `turn`.
    pub fn turn(&mut self, player: PlayerId, turn: Turn) {
        self.rotate(player, turn);
        self.publish();
    }

    pub(super) fn advance(&mut self, player: PlayerId) {
        let Some(robot) = self.board.player(player) else {
            log::debug!("{}: ignoring move for unknown {}", self.board.id(), player);
            return;
        };
        let from = robot.position();
        let to = self.board.neighbour(from, robot.heading());
        if !self.board.move_player(player, to) {
            log::trace!("{}: {} blocked at {}", self.board.id(), player, from);
        }
    }

    pub(super) fn rotate(&mut self, player: PlayerId, turn: Turn) {
        let Some(robot) = self.board.player(player) else {
            log::debug!("{}: ignoring turn for unknown {}", self.board.id(), player);
            return;
        };
        let heading = match turn {
            Turn::Right => robot.heading().next(),
            Turn::Left => robot.heading().prev(),
        };
        self.board.set_heading(player, heading);
    }
}
