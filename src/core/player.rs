//! Player identification and per-player robot state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. The id is also the
//! player's position in the board's player list, which fixes the order in
//! which registers execute.
//!
//! ## Player
//!
//! Heading, position, program registers and dealt hand of one robot.
//! Players are only mutated through the [`Board`](crate::board::Board) so that
//! every change is reported as an event.

use serde::{Deserialize, Serialize};

use super::config::PlayerSetup;
use super::heading::Heading;
use crate::board::Position;
use crate::cards::{CommandCard, CommandCardField};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use robo_rally_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(256)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One robot on the board.
///
/// Identified by its [`PlayerId`], the index into the board's player list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: String,
    heading: Heading,
    position: Position,
    registers: Vec<CommandCardField>,
    hand: Vec<CommandCardField>,
}

impl Player {
    /// Create a player with empty registers and an empty hand.
    pub(crate) fn new(
        id: PlayerId,
        setup: &PlayerSetup,
        register_count: usize,
        hand_size: usize,
    ) -> Self {
        Self {
            id,
            name: setup.name.clone(),
            color: setup.color.clone(),
            heading: setup.heading,
            position: setup.position,
            registers: vec![CommandCardField::default(); register_count],
            hand: vec![CommandCardField::default(); hand_size],
        }
    }

    /// Ordinal of this player on its board.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Program register `index`, if it exists.
    #[must_use]
    pub fn register(&self, index: usize) -> Option<&CommandCardField> {
        self.registers.get(index)
    }

    /// All program registers in execution order.
    #[must_use]
    pub fn registers(&self) -> &[CommandCardField] {
        &self.registers
    }

    /// Hand slot `index`, if it exists.
    #[must_use]
    pub fn hand_slot(&self, index: usize) -> Option<&CommandCardField> {
        self.hand.get(index)
    }

    /// All dealt hand slots.
    #[must_use]
    pub fn hand(&self) -> &[CommandCardField] {
        &self.hand
    }

    /// The card programmed into register `index`.
    #[must_use]
    pub fn program_card(&self, index: usize) -> Option<CommandCard> {
        self.registers.get(index).and_then(CommandCardField::card)
    }

    pub(crate) fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn register_mut(&mut self, index: usize) -> Option<&mut CommandCardField> {
        self.registers.get_mut(index)
    }

    pub(crate) fn hand_slot_mut(&mut self, index: usize) -> Option<&mut CommandCardField> {
        self.hand.get_mut(index)
    }
}
