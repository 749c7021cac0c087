//! Cards and the slots that hold them.
//!
//! Every player owns two rows of [`CommandCardField`]s: program registers and
//! dealt hand slots. A [`FieldRef`] names one slot on the board so the
//! controller can move cards between any two of them.

use serde::{Deserialize, Serialize};

use super::command::Command;
use crate::core::PlayerId;

/// A program card. Immutable once dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandCard {
    command: Command,
}

impl CommandCard {
    /// Create a card carrying `command`.
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self { command }
    }

    #[must_use]
    pub const fn command(self) -> Command {
        self.command
    }
}

impl std::fmt::Display for CommandCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command)
    }
}

/// A slot holding at most one card.
///
/// `visible` is a presentation hint the controller flips at phase boundaries
/// to reveal registers as they execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCardField {
    card: Option<CommandCard>,
    visible: bool,
}

impl Default for CommandCardField {
    fn default() -> Self {
        Self {
            card: None,
            visible: true,
        }
    }
}

impl CommandCardField {
    /// The card in this slot.
    #[must_use]
    pub fn card(&self) -> Option<CommandCard> {
        self.card
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replace the card. Returns whether the slot changed.
    pub(crate) fn set_card(&mut self, card: Option<CommandCard>) -> bool {
        let changed = self.card != card;
        self.card = card;
        changed
    }

    /// Set visibility. Returns whether the slot changed.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

/// Which row and column of a player's card slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldSlot {
    /// Program register by index.
    Register(usize),
    /// Hand slot by index.
    Hand(usize),
}

/// A card slot anywhere on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    /// Owner of the slot.
    pub player: PlayerId,
    /// The slot itself.
    pub slot: FieldSlot,
}

impl FieldRef {
    /// Program register `index` of `player`.
    #[must_use]
    pub const fn register(player: PlayerId, index: usize) -> Self {
        Self {
            player,
            slot: FieldSlot::Register(index),
        }
    }

    /// Hand slot `index` of `player`.
    #[must_use]
    pub const fn hand(player: PlayerId, index: usize) -> Self {
        Self {
            player,
            slot: FieldSlot::Hand(index),
        }
    }
}

impl std::fmt::Display for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.slot {
            FieldSlot::Register(i) => write!(f, "{} register {}", self.player, i),
            FieldSlot::Hand(i) => write!(f, "{} hand {}", self.player, i),
        }
    }
}
