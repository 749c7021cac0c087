//! Board change events.
//!
//! Every externally observable change to the board is described by exactly one
//! [`BoardEvent`]. Setters that leave a value unchanged emit nothing, so a front
//! end can redraw precisely what an event names.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::cards::{CommandCard, FieldRef};
use crate::core::{Heading, Phase, PlayerId};

/// Something that changed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// The game moved to another phase.
    PhaseChanged {
        /// Phase before the transition.
        from: Phase,
        /// Phase after the transition.
        to: Phase,
    },

    /// Another player is now the one whose register executes next.
    CurrentPlayerChanged {
        /// The new current player.
        player: Option<PlayerId>,
    },

    /// The register index being executed changed.
    StepChanged {
        /// The new step.
        step: usize,
    },

    /// Switched between manual stepping and continuous execution.
    StepModeChanged {
        /// `true` for manual stepping.
        single_step: bool,
    },

    /// A robot moved to another space.
    PlayerMoved {
        /// The robot that moved.
        player: PlayerId,
        /// Space it left.
        from: Position,
        /// Space it entered.
        to: Position,
    },

    /// A robot turned.
    PlayerTurned {
        /// The robot that turned.
        player: PlayerId,
        /// Its new heading.
        heading: Heading,
    },

    /// A slot received a new card or was cleared.
    FieldChanged {
        /// The slot.
        field: FieldRef,
        /// Its new content.
        card: Option<CommandCard>,
    },

    /// A slot was revealed or hidden.
    FieldVisibilityChanged {
        /// The slot.
        field: FieldRef,
        /// Whether it is now visible.
        visible: bool,
    },

    /// A card moved from one slot to another.
    CardMoved {
        /// Slot the card left.
        source: FieldRef,
        /// Slot the card entered.
        target: FieldRef,
        /// The card.
        card: CommandCard,
    },
}

impl BoardEvent {
    /// The player this event concerns, if it is about a single player.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            BoardEvent::PlayerMoved { player, .. } | BoardEvent::PlayerTurned { player, .. } => {
                Some(*player)
            }
            BoardEvent::FieldChanged { field, .. }
            | BoardEvent::FieldVisibilityChanged { field, .. } => Some(field.player),
            BoardEvent::CardMoved { source, .. } => Some(source.player),
            BoardEvent::CurrentPlayerChanged { player } => *player,
            BoardEvent::PhaseChanged { .. }
            | BoardEvent::StepChanged { .. }
            | BoardEvent::StepModeChanged { .. } => None,
        }
    }
}
