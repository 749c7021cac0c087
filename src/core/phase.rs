//! Game phases and the controls each phase allows.

use serde::{Deserialize, Serialize};

/// The phase the board is in.
///
/// ```text
/// Initialisation -> Programming -> Activation <-> PlayerInteraction
///                        ^              |
///                        +--------------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh board. The first execution attempt deals cards and moves on.
    #[default]
    Initialisation,
    /// Players fill their registers from their hands.
    Programming,
    /// Registers execute one step at a time across all players.
    Activation,
    /// Execution is paused until the current player picks an option.
    PlayerInteraction,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Initialisation => "initialisation",
            Phase::Programming => "programming",
            Phase::Activation => "activation",
            Phase::PlayerInteraction => "player interaction",
        };
        f.write_str(name)
    }
}

/// Which controller entry points make sense in the current phase.
///
/// A front end uses this to enable or disable its buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// `finish_programming_phase` is meaningful.
    pub finish_programming: bool,
    /// `execute_programs` is meaningful.
    pub execute_programs: bool,
    /// `execute_step` is meaningful.
    pub execute_step: bool,
}

impl Controls {
    /// Controls available in `phase`.
    #[must_use]
    pub const fn for_phase(phase: Phase) -> Self {
        match phase {
            // Executing is the only way out of initialisation.
            Phase::Initialisation => Self {
                finish_programming: false,
                execute_programs: true,
                execute_step: false,
            },
            Phase::Programming => Self {
                finish_programming: true,
                execute_programs: false,
                execute_step: false,
            },
            Phase::Activation => Self {
                finish_programming: false,
                execute_programs: true,
                execute_step: true,
            },
            Phase::PlayerInteraction => Self {
                finish_programming: false,
                execute_programs: false,
                execute_step: false,
            },
        }
    }
}
