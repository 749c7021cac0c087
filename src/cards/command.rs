//! Program commands.
//!
//! Plain commands act immediately. Interactive commands carry a fixed list of
//! plain options and pause execution until the player picks one.

use serde::{Deserialize, Serialize};

/// A command printed on a program card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move one space along the current heading.
    Forward,
    /// Turn 90° clockwise.
    Right,
    /// Turn 90° counter-clockwise.
    Left,
    /// Move two spaces along the current heading.
    FastForward,
    /// The player chooses what happens when the card executes.
    Interactive(Interaction),
}

/// Commands whose effect is chosen at execution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    /// Turn left or turn right.
    LeftOrRight,
}

impl Interaction {
    /// The options offered to the player, in display order.
    #[must_use]
    pub const fn options(self) -> &'static [Command] {
        match self {
            Interaction::LeftOrRight => &[Command::Left, Command::Right],
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Interaction::LeftOrRight => "Left OR Right",
        }
    }
}

impl Command {
    /// Every command a card can carry. Dealing draws uniformly from this list.
    pub const ALL: [Command; 5] = [
        Command::Forward,
        Command::Right,
        Command::Left,
        Command::FastForward,
        Command::Interactive(Interaction::LeftOrRight),
    ];

    /// Label shown on the card.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Command::Forward => "Fwd",
            Command::Right => "Turn Right",
            Command::Left => "Turn Left",
            Command::FastForward => "Fast Fwd",
            Command::Interactive(interaction) => interaction.display_name(),
        }
    }

    /// Does executing this command need a player decision?
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Command::Interactive(_))
    }

    /// The interaction behind this command, if any.
    #[must_use]
    pub const fn interaction(self) -> Option<Interaction> {
        match self {
            Command::Interactive(interaction) => Some(interaction),
            _ => None,
        }
    }

    /// Options the player picks from. Empty for plain commands.
    #[must_use]
    pub const fn options(self) -> &'static [Command] {
        match self {
            Command::Interactive(interaction) => interaction.options(),
            _ => &[],
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_commands_have_no_options() {
        for command in [Command::Forward, Command::Right, Command::Left, Command::FastForward] {
            assert!(!command.is_interactive());
            assert!(command.options().is_empty());
            assert_eq!(command.interaction(), None);
        }
    }

    #[test]
    fn test_left_or_right() {
        let command = Command::Interactive(Interaction::LeftOrRight);

        assert!(command.is_interactive());
        assert_eq!(command.options(), &[Command::Left, Command::Right]);
        assert_eq!(command.interaction(), Some(Interaction::LeftOrRight));
        assert_eq!(command.to_string(), "Left OR Right");
    }

    #[test]
    fn test_options_are_plain() {
        for command in Command::ALL {
            assert!(command.options().iter().all(|o| !o.is_interactive()));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Command::Forward.to_string(), "Fwd");
        assert_eq!(Command::FastForward.to_string(), "Fast Fwd");
        assert_eq!(Command::Right.display_name(), "Turn Right");
        assert_eq!(Command::Left.display_name(), "Turn Left");
    }

    #[test]
    fn test_serialization() {
        let command = Command::Interactive(Interaction::LeftOrRight);
        let json = serde_json::to_string(&command).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();

        assert_eq!(command, deserialized);
    }
}
