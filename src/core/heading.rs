//! Compass headings for robots on the grid.

use serde::{Deserialize, Serialize};

/// The direction a player faces.
///
/// Headings form a cycle `North -> East -> South -> West -> North`.
/// Turning right walks the cycle forward, turning left walks it backward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    #[default]
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The heading after a 90° clockwise turn.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The heading after a 90° counter-clockwise turn.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        f.write_str(name)
    }
}
