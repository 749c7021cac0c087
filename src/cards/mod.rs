//! Card system: commands, cards and card slots.
//!
//! ## Key Types
//!
//! - `Command`: What a card does when its register executes
//! - `Interaction`: Commands resolved by a player choice
//! - `CommandCard`: An immutable card carrying one command
//! - `CommandCardField`: A register or hand slot holding zero or one card
//! - `FieldRef`: Addresses any slot on the board

pub mod command;
pub mod field;

pub use command::{Command, Interaction};
pub use field::{CommandCard, CommandCardField, FieldRef, FieldSlot};
