//! Shared game state.
//!
//! ## Board
//!
//! The single mutable resource of a game:
//! - Toroidal grid of spaces, each holding at most one robot
//! - Players in execution order
//! - Phase, current player, current step, step mode
//! - The interaction the game is paused on, if any
//! - Event history
//!
//! Mutators are crate-private and each records one [`BoardEvent`] per
//! observable change. The [`TurnController`](crate::rules::TurnController)
//! drains those events and publishes them after every operation.

use std::sync::atomic::{AtomicU32, Ordering};

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::space::{Position, Space};
use crate::cards::{CommandCard, CommandCardField, FieldRef, FieldSlot, Interaction};
use crate::core::{BoardConfig, Controls, Heading, Phase, Player, PlayerId};
use crate::error::ConfigError;
use crate::events::BoardEvent;

static NEXT_BOARD_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a board, used to tell boards apart in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(pub u32);

impl BoardId {
    /// Create a board ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    fn fresh() -> Self {
        Self(NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.0)
    }
}

/// Execution paused on an interactive card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInteraction {
    /// Player who has to choose.
    pub player: PlayerId,
    /// Register holding the interactive card.
    pub register: usize,
    /// The choice being made.
    pub interaction: Interaction,
    /// Whether execution was running continuously when it paused.
    pub resume_continuously: bool,
}

/// The board and everything on it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    width: usize,
    height: usize,

    /// Row-major: index = y * width + x.
    spaces: Vec<Space>,
    players: Vec<Player>,

    // === Progression ===
    phase: Phase,
    current_player: Option<PlayerId>,
    step: usize,
    single_step_mode: bool,
    pending_interaction: Option<PendingInteraction>,

    // === Notification ===
    history: Vector<BoardEvent>,
    history_capacity: usize,

    /// Events not yet published.
    #[serde(skip)]
    unpublished: SmallVec<[BoardEvent; 8]>,
}

impl Board {
    /// Build a board and place the configured players.
    ///
    /// The board starts in [`Phase::Initialisation`] with no current player.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let id = BoardId::fresh();
        let mut spaces = Vec::with_capacity(config.width * config.height);
        for y in 0..config.height {
            for x in 0..config.width {
                spaces.push(Space::new(Position::new(x, y)));
            }
        }

        let mut board = Self {
            id,
            width: config.width,
            height: config.height,
            spaces,
            players: Vec::with_capacity(config.player_count),
            phase: Phase::Initialisation,
            current_player: None,
            step: 0,
            single_step_mode: false,
            pending_interaction: None,
            history: Vector::new(),
            history_capacity: config.history_capacity,
            unpublished: SmallVec::new(),
        };

        for player_id in PlayerId::all(config.player_count) {
            let setup = config.player_setup(player_id.index());
            let player = Player::new(player_id, &setup, config.register_count, config.hand_size);
            let index = board.space_index(setup.position);
            board.spaces[index].set_player(Some(player_id));
            board.players.push(player);
        }

        log::debug!(
            "{} created: {}x{}, {} players",
            id,
            board.width,
            board.height,
            board.players.len()
        );
        Ok(board)
    }

    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    // === Grid ===

    /// The space at `(x, y)`, if it lies on the board.
    #[must_use]
    pub fn space(&self, x: usize, y: usize) -> Option<&Space> {
        if x < self.width && y < self.height {
            self.spaces.get(y * self.width + x)
        } else {
            None
        }
    }

    /// The robot standing at `position`.
    #[must_use]
    pub fn player_at(&self, position: Position) -> Option<PlayerId> {
        self.space(position.x, position.y).and_then(Space::player)
    }

    /// The position one space away along `heading`, wrapping around the edges.
    #[must_use]
    pub fn neighbour(&self, position: Position, heading: Heading) -> Position {
        let Position { x, y } = position;
        match heading {
            Heading::East => Position::new((x + 1) % self.width, y),
            Heading::West => Position::new((x + self.width - 1) % self.width, y),
            Heading::North => Position::new(x, (y + self.height - 1) % self.height),
            Heading::South => Position::new(x, (y + 1) % self.height),
        }
    }

    fn space_index(&self, position: Position) -> usize {
        position.y * self.width + position.x
    }

    // === Players ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Players in execution order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// Is `id` a player on this board?
    ///
    /// Players are addressed by index into this board's player list, so this
    /// bounds check is the membership guard every operation applies. An id
    /// is never tied to a particular board.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        id.index() < self.players.len()
    }

    /// The card slot named by `field`.
    #[must_use]
    pub fn field(&self, field: FieldRef) -> Option<&CommandCardField> {
        let player = self.player(field.player)?;
        match field.slot {
            FieldSlot::Register(i) => player.register(i),
            FieldSlot::Hand(i) => player.hand_slot(i),
        }
    }

    /// Number of program registers each player has.
    #[must_use]
    pub fn register_count(&self) -> usize {
        self.players.first().map_or(0, |p| p.registers().len())
    }

    /// Number of hand slots each player has.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.players.first().map_or(0, |p| p.hand().len())
    }

    // === Progression ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player whose register executes next.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    /// Index of the register being executed.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn is_single_step_mode(&self) -> bool {
        self.single_step_mode
    }

    #[must_use]
    pub fn pending_interaction(&self) -> Option<PendingInteraction> {
        self.pending_interaction
    }

    /// The register currently executing, for highlighting.
    #[must_use]
    pub fn active_register(&self) -> Option<usize> {
        match self.phase {
            Phase::Activation | Phase::PlayerInteraction if self.step < self.register_count() => {
                Some(self.step)
            }
            _ => None,
        }
    }

    /// Controls that make sense in the current phase.
    #[must_use]
    pub fn controls(&self) -> Controls {
        Controls::for_phase(self.phase)
    }

    // === History ===

    /// The most recent events, oldest first.
    ///
    /// Holds at most `history_capacity` events; older ones are dropped.
    #[must_use]
    pub fn history(&self) -> &Vector<BoardEvent> {
        &self.history
    }

    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    fn record(&mut self, event: BoardEvent) {
        self.history.push_back(event);
        while self.history.len() > self.history_capacity {
            self.history.pop_front();
        }
        self.unpublished.push(event);
    }

    /// Take the events recorded since the last call.
    pub(crate) fn drain_events(&mut self) -> SmallVec<[BoardEvent; 8]> {
        std::mem::take(&mut self.unpublished)
    }

    // === Mutation ===

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            let from = self.phase;
            self.phase = phase;
            log::debug!("{}: phase {} -> {}", self.id, from, phase);
            self.record(BoardEvent::PhaseChanged { from, to: phase });
        }
    }

    pub(crate) fn set_current_player(&mut self, player: Option<PlayerId>) {
        let player = player.filter(|&p| self.contains(p));
        if self.current_player != player {
            self.current_player = player;
            self.record(BoardEvent::CurrentPlayerChanged { player });
        }
    }

    pub(crate) fn set_step(&mut self, step: usize) {
        if self.step != step {
            self.step = step;
            self.record(BoardEvent::StepChanged { step });
        }
    }

    pub(crate) fn set_single_step_mode(&mut self, single_step: bool) {
        if self.single_step_mode != single_step {
            self.single_step_mode = single_step;
            self.record(BoardEvent::StepModeChanged { single_step });
        }
    }

    pub(crate) fn set_pending_interaction(&mut self, pending: Option<PendingInteraction>) {
        self.pending_interaction = pending;
    }

    /// Put a robot on `to`.
    ///
    /// Returns false if the player is unknown, the target is off the board or
    /// occupied, or the robot is already there.
    pub(crate) fn move_player(&mut self, id: PlayerId, to: Position) -> bool {
        let Some(from) = self.player(id).map(Player::position) else {
            return false;
        };
        if from == to || !self.space(to.x, to.y).is_some_and(Space::is_free) {
            return false;
        }

        let from_index = self.space_index(from);
        let to_index = self.space_index(to);
        self.spaces[from_index].set_player(None);
        self.spaces[to_index].set_player(Some(id));
        self.players[id.index()].set_position(to);

        log::trace!("{}: {} moved {} -> {}", self.id, id, from, to);
        self.record(BoardEvent::PlayerMoved { player: id, from, to });
        true
    }

    pub(crate) fn set_heading(&mut self, id: PlayerId, heading: Heading) {
        let Some(player) = self.players.get_mut(id.index()) else {
            return;
        };
        if player.heading() != heading {
            player.set_heading(heading);
            log::trace!("{}: {} now facing {}", self.id, id, heading);
            self.record(BoardEvent::PlayerTurned { player: id, heading });
        }
    }

    fn field_mut(&mut self, field: FieldRef) -> Option<&mut CommandCardField> {
        let player = self.players.get_mut(field.player.index())?;
        match field.slot {
            FieldSlot::Register(i) => player.register_mut(i),
            FieldSlot::Hand(i) => player.hand_slot_mut(i),
        }
    }

    pub(crate) fn set_field_card(&mut self, field: FieldRef, card: Option<CommandCard>) {
        let changed = self
            .field_mut(field)
            .is_some_and(|slot| slot.set_card(card));
        if changed {
            self.record(BoardEvent::FieldChanged { field, card });
        }
    }

    pub(crate) fn set_field_visible(&mut self, field: FieldRef, visible: bool) {
        let changed = self
            .field_mut(field)
            .is_some_and(|slot| slot.set_visible(visible));
        if changed {
            self.record(BoardEvent::FieldVisibilityChanged { field, visible });
        }
    }

    /// Move the card in `source` into `target`.
    ///
    /// Only succeeds when `source` holds a card and `target` is empty.
    pub(crate) fn transfer_card(&mut self, source: FieldRef, target: FieldRef) -> bool {
        let Some(card) = self.field(source).and_then(CommandCardField::card) else {
            return false;
        };
        if !self.field(target).is_some_and(CommandCardField::is_empty) {
            return false;
        }

        if let Some(slot) = self.field_mut(target) {
            slot.set_card(Some(card));
        }
        if let Some(slot) = self.field_mut(source) {
            slot.set_card(None);
        }
        self.record(BoardEvent::CardMoved { source, target, card });
        true
    }
}
