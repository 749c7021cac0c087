//! Turn controller: phase transitions and register execution.
//!
//! The controller owns the [`Board`] and is the only thing that mutates it.
//! Every public operation runs to completion, then publishes the events the
//! board recorded on the controller's [`EventBus`].
//!
//! ## Execution
//!
//! One private primitive, `step`, executes the current register of the
//! current player and advances the cursor:
//!
//! 1. Only acts in [`Phase::Activation`] with a current player.
//! 2. Executes the override command, or the card in the current register.
//! 3. An interactive command pauses in [`Phase::PlayerInteraction`].
//! 4. Otherwise the next player goes; after the last player the step
//!    advances and its register is revealed.
//! 5. Once the step runs past the last register, programming starts over.
//!
//! [`TurnController::execute_step`] runs the primitive once,
//! [`TurnController::execute_programs`] runs it until the phase changes.
//! Invalid calls never error; they are ignored and logged at `debug`.

use crate::board::{Board, PendingInteraction};
use crate::cards::{Command, CommandCard, FieldRef};
use crate::core::{BoardConfig, CommandSource, GameRng, Phase, PlayerId};
use crate::error::ConfigError;
use crate::events::{BoardObserver, EventBus, ObserverId};

/// Drives a game on one board.
pub struct TurnController {
    pub(super) board: Board,
    pub(super) cards: Box<dyn CommandSource>,
    bus: EventBus,
}

impl TurnController {
    /// Take control of `board`, dealing cards from `cards`.
    pub fn new(board: Board, cards: impl CommandSource + 'static) -> Self {
        Self {
            board,
            cards: Box::new(cards),
            bus: EventBus::new(),
        }
    }

    /// Build a board from `config` and deal from a [`GameRng`] seeded with
    /// `config.seed`.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        let board = Board::new(config)?;
        Ok(Self::new(board, GameRng::new(config.seed)))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Give up control and return the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    // === Observers ===

    /// Subscribe to board events.
    pub fn attach(&mut self, observer: impl BoardObserver + 'static) -> ObserverId {
        self.bus.attach(observer)
    }

    /// Unsubscribe. Returns true if the observer was attached.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        self.bus.detach(id)
    }

    /// Publish everything the board recorded since the last publish.
    pub(super) fn publish(&mut self) {
        for event in self.board.drain_events() {
            self.bus.emit(&event);
        }
    }

    // === Execution ===

    /// Execute the current register of the current player, then stop.
    ///
    /// On a fresh board this deals the first hands instead.
    pub fn execute_step(&mut self) {
        self.board.set_single_step_mode(true);
        self.step(None);
        self.publish();
    }

    /// Execute registers until the phase changes.
    ///
    /// Stops early in [`Phase::PlayerInteraction`]; the caller resumes with
    /// [`execute_players_option`](Self::execute_players_option), which keeps
    /// running continuously.
    pub fn execute_programs(&mut self) {
        self.board.set_single_step_mode(false);
        if self.board.phase() == Phase::Initialisation {
            self.step(None);
        }
        self.run_programs();
        self.publish();
    }

    /// Resolve a paused interactive card with `option`.
    ///
    /// Ignored unless the game is waiting on `player`. The chosen command runs
    /// in place of the interactive card.
    ///
    /// Whether execution continues afterwards is decided by the mode that was
    /// active when the card paused, recorded in
    /// [`PendingInteraction::resume_continuously`]. Calling
    /// [`execute_step`](Self::execute_step) while paused switches the step
    /// mode but does not change how this pause resumes.
    pub fn execute_players_option(&mut self, player: PlayerId, option: Command) {
        let pending = match self.board.pending_interaction() {
            Some(pending)
                if self.board.phase() == Phase::PlayerInteraction
                    && self.board.contains(player)
                    && self.board.current_player() == Some(player) =>
            {
                pending
            }
            _ => {
                log::debug!("{}: ignoring option {} from {}", self.board.id(), option, player);
                return;
            }
        };

        log::debug!("{}: {} chose {}", self.board.id(), player, option);
        self.board.set_pending_interaction(None);
        self.board.set_phase(Phase::Activation);
        self.step(Some(option));
        if pending.resume_continuously {
            self.run_programs();
        }
        self.publish();
    }

    /// The options `player` has to pick from right now.
    ///
    /// Empty unless the game is paused on one of `player`'s cards.
    #[must_use]
    pub fn pending_options(&self, player: PlayerId) -> &'static [Command] {
        match self.board.pending_interaction() {
            Some(pending)
                if self.board.phase() == Phase::PlayerInteraction && pending.player == player =>
            {
                pending.interaction.options()
            }
            _ => &[],
        }
    }

    fn run_programs(&mut self) {
        while self.board.phase() == Phase::Activation && self.board.current_player().is_some() {
            self.step(None);
        }
    }

    fn step(&mut self, option: Option<Command>) {
        if self.board.phase() == Phase::Initialisation {
            self.initialize_programming();
            return;
        }
        let Some(current) = self.board.current_player() else {
            return;
        };
        if self.board.phase() != Phase::Activation {
            return;
        }

        let register_count = self.board.register_count();
        let mut step = self.board.step();
        if step < register_count {
            let command = option.or_else(|| {
                self.board
                    .player(current)
                    .and_then(|p| p.program_card(step))
                    .map(CommandCard::command)
            });
            if let Some(command) = command {
                self.execute_command(current, step, command);
            }

            if self.board.phase() == Phase::Activation {
                let next = current.index() + 1;
                if next < self.board.player_count() {
                    self.board.set_current_player(Some(PlayerId::new(next as u8)));
                } else {
                    step += 1;
                    self.reveal_register(step);
                    self.board.set_step(step);
                    self.board.set_current_player(Some(PlayerId::new(0)));
                }
            }
        }

        // Past the last register: the round is over.
        if self.board.phase() == Phase::Activation && step >= register_count {
            log::debug!("{}: registers exhausted, back to programming", self.board.id());
            self.initialize_programming();
        }
    }

    fn execute_command(&mut self, player: PlayerId, register: usize, command: Command) {
        match command {
            Command::Interactive(interaction) => {
                log::debug!(
                    "{}: waiting for {} to resolve {}",
                    self.board.id(),
                    player,
                    command
                );
                self.board.set_pending_interaction(Some(PendingInteraction {
                    player,
                    register,
                    interaction,
                    resume_continuously: !self.board.is_single_step_mode(),
                }));
                self.board.set_phase(Phase::PlayerInteraction);
            }
            Command::Forward => self.advance(player),
            Command::Right => self.rotate(player, super::Turn::Right),
            Command::Left => self.rotate(player, super::Turn::Left),
            Command::FastForward => {
                self.advance(player);
                self.advance(player);
            }
        }
    }

    // === Register visibility ===

    pub(super) fn reveal_register(&mut self, register: usize) {
        if register >= self.board.register_count() {
            return;
        }
        for index in 0..self.board.player_count() {
            let player = PlayerId::new(index as u8);
            self.board.set_field_visible(FieldRef::register(player, register), true);
        }
    }

    pub(super) fn hide_registers(&mut self) {
        for index in 0..self.board.player_count() {
            let player = PlayerId::new(index as u8);
            for register in 0..self.board.register_count() {
                self.board.set_field_visible(FieldRef::register(player, register), false);
            }
        }
    }
}

impl std::fmt::Debug for TurnController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("board", &self.board)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}
