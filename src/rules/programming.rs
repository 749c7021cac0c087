//! Programming phase: dealing hands and assembling programs.

use super::controller::TurnController;
use crate::cards::{CommandCard, FieldRef};
use crate::core::{Phase, PlayerId};

impl TurnController {
    /// Start a programming phase.
    ///
    /// Clears every register and deals a fresh hand to every player. The
    /// cursor goes back to player 0, step 0.
    pub fn initialize_programming_phase(&mut self) {
        self.initialize_programming();
        self.publish();
    }

    /// End programming and start executing register 0.
    ///
    /// Hides all registers except the first one.
    pub fn finish_programming_phase(&mut self) {
        self.hide_registers();
        self.reveal_register(0);
        self.board.set_pending_interaction(None);
        self.board.set_phase(Phase::Activation);
        self.board.set_current_player(Some(PlayerId::new(0)));
        self.board.set_step(0);
        self.publish();
    }

    /// Move the card in `source` to `target`.
    ///
    /// Returns true if the card moved: `source` held a card and `target` was
    /// empty. Otherwise nothing changes.
    pub fn move_cards(&mut self, source: FieldRef, target: FieldRef) -> bool {
        let moved = self.board.transfer_card(source, target);
        if moved {
            self.publish();
        } else {
            log::debug!("{}: cannot move {} to {}", self.board.id(), source, target);
        }
        moved
    }

    pub(super) fn initialize_programming(&mut self) {
        self.board.set_pending_interaction(None);
        self.board.set_phase(Phase::Programming);
        self.board.set_current_player(Some(PlayerId::new(0)));
        self.board.set_step(0);

        let register_count = self.board.register_count();
        let hand_size = self.board.hand_size();
        for index in 0..self.board.player_count() {
            let player = PlayerId::new(index as u8);
            for register in 0..register_count {
                self.board.set_field_card(FieldRef::register(player, register), None);
            }
            for slot in 0..hand_size {
                let card = CommandCard::new(self.cards.next_command());
                self.board.set_field_card(FieldRef::hand(player, slot), Some(card));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::cards::{Command, CommandCardField};
    use crate::core::{BoardConfig, ScriptedCommands};
    use crate::events::BoardEvent;

    fn controller(script: Vec<Command>) -> TurnController {
        let config = BoardConfig::new(2).with_register_count(3).with_hand_size(4);
        TurnController::new(Board::new(&config).unwrap(), ScriptedCommands::new(script))
    }

    #[test]
    fn test_initialize_deals_hands() {
        let mut c = controller(vec![Command::Left, Command::FastForward]);
        c.initialize_programming_phase();

        let board = c.board();
        assert_eq!(board.phase(), Phase::Programming);
        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
        assert_eq!(board.step(), 0);

        for player in board.players() {
            assert!(player.registers().iter().all(CommandCardField::is_empty));
            let dealt: Vec<_> = player
                .hand()
                .iter()
                .map(|f| f.card().map(CommandCard::command))
                .collect();
            assert_eq!(
                dealt,
                vec![
                    Some(Command::Left),
                    Some(Command::FastForward),
                    Some(Command::Left),
                    Some(Command::FastForward),
                ]
            );
        }
    }

    #[test]
    fn test_initialize_clears_registers() {
        let mut c = controller(vec![Command::Forward]);
        c.initialize_programming_phase();

        let p0 = PlayerId::new(0);
        assert!(c.move_cards(FieldRef::hand(p0, 0), FieldRef::register(p0, 2)));
        c.initialize_programming_phase();

        assert!(c.board().field(FieldRef::register(p0, 2)).unwrap().is_empty());
        assert!(!c.board().field(FieldRef::hand(p0, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_finish_reveals_first_register() {
        let mut c = controller(vec![Command::Forward]);
        c.initialize_programming_phase();
        c.finish_programming_phase();

        let board = c.board();
        assert_eq!(board.phase(), Phase::Activation);
        assert_eq!(board.current_player(), Some(PlayerId::new(0)));
        assert_eq!(board.step(), 0);
        for player in board.players() {
            let visible: Vec<_> = player.registers().iter().map(CommandCardField::is_visible).collect();
            assert_eq!(visible, vec![true, false, false]);
        }
    }

    #[test]
    fn test_move_cards() {
        let mut c = controller(vec![Command::Right]);
        c.initialize_programming_phase();
        let p1 = PlayerId::new(1);
        let hand = FieldRef::hand(p1, 3);
        let register = FieldRef::register(p1, 0);

        assert!(c.move_cards(hand, register));
        assert_eq!(
            c.board().field(register).unwrap().card(),
            Some(CommandCard::new(Command::Right))
        );
        assert!(c.board().field(hand).unwrap().is_empty());

        // Source now empty, target now full.
        assert!(!c.move_cards(hand, register));
        assert!(!c.move_cards(FieldRef::hand(p1, 0), register));
        assert!(c.move_cards(register, hand));
    }

    #[test]
    fn test_move_cards_records_one_event() {
        let mut c = controller(vec![Command::Right]);
        c.initialize_programming_phase();
        let before = c.board().history().len();

        let p0 = PlayerId::new(0);
        c.move_cards(FieldRef::hand(p0, 0), FieldRef::register(p0, 0));

        let history = c.board().history();
        assert_eq!(history.len(), before + 1);
        assert!(matches!(history.back(), Some(BoardEvent::CardMoved { .. })));
    }
}
