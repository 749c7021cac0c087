//! Movement, programming and notification integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use robo_rally_engine::{
    Board, BoardConfig, BoardEvent, Command, CommandCard, FieldRef, Heading, Phase, PlayerId,
    PlayerSetup, Position, ScriptedCommands, TurnController, CARD_COUNT, REGISTER_COUNT,
};

fn controller(config: &BoardConfig) -> TurnController {
    TurnController::new(Board::new(config).unwrap(), ScriptedCommands::repeat(Command::Forward))
}

fn recorder(game: &mut TurnController) -> Rc<RefCell<Vec<BoardEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    game.attach(move |event: &BoardEvent| sink.borrow_mut().push(*event));
    seen
}

// === Movement ===

#[test]
fn test_east_edge_wraps_on_width_eight() {
    let config = BoardConfig::new(1)
        .with_size(8, 8)
        .with_player(PlayerSetup::new("A", "red", Position::new(7, 3)).facing(Heading::East));
    let mut game = controller(&config);

    game.move_forward(PlayerId::new(0));

    let robot = game.board().player(PlayerId::new(0)).unwrap();
    assert_eq!(robot.position(), Position::new(0, 3));
    assert_eq!(game.board().player_at(Position::new(0, 3)), Some(PlayerId::new(0)));
    assert!(game.board().space(7, 3).unwrap().is_free());
}

#[test]
fn test_fast_forward_blocked_by_robot_in_between() {
    let config = BoardConfig::new(2)
        .with_size(8, 8)
        .with_player(PlayerSetup::new("A", "red", Position::new(3, 3)).facing(Heading::North))
        .with_player(PlayerSetup::new("B", "blue", Position::new(3, 1)));
    let mut game = controller(&config);

    game.fast_forward(PlayerId::new(0));

    assert_eq!(
        game.board().player(PlayerId::new(0)).unwrap().position(),
        Position::new(3, 2)
    );
}

#[test]
fn test_fast_forward_wraps_twice() {
    let config = BoardConfig::new(1)
        .with_size(3, 3)
        .with_player(PlayerSetup::new("A", "red", Position::new(2, 2)).facing(Heading::South));
    let mut game = controller(&config);

    game.fast_forward(PlayerId::new(0));

    assert_eq!(
        game.board().player(PlayerId::new(0)).unwrap().position(),
        Position::new(2, 1)
    );
}

#[test]
fn test_blocked_move_emits_nothing() {
    let config = BoardConfig::new(2)
        .with_player(PlayerSetup::new("A", "red", Position::new(0, 0)).facing(Heading::East))
        .with_player(PlayerSetup::new("B", "blue", Position::new(1, 0)));
    let mut game = controller(&config);
    let seen = recorder(&mut game);

    game.move_forward(PlayerId::new(0));

    assert!(seen.borrow().is_empty());
}

#[test]
fn test_foreign_player_id_ignored() {
    let mut game = controller(&BoardConfig::new(2));

    game.move_forward(PlayerId::new(2));
    game.turn_left(PlayerId::new(200));

    assert!(game.board().history().is_empty());
}

// === Programming ===

#[test]
fn test_initialize_programming_scenario() {
    let mut game = controller(&BoardConfig::new(2));
    game.initialize_programming_phase();

    let board = game.board();
    assert_eq!(board.phase(), Phase::Programming);
    assert_eq!(board.current_player(), Some(PlayerId::new(0)));
    assert_eq!(board.step(), 0);
    for player in board.players() {
        assert_eq!(player.registers().len(), REGISTER_COUNT);
        assert_eq!(player.hand().len(), CARD_COUNT);
        assert!(player.registers().iter().all(|f| f.is_empty()));
        assert!(player.hand().iter().all(|f| f.card().is_some()));
    }
    assert!(board.controls().finish_programming);
}

#[test]
fn test_seeded_deals_are_reproducible() {
    let deal = |seed: u64| {
        let mut game = TurnController::from_config(&BoardConfig::new(2).with_seed(seed)).unwrap();
        game.initialize_programming_phase();
        game.board()
            .players()
            .iter()
            .flat_map(|p| p.hand().iter().map(|f| f.card()))
            .collect::<Vec<_>>()
    };

    assert_eq!(deal(5), deal(5));
    assert_ne!(deal(5), deal(6));
}

#[test]
fn test_finish_programming_scenario() {
    let mut game = controller(&BoardConfig::new(3));
    game.initialize_programming_phase();
    game.finish_programming_phase();

    let board = game.board();
    assert_eq!(board.phase(), Phase::Activation);
    assert_eq!(board.step(), 0);
    assert_eq!(board.current_player(), Some(PlayerId::new(0)));
    for player in board.players() {
        assert!(player.registers()[0].is_visible());
        assert!(player.registers()[1..].iter().all(|f| !f.is_visible()));
    }
}

#[test]
fn test_move_cards_between_players() {
    let mut game = controller(&BoardConfig::new(2));
    game.initialize_programming_phase();

    let source = FieldRef::hand(PlayerId::new(0), 0);
    let target = FieldRef::register(PlayerId::new(1), 4);
    assert!(game.move_cards(source, target));
    assert_eq!(
        game.board().field(target).unwrap().card(),
        Some(CommandCard::new(Command::Forward))
    );
}

#[test]
fn test_move_cards_same_field() {
    let mut game = controller(&BoardConfig::new(1));
    game.initialize_programming_phase();

    let field = FieldRef::hand(PlayerId::new(0), 2);
    assert!(!game.move_cards(field, field));
    assert!(game.board().field(field).unwrap().card().is_some());
}

// === Notification ===

#[test]
fn test_finish_programming_events() {
    let mut game = controller(&BoardConfig::new(1).with_register_count(2));
    game.initialize_programming_phase();
    let seen = recorder(&mut game);

    game.finish_programming_phase();

    let p0 = PlayerId::new(0);
    assert_eq!(
        *seen.borrow(),
        vec![
            BoardEvent::FieldVisibilityChanged {
                field: FieldRef::register(p0, 0),
                visible: false,
            },
            BoardEvent::FieldVisibilityChanged {
                field: FieldRef::register(p0, 1),
                visible: false,
            },
            BoardEvent::FieldVisibilityChanged {
                field: FieldRef::register(p0, 0),
                visible: true,
            },
            BoardEvent::PhaseChanged {
                from: Phase::Programming,
                to: Phase::Activation,
            },
        ]
    );
}

#[test]
fn test_turn_emits_one_event() {
    let mut game = controller(&BoardConfig::new(1));
    let seen = recorder(&mut game);

    game.turn_right(PlayerId::new(0));

    assert_eq!(
        *seen.borrow(),
        vec![BoardEvent::PlayerTurned {
            player: PlayerId::new(0),
            heading: Heading::West,
        }]
    );
}

#[test]
fn test_detached_observer_stops_receiving() {
    let mut game = controller(&BoardConfig::new(1));
    let count = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&count);
    let id = game.attach(move |_: &BoardEvent| *counter.borrow_mut() += 1);

    game.turn_left(PlayerId::new(0));
    assert!(game.detach(id));
    game.turn_left(PlayerId::new(0));

    assert_eq!(*count.borrow(), 1);
    assert_eq!(game.board().history().len(), 2);
}
