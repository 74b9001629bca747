use battleship_engine::{
    choose_move, Actor, BoardError, CellState, Difficulty, Game, GameError, ManualClock,
    MoveResult, Orientation, Phase, Position, ShipClass, SHIPS, TOTAL_SHIP_CELLS,
};
use rand::{rngs::SmallRng, SeedableRng};

fn game_with_clock(seed: u64) -> (Game, ManualClock) {
    let clock = ManualClock::new(1_000_000);
    let game = Game::with_parts(
        Difficulty::Medium,
        SmallRng::seed_from_u64(seed),
        Box::new(clock.clone()),
    );
    (game, clock)
}

fn place_manually(game: &mut Game) {
    for (i, class) in SHIPS.iter().enumerate() {
        game.place_ship(*class, Position::new(i * 2, 0), Orientation::Horizontal)
            .unwrap();
    }
}

fn started(seed: u64) -> (Game, ManualClock) {
    let (mut game, clock) = game_with_clock(seed);
    place_manually(&mut game);
    game.confirm_placement().unwrap();
    (game, clock)
}

fn play_out(game: &mut Game, clock: &ManualClock, seed: u64) {
    let mut autopilot = SmallRng::seed_from_u64(seed);
    for _ in 0..400 {
        if game.phase() != Phase::Playing {
            return;
        }
        clock.advance(1500);
        match game.turn() {
            Actor::User => {
                let view = game.view_of(Actor::Ai);
                let remaining = game.remaining_lengths(Actor::Ai);
                let pos = choose_move(Difficulty::Hard, &view, &remaining, &mut autopilot).unwrap();
                game.user_attack(pos).unwrap();
            }
            Actor::Ai => {
                game.ai_attack().unwrap();
            }
        }
    }
}

#[test]
fn test_new_game_in_placement() {
    let (mut game, _) = game_with_clock(1);
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.turn(), Actor::User);
    assert_eq!(game.difficulty(), Difficulty::Medium);
    assert!(matches!(
        game.user_attack(Position::new(0, 0)),
        Err(GameError::WrongPhase { expected: Phase::Playing, actual: Phase::Placement })
    ));
    assert_eq!(game.stats(), Err(GameError::NotFinished));
}

#[test]
fn test_confirm_places_ai_fleet() {
    let (game, _) = started(2);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.turn(), Actor::User);
    assert_eq!(game.state().ai_board.count_state(CellState::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(game.state().ai_ships.len(), 5);
    assert!(game.state().started_at_ms.is_some());
}

#[test]
fn test_placement_rejections_leave_state_untouched() {
    let (mut game, _) = game_with_clock(3);
    game.place_ship(ShipClass::Carrier, Position::new(0, 0), Orientation::Horizontal)
        .unwrap();
    let before = game.state().clone();

    assert_eq!(
        game.place_ship(ShipClass::Carrier, Position::new(5, 0), Orientation::Horizontal),
        Err(GameError::AlreadyPlaced(ShipClass::Carrier))
    );
    assert_eq!(
        game.place_ship(ShipClass::Commander, Position::new(5, 0), Orientation::Horizontal),
        Err(GameError::WrongShipClass(ShipClass::Commander))
    );
    assert_eq!(
        game.place_ship(ShipClass::Cruiser, Position::new(0, 3), Orientation::Vertical),
        Err(GameError::Board(BoardError::ShipOverlaps))
    );
    assert_eq!(
        game.place_ship(ShipClass::Battleship, Position::new(9, 8), Orientation::Horizontal),
        Err(GameError::Board(BoardError::ShipOutOfBounds))
    );
    assert_eq!(game.state(), &before);

    assert_eq!(
        game.confirm_placement(),
        Err(GameError::SetupIncomplete { what: "regular ships", placed: 1, required: 5 })
    );
    assert_eq!(game.phase(), Phase::Placement);
}

#[test]
fn test_randomize_replaces_manual_fleet() {
    let (mut game, _) = game_with_clock(4);
    game.place_ship(ShipClass::Destroyer, Position::new(9, 0), Orientation::Horizontal)
        .unwrap();
    game.randomize_placement().unwrap();
    assert_eq!(game.state().user_ships.len(), 5);
    assert_eq!(game.state().user_board.count_state(CellState::Ship), TOTAL_SHIP_CELLS);
    game.confirm_placement().unwrap();
    assert_eq!(
        game.randomize_placement(),
        Err(GameError::WrongPhase { expected: Phase::Placement, actual: Phase::Playing }),
    );
}

#[test]
fn test_turns_alternate() {
    let (mut game, _) = started(5);
    assert_eq!(game.ai_attack(), Err(GameError::NotYourTurn));

    game.user_attack(Position::new(0, 0)).unwrap();
    assert_eq!(game.turn(), Actor::Ai);
    assert_eq!(game.user_attack(Position::new(0, 1)), Err(GameError::NotYourTurn));

    let (pos, _) = game.ai_attack().unwrap();
    assert!(!game.state().user_board.is_untargeted(pos));
    assert_eq!(game.turn(), Actor::User);
    assert_eq!(game.moves().len(), 2);
    assert_eq!(game.moves()[0].actor, Actor::User);
    assert_eq!(game.moves()[0].defender, Actor::Ai);
    assert_eq!(game.moves()[1].sequence, 2);
}

#[test]
fn test_attacking_resolved_cell_is_rejected() {
    let (mut game, _) = started(6);
    game.user_attack(Position::new(3, 3)).unwrap();
    game.ai_attack().unwrap();
    let before = game.state().clone();
    assert_eq!(
        game.user_attack(Position::new(3, 3)),
        Err(GameError::Board(BoardError::AlreadyAttacked(Position::new(3, 3))))
    );
    assert_eq!(
        game.user_attack(Position::new(3, 10)),
        Err(GameError::Board(BoardError::OutOfBounds(Position::new(3, 10))))
    );
    assert_eq!(game.state(), &before);
    assert_eq!(game.turn(), Actor::User);
}

#[test]
fn test_pause_blocks_attacks() {
    let (mut game, _) = started(7);
    game.pause();
    assert!(game.is_paused());
    assert_eq!(game.user_attack(Position::new(0, 0)), Err(GameError::Paused));
    assert!(game.moves().is_empty());
    game.resume();
    assert!(game.user_attack(Position::new(0, 0)).is_ok());
}

#[test]
fn test_surrender() {
    let (mut game, _) = started(8);
    game.user_attack(Position::new(0, 0)).unwrap();
    game.surrender().unwrap();
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.winner(), Some(Actor::Ai));
    assert!(game.stats().is_ok());
    assert!(game.surrender().is_err());
    assert!(game.ai_attack().is_err());
}

#[test]
fn test_surrender_rejected_before_play() {
    let (mut game, _) = game_with_clock(18);
    assert_eq!(
        game.surrender(),
        Err(GameError::WrongPhase {
            expected: Phase::Playing,
            actual: Phase::Placement,
        })
    );
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_full_game_ends_with_winner() {
    let (mut game, clock) = started(9);
    play_out(&mut game, &clock, 99);
    assert_eq!(game.phase(), Phase::GameOver);
    let winner = game.winner().unwrap();
    let loser_ships = match winner {
        Actor::User => &game.state().ai_ships,
        Actor::Ai => &game.state().user_ships,
    };
    assert!(loser_ships.iter().all(|s| s.is_sunk()));

    let last = game.moves().last().unwrap();
    assert_eq!(last.actor, winner);
    assert_eq!(last.result, MoveResult::Sunk);
    // turn freezes on the winner
    assert_eq!(game.turn(), winner);
    assert!(game.user_attack(Position::new(0, 0)).is_err());
}

#[test]
fn test_stats_derived_from_moves() {
    let (mut game, clock) = started(10);
    play_out(&mut game, &clock, 100);
    let stats = game.stats().unwrap();
    let moves = game.moves();
    assert_eq!(stats.total_moves, moves.len());
    assert_eq!(stats.user.shots + stats.ai.shots, moves.len());
    assert_eq!(stats.user.hits + stats.user.misses, stats.user.shots);
    let expected = stats.user.hits as f64 / stats.user.shots as f64 * 100.0;
    assert!((stats.user.accuracy - expected).abs() < 1e-9);
    // one 1.5 s tick per move, the first one before the game's first shot
    assert_eq!(stats.duration_secs, moves.len() as u64 * 1500 / 1000);
    match game.winner() {
        Some(Actor::User) => assert_eq!(stats.user_ships_sunk, 5),
        Some(Actor::Ai) => assert_eq!(stats.ai_ships_sunk, 5),
        None => unreachable!(),
    }
}

#[test]
fn test_same_seed_same_game() {
    let (mut a, ca) = started(11);
    let (mut b, cb) = started(11);
    play_out(&mut a, &ca, 5);
    play_out(&mut b, &cb, 5);
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_reset_and_difficulty() {
    let (mut game, _) = started(12);
    game.set_difficulty(Difficulty::Hard);
    game.pause();
    game.reset();
    assert_eq!(game.phase(), Phase::Placement);
    assert!(!game.is_paused());
    assert!(game.moves().is_empty());
    assert_eq!(game.difficulty(), Difficulty::Hard);
}
