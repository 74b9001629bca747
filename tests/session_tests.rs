use std::time::{Duration, Instant};

use battleship_engine::{
    place_new_ship, process_attack, Actor, AttackResult, Board, BoardError, Difficulty, Game,
    GameApi, GameError, GameState, ManualClock, MoveResult, Orientation, Phase, Position,
    RoundError, Seat, Session, ShipClass, TeamGame, TeamGameState, TeamSession, BOARD_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};

fn started_session(seed: u64, think_ms: u64) -> Session {
    let mut game = Game::new(Difficulty::Medium, seed);
    game.randomize_placement().unwrap();
    game.confirm_placement().unwrap();
    Session::new(game).with_think_time(Duration::from_millis(think_ms))
}

/// 2v2 game in play where the buddy is due (the user's turn was skipped).
/// Both enemy boards are shipless and fully attacked except `(9, 9)` on
/// enemy1, so the buddy's only shot is that cell.
fn buddy_due_session() -> TeamSession {
    let mut state = TeamGameState::new();
    for seat in [Seat::Enemy1, Seat::Enemy2] {
        let side = &mut state.sides[seat.index()];
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let pos = Position::new(r, c);
                if seat == Seat::Enemy1 && pos == Position::new(9, 9) {
                    continue;
                }
                process_attack(&mut side.board, &mut side.ships, pos).unwrap();
            }
        }
    }
    state.phase = Phase::Playing;
    state.pending = vec![Seat::Buddy];

    let game = TeamGame::restore_with(
        state,
        Difficulty::Medium,
        SmallRng::seed_from_u64(8),
        Box::new(ManualClock::new(0)),
    );
    TeamSession::new(game).with_think_time(Duration::ZERO)
}

#[tokio::test]
async fn test_attack_gets_one_reply() {
    let mut session = started_session(1, 10);
    let exchange = session.attack(Position::new(4, 4)).await.unwrap();
    let (at, _) = exchange.reply.expect("AI should answer");
    assert_eq!(exchange.overdue, None);
    let game = session.game();
    assert_eq!(game.turn(), Actor::User);
    assert_eq!(game.moves().len(), 2);
    assert_eq!(game.moves()[1].target, at);
    assert_eq!(game.moves()[0].result, MoveResult::from(exchange.user));
}

#[tokio::test]
async fn test_paused_session_rejects_attack() {
    let mut session = started_session(2, 0);
    let handle = session.pause_handle();
    handle.pause();
    let err = session.attack(Position::new(0, 0)).await.unwrap_err();
    assert_eq!(err.downcast_ref::<GameError>(), Some(&GameError::Paused));
    assert!(session.game().moves().is_empty());

    handle.resume();
    assert!(session.attack(Position::new(0, 0)).await.is_ok());
}

#[tokio::test]
async fn test_pause_holds_pending_reply() {
    let mut session = started_session(3, 50);
    let handle = session.pause_handle();
    let pauser = handle.clone();
    let task = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        pauser.pause();
        tokio::time::sleep(Duration::from_millis(100)).await;
        pauser.resume();
    });

    let start = Instant::now();
    let exchange = session.attack(Position::new(5, 5)).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(100));
    assert!(exchange.reply.is_some());
    assert_eq!(session.game().moves().len(), 2);
    assert!(!session.game().is_paused());
    assert!(!handle.is_paused());
    task.await.unwrap();
}

#[tokio::test]
async fn test_dropped_attack_reply_is_delivered_next_time() {
    let mut session = started_session(9, 100);
    let dropped =
        tokio::time::timeout(Duration::from_millis(10), session.attack(Position::new(4, 4))).await;
    assert!(dropped.is_err());
    assert_eq!(session.game().moves().len(), 1);
    assert_eq!(session.game().turn(), Actor::Ai);

    let exchange = session.attack(Position::new(0, 0)).await.unwrap();
    let (overdue_at, _) = exchange.overdue.expect("owed reply should be applied");
    assert!(exchange.reply.is_some());
    let moves = session.game().moves();
    assert_eq!(moves.len(), 4);
    assert_eq!(moves[1].actor, Actor::Ai);
    assert_eq!(moves[1].target, overdue_at);
    assert_eq!(moves[2].target, Position::new(0, 0));
    assert_eq!(session.game().turn(), Actor::User);
}

#[tokio::test]
async fn test_resume_pending_is_noop_on_user_turn() {
    let mut session = started_session(10, 0);
    assert_eq!(session.resume_pending().await.unwrap(), None);
    assert!(session.game().moves().is_empty());
}

#[tokio::test]
async fn test_winning_shot_gets_no_reply() {
    let mut state = GameState::new();
    place_new_ship(
        &mut state.user_board,
        &mut state.user_ships,
        ShipClass::Cruiser,
        Position::new(0, 0),
        Orientation::Horizontal,
    )
    .unwrap();
    let mut ai_board = Board::new();
    let mut ai_ships = Vec::new();
    place_new_ship(
        &mut ai_board,
        &mut ai_ships,
        ShipClass::Destroyer,
        Position::new(0, 0),
        Orientation::Horizontal,
    )
    .unwrap();
    process_attack(&mut ai_board, &mut ai_ships, Position::new(0, 0)).unwrap();
    state.ai_board = ai_board;
    state.ai_ships = ai_ships;
    state.phase = Phase::Playing;

    let game = Game::restore_with(
        state,
        Difficulty::Hard,
        SmallRng::seed_from_u64(4),
        Box::new(ManualClock::new(0)),
    );
    let mut session = Session::new(game).with_think_time(Duration::ZERO);
    let exchange = GameApi::attack(&mut session, Position::new(0, 1)).await.unwrap();
    assert!(matches!(
        exchange.user,
        AttackResult::Sunk { class: ShipClass::Destroyer, .. }
    ));
    assert_eq!(exchange.reply, None);
    assert_eq!(GameApi::phase(&session), Phase::GameOver);
    assert_eq!(session.game().winner(), Some(Actor::User));
}

#[tokio::test]
async fn test_surrender_through_api() {
    let mut session = started_session(5, 0);
    GameApi::surrender(&mut session).unwrap();
    assert_eq!(session.game().winner(), Some(Actor::Ai));
    assert!(session.attack(Position::new(0, 0)).await.is_err());
}

#[tokio::test]
async fn test_team_round_returns_to_user() {
    let mut game = TeamGame::new(Difficulty::Medium, 6);
    game.auto_setup().unwrap();
    game.confirm_setup().unwrap();
    let mut session = TeamSession::new(game).with_think_time(Duration::ZERO);

    let outcomes = session
        .play_round(Seat::Enemy1, Position::new(0, 0))
        .await
        .unwrap();
    assert_eq!(outcomes[0].attacker(), Seat::User);
    assert_eq!(outcomes[0].position(), Position::new(0, 0));
    assert!(outcomes.len() >= 2);
    assert!(outcomes[1..].iter().all(|o| o.attacker() != Seat::User));
    if session.game().phase() == Phase::Playing {
        assert_eq!(session.game().next_actor(), Some(Seat::User));
    }
}

#[tokio::test]
async fn test_team_api_rejects_friendly_fire() {
    let mut game = TeamGame::new(Difficulty::Medium, 7);
    game.auto_setup().unwrap();
    game.confirm_setup().unwrap();
    let mut session = TeamSession::new(game).with_think_time(Duration::ZERO);
    let err = GameApi::attack(&mut session, (Seat::Buddy, Position::new(0, 0)))
        .await
        .unwrap_err();
    assert_eq!(err.downcast_ref::<GameError>(), Some(&GameError::FriendlyFire));
}

#[tokio::test]
async fn test_refused_round_leaves_automated_seats_unplayed() {
    let mut session = buddy_due_session();

    let refusals = [
        (Seat::Buddy, Position::new(0, 0), GameError::FriendlyFire),
        (
            Seat::Enemy1,
            Position::new(BOARD_SIZE, 0),
            GameError::Board(BoardError::OutOfBounds(Position::new(BOARD_SIZE, 0))),
        ),
        (
            Seat::Enemy2,
            Position::new(0, 0),
            GameError::Board(BoardError::AlreadyAttacked(Position::new(0, 0))),
        ),
    ];
    for (target, pos, expected) in refusals {
        let err = session.play_round(target, pos).await.unwrap_err();
        assert_eq!(err.downcast_ref::<GameError>(), Some(&expected));
        assert!(session.game().moves().is_empty());
        assert_eq!(session.game().next_actor(), Some(Seat::Buddy));
    }
}

#[tokio::test]
async fn test_round_refused_late_reports_applied_outcomes() {
    let mut session = buddy_due_session();
    let target = Position::new(9, 9);

    // the buddy takes the only open cell before the user's shot lands
    let err = session.play_round(Seat::Enemy1, target).await.unwrap_err();
    let round = err.downcast_ref::<RoundError>().expect("round error");
    assert_eq!(round.source, GameError::Board(BoardError::AlreadyAttacked(target)));
    assert_eq!(round.applied.len(), 3);
    assert_eq!(round.applied[0].attacker(), Seat::Buddy);
    assert_eq!(round.applied[0].position(), target);
    assert_eq!(session.game().moves().len(), 3);
    assert_eq!(session.game().next_actor(), Some(Seat::User));
}
