use battleship_engine::{
    snapshot, Actor, Difficulty, Game, GameState, Phase, Position, Seat, TeamGame, TeamGameState,
};
use proptest::prelude::*;

fn played_game(seed: u64, moves: usize) -> Game {
    let mut game = Game::new(Difficulty::Hard, seed);
    game.randomize_placement().unwrap();
    game.confirm_placement().unwrap();
    for i in 0..moves {
        if game.phase() != Phase::Playing {
            break;
        }
        let pos = Position::new(i / 10, i % 10);
        game.user_attack(pos).unwrap();
        if game.phase() == Phase::Playing {
            game.ai_attack().unwrap();
        }
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn game_state_roundtrip(seed in any::<u64>(), moves in 0..30usize) {
        let game = played_game(seed, moves);
        let bytes = snapshot::encode(game.state()).unwrap();
        let decoded: GameState = snapshot::decode(&bytes).unwrap();
        prop_assert_eq!(&decoded, game.state());
    }
}

#[test]
fn test_restored_game_continues() {
    let game = played_game(21, 12);
    let bytes = snapshot::encode(game.state()).unwrap();
    let state: GameState = snapshot::decode(&bytes).unwrap();
    let mut restored = Game::restore(state, Difficulty::Hard, 21);
    assert_eq!(restored.turn(), Actor::User);
    assert_eq!(restored.moves().len(), 24);
    restored.user_attack(Position::new(9, 9)).unwrap();
    restored.ai_attack().unwrap();
    assert_eq!(restored.moves().len(), 26);
    assert_eq!(restored.moves()[25].sequence, 26);
}

#[test]
fn test_json_export_of_finished_game() {
    let mut game = played_game(22, 3);
    game.surrender().unwrap();
    let json = snapshot::to_json(game.state()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["phase"], "GameOver");
    assert_eq!(value["winner"], "Ai");
    assert_eq!(value["moves"]["records"].as_array().unwrap().len(), 6);

    let back: GameState = snapshot::from_json(&json).unwrap();
    assert_eq!(&back, game.state());

    let stats = snapshot::to_json(&game.stats().unwrap()).unwrap();
    assert!(stats.contains("accuracy"));
}

#[test]
fn test_team_state_roundtrip() {
    let mut game = TeamGame::new(Difficulty::Medium, 23);
    game.auto_setup().unwrap();
    game.confirm_setup().unwrap();
    for _ in 0..20 {
        game.play_auto().unwrap();
    }
    let bytes = snapshot::encode(game.state()).unwrap();
    let decoded: TeamGameState = snapshot::decode(&bytes).unwrap();
    assert_eq!(&decoded, game.state());

    let mut restored = TeamGame::restore(decoded, Difficulty::Medium, 23);
    let next = restored.next_actor();
    assert!(matches!(next, Some(Seat::User | Seat::Buddy | Seat::Enemy1 | Seat::Enemy2)));
    assert!(restored.play_auto().is_ok());
}

#[test]
fn test_decode_garbage_fails() {
    assert!(snapshot::decode::<GameState>(&[1, 2, 3]).is_err());
}
