use battleship_engine::{choose_move, Actor, Difficulty, Game, Phase};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Autopilot vs AI: `<seed1>` seeds the game, `<seed2>` the autopilot.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut game = Game::new(Difficulty::Hard, seed1);
    let mut autopilot = SmallRng::seed_from_u64(seed2);
    game.randomize_placement()?;
    game.confirm_placement()?;

    while game.phase() == Phase::Playing {
        match game.turn() {
            Actor::User => {
                let view = game.view_of(Actor::Ai);
                let remaining = game.remaining_lengths(Actor::Ai);
                let pos = choose_move(Difficulty::Hard, &view, &remaining, &mut autopilot)?;
                game.user_attack(pos)?;
            }
            Actor::Ai => {
                game.ai_attack()?;
            }
        }
    }

    let stats = game.stats()?;
    let result = json!({
        "user": {"shots": stats.user.shots, "accuracy": stats.user.accuracy},
        "ai": {"shots": stats.ai.shots, "accuracy": stats.ai.accuracy},
        "moves": stats.total_moves,
        "winner": game.winner().map(|w| w.to_string()),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
