#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_engine::{
    choose_move, heat_map, init_logging, ui, Actor, Difficulty, Game, Orientation, Phase, Position,
    Session, TeamGame, TeamSession, NUM_SHIPS, SHIPS,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

#[cfg(feature = "std")]
impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the AI from the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        #[arg(long, default_value_t = 1000, help = "AI think time in milliseconds")]
        think_ms: u64,
    },
    /// Let an autopilot play the user's side against the AI.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        #[arg(long, default_value_t = 0, help = "AI think time in milliseconds")]
        think_ms: u64,
    },
    /// Simulate a 2v2 game with every seat automated.
    Team {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        #[arg(long, default_value_t = 0, help = "Think time per seat in milliseconds")]
        think_ms: u64,
    },
}

#[cfg(feature = "std")]
fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => {
            log::info!("using fixed seed {} (game will be reproducible)", s);
            s
        }
        None => rand::random(),
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            difficulty,
            think_ms,
        } => {
            let seed = resolve_seed(seed);
            let game = Game::new(difficulty.into(), seed);
            let session = Session::new(game).with_think_time(Duration::from_millis(think_ms));
            run_interactive(session).await?;
        }
        Commands::Local {
            seed,
            difficulty,
            think_ms,
        } => {
            let seed = resolve_seed(seed);
            let mut game = Game::new(difficulty.into(), seed);
            game.randomize_placement()?;
            game.confirm_placement()?;
            let mut session = Session::new(game).with_think_time(Duration::from_millis(think_ms));
            let mut autopilot = SmallRng::seed_from_u64(seed.wrapping_add(1));
            while session.game().phase() == Phase::Playing {
                let view = session.game().view_of(Actor::Ai);
                let remaining = session.game().remaining_lengths(Actor::Ai);
                let pos = choose_move(Difficulty::Hard, &view, &remaining, &mut autopilot)?;
                session.attack(pos).await?;
            }
            let game = session.into_game();
            let summary = json!({
                "seed": seed,
                "winner": game.winner().map(|w| w.to_string()),
                "stats": game.stats()?,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Team {
            seed,
            difficulty,
            think_ms,
        } => {
            let seed = resolve_seed(seed);
            let mut game = TeamGame::new(difficulty.into(), seed);
            game.auto_setup()?;
            game.confirm_setup()?;
            let mut session =
                TeamSession::new(game).with_think_time(Duration::from_millis(think_ms));
            while session.game().phase() == Phase::Playing {
                session.step().await?;
            }
            let game = session.into_game();
            let summary = json!({
                "seed": seed,
                "winner": game.winner().map(|w| w.to_string()),
                "stats": game.stats()?,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt(line: &mut String, text: &str) -> anyhow::Result<bool> {
    print!("{}", text);
    io::stdout().flush()?;
    line.clear();
    Ok(io::stdin().lock().read_line(line)? > 0)
}

#[cfg(feature = "std")]
fn print_boards(game: &Game) {
    println!("\nOpponent board:");
    print!("{}", ui::render_board(&game.view_of(Actor::Ai), false));
    println!("\nYour board:");
    print!("{}", ui::render_board(&game.state().user_board, true));
}

#[cfg(feature = "std")]
fn parse_orientation(s: &str) -> Orientation {
    if s.eq_ignore_ascii_case("v") {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

#[cfg(feature = "std")]
async fn run_interactive(mut session: Session) -> anyhow::Result<()> {
    let mut line = String::new();
    println!("Place your ships (e.g. A5 H). Press enter for random placement.");
    for class in SHIPS {
        loop {
            print!("{}", ui::render_board(&session.game().state().user_board, true));
            if !prompt(
                &mut line,
                &format!("Place {} (length {}): ", class, class.length()),
            )? {
                return Ok(());
            }
            let input = line.trim();
            if input.is_empty() {
                // randomizes the whole fleet, manual placements included
                session.game_mut().randomize_placement()?;
                break;
            }
            let mut parts = input.split_whitespace();
            let coord = parts.next().map(str::parse::<Position>);
            let orientation = parts
                .next()
                .map(parse_orientation)
                .unwrap_or(Orientation::Horizontal);
            match coord {
                Some(Ok(pos)) => match session.game_mut().place_ship(class, pos, orientation) {
                    Ok(_) => break,
                    Err(e) => println!("Error: {}", e),
                },
                _ => println!("Invalid input"),
            }
        }
        if session.game().state().user_ships.len() == NUM_SHIPS {
            break;
        }
    }
    session.game_mut().confirm_placement()?;

    while session.game().phase() == Phase::Playing {
        print_boards(session.game());
        let game = session.game();
        let view = game.view_of(Actor::Ai);
        let remaining = game.remaining_lengths(Actor::Ai);
        print!("{}", ui::render_heat_map(&heat_map(&view, &remaining)));
        if !prompt(&mut line, "Enter target (or 'surrender'): ")? {
            return Ok(());
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("surrender") {
            session.surrender()?;
            break;
        }
        let pos = match input.parse::<Position>() {
            Ok(pos) => pos,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };
        match session.attack(pos).await {
            Ok(exchange) => {
                if let Some((at, result)) = exchange.overdue {
                    println!("AI fired at {}: {:?}", at, result);
                }
                println!("You fired at {}: {:?}", pos, exchange.user);
                if let Some((at, result)) = exchange.reply {
                    println!("AI fired at {}: {:?}", at, result);
                }
            }
            Err(e) => println!("Error: {}", e),
        }
    }

    let game = session.into_game();
    print_boards(&game);
    match game.winner() {
        Some(Actor::User) => println!("\nVICTORY! You have sunk all enemy ships!"),
        Some(Actor::Ai) => println!("\nDEFEAT. All your ships have been destroyed."),
        None => {}
    }
    let summary = json!({ "winner": game.winner().map(|w| w.to_string()), "stats": game.stats()? });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
