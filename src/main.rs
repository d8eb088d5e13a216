#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use flotilla::{
    generate_game, init_logging, print_player_view, random_placement, random_strike,
    render_board, Coord, Direction, Game, Side, StrikeOutcome, FLEET,
};

#[cfg(feature = "std")]
use anyhow::{anyhow, Context};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Run a computer-vs-computer game to completion.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print a JSON summary instead of board renderings")]
        json: bool,
    },
    /// Play interactively against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo { seed, json } => demo(seed, json),
        Commands::Play { seed } => play(seed),
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Place the standard fleet randomly on `side`'s board.
#[cfg(feature = "std")]
fn place_fleet(game: Game, side: Side, rng: &mut SmallRng) -> anyhow::Result<Game> {
    let mut game = game;
    for class in FLEET {
        let (origin, direction) = random_placement(rng, game.board(side), class)
            .ok_or_else(|| anyhow!("could not fit {} on board {:?}", class, side))?;
        game = game.place_ship(side, class, origin, direction)?;
    }
    Ok(game)
}

#[cfg(feature = "std")]
fn demo(seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = generate_game();
    game = place_fleet(game, Side::One, &mut rng)?;
    game = place_fleet(game, Side::Two, &mut rng)?;
    game.player_one.turn = true;

    let loser = loop {
        let side = game.target_side();
        let target = random_strike(&mut rng, game.board(side))
            .ok_or_else(|| anyhow!("no unstruck cells left on board {:?}", side))?;
        game = game.strike(target)?;
        if let StrikeOutcome::Sunk(class) = game.outcome_at(side, target) {
            if !json {
                println!("move {}: {} sunk on board {:?}", game.move_counter, class, side);
            }
        }
        if game.defeated(side) {
            break side;
        }
    };
    let winner = loser.opponent();

    if json {
        let summary = json!({
            "moves": game.move_counter,
            "winner": game.player(winner).name,
            "loser": game.player(loser).name,
        });
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("\nBoard one:\n{}", render_board(&game.board_one, true));
        println!("Board two:\n{}", render_board(&game.board_two, true));
        println!(
            "{} wins after {} moves",
            game.player(winner).name, game.move_counter
        );
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut game = generate_game();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Place your ships ('x y h|v', or 'random' for the rest):");
    let mut fleet = FLEET.iter();
    while let Some(&class) = fleet.next() {
        println!("\nYour board so far:\n{}", render_board(&game.board_one, true));
        print!("{} (length {}): ", class, class.length());
        io::stdout().flush()?;
        let line = lines
            .next()
            .ok_or_else(|| anyhow!("stdin closed"))?
            .context("reading placement")?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("random") {
            let mut remaining = vec![class];
            remaining.extend(fleet.by_ref().copied());
            for rest in remaining {
                let (origin, direction) = random_placement(&mut rng, game.board(Side::One), rest)
                    .ok_or_else(|| anyhow!("could not fit {}", rest))?;
                game = game.place_ship(Side::One, rest, origin, direction)?;
            }
            break;
        }
        match parse_placement(line) {
            Ok((origin, direction)) => match game.place_ship(Side::One, class, origin, direction) {
                Ok(next) => game = next,
                Err(e) => {
                    // surface the engine's rejection inline and retry
                    println!("{}", e);
                    retry_placement(&mut game, class, &mut lines)?;
                }
            },
            Err(e) => {
                println!("{}", e);
                retry_placement(&mut game, class, &mut lines)?;
            }
        }
    }

    game = place_fleet(game, Side::Two, &mut rng)?;
    game.player_one.turn = true;
    println!("\nAll ships placed. Fire away ('x y'):");

    loop {
        print_player_view(&game.board_one, &game.board_two);
        print!("target: ");
        io::stdout().flush()?;
        let line = lines
            .next()
            .ok_or_else(|| anyhow!("stdin closed"))?
            .context("reading target")?;
        let target = match parse_coord(line.trim()) {
            Ok(c) => c,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        let next = match game.strike(target) {
            Ok(next) => next,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        game = next;
        report(&game, Side::Two, target, "You");
        if game.defeated(Side::Two) {
            println!("\nYou win! The enemy fleet is at the bottom of the sea.");
            break;
        }

        let reply = random_strike(&mut rng, game.board(Side::One))
            .ok_or_else(|| anyhow!("no unstruck cells left"))?;
        game = game.strike(reply)?;
        report(&game, Side::One, reply, "The computer");
        if game.defeated(Side::One) {
            println!("\nYou lose. Your fleet has been destroyed.");
            break;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn retry_placement(
    game: &mut Game,
    class: flotilla::ShipClass,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    loop {
        print!("{} (length {}): ", class, class.length());
        io::stdout().flush()?;
        let line = lines
            .next()
            .ok_or_else(|| anyhow!("stdin closed"))?
            .context("reading placement")?;
        match parse_placement(line.trim()) {
            Ok((origin, direction)) => match game.place_ship(Side::One, class, origin, direction) {
                Ok(next) => {
                    *game = next;
                    return Ok(());
                }
                Err(e) => println!("{}", e),
            },
            Err(e) => println!("{}", e),
        }
    }
}

#[cfg(feature = "std")]
fn parse_coord(input: &str) -> anyhow::Result<Coord> {
    let mut parts = input.split_whitespace();
    let x = parts
        .next()
        .ok_or_else(|| anyhow!("expected 'x y'"))?
        .parse::<u8>()
        .context("x must be a number in 0..=9")?;
    let y = parts
        .next()
        .ok_or_else(|| anyhow!("expected 'x y'"))?
        .parse::<u8>()
        .context("y must be a number in 0..=9")?;
    Ok(Coord::new(x, y))
}

#[cfg(feature = "std")]
fn parse_placement(input: &str) -> anyhow::Result<(Coord, Direction)> {
    let mut parts = input.split_whitespace();
    let x = parts
        .next()
        .ok_or_else(|| anyhow!("expected 'x y h|v'"))?
        .parse::<u8>()
        .context("x must be a number in 0..=9")?;
    let y = parts
        .next()
        .ok_or_else(|| anyhow!("expected 'x y h|v'"))?
        .parse::<u8>()
        .context("y must be a number in 0..=9")?;
    let direction = match parts.next() {
        Some("h") | Some("H") => Direction::Horizontal,
        Some("v") | Some("V") => Direction::Vertical,
        _ => return Err(anyhow!("direction must be 'h' or 'v'")),
    };
    Ok((Coord::new(x, y), direction))
}

#[cfg(feature = "std")]
fn report(game: &Game, side: Side, target: Coord, who: &str) {
    match game.outcome_at(side, target) {
        StrikeOutcome::Hit => println!("{} hit a ship at {}!", who, target),
        StrikeOutcome::Miss => println!("{} missed at {}.", who, target),
        StrikeOutcome::Sunk(class) => println!("{} sunk the {} at {}!", who, class, target),
    }
}
