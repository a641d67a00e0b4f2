//! Play command - Let the engine play a full game

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use super::{describe_position, parse_board};
use crate::{
    adapters::{EngineAgent, RandomAgent},
    cli::{
        config::SearchArgs,
        output::{print_kv, print_section},
    },
    ports::Agent,
    tictactoe::{BoardState, Game, GameOutcome, Mark},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Opponent {
    /// Another copy of the engine
    Optimal,
    /// Uniformly random legal moves
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Play the engine against an opponent")]
pub struct PlayArgs {
    /// Starting board; the engine plays the side to move
    #[arg(long, short = 's')]
    pub state: Option<String>,

    /// Opponent type
    #[arg(long, short = 'o', value_enum, default_value = "optimal")]
    pub opponent: Opponent,

    /// Random seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let board = parse_board(args.state.as_deref())?;
    let engine_mark = board.to_move;

    let mut engine = EngineAgent::<BoardState>::new("Engine", args.search.engine()?);
    let mut opponent: Box<dyn Agent<BoardState>> = match args.opponent {
        Opponent::Optimal => Box::new(EngineAgent::<BoardState>::new(
            "Optimal",
            args.search.engine()?,
        )),
        Opponent::Random => Box::new(match args.seed {
            Some(seed) => RandomAgent::with_seed("Random", seed),
            None => RandomAgent::new("Random"),
        }),
    };

    print_section("Game");
    print_kv("Engine plays", &engine_mark.to_char().to_string());
    print_kv("Opponent", opponent.name());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut game = Game::from_state(board);
    let result = match engine_mark {
        Mark::X => game.play_out(&mut engine, opponent.as_mut()),
        Mark::O => game.play_out(opponent.as_mut(), &mut engine),
    };
    let outcome = result.context("game aborted")?;

    let states = game.state_sequence()?;
    println!("\n{}", states[0]);
    for (m, state) in game.moves.iter().zip(states.iter().skip(1)) {
        println!("\n{} plays {}", m.mark.to_char(), describe_position(m.position));
        println!("{state}");
    }

    println!();
    match outcome {
        GameOutcome::Win(mark) if mark == engine_mark => {
            println!("Result: engine ({}) wins", mark.to_char());
        }
        GameOutcome::Win(mark) => println!("Result: opponent ({}) wins", mark.to_char()),
        GameOutcome::Draw => println!("Result: draw"),
    }

    Ok(())
}
