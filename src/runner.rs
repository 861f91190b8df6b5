//! The command-line driver around [`Board`].

use anyhow::Context;
use clap::Parser;
use log::info;
use log::warn;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::EngineLimits;
use crate::Board;
use crate::BoardOptions;
use crate::CellState;
use crate::PlacementOutcome;

#[derive(Debug, Parser)]
pub struct Cli {
    /// The number of rows and columns of the board.
    #[arg(short = 'n', long, default_value_t = 8)]
    pub size: usize,

    /// The largest number of nodes the compiled constraint may have.
    ///
    /// Without this option the constraint may grow without bound.
    #[arg(long)]
    pub max_nodes: Option<usize>,

    /// Reject a first queen which is not part of any solution instead of committing it.
    #[arg(long)]
    pub validate_first_move: bool,

    #[command(subcommand)]
    pub command: Action,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Action {
    /// Place queens in the given order, printing the board after every placement.
    Place {
        /// Placements given as `column,row`, both zero-based.
        #[arg(value_parser = parse_placement, required = true)]
        placements: Vec<Placement>,
    },

    /// Keep placing a queen on a random open cell until no open cell remains.
    Random {
        /// The seed of the random generator. A random seed is used if none is provided.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
}

fn parse_placement(value: &str) -> Result<Placement, String> {
    let (column, row) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `column,row`, got `{value}`"))?;

    let column = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column in `{value}`"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row in `{value}`"))?;

    Ok(Placement { column, row })
}

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    crate::print_queens_assert_warning_message!();

    let options = BoardOptions {
        limits: EngineLimits {
            max_nodes: args.max_nodes,
        },
        validate_first_move: args.validate_first_move,
    };

    let mut board: Board = Board::with_options(args.size, options)
        .with_context(|| format!("Failed to initialise a board of size {}", args.size))?;

    match args.command {
        Action::Place { placements } => place(&mut board, &placements)?,
        Action::Random { seed } => play_randomly(&mut board, seed)?,
    }

    print_summary(&board);

    Ok(())
}

pub fn place(board: &mut Board, placements: &[Placement]) -> anyhow::Result<()> {
    for &Placement { column, row } in placements {
        let outcome = board
            .insert_queen(column, row)
            .with_context(|| format!("Failed to place a queen at column {column}, row {row}"))?;

        report(column, row, outcome);
        println!("{}", board.board());
    }

    Ok(())
}

pub fn play_randomly(board: &mut Board, seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!("playing random open cells with seed {seed}");

    let mut rng = SmallRng::seed_from_u64(seed);

    loop {
        let open = board.board().cells_in(CellState::Open).collect::<Vec<_>>();
        let Some(cell) = open.choose(&mut rng).copied() else {
            break;
        };

        let outcome = board.insert_queen(cell.column, cell.row)?;

        report(cell.column, cell.row, outcome);
        println!("{}", board.board());
    }

    Ok(())
}

fn report(column: usize, row: usize, outcome: PlacementOutcome) {
    match outcome {
        PlacementOutcome::Ignored(state) => {
            warn!("column {column}, row {row} is already {state:?}; the placement was ignored");
        }
        PlacementOutcome::Committed(statistics) => {
            info!("queen at column {column}, row {row}: {statistics}");
        }
    }
}

fn print_summary(board: &Board) {
    if board.is_solved() {
        println!("SOLVED");
    } else if !board.is_satisfiable() {
        println!("UNSATISFIABLE");
    } else {
        let open = board.board().count(CellState::Open);
        println!("{} queens placed, {open} cells open", board.num_queens());
    }
}
