#![cfg(test)]
//! Random legal play, checked after every move against a brute-force enumeration of the
//! solutions.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::oracle::all_solutions;
use super::oracle::assert_matches_oracle;
use crate::encoding::attacks;
use crate::Board;
use crate::CellState;
use crate::PlacementOutcome;

const SEEDS: [u64; 6] = [0, 1, 2, 3, 42, 1234];

fn play(size: usize, seed: u64) {
    let solutions = all_solutions(size);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(size).expect("Expected no error");

    loop {
        let before = board.board();
        let open = before.cells_in(CellState::Open).collect::<Vec<_>>();
        let Some(cell) = open.choose(&mut rng).copied() else {
            break;
        };

        let outcome = board
            .insert_queen(cell.column, cell.row)
            .expect("Expected no error");
        let after = board.board();

        match outcome {
            PlacementOutcome::Committed(statistics) => {
                assert!(statistics.forced <= size * size);
                assert!(statistics.forced + 1 + before.count(CellState::Queen) <= size);
            }
            PlacementOutcome::Ignored(state) => panic!("open cell reported as {state:?}"),
        }

        // Decided cells never change.
        for row in 0..size {
            for column in 0..size {
                let previous = before.get(column, row);
                if previous != Some(CellState::Open) {
                    assert_eq!(after.get(column, row), previous);
                }
            }
        }

        let queens = board.queens();
        assert!(queens.len() <= size);
        for (index, &first) in queens.iter().enumerate() {
            for &second in &queens[index + 1..] {
                assert!(!attacks(first, second), "{first} attacks {second}");
            }
        }

        assert_matches_oracle(&board, &solutions);

        // Placing again anywhere already decided changes nothing.
        let decided = after
            .cells_in(CellState::Queen)
            .chain(after.cells_in(CellState::Blocked))
            .collect::<Vec<_>>();
        if let Some(cell) = decided.choose(&mut rng) {
            let _ = board
                .insert_queen(cell.column, cell.row)
                .expect("Expected no error");
            assert_eq!(board.board(), after);
        }
    }

    assert!(
        board.is_solved() || !board.is_satisfiable(),
        "size {size}, seed {seed}: no open cell left on an unfinished board"
    );
}

#[test]
fn random_play_on_small_boards() {
    for size in 1..=6 {
        for seed in SEEDS {
            play(size, seed);
        }
    }
}

#[test]
fn random_play_on_a_seven_board() {
    for seed in SEEDS {
        play(7, seed);
    }
}

#[test]
fn open_cells_match_solutions_before_any_forcing() {
    let solutions = all_solutions(6);
    assert_eq!(solutions.len(), 4);

    for column in 0..6 {
        let mut board = Board::new(6).expect("Expected no error");
        let _ = board.insert_queen(column, 2).expect("Expected no error");

        assert_matches_oracle(&board, &solutions);
    }
}
