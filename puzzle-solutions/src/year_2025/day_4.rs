//! Grid of paper rolls, eroded from the edges inward
//!
//! Part 1 counts the rolls a forklift can reach right now: on cells with
//! fewer than 4 of their 8 neighbors on. Part 2 keeps removing reachable
//! rolls, full pass by full pass, until the stack is stable, and reports
//! how many came out in total. Both parts run over [`Grid`].

use crate::utils::grid::Grid;
use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegister, PuzzleSolver};

/// Minimum number of on neighbors that keeps a cell in place.
const ACCESS_THRESHOLD: u8 = 4;

#[derive(PuzzleSolver, AutoRegister)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2025, day = 4, tags = ["grid", "fixpoint"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            grid: Grid::parse(input),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .grid
            .count_under_threshold(ACCESS_THRESHOLD)
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Erode a copy; the parsed grid stays pristine for part 1
        let mut grid = shared.grid.clone();
        Ok(grid.erode_to_fixpoint(ACCESS_THRESHOLD).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::Solver as _;

    const SAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";

    #[test]
    fn test_sample_part_1() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn test_sample_part_2() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "43");
    }

    #[test]
    fn test_parts_are_order_independent() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "43");
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "43");
    }
}
