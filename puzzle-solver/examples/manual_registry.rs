//! Manual registration without the derive macros
//!
//! Run with: cargo run --example manual_registry -p puzzle-solver

use puzzle_solver::{
    DynSolver as _, ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError, Solver,
    register_solver,
};

struct SumSolver;

impl PuzzleParser for SumSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {line:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for SumSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl Solver for SumSolver {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <SumSolver as PartSolver<1>>::solve(shared),
            other => Err(SolveError::PartNotImplemented(other)),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, SumSolver, 2025, 1);
    let registry = builder.build();

    let mut solver = registry.create_solver(2025, 1, "1\n2\n3\n4")?;
    let result = solver.solve(1)?;
    println!(
        "2025/01 part 1 = {} (solved in {:?})",
        result.answer,
        result.duration()
    );

    Ok(())
}
