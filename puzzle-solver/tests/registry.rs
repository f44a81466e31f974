//! Registry construction and lookup behavior

use puzzle_solver::{
    DynSolver as _, ParseError, PartSolver, PuzzleParser, RegistrationError, RegistryBuilder,
    SolveError, Solver, SolverError, register_solver,
};

struct EchoSolver;

impl PuzzleParser for EchoSolver {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for EchoSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

impl Solver for EchoSolver {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <EchoSolver as PartSolver<1>>::solve(shared),
            other => Err(SolveError::PartNotImplemented(other)),
        }
    }
}

#[test]
fn test_register_and_create() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, EchoSolver, 2025, 4);
    let registry = builder.build();

    assert!(registry.contains(2025, 4));
    assert_eq!(registry.len(), 1);

    let mut solver = registry.create_solver(2025, 4, "  hello  ").unwrap();
    assert_eq!(solver.year(), 2025);
    assert_eq!(solver.day(), 4);
    assert_eq!(solver.parts(), 1);
    assert_eq!(solver.solve(1).unwrap().answer, "hello");
}

#[test]
fn test_duplicate_registration_rejected() {
    let builder = RegistryBuilder::new();
    let solver = EchoSolver;
    let builder = puzzle_solver::RegisterableSolver::register_with(&solver, builder, 2025, 4)
        .expect("first registration should succeed");

    let result = puzzle_solver::RegisterableSolver::register_with(&solver, builder, 2025, 4);
    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2025, 4))
    ));
}

#[test]
fn test_out_of_range_registration_rejected() {
    let solver = EchoSolver;

    let result =
        puzzle_solver::RegisterableSolver::register_with(&solver, RegistryBuilder::new(), 2014, 1);
    assert!(matches!(
        result,
        Err(RegistrationError::InvalidYearDay(2014, 1))
    ));

    let result =
        puzzle_solver::RegisterableSolver::register_with(&solver, RegistryBuilder::new(), 2025, 26);
    assert!(matches!(
        result,
        Err(RegistrationError::InvalidYearDay(2025, 26))
    ));
}

#[test]
fn test_missing_solver_not_found() {
    let registry = RegistryBuilder::new().build();
    assert!(registry.is_empty());

    let result = registry.create_solver(2025, 4, "");
    assert!(matches!(result, Err(SolverError::NotFound(2025, 4))));

    let result = registry.create_solver(2013, 1, "");
    assert!(matches!(result, Err(SolverError::InvalidYearDay(2013, 1))));
}

#[test]
fn test_iter_info_is_ordered() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, EchoSolver, 2025, 4);
    register_solver!(builder, EchoSolver, 2025, 2);
    register_solver!(builder, EchoSolver, 2016, 9);
    let registry = builder.build();

    let keys: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2016, 9), (2025, 2), (2025, 4)]);
}
