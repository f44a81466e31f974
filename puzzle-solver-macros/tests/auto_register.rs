use puzzle_solver::{
    DynSolver as _, ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError,
};
use puzzle_solver_macros::{AutoRegister, PuzzleSolver};

#[derive(PuzzleSolver, AutoRegister)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2023, day = 24, tags = ["test", "sum"])]
struct RegisteredSolver;

impl PuzzleParser for RegisteredSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for RegisteredSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for RegisteredSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[test]
fn test_plugin_is_collected_and_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let mut solver = registry
        .create_solver(2023, 24, "5\n6\n7")
        .expect("Failed to create solver - was it registered?");

    assert_eq!(solver.solve(1).unwrap().answer, "18");
    assert_eq!(solver.solve(2).unwrap().answer, "210");
}

#[test]
fn test_plugin_metadata() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.get_info(2023, 24).expect("missing factory info");
    assert_eq!(info.parts, 2);
}

#[test]
fn test_tag_filtering() {
    // Filter that matches nothing: registry stays empty
    let registry = RegistryBuilder::new()
        .register_plugins_where(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(!registry.contains(2023, 24));

    // Filter on a tag the solver carries
    let registry = RegistryBuilder::new()
        .register_plugins_where(|plugin| plugin.tags.contains(&"sum"))
        .unwrap()
        .build();
    assert!(registry.contains(2023, 24));
}
