//! Daily Puzzle Solver Library
//!
//! A flexible and type-safe framework for solving daily text puzzles across
//! multiple years and days. Each puzzle is implemented as a solver with
//! custom input parsing and can produce results for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based interfaces for defining parsers and per-part solvers
//! - Type-safe parsing with lifetime-generic shared data
//! - A registry system for managing multiple solvers
//! - A plugin system for automatic registration via `inventory`
//! - Parse/solve timing on every instance
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{DynSolver as _, PuzzleParser, PartSolver, ParseError, SolveError};
//! use puzzle_solver::{PuzzleSolver, RegistryBuilder, register_solver};
//!
//! #[derive(PuzzleSolver)]
//! #[puzzle_solver(max_parts = 1)]
//! pub struct MyDay1;
//!
//! impl PuzzleParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, MyDay1, 2025, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2025, 1, "1\n2\n3").unwrap();
//! let result = solver.solve(1).unwrap();
//! assert_eq!(result.answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## PuzzleParser and PartSolver
//!
//! [`PuzzleParser`] defines the shared data type and parsing logic.
//! [`PartSolver<N>`] implements one part against that shared data; the
//! `#[derive(PuzzleSolver)]` macro assembles the [`Solver`] dispatch impl
//! from the per-part impls.
//!
//! ## DynSolver
//!
//! The [`DynSolver`] trait provides type erasure for working with different
//! solver types uniformly: `solve(part)` returns the answer with timing, and
//! parse timing is recorded at construction.
//!
//! ## Plugin System
//!
//! Use `#[derive(AutoRegister)]` to automatically register solvers:
//! ```ignore
//! #[derive(PuzzleSolver, AutoRegister)]
//! #[puzzle_solver(max_parts = 2)]
//! #[puzzle(year = 2025, day = 4, tags = ["grid"])]
//! struct Day4Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macros
pub use inventory;

// Re-export the derive macros
pub use puzzle_solver_macros::{AutoRegister, PuzzleSolver};
