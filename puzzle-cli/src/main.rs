//! puzzles - command-line interface for running daily puzzle solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod output;
mod store;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use error::ArcExecutorError;
use executor::Executor;
use output::OutputFormatter;
use puzzle_solver::RegistryBuilder;
use store::InputStore;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let executor = Executor::new(registry, &config).map_err(ArcExecutorError::from)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if config.input_override.is_some() {
        // An explicit file can only stand in for a single solver's input
        if work_items.len() > 1 {
            return Err(error::CliError::Config(
                "--input selects one file; narrow the run with --year/--day".to_string(),
            ));
        }
    } else {
        // Fail before execution when inputs are missing; nothing is fetched
        let missing = missing_inputs(&work_items, &config);
        if !missing.is_empty() {
            let store = InputStore::new(config.input_dir.clone());
            eprintln!("Missing {} input file(s):", missing.len());
            for (year, day) in &missing {
                eprintln!("  - {}", store.input_path(*year, *day).display());
            }
            return Err(error::CliError::Config(format!(
                "Place the missing input file(s) under {}",
                config.input_dir.display()
            )));
        }
    }

    run_executor(executor, config.quiet)
}

/// Check which inputs are missing from the store
fn missing_inputs(work_items: &[executor::WorkItem], config: &Config) -> Vec<(u16, u8)> {
    let store = InputStore::new(config.input_dir.clone());
    work_items
        .iter()
        .filter(|w| !store.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Run the executor and collect results
fn run_executor(executor: Executor, quiet: bool) -> Result<(), error::CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    // Build expected keys for result aggregation
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Collect and display results in order using aggregator
    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Drain any remaining buffered results (shouldn't happen if all results arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    // Wait for executor to finish
    executor_handle
        .join()
        .map_err(|_| error::CliError::Config("Executor thread panicked".to_string()))?
        .map_err(error::CliError::Executor)?;

    // Print summary
    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<puzzle_solver::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
