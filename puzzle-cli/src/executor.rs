//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::store::InputStore;
use chrono::TimeDelta;
use itertools::Itertools;
use puzzle_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use rayon::prelude::*;
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    store: InputStore,
    input_override: Option<PathBuf>,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                store: InputStore::new(config.input_dir.clone()),
                input_override: config.input_override.clone(),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                // No parallelization, execute all in order
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_solver(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize years using configured thread pool
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both parallelize across all work items (Part differs in run_solver behavior)
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver(&work, tx, sync_executor_config).err())
                .reduce_with(combine_errors)
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(combine_errors)
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Merge the error slots of two parallel branches
fn combine_errors(
    first: Option<ArcExecutorError>,
    second: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match second {
        Some(e) => Some(ArcExecutorError::combine_opt(first, e)),
        None => first,
    }
}

/// Create an error result for a part that never ran
fn make_error_result(year: u16, day: u8, part: u8, error: &str) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(SolverError::ParseError(ParseError::Other(
            error.to_string(),
        ))),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Run one work item, dispatching on the parallelization level
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match get_input(work, sync_executor_config) {
        Ok(input) => input,
        Err(e) => {
            // Send error result for each part
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_result(work.year, work.day, part, &error_msg))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, sync_executor_config)
    } else {
        run_solver_sequential(work, &input, tx, sync_executor_config)
    }
}

/// Run solver with part-level parallelism, buffering results to emit in order
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let registry = &sync_executor_config.registry;

    // Solve parts in parallel; each part gets its own instance so parts
    // never share mutable state
    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => solve_part_internal(year, day, part, &mut *solver),
                Err(e) => make_error_result(year, day, part, &e.to_string()),
            };
            rtx.send(result).ok();
        });

    // Buffer and emit results in part order
    let part_count = work.parts.clone().count();
    let mut buffer: Vec<Option<SolverResult>> = (0..part_count).map(|_| None).collect();
    let start_part = *work.parts.start();
    let mut next_part = start_part;

    for result in result_rx {
        let idx = (result.part - start_part) as usize;
        if idx < buffer.len() {
            buffer[idx] = Some(result);
        }
        // Emit buffered results in order
        while let Some(result) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Run one solver instance over its parts in order
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut solver = match sync_executor_config.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_result(year, day, part, &error_msg))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    for part in work.parts.clone() {
        tx.send(solve_part_internal(year, day, part, &mut *solver))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Get input for a work item from the override file or the store
fn get_input(
    work: &WorkItem,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<String, ExecutorError> {
    let (year, day) = (work.year, work.day);

    if let Some(path) = &sync_executor_config.input_override {
        return fs::read_to_string(path).map_err(|e| ExecutorError::InputRead {
            year,
            day,
            source: Box::new(e),
        });
    }

    sync_executor_config
        .store
        .get(year, day)
        .map_err(|e| ExecutorError::InputRead {
            year,
            day,
            source: Box::new(e),
        })?
        .ok_or(ExecutorError::MissingInput { year, day })
}

/// Solve a single part, capturing timing
fn solve_part_internal(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());

    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}
