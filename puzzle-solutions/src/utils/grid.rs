//! Binary grid with 8-neighbor erosion to a fixpoint
//!
//! A [`Grid`] is built from text lines of on/off markers ('@' is on,
//! anything else is off) and stored as a single flat allocation with a
//! one-cell border of off cells on all four sides. The border gives every
//! real cell exactly 8 well-defined neighbors, so the scans below never
//! bounds-check.
//!
//! Two queries are exposed over the same construction:
//! - [`Grid::count_under_threshold`]: one non-mutating pass counting on
//!   cells with fewer than `threshold` on neighbors.
//! - [`Grid::erode_to_fixpoint`]: repeatedly remove every on cell with
//!   fewer than `threshold` on neighbors until a full pass removes nothing,
//!   returning the total number of cells removed.
//!
//! Within a pass, removals are collected against the grid state as it was
//! at the start of the pass and applied only after the pass completes.
//! Removing mid-scan would change the neighbor counts seen by cells scanned
//! later in the same pass.
//!
//! # Example
//!
//! ```
//! use puzzle_solutions::utils::grid::Grid;
//!
//! let grid = Grid::parse(".@@.\n@@@@\n.@@.");
//! assert_eq!(grid.count_under_threshold(4), 2);
//! assert_eq!(grid.clone().erode_to_fixpoint(4), 8);
//! ```

/// Input marker for an on cell.
const ON_MARKER: u8 = b'@';

/// Offsets of the 8 cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of binary cells surrounded by an off-cell border.
///
/// The cell that came from input coordinates `(r, c)` sits at padded
/// coordinates `(r + 1, c + 1)`. The border is never counted or removed.
/// Cells only ever flip on to off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major padded cells, 0 = off, 1 = on
    cells: Vec<u8>,
    /// Padded width (data columns + 2)
    width: usize,
    /// Padded height (data rows + 2)
    height: usize,
}

impl Grid {
    /// Build a grid from raw input text.
    ///
    /// Trailing whitespace is stripped per line and blank lines are
    /// skipped. '@' maps to on; every other character maps to off. Rows
    /// shorter than the longest row are padded with off cells to the
    /// maximum observed width, so ragged input parses into a rectangle.
    /// Empty input yields a grid with zero data rows on which every query
    /// returns 0.
    pub fn parse(input: &str) -> Self {
        let rows: Vec<&str> = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let data_width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let width = data_width + 2;
        let height = rows.len() + 2;

        let mut cells = vec![0u8; width * height];
        for (r, row) in rows.iter().enumerate() {
            for (c, byte) in row.bytes().enumerate() {
                if byte == ON_MARKER {
                    cells[(r + 1) * width + (c + 1)] = 1;
                }
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    /// Number of data rows (excluding the border).
    pub fn data_rows(&self) -> usize {
        self.height - 2
    }

    /// Number of data columns (excluding the border).
    pub fn data_cols(&self) -> usize {
        self.width - 2
    }

    /// Number of cells currently on.
    pub fn on_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// Count of on neighbors of the data cell at padded coordinates (r, c).
    ///
    /// The coordinate must name a data cell, which is always at least one
    /// cell away from the true edge, so the offset arithmetic stays in
    /// bounds by construction.
    fn on_neighbors(&self, r: usize, c: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let nr = (r as isize + dr) as usize;
                let nc = (c as isize + dc) as usize;
                self.cells[nr * self.width + nc]
            })
            .sum()
    }

    /// Count on cells with fewer than `threshold` on neighbors.
    ///
    /// A single pass over the current state; the grid is not mutated.
    pub fn count_under_threshold(&self, threshold: u8) -> usize {
        let mut count = 0;
        for r in 1..self.height - 1 {
            for c in 1..self.width - 1 {
                if self.cells[r * self.width + c] == 1 && self.on_neighbors(r, c) < threshold {
                    count += 1;
                }
            }
        }
        count
    }

    /// Remove under-threshold on cells until a pass removes nothing.
    ///
    /// Returns the total number of cells removed across all passes (not
    /// the count remaining). Terminates because every applied pass strictly
    /// decreases the on-cell count.
    pub fn erode_to_fixpoint(&mut self, threshold: u8) -> usize {
        self.erode_with_trace(threshold, |_, _| {})
    }

    /// [`Grid::erode_to_fixpoint`] with an observer.
    ///
    /// `on_pass` is invoked once per applied pass with the zero-based pass
    /// index and the pass's removal set in original (unpadded) coordinates.
    /// The callback observes the removal process; it cannot influence it.
    pub fn erode_with_trace<F>(&mut self, threshold: u8, mut on_pass: F) -> usize
    where
        F: FnMut(usize, &[(usize, usize)]),
    {
        let mut total_removed = 0;
        let mut pass = 0;

        loop {
            // Collect against the frozen start-of-pass state
            let mut removals = Vec::new();
            for r in 1..self.height - 1 {
                for c in 1..self.width - 1 {
                    if self.cells[r * self.width + c] == 1 && self.on_neighbors(r, c) < threshold {
                        removals.push((r - 1, c - 1));
                    }
                }
            }

            if removals.is_empty() {
                return total_removed;
            }

            // Apply the whole set at once
            for &(r, c) in &removals {
                self.cells[(r + 1) * self.width + (c + 1)] = 0;
            }
            total_removed += removals.len();
            on_pass(pass, &removals);
            pass += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_offsets_data_by_one() {
        let grid = Grid::parse("@.\n.@");
        assert_eq!(grid.data_rows(), 2);
        assert_eq!(grid.data_cols(), 2);
        assert_eq!(grid.on_count(), 2);
        assert_eq!(grid.cells[grid.width + 1], 1); // input (0, 0)
        assert_eq!(grid.cells[2 * grid.width + 2], 1); // input (1, 1)
    }

    #[test]
    fn test_cross_grid_counts() {
        let grid = Grid::parse(".@@.\n@@@@\n.@@.");
        assert_eq!(grid.count_under_threshold(4), 2);

        let mut eroded = grid.clone();
        assert_eq!(eroded.erode_to_fixpoint(4), 8);
        assert_eq!(eroded.on_count(), 0);
        // The original is untouched by counting
        assert_eq!(grid.on_count(), 8);
    }

    #[test]
    fn test_cross_grid_pass_trace() {
        let mut grid = Grid::parse(".@@.\n@@@@\n.@@.");
        let mut passes = Vec::new();
        let total = grid.erode_with_trace(4, |pass, removed| {
            passes.push((pass, removed.to_vec()));
        });

        assert_eq!(total, 8);
        assert_eq!(passes.len(), 3);
        assert_eq!(passes[0].1, vec![(1, 0), (1, 3)]);
        assert_eq!(passes[1].1.len(), 4);
        assert_eq!(passes[2].1.len(), 2);
        assert_eq!(passes.iter().map(|(i, _)| *i).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn test_single_isolated_cell_removed_in_first_pass() {
        let mut grid = Grid::parse("@");
        assert_eq!(grid.count_under_threshold(4), 1);
        assert_eq!(grid.erode_to_fixpoint(4), 1);
    }

    #[test]
    fn test_all_off_grid() {
        let mut grid = Grid::parse("....\n....");
        assert_eq!(grid.count_under_threshold(4), 0);
        assert_eq!(grid.erode_to_fixpoint(4), 0);
    }

    #[test]
    fn test_empty_input() {
        let mut grid = Grid::parse("");
        assert_eq!(grid.data_rows(), 0);
        assert_eq!(grid.count_under_threshold(4), 0);
        assert_eq!(grid.erode_to_fixpoint(4), 0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let with_blanks = Grid::parse(".@@.\n\n@@@@\n\n.@@.\n");
        let without = Grid::parse(".@@.\n@@@@\n.@@.");
        assert_eq!(with_blanks, without);
    }

    #[test]
    fn test_unknown_characters_map_to_off() {
        let grid = Grid::parse("x@x\n.@.");
        assert_eq!(grid.on_count(), 2);
        assert_eq!(grid.count_under_threshold(4), 2);
    }

    #[test]
    fn test_ragged_rows_padded_to_max_width() {
        let mut grid = Grid::parse("@@\n@@@@\n@");
        assert_eq!(grid.data_cols(), 4);
        assert_eq!(grid.count_under_threshold(4), 4);
        assert_eq!(grid.erode_to_fixpoint(4), 7);
    }

    #[test]
    fn test_threshold_zero_is_fixpoint_immediately() {
        let mut grid = Grid::parse("@@\n@@");
        assert_eq!(grid.erode_to_fixpoint(0), 0);
        assert_eq!(grid.on_count(), 4);
    }

    #[test]
    fn test_threshold_nine_erodes_everything() {
        // No cell can have 9 on neighbors
        let mut grid = Grid::parse("@@@\n@@@\n@@@");
        assert_eq!(grid.erode_to_fixpoint(9), 9);
        assert_eq!(grid.on_count(), 0);
    }

    /// Random row set rendered as input text; rows may be ragged.
    fn arb_input() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::collection::vec(prop::bool::ANY, 1..10usize), 1..10usize)
            .prop_map(|rows| {
                rows.iter()
                    .map(|row| {
                        row.iter()
                            .map(|&on| if on { '@' } else { '.' })
                            .collect::<String>()
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// A cell that survives the first pass may still fall later, so the
        /// fixpoint total dominates the one-pass count.
        #[test]
        fn prop_fixpoint_dominates_single_pass(input in arb_input()) {
            let grid = Grid::parse(&input);
            let single_pass = grid.count_under_threshold(4);
            let total = grid.clone().erode_to_fixpoint(4);
            prop_assert!(total >= single_pass);
        }

        /// Cells are only ever removed, never added.
        #[test]
        fn prop_removed_bounded_by_initial_on_count(input in arb_input()) {
            let mut grid = Grid::parse(&input);
            let before = grid.on_count();
            let total = grid.erode_to_fixpoint(4);
            prop_assert_eq!(before - total, grid.on_count());
        }

        /// Once at the fixpoint, another erosion collects nothing.
        #[test]
        fn prop_erosion_is_idempotent(input in arb_input()) {
            let mut grid = Grid::parse(&input);
            grid.erode_to_fixpoint(4);
            prop_assert_eq!(grid.erode_to_fixpoint(4), 0);
        }

        /// Every applied pass strictly shrinks the on-cell count, and the
        /// per-pass removal sets account for the reported total.
        #[test]
        fn prop_passes_strictly_shrink(input in arb_input()) {
            let mut grid = Grid::parse(&input);
            let mut pass_sizes = Vec::new();
            let total = grid.erode_with_trace(4, |_, removed| pass_sizes.push(removed.len()));
            prop_assert!(pass_sizes.iter().all(|&size| size > 0));
            prop_assert_eq!(pass_sizes.iter().sum::<usize>(), total);
        }
    }
}
