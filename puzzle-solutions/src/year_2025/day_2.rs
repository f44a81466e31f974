//! Invalid product ids: digit strings made of one repeated group
//!
//! The input is a single line of comma-separated inclusive id ranges. An id
//! is invalid when its decimal digit string is some group of digits written
//! two or more times in a row ("11", "446446", "21212121"). Part 2 sums
//! every invalid id across all ranges. Part 1 of this day is not carried in
//! this solution set.

use anyhow::anyhow;
use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegister, PuzzleSolver};

#[derive(PuzzleSolver, AutoRegister)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2025, day = 2, tags = ["digits"])]
pub struct Solver;

/// An inclusive range of candidate ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    start: u64,
    end: u64,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<IdRange>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|entry| -> Result<IdRange, anyhow::Error> {
                let (start, end) = entry
                    .split_once('-')
                    .ok_or_else(|| anyhow!("expected 'start-end', got {:?}", entry))?;
                let start: u64 = start.parse().map_err(anyhow::Error::from)?;
                let end: u64 = end.parse().map_err(anyhow::Error::from)?;
                if start > end {
                    return Err(anyhow!("range start {} exceeds end {}", start, end));
                }
                Ok(IdRange { start, end })
            })
            .enumerate()
            .map(|(idx, entry_res)| entry_res.map_err(|e| anyhow!("(range {}) {}", idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(1))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(sum_invalid_ids)
            .sum::<u64>()
            .to_string())
    }
}

/// Digit-group sizes a string of `len` digits can split into: the divisors
/// of `len` no larger than `len / 2`, so the group repeats at least twice.
fn chunk_sizes(len: usize) -> impl Iterator<Item = usize> {
    (1..=len / 2).filter(move |size| len % size == 0)
}

/// True iff the digit string is one group of digits repeated.
///
/// Chunks have equal length, so comparing them as byte slices is exact; no
/// numeric parse is needed.
fn is_repeated_group(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    chunk_sizes(bytes.len()).any(|size| {
        let (first, rest) = bytes.split_at(size);
        rest.chunks_exact(size).all(|chunk| chunk == first)
    })
}

/// Sum of all invalid ids within one inclusive range.
fn sum_invalid_ids(range: &IdRange) -> u64 {
    (range.start..=range.end)
        .filter(|id| is_repeated_group(&id.to_string()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::Solver as _;

    const SAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

    #[test]
    fn test_chunk_sizes() {
        assert_eq!(chunk_sizes(1).collect::<Vec<_>>(), Vec::<usize>::new());
        assert_eq!(chunk_sizes(3).collect::<Vec<_>>(), vec![1]);
        assert_eq!(chunk_sizes(4).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(chunk_sizes(10).collect::<Vec<_>>(), vec![1, 2, 5]);
    }

    #[test]
    fn test_is_repeated_group() {
        assert!(is_repeated_group("11"));
        assert!(is_repeated_group("446446"));
        assert!(is_repeated_group("21212121"));
        assert!(is_repeated_group("1111"));

        assert!(!is_repeated_group("7"));
        assert!(!is_repeated_group("123"));
        assert!(!is_repeated_group("1234"));
        assert!(!is_repeated_group("222220"));
    }

    #[test]
    fn test_sum_invalid_ids_in_small_range() {
        // 11 and 22 are the only repeated-group ids in 11..=22
        let range = IdRange { start: 11, end: 22 };
        assert_eq!(sum_invalid_ids(&range), 33);
    }

    #[test]
    fn test_sample_part_2() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4174379265");
    }

    #[test]
    fn test_part_1_not_implemented() {
        let mut shared = Solver::parse("11-22").unwrap();
        let result = Solver::solve_part(&mut shared, 1);
        assert!(matches!(result, Err(SolveError::PartNotImplemented(1))));
    }

    #[test]
    fn test_parse_rejects_malformed_ranges() {
        assert!(Solver::parse("11-22,abc").is_err());
        assert!(Solver::parse("11").is_err());
        assert!(Solver::parse("22-11").is_err());
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let shared = Solver::parse("  11-22,30-40\n").unwrap();
        assert_eq!(
            shared,
            vec![
                IdRange { start: 11, end: 22 },
                IdRange { start: 30, end: 40 }
            ]
        );
    }
}
