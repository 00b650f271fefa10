use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// Line of the feed read for process 0; process i reads line SEED + i (1-indexed).
const SEED: usize = 200;
// Stand-in value once the feed runs out of lines, so burst assignment never fails.
const EXHAUSTED_FEED_VALUE: usize = 1_804_289_383;

/// Deterministic burst source backed by a file of decimal integers, one per
/// line. The whole feed is held in memory and indexed, so results do not
/// depend on call order.
pub struct RandGenerator {
    numbers: Vec<usize>,
}

impl RandGenerator {
    pub fn new(numbers: Vec<usize>) -> Self {
        RandGenerator { numbers }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to open random number file {}", path.display()))?;
        let numbers = contents
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.trim()
                    .parse::<usize>()
                    .with_context(|| format!("{}:{}: not a decimal integer", path.display(), i + 1))
            })
            .collect::<Result<Vec<usize>>>()?;
        Ok(RandGenerator::new(numbers))
    }

    /// CPU burst for the process at `index`: `1 + n % upper_bound`, where `n`
    /// is the feed entry at line `SEED + index`. `upper_bound` must be at
    /// least 1; the loader guarantees it.
    pub fn burst(&self, upper_bound: usize, index: usize) -> usize {
        let n = self
            .numbers
            .get(SEED + index - 1)
            .copied()
            .unwrap_or(EXHAUSTED_FEED_VALUE);
        1 + n % upper_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with_line_200(value: usize) -> RandGenerator {
        let mut numbers = vec![7; 199];
        numbers.push(value);
        RandGenerator::new(numbers)
    }

    #[test]
    fn process_zero_reads_the_seed_line() {
        let gen = feed_with_line_200(42);
        assert_eq!(gen.burst(100, 0), 43);
    }

    #[test]
    fn result_stays_within_upper_bound() {
        let gen = feed_with_line_200(41);
        for bound in 1..=10 {
            let b = gen.burst(bound, 0);
            assert!(b >= 1 && b <= bound);
        }
    }

    #[test]
    fn identical_queries_return_identical_values() {
        let mut numbers = vec![0; 210];
        numbers[199] = 13;
        numbers[205] = 99;
        let gen = RandGenerator::new(numbers);
        assert_eq!(gen.burst(10, 0), gen.burst(10, 0));
        assert_eq!(gen.burst(10, 6), gen.burst(10, 6));
        assert_eq!(gen.burst(10, 6), 1 + 99 % 10);
    }

    #[test]
    fn exhausted_feed_falls_back_to_the_fixed_value() {
        let gen = RandGenerator::new(vec![1, 2, 3]);
        assert_eq!(gen.burst(10, 0), 1 + EXHAUSTED_FEED_VALUE % 10);
        // an empty feed behaves the same way
        let gen = RandGenerator::new(Vec::new());
        assert_eq!(gen.burst(7, 5), 1 + EXHAUSTED_FEED_VALUE % 7);
    }
}
