// edit.rs - Edit (Levenshtein) distance engine and its configuration

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the dynamic-programming table is held in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableStrategy {
    /// Keep a single row, O(min(x, y)) memory
    #[default]
    Rolling,
    /// Materialize the whole (x+1) × (y+1) table
    Full,
}

impl FromStr for TableStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rolling" | "row" => Ok(TableStrategy::Rolling),
            "full" | "table" => Ok(TableStrategy::Full),
            _ => Err(format!("Invalid table strategy: {}. Use: rolling, full", s)),
        }
    }
}

impl fmt::Display for TableStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStrategy::Rolling => write!(f, "rolling"),
            TableStrategy::Full => write!(f, "full"),
        }
    }
}

impl TableStrategy {
    pub fn description(&self) -> &str {
        match self {
            TableStrategy::Rolling => "single rolling row (linear memory)",
            TableStrategy::Full => "full quadratic table",
        }
    }
}

/// Configuration for the distance engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub strategy: TableStrategy,
    /// Reject inputs longer than this; the cost of a comparison grows with x·y
    pub max_sequence_length: Option<usize>,
}

impl EngineConfig {
    pub fn new(strategy: TableStrategy, max_sequence_length: Option<usize>) -> Self {
        Self {
            strategy,
            max_sequence_length,
        }
    }
}

/// Unit-cost edit distance engine
#[derive(Debug, Clone, Default)]
pub struct DistanceEngine {
    config: EngineConfig,
}

impl DistanceEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Edit distance between `a` and `b`, honouring the configured length limit
    pub fn distance<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<usize, EngineError> {
        self.check_length(a.len())?;
        self.check_length(b.len())?;

        Ok(match self.config.strategy {
            TableStrategy::Rolling => edit_distance(a, b),
            TableStrategy::Full => DistanceTable::fill(a, b).distance(),
        })
    }

    fn check_length(&self, length: usize) -> Result<(), EngineError> {
        match self.config.max_sequence_length {
            Some(limit) if length > limit => Err(EngineError::SequenceTooLong { length, limit }),
            _ => Ok(()),
        }
    }
}

/// Minimum number of single-symbol insertions, deletions and substitutions
/// turning `a` into `b`.
///
/// Only one row of the table is kept, laid over the shorter input.
///
/// ```
/// use seqdist::core::edit_distance;
///
/// assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
/// assert_eq!(edit_distance::<u8>(b"", b"abcd"), 4);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // the distance is symmetric, so the row can always span the shorter input
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, x) in long.iter().enumerate() {
        // row[j - 1] from the previous pass, i.e. table[i - 1][j - 1]
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal
            } else {
                1 + above.min(row[j]).min(diagonal)
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Full (x+1) × (y+1) edit distance table.
///
/// `get(i, j)` is the distance between the length-`i` prefix of `a` and the
/// length-`j` prefix of `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceTable {
    pub fn fill<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0; rows * cols];

        for i in 0..rows {
            cells[i * cols] = i;
        }
        for (j, cell) in cells.iter_mut().enumerate().take(cols) {
            *cell = j;
        }

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)]
                } else {
                    let deletion = cells[(i - 1) * cols + j];
                    let insertion = cells[i * cols + (j - 1)];
                    let substitution = cells[(i - 1) * cols + (j - 1)];
                    1 + deletion.min(insertion).min(substitution)
                };
            }
        }

        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Distance between the complete inputs (bottom-right cell)
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}
