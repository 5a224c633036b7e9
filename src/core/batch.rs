// batch.rs - Pairwise batch comparison driver

use crate::core::edit::DistanceEngine;
use crate::error::BatchError;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What to do with the last sequence of an odd-sized batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairingPolicy {
    /// Reject odd-sized batches
    #[default]
    Strict,
    /// Ignore the unpaired trailing sequence
    DropTrailing,
    /// Compare the trailing sequence against the previous second-of-pair,
    /// or against itself when it is the only sequence
    ReuseLast,
}

impl FromStr for PairingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(PairingPolicy::Strict),
            "drop-trailing" | "drop" => Ok(PairingPolicy::DropTrailing),
            "reuse-last" | "reuse" => Ok(PairingPolicy::ReuseLast),
            _ => Err(format!(
                "Invalid pairing policy: {}. Use: strict, drop-trailing, reuse-last",
                s
            )),
        }
    }
}

impl fmt::Display for PairingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingPolicy::Strict => write!(f, "strict"),
            PairingPolicy::DropTrailing => write!(f, "drop-trailing"),
            PairingPolicy::ReuseLast => write!(f, "reuse-last"),
        }
    }
}

impl PairingPolicy {
    pub fn description(&self) -> &str {
        match self {
            PairingPolicy::Strict => "consecutive pairs, odd batches rejected",
            PairingPolicy::DropTrailing => "consecutive pairs, unpaired trailing sequence dropped",
            PairingPolicy::ReuseLast => {
                "consecutive pairs, unpaired trailing sequence compared to the previous one"
            }
        }
    }
}

/// One comparison of the batch: indices into the input and their distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparedPair {
    pub left: usize,
    pub right: usize,
    pub distance: usize,
}

/// Ordered distances produced by a batch, one entry per compared pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSeries {
    pub entries: Vec<ComparedPair>,
}

impl ResultSeries {
    pub fn new(entries: Vec<ComparedPair>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn distances(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.distance).collect()
    }

    pub fn min(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.distance).min()
    }

    pub fn max(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.distance).max()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: usize = self.entries.iter().map(|e| e.distance).sum();
        Some(total as f64 / self.entries.len() as f64)
    }
}

/// Index pairs compared for a batch of `len` sequences under `policy`
pub fn pairs(len: usize, policy: PairingPolicy) -> Result<Vec<(usize, usize)>, BatchError> {
    let mut plan: Vec<(usize, usize)> = (0..len / 2).map(|k| (2 * k, 2 * k + 1)).collect();

    if len % 2 == 1 {
        let last = len - 1;
        match policy {
            PairingPolicy::Strict => return Err(BatchError::UnpairedSequence { len }),
            PairingPolicy::DropTrailing => {}
            PairingPolicy::ReuseLast => {
                // the second slot still holds the previous pair's partner
                let partner = if last == 0 { 0 } else { last - 1 };
                plan.push((last, partner));
            }
        }
    }

    Ok(plan)
}

/// Compare consecutive pairs of `sequences` and return their distances in
/// input order.
///
/// ```
/// use seqdist::core::{compare_batch, DistanceEngine, PairingPolicy};
///
/// let batch = ["kitten", "sitting", "abc", "abd"].map(str::as_bytes);
/// let engine = DistanceEngine::default();
/// let series = compare_batch::<u8, _>(&batch, &engine, PairingPolicy::Strict).unwrap();
/// assert_eq!(series.distances(), vec![3, 1]);
/// ```
pub fn compare_batch<T, S>(
    sequences: &[S],
    engine: &DistanceEngine,
    policy: PairingPolicy,
) -> Result<ResultSeries, BatchError>
where
    T: PartialEq + Sync,
    S: AsRef<[T]> + Sync,
{
    run_batch(sequences, engine, policy, None)
}

/// Same as [`compare_batch`], reporting progress on a terminal progress bar
pub fn compare_batch_with_progress<T, S>(
    sequences: &[S],
    engine: &DistanceEngine,
    policy: PairingPolicy,
) -> Result<ResultSeries, BatchError>
where
    T: PartialEq + Sync,
    S: AsRef<[T]> + Sync,
{
    let total = pairs(sequences.len(), policy).map(|plan| plan.len()).unwrap_or(0);
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pairs ({per_sec}) ETA: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let result = run_batch(sequences, engine, policy, Some(&pb));
    pb.finish_with_message("✅ Batch compared!");
    result
}

fn run_batch<T, S>(
    sequences: &[S],
    engine: &DistanceEngine,
    policy: PairingPolicy,
    pb: Option<&ProgressBar>,
) -> Result<ResultSeries, BatchError>
where
    T: PartialEq + Sync,
    S: AsRef<[T]> + Sync,
{
    let plan = pairs(sequences.len(), policy)?;
    let completed = AtomicUsize::new(0);

    // indexed parallel iterators keep input order on collect
    let entries = plan
        .par_iter()
        .map(|&(left, right)| -> Result<ComparedPair, BatchError> {
            let distance = engine.distance(sequences[left].as_ref(), sequences[right].as_ref())?;
            if let Some(pb) = pb {
                let count = completed.fetch_add(1, Ordering::Relaxed) + 1;
                pb.set_position(count as u64);
            }
            Ok(ComparedPair {
                left,
                right,
                distance,
            })
        })
        .collect::<Result<Vec<_>, BatchError>>()?;

    Ok(ResultSeries::new(entries))
}
