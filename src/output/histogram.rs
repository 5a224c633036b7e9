// histogram.rs - Frequency distribution of a result series

use serde::Serialize;

pub const DEFAULT_BINS: usize = 10;
const BAR_WIDTH: usize = 40;

/// One equal-width bin, `[lower, upper)` except for the last which is closed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width intervals spanning min..=max.
    ///
    /// When every value is equal the range is widened to value ± 0.5.
    pub fn from_values(values: &[usize], bins: usize) -> Self {
        let bins = bins.max(1);
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Self { bins: Vec::new() };
        };

        let (lower, upper) = if min == max {
            (min as f64 - 0.5, max as f64 + 0.5)
        } else {
            (min as f64, max as f64)
        };
        let width = (upper - lower) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v as f64) - lower) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        Self {
            bins: counts
                .into_iter()
                .enumerate()
                .map(|(i, count)| Bin {
                    lower: lower + i as f64 * width,
                    upper: lower + (i + 1) as f64 * width,
                    count,
                })
                .collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Horizontal text bars, one line per bin
    pub fn render(&self) -> String {
        let peak = self.bins.iter().map(|b| b.count).max().unwrap_or(0);
        let mut out = String::new();
        for bin in &self.bins {
            let bar_len = if peak == 0 { 0 } else { bin.count * BAR_WIDTH / peak };
            out.push_str(&format!(
                "{:>9.1} - {:<9.1} | {:<width$} {}\n",
                bin.lower,
                bin.upper,
                "█".repeat(bar_len),
                bin.count,
                width = BAR_WIDTH
            ));
        }
        out
    }
}
