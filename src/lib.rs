// lib.rs - seqdist library root

//! # seqdist - Edit distance distributions for DNA sequences
//!
//! This library computes unit-cost edit (Levenshtein) distances between
//! sequences of any comparable symbol type and runs them over batches of
//! consecutive pairs, such as random DNA or mitochondrial records resolved
//! from an accession panel.
//!
//! ## Features
//!
//! - **Generic engine**: any `PartialEq` symbol type, full table or rolling row
//! - **Batch comparison**: ordered, parallel pairwise evaluation with explicit odd-batch policy
//! - **Sequence sources**: seeded random DNA and FASTA-backed accession panels
//! - **Reporting**: TSV, CSV and JSON series plus text histograms
//!
//! ## Basic Usage
//!
//! ```rust
//! use seqdist::prelude::*;
//!
//! assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
//!
//! let mut source = RandomDnaSource::for_trials(4, 100, "ACTG", Some(42)).unwrap();
//! let batch = source.sequences().unwrap();
//! let engine = DistanceEngine::new(EngineConfig::default());
//! let series = compare_batch::<u8, _>(&batch, &engine, PairingPolicy::Strict).unwrap();
//! assert_eq!(series.len(), 4);
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{compare_batch, compare_batch_with_progress, edit_distance};
    pub use crate::core::{
        DistanceEngine, DistanceTable, EngineConfig, PairingPolicy, ResultSeries, TableStrategy,
    };
    pub use crate::data::{
        EntrezConfig, FastaSource, RandomDnaSource, SequenceRecord, SequenceSource, SpeciesPanel,
    };
    pub use crate::error::{BatchError, EngineError, SourceError};
    pub use crate::output::{write_series, Histogram, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use crate::core::{compare_batch, edit_distance, DistanceEngine, PairingPolicy, ResultSeries};
pub use crate::data::{SequenceRecord, SequenceSource};
pub use crate::error::{BatchError, EngineError, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("seqdist v{} - Edit distance distributions for DNA sequences", VERSION)
}
