// mod.rs - Core logic module

pub mod batch;
pub mod edit;

// Re-export main types for convenience
pub use batch::{
    compare_batch, compare_batch_with_progress, pairs, ComparedPair, PairingPolicy, ResultSeries,
};
pub use edit::{edit_distance, DistanceEngine, DistanceTable, EngineConfig, TableStrategy};
