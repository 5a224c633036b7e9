// mod.rs - Sequence producers module

pub mod entrez;
pub mod fasta;
pub mod panel;
pub mod random;
pub mod sequence;

// Re-export main types for convenience
pub use entrez::EntrezConfig;
pub use fasta::{matches_accession, FastaSource};
pub use panel::{validate_accession, PanelEntry, SpeciesPanel};
pub use random::RandomDnaSource;
pub use sequence::{SequenceRecord, SequenceSource};
