// error.rs - Error types for the engine, batch comparator and sequence sources

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::core::DistanceEngine`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("sequence of length {length} exceeds the configured limit of {limit}")]
    SequenceTooLong { length: usize, limit: usize },
}

/// Errors raised while pairing and comparing a batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("odd batch of {len} sequences: use drop-trailing or reuse-last pairing")]
    UnpairedSequence { len: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors raised by sequence producers
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid FASTA record in '{path}': {message}")]
    Fasta { path: PathBuf, message: String },

    #[error("accession '{accession}' not found in '{path}'")]
    AccessionNotFound { accession: String, path: PathBuf },

    #[error("'{0}' is not a valid nucleotide accession")]
    InvalidAccession(String),

    #[error("random source alphabet is empty")]
    EmptyAlphabet,

    #[error("random source alphabet '{0}' contains non-ASCII symbols")]
    NonAsciiAlphabet(String),
}
