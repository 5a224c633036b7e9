// sequence.rs - Sequence records and the producer interface

use crate::error::SourceError;
use std::fmt::Debug;

/// A named nucleotide sequence handed to the batch comparator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            description: None,
            sequence,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl AsRef<[u8]> for SequenceRecord {
    fn as_ref(&self) -> &[u8] {
        &self.sequence
    }
}

/// Producer of sequences for a batch.
///
/// Sequences are returned in the order they should be paired.
pub trait SequenceSource: Send + Sync + Debug {
    /// Human-readable name used in console output
    fn name(&self) -> &str;

    /// Produce the ordered batch
    fn sequences(&mut self) -> Result<Vec<SequenceRecord>, SourceError>;
}
