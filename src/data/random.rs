// random.rs - Uniform random DNA sequence producer

use super::sequence::{SequenceRecord, SequenceSource};
use crate::error::SourceError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DNA_ALPHABET: &str = "ACTG";
pub const DEFAULT_LENGTH: usize = 400;
pub const DEFAULT_TRIALS: usize = 20;

/// Fixed-length sequences sampled uniformly from an alphabet
#[derive(Debug)]
pub struct RandomDnaSource {
    count: usize,
    length: usize,
    alphabet: Vec<u8>,
    rng: StdRng,
}

impl RandomDnaSource {
    /// `seed` makes the batch reproducible; `None` draws from OS entropy
    pub fn new(
        count: usize,
        length: usize,
        alphabet: &str,
        seed: Option<u64>,
    ) -> Result<Self, SourceError> {
        if alphabet.is_empty() {
            return Err(SourceError::EmptyAlphabet);
        }
        // sampled byte by byte, so every symbol must be a single byte
        if !alphabet.is_ascii() {
            return Err(SourceError::NonAsciiAlphabet(alphabet.to_string()));
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            count,
            length,
            alphabet: alphabet.as_bytes().to_vec(),
            rng,
        })
    }

    /// Two sequences per trial, ready for consecutive pairing
    pub fn for_trials(
        trials: usize,
        length: usize,
        alphabet: &str,
        seed: Option<u64>,
    ) -> Result<Self, SourceError> {
        Self::new(trials * 2, length, alphabet, seed)
    }

    fn random_sequence(&mut self) -> Vec<u8> {
        (0..self.length)
            .map(|_| self.alphabet[self.rng.gen_range(0..self.alphabet.len())])
            .collect()
    }
}

impl SequenceSource for RandomDnaSource {
    fn name(&self) -> &str {
        "random DNA"
    }

    fn sequences(&mut self) -> Result<Vec<SequenceRecord>, SourceError> {
        Ok((0..self.count)
            .map(|i| SequenceRecord::new(format!("random_{}", i + 1), self.random_sequence()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_alphabet() {
        let mut source =
            RandomDnaSource::for_trials(DEFAULT_TRIALS, DEFAULT_LENGTH, DNA_ALPHABET, Some(7))
                .unwrap();
        let batch = source.sequences().unwrap();

        assert_eq!(batch.len(), 40);
        assert!(batch.iter().all(|r| r.len() == 400));
        assert!(batch
            .iter()
            .flat_map(|r| r.sequence.iter())
            .all(|b| DNA_ALPHABET.as_bytes().contains(b)));
        assert_eq!(batch[0].id, "random_1");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = RandomDnaSource::new(4, 50, "AC", Some(42)).unwrap().sequences().unwrap();
        let b = RandomDnaSource::new(4, 50, "AC", Some(42)).unwrap().sequences().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(matches!(
            RandomDnaSource::new(2, 10, "", None),
            Err(SourceError::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_non_ascii_alphabet_rejected() {
        match RandomDnaSource::new(1, 200, "ÅC", Some(1)) {
            Err(SourceError::NonAsciiAlphabet(alphabet)) => assert_eq!(alphabet, "ÅC"),
            other => panic!("expected NonAsciiAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn test_two_symbol_alphabet_stays_within_symbols() {
        let batch = RandomDnaSource::new(1, 200, "AC", Some(1)).unwrap().sequences().unwrap();
        assert!(batch[0].sequence.iter().all(|b| *b == b'A' || *b == b'C'));
    }

    #[test]
    fn test_zero_length() {
        let batch = RandomDnaSource::new(2, 0, DNA_ALPHABET, None).unwrap().sequences().unwrap();
        assert!(batch.iter().all(|r| r.is_empty()));
    }
}
