//! Property-based tests for the distance engine and batch comparison.
//!
//! These check the metric laws of unit-cost edit distance and that the two
//! table strategies and the batch driver agree with the plain function.

use proptest::prelude::*;
use seqdist::core::{DistanceTable, EngineConfig, TableStrategy};
use seqdist::{compare_batch, edit_distance, DistanceEngine, PairingPolicy};

/// DNA-like sequences, short enough to keep quadratic tables cheap.
fn arb_dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(prop::sample::select(b"ACGT".to_vec()), 0..max_len)
}

fn hamming(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn distance_to_self_is_zero(a in arb_dna(64)) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    #[test]
    fn distance_is_symmetric(a in arb_dna(48), b in arb_dna(48)) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn triangle_inequality(a in arb_dna(24), b in arb_dna(24), c in arb_dna(24)) {
        let ab = edit_distance(&a, &b);
        let bc = edit_distance(&b, &c);
        let ac = edit_distance(&a, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={} > d(a,b)+d(b,c)={}", ac, ab + bc);
    }

    /// Bounded below by the length gap and above by the longer length.
    #[test]
    fn distance_within_length_bounds(a in arb_dna(48), b in arb_dna(48)) {
        let d = edit_distance(&a, &b);
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
    }

    #[test]
    fn empty_input_costs_full_length(a in arb_dna(64)) {
        prop_assert_eq!(edit_distance(b"", &a), a.len());
        prop_assert_eq!(edit_distance(&a, b""), a.len());
    }

    /// Substitutions alone already transform equal-length inputs.
    #[test]
    fn equal_length_bounded_by_hamming(pair in (0usize..40).prop_flat_map(|n| {
        (
            proptest::collection::vec(prop::sample::select(b"ACGT".to_vec()), n),
            proptest::collection::vec(prop::sample::select(b"ACGT".to_vec()), n),
        )
    })) {
        let (a, b) = pair;
        prop_assert!(edit_distance(&a, &b) <= hamming(&a, &b));
    }

    #[test]
    fn strategies_agree(a in arb_dna(48), b in arb_dna(48)) {
        let rolling = DistanceEngine::new(EngineConfig::new(TableStrategy::Rolling, None));
        let full = DistanceEngine::new(EngineConfig::new(TableStrategy::Full, None));
        let expected = edit_distance(&a, &b);

        prop_assert_eq!(rolling.distance(&a, &b), Ok(expected));
        prop_assert_eq!(full.distance(&a, &b), Ok(expected));
        prop_assert_eq!(DistanceTable::fill(&a, &b).distance(), expected);
    }

    /// The bottom row of the full table holds distances from all of `a`
    /// to every prefix of `b`.
    #[test]
    fn table_rows_are_prefix_distances(a in arb_dna(16), b in arb_dna(16)) {
        let table = DistanceTable::fill(&a, &b);
        for j in 0..=b.len() {
            prop_assert_eq!(table.get(a.len(), j), Some(edit_distance(&a, &b[..j])));
        }
    }

    #[test]
    fn repeated_calls_are_deterministic(a in arb_dna(48), b in arb_dna(48)) {
        let engine = DistanceEngine::default();
        prop_assert_eq!(engine.distance(&a, &b), engine.distance(&a, &b));
    }

    #[test]
    fn batch_matches_pairwise(seqs in proptest::collection::vec(arb_dna(32), 0..12)) {
        let engine = DistanceEngine::default();
        let series = compare_batch::<u8, _>(&seqs, &engine, PairingPolicy::DropTrailing).unwrap();

        prop_assert_eq!(series.len(), seqs.len() / 2);
        for (k, entry) in series.entries.iter().enumerate() {
            prop_assert_eq!((entry.left, entry.right), (2 * k, 2 * k + 1));
            prop_assert_eq!(entry.distance, edit_distance(&seqs[2 * k], &seqs[2 * k + 1]));
        }
    }

    #[test]
    fn strict_rejects_only_odd_batches(seqs in proptest::collection::vec(arb_dna(16), 0..9)) {
        let engine = DistanceEngine::default();
        let result = compare_batch::<u8, _>(&seqs, &engine, PairingPolicy::Strict);
        prop_assert_eq!(result.is_ok(), seqs.len() % 2 == 0);
    }
}
