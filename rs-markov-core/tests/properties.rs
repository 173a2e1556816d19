//! Property-based tests for the transition model.
//!
//! These tests use proptest to verify invariants hold across
//! many randomly generated training sequences.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{ChainError, TransitionModel};

prop_compose! {
	/// A training sequence over a small alphabet, long enough to train on.
	fn arbitrary_sequence()(sequence in prop::collection::vec(0u8..6, 2..60)) -> Vec<u8> {
		sequence
	}
}

fn trained(sequence: &[u8]) -> TransitionModel<u8> {
	let mut model = TransitionModel::new(sequence.iter().copied());
	model.train(sequence).unwrap();
	model
}

proptest! {
	#[test]
	fn weights_sum_to_one_over_the_matrix(sequence in arbitrary_sequence()) {
		let model = trained(&sequence);
		let total: f64 = model.states().map(|s| model.row(s).unwrap().total()).sum();
		prop_assert!((total - 1.0).abs() < 1e-9);
	}

	#[test]
	fn weights_are_counts_over_transitions(sequence in arbitrary_sequence()) {
		let model = trained(&sequence);
		let transitions = (sequence.len() - 1) as f64;
		for pair in sequence.windows(2) {
			let count = sequence
				.windows(2)
				.filter(|other| other == &pair)
				.count() as f64;
			let weight = model.weight(&pair[0], &pair[1]).unwrap();
			prop_assert!((weight - count / transitions).abs() < 1e-12);
		}
	}

	#[test]
	fn generated_chain_has_requested_length(
		sequence in arbitrary_sequence(),
		length in 0usize..40,
		seed in any::<u64>(),
	) {
		let model = trained(&sequence);
		let mut rng = StdRng::seed_from_u64(seed);
		match model.generate_chain(&sequence[0], length, &mut rng) {
			Ok(chain) => {
				prop_assert_eq!(chain.len(), length + 1);
				prop_assert_eq!(chain[0], sequence[0]);
			}
			Err(ChainError::NoTransitions { .. }) => {
				// Only the last state of the sequence can be a dead end.
				let last = *sequence.last().unwrap();
				prop_assert!(model.row(&last).unwrap().is_empty());
			}
			Err(e) => prop_assert!(false, "unexpected error: {}", e),
		}
	}

	#[test]
	fn training_sequence_scores_positive(sequence in arbitrary_sequence()) {
		let model = trained(&sequence);
		let p = model.probability_of_chain(&sequence).unwrap();
		prop_assert!(p > 0.0);
	}

	#[test]
	fn singleton_scores_one_iff_known(state in 0u8..12, sequence in arbitrary_sequence()) {
		let model = trained(&sequence);
		let expected = if sequence.contains(&state) { 1.0 } else { 0.0 };
		prop_assert_eq!(model.probability_of_chain(&[state]).unwrap(), expected);
	}
}
