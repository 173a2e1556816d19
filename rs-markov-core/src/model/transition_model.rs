use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use rand::Rng;

use super::row::Row;
use crate::error::ChainError;

/// Upper bound on the up-front allocation of a generated chain.
const MAX_RESERVED: usize = 1024;

/// Represents a first-order Markov chain over a fixed set of states.
///
/// The model stores one sparse [`Row`] per state. Instead of a square 2D
/// array, the matrix is a map of rows, each row mapping a destination to
/// its weight:
///
/// ```text
///       +-----+-----+-----+
///       |  A  |  B  |  C  |
/// +-----+-----+-----+-----+
/// |  A  |  a  |  b  |  c  |
/// +-----+-----+-----+-----+
/// |  B  |  d  |  e  |  f  |
/// +-----+-----+-----+-----+
/// |  C  |  g  |  h  |  i  |
/// +-----+-----+-----+-----+
/// ```
///
/// where `b` is the weight of the transition `A -> B`. Absent cells are 0.
///
/// # Responsibilities
/// - Count transitions from a training sequence
/// - Normalize counts by the total number of transitions in that sequence
/// - Generate chains by weighted random sampling
/// - Score a chain as the product of its edge weights
///
/// # Invariants
/// - Every state given at construction has exactly one row, never removed
/// - Rows hold raw counts before `train`, and counts divided by the global
///   number of training transitions afterwards. A row therefore sums to its
///   share of all transitions, not to 1.
/// - `train` succeeds at most once
#[derive(Clone, Debug)]
pub struct TransitionModel<S> {
	/// Mapping from a source state to its outgoing edges.
	matrix: HashMap<S, Row<S>>,

	/// Number of transitions observed by training (0 while untrained).
	transitions: usize,

	trained: bool,
}

impl<S: Eq + Hash + Clone + Debug> TransitionModel<S> {
	/// Creates a model with one empty row per state.
	///
	/// Duplicate states are collapsed. An empty input yields a model with no rows.
	pub fn new<I: IntoIterator<Item = S>>(states: I) -> Self {
		let mut matrix = HashMap::new();
		for state in states {
			matrix.entry(state).or_insert_with(Row::new);
		}
		Self { matrix, transitions: 0, trained: false }
	}

	/// Iterates over every known state, in no particular order.
	pub fn states(&self) -> impl Iterator<Item = &S> {
		self.matrix.keys()
	}

	/// Number of known states.
	pub fn len(&self) -> usize {
		self.matrix.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matrix.is_empty()
	}

	/// Returns `true` if `state` belongs to the state set.
	pub fn contains(&self, state: &S) -> bool {
		self.matrix.contains_key(state)
	}

	/// Returns `true` once `train` has succeeded.
	pub fn is_trained(&self) -> bool {
		self.trained
	}

	/// Number of transitions seen by training, used as the normalization denominator.
	pub fn transition_count(&self) -> usize {
		self.transitions
	}

	/// Returns the outgoing edges of `state`, `None` for an unknown state.
	pub fn row(&self, state: &S) -> Option<&Row<S>> {
		self.matrix.get(state)
	}

	/// Returns the weight of the edge `from -> to`.
	///
	/// # Errors
	/// Returns [`ChainError::UnknownState`] if `from` is not a known state.
	pub fn weight(&self, from: &S, to: &S) -> Result<f64, ChainError> {
		self.matrix
			.get(from)
			.map(|row| row.weight(to))
			.ok_or_else(|| ChainError::unknown_state(from))
	}

	/// Trains the model on an ordered sequence of states.
	///
	/// Every consecutive pair `(s1, s2)` increments the edge `s1 -> s2`, then
	/// every weight is divided by `sequence.len() - 1`, the total number of
	/// transitions in the sequence. Rows are deliberately not normalized
	/// individually.
	///
	/// The model is left untouched when an error is returned.
	///
	/// # Errors
	/// - [`ChainError::AlreadyTrained`] on a second call.
	/// - [`ChainError::InvalidInput`] if the sequence has fewer than 2 states.
	/// - [`ChainError::UnknownState`] if the sequence contains a state outside the set.
	pub fn train(&mut self, sequence: &[S]) -> Result<(), ChainError> {
		if self.trained {
			return Err(ChainError::AlreadyTrained);
		}
		if sequence.len() < 2 {
			return Err(ChainError::InvalidInput { len: sequence.len() });
		}
		if let Some(unknown) = sequence.iter().find(|state| !self.matrix.contains_key(*state)) {
			return Err(ChainError::unknown_state(unknown));
		}

		let transitions = sequence.len() - 1;
		self.count_transitions(sequence);
		self.normalize(transitions);

		self.transitions = transitions;
		self.trained = true;
		debug!(
			"trained on {} transitions over {} states",
			transitions,
			self.matrix.len()
		);
		Ok(())
	}

	/// Accumulates raw transition counts. Every state must already have a row.
	fn count_transitions(&mut self, sequence: &[S]) {
		for pair in sequence.windows(2) {
			if let Some(row) = self.matrix.get_mut(&pair[0]) {
				row.add_transition(&pair[1]);
			}
		}
	}

	/// Divides every weight by the global number of transitions.
	fn normalize(&mut self, transitions: usize) {
		let factor = 1.0 / transitions as f64;
		for row in self.matrix.values_mut() {
			row.scale(factor);
		}
	}

	/// Draws the state following `current` according to its row's weights.
	///
	/// # Errors
	/// - [`ChainError::UnknownState`] if `current` is not a known state.
	/// - [`ChainError::NoTransitions`] if its row is empty or weighs 0.
	pub fn next_state<R: Rng + ?Sized>(&self, current: &S, rng: &mut R) -> Result<&S, ChainError> {
		let row = self.matrix.get(current).ok_or_else(|| ChainError::unknown_state(current))?;
		let next = row.sample(rng).ok_or_else(|| ChainError::no_transitions(current))?;
		trace!("{:?} -> {:?}", current, next);
		Ok(next)
	}

	/// Generates a chain of `length + 1` states starting with `start`.
	///
	/// Each step feeds the previously drawn state back into [`Self::next_state`].
	/// No partial chain is returned: the first failing step aborts the whole call.
	///
	/// # Errors
	/// - [`ChainError::UnknownState`] if `start` is not a known state.
	/// - [`ChainError::NoTransitions`] if a state without outgoing edges is
	///   reached before `length` steps.
	pub fn generate_chain<R: Rng + ?Sized>(&self, start: &S, length: usize, rng: &mut R) -> Result<Vec<S>, ChainError> {
		let (mut current, _) = self
			.matrix
			.get_key_value(start)
			.ok_or_else(|| ChainError::unknown_state(start))?;

		// Capped: `length` is caller supplied.
		let mut chain = Vec::with_capacity(length.saturating_add(1).min(MAX_RESERVED));
		chain.push(current.clone());
		for step in 0..length {
			current = self.next_state(current, rng).inspect_err(|e| {
				debug!("chain from {:?} stopped after {} of {} steps: {}", start, step, length, e);
			})?;
			chain.push(current.clone());
		}
		Ok(chain)
	}

	/// Scores a chain as the product of the weights of its consecutive edges.
	///
	/// - An empty chain scores 0.
	/// - A single state scores 1 if known, 0 otherwise.
	/// - Otherwise the first missing edge short-circuits to 0.
	///
	/// Since rows are normalized globally, the result is a product of
	/// joint-frequency weights and is not a conditional probability.
	///
	/// # Errors
	/// Returns [`ChainError::UnknownState`] if the source of an evaluated
	/// pair is not a known state.
	pub fn probability_of_chain(&self, sequence: &[S]) -> Result<f64, ChainError> {
		match sequence {
			[] => Ok(0.0),
			[only] => Ok(if self.contains(only) { 1.0 } else { 0.0 }),
			_ => {
				let mut probability = 1.0;
				for pair in sequence.windows(2) {
					let weight = self.weight(&pair[0], &pair[1])?;
					if weight == 0.0 {
						return Ok(0.0);
					}
					probability *= weight;
				}
				Ok(probability)
			}
		}
	}
}
