//! Error types for the rs-markov-core crate.

/// Error type for all fallible operations on a transition model.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
	/// Returned when an operation references a state outside the model's state set.
	#[error("unknown state: {state}")]
	UnknownState {
		/// `Debug` rendering of the offending state.
		state: String,
	},

	/// Returned when training is given fewer than two states.
	#[error("invalid training input: got {len} states, need at least 2")]
	InvalidInput {
		/// Length of the rejected sequence.
		len: usize,
	},

	/// Returned when sampling from a state whose row has zero total weight.
	#[error("no outgoing transitions from state {state}")]
	NoTransitions {
		/// `Debug` rendering of the state.
		state: String,
	},

	/// Returned when `train` is called on a model that was already trained.
	#[error("model is already trained")]
	AlreadyTrained,

	/// Returned when a training text cannot be read.
	#[error("failed to read input: {0}")]
	Io(#[from] std::io::Error),
}

impl ChainError {
	pub(crate) fn unknown_state<S: std::fmt::Debug>(state: &S) -> Self {
		Self::UnknownState { state: format!("{state:?}") }
	}

	pub(crate) fn no_transitions<S: std::fmt::Debug>(state: &S) -> Self {
		Self::NoTransitions { state: format!("{state:?}") }
	}
}
