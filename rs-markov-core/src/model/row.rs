use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;


/// Represents the outgoing edges of one state in a transition matrix.
///
/// A `Row` is sparse: a destination that was never observed is simply absent
/// and reads as a weight of `0.0`.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations (or by a frequency once
/// the owning model has been normalized).
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during training
/// - Rescale weights during normalization
/// - Pick a destination using weighted random sampling
///
/// ## Invariants
/// - Entries are kept in first-observation order, so iteration is stable
///   for a given row and identical across processes
/// - `index[dest]` is the position of `dest` in `entries`
/// - Every stored weight is non-negative
#[derive(Clone, Debug)]
pub struct Row<S> {
	/// Outgoing transitions as `(destination, weight)`.
	/// Example: [("cat", 2.0), ("dog", 1.0)]
	entries: Vec<(S, f64)>,
	/// Position of each destination in `entries`.
	index: HashMap<S, usize>,
}

impl<S> Default for Row<S> {
	fn default() -> Self {
		Self { entries: Vec::new(), index: HashMap::new() }
	}
}

impl<S: Eq + Hash + Clone> Row<S> {
	/// Creates a new empty row.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an occurrence of a transition toward `dest`.
	///
	/// - If the transition already exists, its weight is increased by 1.
	/// - Otherwise, a new transition is created with an initial weight of 1.
	pub fn add_transition(&mut self, dest: &S) {
		match self.index.get(dest) {
			Some(&i) => self.entries[i].1 += 1.0,
			None => {
				self.index.insert(dest.clone(), self.entries.len());
				self.entries.push((dest.clone(), 1.0));
			}
		}
	}

	/// Multiplies every stored weight by `factor`.
	pub(crate) fn scale(&mut self, factor: f64) {
		for (_, weight) in &mut self.entries {
			*weight *= factor;
		}
	}

	/// Returns the weight of the edge toward `dest`, `0.0` if never observed.
	pub fn weight(&self, dest: &S) -> f64 {
		self.index.get(dest).map_or(0.0, |&i| self.entries[i].1)
	}

	/// Sum of all weights in the row.
	pub fn total(&self) -> f64 {
		self.entries.iter().map(|(_, weight)| weight).sum()
	}

	/// Number of distinct destinations.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(destination, weight)` in first-observation order.
	pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> {
		self.entries.iter().map(|(dest, weight)| (dest, *weight))
	}

	/// Picks a destination using weighted random sampling.
	///
	/// The probability of selecting a destination is proportional to its
	/// weight. Weights are not required to sum to 1.
	///
	/// This method performs:
	/// - an O(n) scan to compute the total
	/// - a draw `r` uniform in `[0, total)`
	/// - a cumulative subtraction until `r` drops to 0 or below
	///
	/// Returns `None` if the row is empty or all its weights are zero.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&S> {
		let total = self.total();
		if !(total > 0.0) {
			return None;
		}

		let mut r = rng.random_range(0.0..total);

		let mut fallback: Option<&S> = None;
		for (dest, weight) in &self.entries {
			if *weight <= 0.0 {
				continue;
			}
			r -= weight;
			if r <= 0.0 {
				return Some(dest);
			}
			fallback = Some(dest);
		}

		// Only reachable through floating point rounding on the running value.
		fallback
	}
}
