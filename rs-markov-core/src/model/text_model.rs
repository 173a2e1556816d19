use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info};
use rand::Rng;
use regex::Regex;

use super::transition_model::TransitionModel;
use crate::error::ChainError;
use crate::io::read_text;

/// Any run of characters outside the Unicode `\w` class.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
	// Should not panic, the pattern is a literal
	Regex::new(r"\W+").unwrap()
});

/// Splits a text into words.
///
/// Splits at each run of characters that are not valid word characters.
/// Empty pieces produced at the edges of the text (leading or trailing
/// punctuation) are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
	NON_WORD
		.split(text)
		.filter(|word| !word.is_empty())
		.map(str::to_owned)
		.collect()
}

/// A transition model whose states are the words of a text.
///
/// The vocabulary (set of distinct words) becomes the state set, and the
/// ordered word list is the training sequence.
///
/// # Responsibilities
/// - Tokenize a text (or a file) into words
/// - Train the underlying [`TransitionModel`] on the word sequence
/// - Generate sentences and score them
#[derive(Clone, Debug)]
pub struct TextModel {
	/// Words of the text, in order.
	words: Vec<String>,
	model: TransitionModel<String>,
}

impl TextModel {
	/// Creates an untrained model from a text.
	pub fn new(text: &str) -> Self {
		let words = tokenize(text);
		let model = TransitionModel::new(words.iter().cloned());
		debug!("vocabulary of {} words from {} tokens", model.len(), words.len());
		Self { words, model }
	}

	/// Reads a whole file and creates an untrained model from its content.
	///
	/// # Errors
	/// Returns [`ChainError::Io`] if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, ChainError> {
		let text = read_text(&filepath)?;
		let model = Self::new(&text);
		info!(
			"loaded {}: {} words, {} distinct",
			filepath.as_ref().display(),
			model.words.len(),
			model.model.len()
		);
		Ok(model)
	}

	/// Words of the text, in order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// The underlying word-level transition model.
	pub fn model(&self) -> &TransitionModel<String> {
		&self.model
	}

	/// Trains the model on the text's own word sequence.
	///
	/// # Errors
	/// See [`TransitionModel::train`]. A text with fewer than two words is
	/// rejected with [`ChainError::InvalidInput`].
	pub fn train(&mut self) -> Result<(), ChainError> {
		self.model.train(&self.words)
	}

	/// Generates a sentence of `nwords + 1` words starting with `first_word`.
	///
	/// `first_word` must be present in the text used to train the model.
	pub fn generate_sentence<R: Rng + ?Sized>(&self, first_word: &str, nwords: usize, rng: &mut R) -> Result<Vec<String>, ChainError> {
		self.model.generate_chain(&first_word.to_owned(), nwords, rng)
	}

	/// Tokenizes `sentence` and scores the resulting word chain.
	///
	/// # Errors
	/// Returns [`ChainError::UnknownState`] when an evaluated word is not in the
	/// vocabulary (see [`TransitionModel::probability_of_chain`]).
	pub fn probability_of_sentence(&self, sentence: &str) -> Result<f64, ChainError> {
		self.model.probability_of_chain(&tokenize(sentence))
	}
}
