//! First-order Markov chain library.
//!
//! This crate provides:
//! - A generic transition model over any hashable state type
//! - Training with global (whole-sequence) normalization
//! - Weighted random generation driven by an injected RNG
//! - Chain scoring
//! - A text layer using words as states
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rs_markov_core::TransitionModel;
//!
//! let sequence = ['A', 'B', 'A', 'B'];
//! let mut model = TransitionModel::new(sequence);
//! model.train(&sequence).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let chain = model.generate_chain(&'A', 3, &mut rng).unwrap();
//! assert_eq!(chain, vec!['A', 'B', 'A', 'B']);
//! ```

/// Transition models and the text layer.
pub mod model;

/// Error type shared by every fallible operation.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::ChainError;
pub use model::row::Row;
pub use model::text_model::{TextModel, tokenize};
pub use model::transition_model::TransitionModel;
