//! Top-level module for the Markov chain engine.
//!
//! This module provides:
//! - A generic first-order transition model (`TransitionModel`)
//! - Its sparse row representation (`Row`)
//! - A word-level text layer built on top of it (`TextModel`)

/// Generic first-order Markov chain over a fixed state set.
///
/// Handles training, global normalization, weighted sampling,
/// chain generation and chain scoring.
pub mod transition_model;

/// Sparse outgoing edges of a single state.
///
/// Tracks transition weights in a stable order and supports weighted
/// random sampling.
pub mod row;

/// Word-level layer: tokenizes text and wires it into a `TransitionModel`.
pub mod text_model;
