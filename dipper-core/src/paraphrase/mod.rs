//! Top-level module for the paraphrasing system.
//!
//! This crate paraphrases text window by window, including:
//! - The windowing/prefix controller (`Paraphraser`)
//! - Diversity dials and control codes (`Diversity`)
//! - Request parameters and sampling pass-through (`ParaphraseRequest`)
//! - Collaborator contracts (`GenerationEngine`, `SentenceSegmenter`)
//! - A typed error taxonomy (`ParaphraseError`)

/// High-level interface driving the window-by-window paraphrase loop.
///
/// Exposes collaborator injection and the `paraphrase` entry point with
/// prefix accumulation across windows.
pub mod controller;

/// Diversity dial values and their inverted control codes.
///
/// Only the six values 0, 20, 40, 60, 80, 100 are accepted.
pub mod diversity;

/// Contract for the external text-generation engine.
///
/// One prompt in, a candidate list out; the controller uses the first.
pub mod engine;

/// Error taxonomy for the paraphrase pipeline.
pub mod error;

/// Request parameters and sampling options passed through to the engine.
pub mod sampling;

/// Sentence segmentation contract and a rule-based default.
pub mod segment;

/// Internal prompt assembly (control codes, prefix, `<sent>` markers).
///
/// This module is not exposed publicly.
mod prompt;

/// Internal sentence-window slicing.
///
/// This module is not exposed publicly.
mod window;
