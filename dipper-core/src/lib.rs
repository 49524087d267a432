//! Sliding-window paraphrasing library.
//!
//! This crate provides the control layer of a DIPPER-style paraphraser:
//! - Sentence windowing with an evolving conditioning prefix
//! - Diversity dials translated into model control codes
//! - Prompt assembly with `<sent> ... </sent>` rewrite markers
//! - Injectable collaborators for text generation and sentence splitting
//!
//! The heavyweight parts (the generation model itself, sentence boundary
//! detection beyond a simple rule-based default) live behind traits and
//! are supplied by the host process. Only the high-level API is exposed
//! publicly; internal text utilities are kept private.

/// Paraphrase controller, parameters and collaborator contracts.
///
/// This module exposes the high-level paraphrasing interface while keeping
/// prompt assembly and window slicing private.
pub mod paraphrase;

/// Text utilities (whitespace normalization).
///
/// Not exposed
pub(crate) mod text;
