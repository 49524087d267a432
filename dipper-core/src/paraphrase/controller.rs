use log::debug;

use crate::paraphrase::diversity::{Diversity, DiversityKind};
use crate::paraphrase::engine::GenerationEngine;
use crate::paraphrase::error::ParaphraseError;
use crate::paraphrase::prompt::build_prompt;
use crate::paraphrase::sampling::ParaphraseRequest;
use crate::paraphrase::segment::{RuleSegmenter, SentenceSegmenter};
use crate::paraphrase::window::sentence_windows;
use crate::text::normalize_whitespace;

/// High-level controller driving the window-by-window paraphrase loop.
///
/// # Responsibilities
/// - Validate diversity dials and window size before any collaborator work
/// - Normalize input and style prefix, segment into ordered sentences
/// - Slice sentences into fixed-size windows and paraphrase them in order,
///   threading each window's output back in as conditioning context
///
/// # Invariants
/// - Windows are processed strictly sequentially: each prompt embeds the
///   previous window's output through the prefix, a genuine data
///   dependency, so the loop cannot be parallelized without changing the
///   result.
/// - A failed window aborts the call; partial output is never returned.
///
/// Both collaborators are injected; the controller never constructs an
/// engine itself, so a test double slots in without ceremony.
pub struct Paraphraser<E, S = RuleSegmenter> {
	engine: E,
	segmenter: S,
}

impl<E: GenerationEngine> Paraphraser<E> {
	/// Creates a controller around `engine` with the default rule-based
	/// sentence segmenter.
	pub fn new(engine: E) -> Self {
		Self {
			engine,
			segmenter: RuleSegmenter::new(),
		}
	}
}

impl<E: GenerationEngine, S: SentenceSegmenter> Paraphraser<E, S> {
	/// Creates a controller with an explicit sentence segmenter.
	pub fn with_segmenter(engine: E, segmenter: S) -> Self {
		Self { engine, segmenter }
	}

	/// Paraphrases `input_text` window by window.
	///
	/// # Parameters
	/// - `input_text`: Text to paraphrase; may be empty. Whitespace runs
	///   are collapsed before segmentation.
	/// - `request`: Diversity dials, style prefix, window size and
	///   sampling options (see `ParaphraseRequest`).
	///
	/// # Behavior
	/// - Sentences are sliced into consecutive windows of
	///   `request.window_size`; the last window may be shorter.
	/// - Each window's prompt carries the control codes, the current
	///   prefix (style prefix plus all previously generated text) and the
	///   window's sentences inside `<sent> ... </sent>` markers.
	/// - Each window's output is appended to both the prefix and the
	///   returned string.
	///
	/// # Returns
	/// The generated windows joined in order, each preceded by a single
	/// space. The leading space is preserved; callers wanting a clean
	/// string trim it. Empty or whitespace-only input returns an empty
	/// string without calling the engine.
	///
	/// # Errors
	/// - `InvalidDiversity` / `InvalidWindowSize` before any engine or
	///   segmenter work.
	/// - `Segmentation` if the segmenter fails, propagated unmodified.
	/// - `Generation` if any engine call fails or returns no candidates;
	///   remaining windows are not attempted.
	pub fn paraphrase(
		&mut self,
		input_text: &str,
		request: &ParaphraseRequest,
	) -> Result<String, ParaphraseError> {
		let lex = Diversity::new(DiversityKind::Lexical, request.lex_diversity)?;
		let order = Diversity::new(DiversityKind::Order, request.order_diversity)?;
		if request.window_size == 0 {
			return Err(ParaphraseError::InvalidWindowSize);
		}

		let input = normalize_whitespace(input_text);
		if input.is_empty() {
			return Ok(String::new());
		}

		let sentences = self
			.segmenter
			.segment(&input)
			.map_err(|source| ParaphraseError::Segmentation { source })?;
		if sentences.is_empty() {
			return Ok(String::new());
		}

		debug!(
			"paraphrasing {} sentences in windows of {} (lexical code {}, order code {})",
			sentences.len(),
			request.window_size,
			lex.control_code(),
			order.control_code()
		);

		// Fold over windows: prefix is the only carried state.
		let mut prefix = normalize_whitespace(&request.style_prefix);
		let mut output = String::new();

		let windows: Vec<String> = sentence_windows(&sentences, request.window_size).collect();
		for (index, window_text) in windows.iter().enumerate() {
			let generated = self.step(index, lex, order, &prefix, window_text, request)?;

			prefix.push(' ');
			prefix.push_str(&generated);
			if let Some(cap) = request.max_prefix_chars {
				cap_prefix(&mut prefix, cap);
			}

			output.push(' ');
			output.push_str(&generated);
		}

		Ok(output)
	}

	/// One step of the fold: builds the prompt from the current prefix
	/// accumulator, submits it, and returns the engine's first candidate.
	fn step(
		&mut self,
		window: usize,
		lex: Diversity,
		order: Diversity,
		prefix: &str,
		window_text: &str,
		request: &ParaphraseRequest,
	) -> Result<String, ParaphraseError> {
		let prompt = build_prompt(lex.control_code(), order.control_code(), prefix, window_text);
		debug!("window {window}: prompt is {} chars", prompt.chars().count());

		let mut candidates = self
			.engine
			.generate(&prompt, &request.sampling)
			.map_err(|source| ParaphraseError::Generation { window, source })?;

		if candidates.is_empty() {
			return Err(ParaphraseError::Generation {
				window,
				source: "engine returned no candidates".into(),
			});
		}

		// First candidate, deterministically
		Ok(candidates.swap_remove(0))
	}
}

/// Keeps at most `max_chars` characters of the most recent prefix text,
/// dropping the oldest text at a character boundary.
fn cap_prefix(prefix: &mut String, max_chars: usize) {
	let total = prefix.chars().count();
	if total <= max_chars {
		return;
	}
	let split = prefix
		.char_indices()
		.nth(total - max_chars)
		.map(|(index, _)| index)
		.unwrap_or(0);
	prefix.drain(..split);
}
