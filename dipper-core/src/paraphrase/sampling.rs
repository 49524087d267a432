use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default number of sentences per window.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Default style prefix seeding the conditioning context.
pub const DEFAULT_STYLE_PREFIX: &str = "Paraphrasing";

/// Decoding controls forwarded verbatim to the generation engine.
///
/// The controller interprets none of these: recognized knobs get named
/// fields, anything engine-native rides along in `extra`. Absent fields
/// are omitted on the wire so the engine applies its own defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SamplingOptions {
	/// Sampled decoding when `true`, deterministic when `false`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub do_sample: Option<bool>,

	/// Nucleus sampling threshold.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub top_p: Option<f32>,

	/// Top-k cutoff.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub top_k: Option<u32>,

	/// Maximum output length in engine tokens.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_length: Option<u32>,

	/// Any further engine-native decoding options, passed through as-is.
	#[serde(flatten)]
	pub extra: HashMap<String, Value>,
}

/// Input parameters for one paraphrase call.
///
/// `ParaphraseRequest` carries both the **algorithm parameters** (diversity
/// dials, style prefix, window size) and the **pass-through sampling
/// options** handed to the engine untouched.
///
/// # Responsibilities
/// - Hold the two diversity dials; validation happens in the controller,
///   before any engine work.
/// - Hold the style prefix seeding the conditioning context.
/// - Hold the optional prefix cap (see `max_prefix_chars`).
///
/// # Notes
/// - `Default` mirrors the original front-end defaults: lexical 80,
///   order 60, prefix "Paraphrasing", windows of 3, sampled decoding with
///   top_p 0.75, top_k 50, max_length 512.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ParaphraseRequest {
	/// Lexical diversity dial; must be one of 0, 20, 40, 60, 80, 100.
	pub lex_diversity: u8,

	/// Word-order diversity dial; must be one of 0, 20, 40, 60, 80, 100.
	pub order_diversity: u8,

	/// Style prefix seeding the conditioning context; whitespace is
	/// normalized before use. May be empty.
	pub style_prefix: String,

	/// Sentences per window; must be at least 1.
	pub window_size: usize,

	/// Optional cap on the conditioning prefix, in characters.
	///
	/// By default (`None`) the prefix grows without bound, exactly like the
	/// original: every generated window is appended and nothing is ever
	/// dropped, so prompts lengthen with input size. Setting a cap drops
	/// the OLDEST prefix text once the limit is exceeded. The assembled
	/// output is unaffected either way.
	pub max_prefix_chars: Option<usize>,

	/// Decoding options forwarded to the engine.
	pub sampling: SamplingOptions,
}

impl Default for ParaphraseRequest {
	fn default() -> Self {
		Self {
			lex_diversity: 80,
			order_diversity: 60,
			style_prefix: DEFAULT_STYLE_PREFIX.to_owned(),
			window_size: DEFAULT_WINDOW_SIZE,
			max_prefix_chars: None,
			sampling: SamplingOptions {
				do_sample: Some(true),
				top_p: Some(0.75),
				top_k: Some(50),
				max_length: Some(512),
				extra: HashMap::new(),
			},
		}
	}
}
