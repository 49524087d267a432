use crate::paraphrase::error::EngineError;
use crate::paraphrase::sampling::SamplingOptions;

/// Contract for the external text-to-text generation engine.
///
/// The engine receives one fully assembled prompt per window together with
/// pass-through sampling options, and decodes one batch of candidates.
///
/// # Postconditions
/// - A successful call returns at least one candidate. The controller
///   always uses the first candidate and treats an empty list as a
///   generation failure; engines that can only produce a single string
///   should return a one-element vector.
///
/// # Notes
/// - Calls are strictly sequential within one paraphrase: each prompt
///   embeds the previous call's output, so the engine never sees two
///   in-flight prompts from the same paraphrase call.
/// - The controller imposes no timeout; hosts that need one should wrap
///   it inside their `generate` implementation, where it surfaces as a
///   per-window failure.
pub trait GenerationEngine {
	/// Generates candidate rewrites for one prompt.
	///
	/// # Errors
	/// Any engine-level failure (resource exhaustion, timeout, transport,
	/// malformed response) is returned as an opaque [`EngineError`].
	fn generate(
		&mut self,
		prompt: &str,
		options: &SamplingOptions,
	) -> Result<Vec<String>, EngineError>;
}
