use thiserror::Error;

use crate::paraphrase::diversity::DiversityKind;

/// Error type produced by the injected collaborators (engine, segmenter).
///
/// Collaborators are host-supplied, so their failures are carried opaquely
/// and wrapped into [`ParaphraseError`] by the controller.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of one paraphrase call.
///
/// Parameter errors are raised before any collaborator work; collaborator
/// errors abort the call immediately. There is no retry and no
/// partial-success return: a failed window invalidates the whole result.
#[derive(Debug, Error)]
pub enum ParaphraseError {
	/// A diversity dial was set to a value outside 0, 20, 40, 60, 80, 100.
	#[error("{kind} diversity must be one of 0, 20, 40, 60, 80, 100, got {value}")]
	InvalidDiversity { kind: DiversityKind, value: u8 },

	/// The window size was zero.
	#[error("window size must be at least 1")]
	InvalidWindowSize,

	/// The sentence segmenter could not process the input.
	#[error("sentence segmentation failed: {source}")]
	Segmentation {
		#[source]
		source: EngineError,
	},

	/// The generation engine failed, or returned no candidates, on the
	/// given zero-based window index. Remaining windows are not attempted.
	#[error("generation failed on window {window}: {source}")]
	Generation {
		window: usize,
		#[source]
		source: EngineError,
	},
}
