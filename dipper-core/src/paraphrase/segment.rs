use once_cell::sync::Lazy;
use regex::Regex;

use crate::paraphrase::error::EngineError;

/// Contract for sentence boundary detection.
///
/// Output order must match input order: windows are positional, so the
/// controller relies on the sequence, not on sentence content. No other
/// contract is assumed; segmentation quality directly determines window
/// contents.
pub trait SentenceSegmenter {
	/// Splits `text` into an ordered sequence of sentences.
	///
	/// # Errors
	/// Implementations that can fail (unsupported encodings, external
	/// tooling) return an opaque [`EngineError`]; it is propagated to the
	/// caller unmodified.
	fn segment(&self, text: &str) -> Result<Vec<String>, EngineError>;
}

/// Sentence-final punctuation, optional closing quote or bracket, then
/// whitespace. Decimal points never match: no whitespace follows them.
static SENTENCE_BOUNDARY: Lazy<Regex> =
	Lazy::new(|| Regex::new(r#"[.!?]+["')\]]*\s+"#).expect("sentence boundary regex"));

/// Tokens that end with a period without ending a sentence.
const ABBREVIATIONS: [&str; 12] = [
	"Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "St.", "vs.", "etc.", "e.g.", "i.e.", "Fig.", "No.",
];

/// Rule-based sentence segmenter used when the host supplies nothing
/// smarter.
///
/// Splits after `.`, `!` or `?` (plus any closing quotes or brackets)
/// followed by whitespace, unless the preceding token is a known
/// abbreviation. Trailing text without a terminator forms the final
/// sentence. Deliberately modest: language-aware segmentation plugs in
/// behind [`SentenceSegmenter`] instead.
#[derive(Clone, Debug, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
	pub fn new() -> Self {
		Self
	}
}

fn is_abbreviation(token: &str) -> bool {
	ABBREVIATIONS.iter().any(|abbr| token.eq_ignore_ascii_case(abbr))
}

impl SentenceSegmenter for RuleSegmenter {
	fn segment(&self, text: &str) -> Result<Vec<String>, EngineError> {
		let mut sentences = Vec::new();
		let mut start = 0;

		for boundary in SENTENCE_BOUNDARY.find_iter(text) {
			let candidate = text[start..boundary.end()].trim();
			let last_token = candidate.rsplit(' ').next().unwrap_or(candidate);
			if is_abbreviation(last_token) {
				// Not a boundary, keep scanning
				continue;
			}
			sentences.push(candidate.to_owned());
			start = boundary.end();
		}

		let tail = text[start..].trim();
		if !tail.is_empty() {
			sentences.push(tail.to_owned());
		}

		Ok(sentences)
	}
}
