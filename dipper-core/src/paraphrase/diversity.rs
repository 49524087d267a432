use std::fmt;

use crate::paraphrase::error::ParaphraseError;

/// Dial values accepted for both diversity settings.
pub const ALLOWED_DIVERSITIES: [u8; 6] = [0, 20, 40, 60, 80, 100];

/// Which of the two independent diversity dials a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiversityKind {
	Lexical,
	Order,
}

impl fmt::Display for DiversityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DiversityKind::Lexical => write!(f, "lexical"),
			DiversityKind::Order => write!(f, "order"),
		}
	}
}

/// A validated diversity setting.
///
/// The user-facing dial runs 0..=100 in steps of 20, where 0 asks for no
/// deviation and 100 for maximum deviation. The engine expects the scale
/// inverted, which is what [`Diversity::control_code`] produces.
///
/// # Invariants
/// - The inner value is always one of `ALLOWED_DIVERSITIES`; out-of-range
///   values are rejected at construction, never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diversity {
	kind: DiversityKind,
	value: u8,
}

impl Diversity {
	/// Validates a raw dial value.
	///
	/// # Errors
	/// Returns `ParaphraseError::InvalidDiversity` if `value` is not one of
	/// 0, 20, 40, 60, 80, 100.
	pub fn new(kind: DiversityKind, value: u8) -> Result<Self, ParaphraseError> {
		if !ALLOWED_DIVERSITIES.contains(&value) {
			return Err(ParaphraseError::InvalidDiversity { kind, value });
		}
		Ok(Self { kind, value })
	}

	/// Returns the dial value as validated.
	pub fn value(&self) -> u8 {
		self.value
	}

	/// Returns the control code sent to the engine: `100 - value`.
	///
	/// Lower dial values produce higher codes; the engine reads the code as
	/// "how much to preserve", not "how much to change".
	pub fn control_code(&self) -> u8 {
		100 - self.value
	}
}
