/// Collapses every run of whitespace (spaces, tabs, newlines) into a
/// single space and trims both ends.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub(crate) fn normalize_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}
