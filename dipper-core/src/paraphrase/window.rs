/// Walks the sentence list in steps of `window_size`, yielding each
/// window's sentences joined by single spaces.
///
/// Windows are contiguous, non-overlapping and gap-free, in original
/// order; the final window holds the remainder and may be shorter.
pub(crate) fn sentence_windows(
	sentences: &[String],
	window_size: usize,
) -> impl Iterator<Item = String> + '_ {
	sentences.chunks(window_size).map(|window| window.join(" "))
}
