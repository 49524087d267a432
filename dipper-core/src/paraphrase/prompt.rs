/// Assembles the prompt for one window.
///
/// Layout: `lexical = {lex}, order = {ord}` control codes, then the
/// current conditioning prefix (skipped when empty), then the window text
/// wrapped in `<sent> ... </sent>`. Only the marked span is rewritten;
/// everything before it is conditioning context.
pub(crate) fn build_prompt(lex_code: u8, order_code: u8, prefix: &str, window_text: &str) -> String {
	let mut prompt = format!("lexical = {lex_code}, order = {order_code}");
	if !prefix.is_empty() {
		prompt.push(' ');
		prompt.push_str(prefix);
	}
	prompt.push_str(" <sent> ");
	prompt.push_str(window_text);
	prompt.push_str(" </sent>");
	prompt
}
