//! Heuristic name extraction from normalized signatures.
//!
//! The name is whatever sits between the nearest delimiter before the first
//! `(` and the `(` itself. This is knowingly imprecise: a control statement
//! such as `switch (x)` that slips through a regex parses as a function named
//! `switch`. Language regexes are expected to keep such lines out.

/// Characters that end a name when searching backward from `(`.
const NAME_DELIMITERS: [char; 5] = ['\t', ' ', ':', ',', '.'];

/// Pointer, reference and block markers glued to the front of a name.
const DECORATIONS: [char; 3] = ['*', '&', '^'];

/// Result of parsing one signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature<'a> {
	Parsed {
		name: &'a str,
		/// The signature from the name onward, e.g. `add(int a, int b)`.
		args: &'a str,
	},
	NotAFunctionLikeMatch,
}

impl<'a> Signature<'a> {
	pub fn name(&self) -> Option<&'a str> {
		match *self {
			Self::Parsed { name, .. } => Some(name),
			Self::NotAFunctionLikeMatch => None,
		}
	}
}

/// Byte span of the name within `sig`.
fn name_span(sig: &str) -> Option<(usize, usize)> {
	let paren = sig.find('(')?;
	let head = sig[..paren].trim_end();
	let start = head.rfind(NAME_DELIMITERS).map_or(0, |i| i + 1);
	let undecorated = head[start..].trim_start_matches(DECORATIONS);
	let start = head.len() - undecorated.len();
	let name = undecorated.trim();
	if name.is_empty() {
		return None;
	}
	let start = start + (undecorated.len() - undecorated.trim_start().len());
	Some((start, start + name.len()))
}

/// Extracts the symbol name, or `None` when there is no `(` or the text
/// before it yields nothing.
pub fn parse_name(sig: &str) -> Option<&str> {
	name_span(sig).map(|(start, end)| &sig[start..end])
}

/// Extracts the name together with the text that follows it.
pub fn parse_signature(sig: &str) -> Signature<'_> {
	match name_span(sig) {
		Some((start, end)) => Signature::Parsed {
			name: &sig[start..end],
			args: &sig[start..],
		},
		None => Signature::NotAFunctionLikeMatch,
	}
}
