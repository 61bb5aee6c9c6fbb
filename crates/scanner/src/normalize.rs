//! Canonical single-line form of matched signatures.

use std::borrow::Cow;

/// Removes `/* ... */` spans left to right.
///
/// An opener without a closer stops stripping; the rest is kept verbatim.
pub fn strip_block_comments(raw: &str) -> Cow<'_, str> {
	if !raw.contains("/*") {
		return Cow::Borrowed(raw);
	}

	let mut out = String::with_capacity(raw.len());
	let mut rest = raw;
	while let Some(open) = rest.find("/*") {
		let Some(close) = rest[open + 2..].find("*/") else {
			break;
		};
		out.push_str(&rest[..open]);
		rest = &rest[open + 2 + close + 2..];
	}
	out.push_str(rest);
	Cow::Owned(out)
}

/// Normalizes a raw match into a single-line signature.
///
/// Strips block comments, drops `\r` and `{`, turns newlines and tabs into
/// spaces, collapses space runs, removes every trim token and trims the ends.
/// Removing a token can join two spaces or expose a new comment, so the pass
/// repeats until the output stops changing.
pub fn normalize(raw: &str, trim_tokens: &[String]) -> String {
	let mut current = normalize_once(raw, trim_tokens);
	loop {
		let next = normalize_once(&current, trim_tokens);
		if next == current {
			return current;
		}
		current = next;
	}
}

fn normalize_once(raw: &str, trim_tokens: &[String]) -> String {
	let stripped = strip_block_comments(raw);

	let mut out = String::with_capacity(stripped.len());
	for c in stripped.chars() {
		match c {
			'\r' | '{' => {}
			'\n' | '\t' | ' ' => {
				if !out.ends_with(' ') {
					out.push(' ');
				}
			}
			c => out.push(c),
		}
	}

	for token in trim_tokens.iter().filter(|t| !t.is_empty()) {
		if out.contains(token.as_str()) {
			out = out.replace(token.as_str(), "");
		}
	}

	out.trim().to_owned()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn tokens(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn strips_comments() {
		assert_eq!(strip_block_comments("Hello/* there */world"), "Helloworld");
		assert_eq!(strip_block_comments("a/*1*/b/*2*/c"), "abc");
	}

	#[test]
	fn unmatched_comment_opener_stops_stripping() {
		assert_eq!(strip_block_comments("a/*1*/b/* open"), "ab/* open");
	}

	#[test]
	fn flattens_whitespace_and_braces() {
		let raw = "static int\r\n\tadd(int a,\n    int b)\n{";
		assert_eq!(normalize(raw, &[]), "static int add(int a, int b)");
	}

	#[test]
	fn removes_trim_tokens_everywhere() {
		let raw = "LRESULT CALLBACK WndProc(HWND h, UINT CALLBACK)";
		assert_eq!(
			normalize(raw, &tokens(&["CALLBACK"])),
			"LRESULT WndProc(HWND h, UINT )"
		);
	}

	#[test]
	fn token_removal_does_not_leave_double_spaces() {
		let raw = "int WINAPI main(void)";
		assert_eq!(normalize(raw, &tokens(&["WINAPI"])), "int main(void)");
	}

	#[test]
	fn empty_tokens_are_ignored() {
		assert_eq!(normalize(" f() ", &tokens(&[""])), "f()");
	}

	proptest! {
		#[test]
		fn normalize_is_idempotent(
			raw in "[a-z(){}*/ \t\r\n;:,&]{0,40}",
			tok in prop::collection::vec("[a-z*/ ]{0,3}", 0..3),
		) {
			let once = normalize(&raw, &tok);
			let twice = normalize(&once, &tok);
			prop_assert_eq!(once, twice);
		}

		#[test]
		fn normalized_output_is_single_line(raw in "\\PC{0,60}") {
			let out = normalize(&raw, &[]);
			let single_line = !out.contains(['\n', '\r', '\t', '{']);
			let collapsed = !out.contains("  ");
			prop_assert!(single_line, "unflattened output {:?}", out);
			prop_assert!(collapsed, "double space in {:?}", out);
			prop_assert_eq!(out.trim(), out.as_str());
		}
	}
}
