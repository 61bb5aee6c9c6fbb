//! Match extraction shared by the incremental and on-demand scanners.

use std::ops::Range;

use regex::Regex;

use crate::TextAccess;

/// A regex match believed to denote a function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
	/// Matched text with the leading noise run removed.
	pub text: String,
	/// 0-based line of the first byte after the leading noise.
	pub line: usize,
	/// Byte offset the next search should start from.
	///
	/// Always past the match; empty matches advance by one char.
	pub resume: usize,
}

/// Characters skipped at the start of a match.
///
/// Function regexes commonly anchor on the end of the previous statement or
/// block, so matches tend to begin with a `}` or `;` and some whitespace.
pub fn is_leading_noise(c: char) -> bool {
	matches!(c, '\r' | '\n' | ';' | '}' | ' ' | '\t')
}

/// Finds the next match of `re` within `range`.
///
/// `re` is used exactly as compiled; language rules compile it case-sensitive.
/// Returns `None` once no match remains, which is the normal end of a scan.
pub fn find_next<T>(text: &T, range: Range<usize>, re: &Regex) -> Option<Candidate>
where
	T: TextAccess + ?Sized,
{
	let found = text.search(re, range)?;
	let raw = text.text_range(found.clone());
	let stripped = raw.trim_start_matches(is_leading_noise);
	let start = found.start + (raw.len() - stripped.len());
	let resume = if found.is_empty() {
		text.next_char_boundary(found.end)
	} else {
		found.end
	};

	Some(Candidate {
		text: stripped.to_owned(),
		line: text.line_from_byte(start),
		resume,
	})
}
