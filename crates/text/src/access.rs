use std::ops::Range;

use regex::Regex;

/// Read-only view over a document's text buffer.
///
/// A scan calls [`TextAccess::search`] and [`TextAccess::line_from_byte`] once
/// per match, so neither may cost time proportional to the whole document.
///
/// All offsets are byte offsets into the UTF-8 text. Ranges passed in must lie
/// on char boundaries; the scanners only ever derive them from previous match
/// boundaries or [`TextAccess::next_char_boundary`].
pub trait TextAccess {
	/// Length of the document in bytes.
	fn len_bytes(&self) -> usize;

	/// 0-based line containing byte `pos` (clamped to the document end).
	fn line_from_byte(&self, pos: usize) -> usize;

	/// First match of `re` starting inside `range`, as absolute byte offsets.
	///
	/// Text before `range.start` may be consulted as look-behind context for
	/// anchors such as `^` and `\b`, but a match never starts before it nor
	/// extends past `range.end`.
	fn search(&self, re: &Regex, range: Range<usize>) -> Option<Range<usize>>;

	/// Copies the text in `range`.
	fn text_range(&self, range: Range<usize>) -> String;

	/// Smallest char boundary strictly after `pos`, or the document length.
	fn next_char_boundary(&self, pos: usize) -> usize;
}
