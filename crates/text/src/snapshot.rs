//! Flat text snapshot with a line index.

use std::ops::Range;
use std::sync::Arc;

use regex::Regex;
use ropey::Rope;

use crate::TextAccess;

/// Immutable copy of a document taken when a scan attaches.
///
/// Building it is linear in the document size. Afterwards line lookups are a
/// binary search over line starts and regex searches run on the contiguous
/// text without further copies. Clones share the text.
#[derive(Debug, Clone)]
pub struct TextSnapshot {
	text: Arc<str>,
	/// Byte offset of every line start; always begins with 0.
	line_starts: Arc<[usize]>,
}

impl TextSnapshot {
	pub fn new(text: impl Into<Arc<str>>) -> Self {
		let text = text.into();
		let line_starts = std::iter::once(0)
			.chain(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1))
			.collect();
		Self { text, line_starts }
	}

	/// Copies the rope chunk by chunk into one buffer.
	pub fn from_rope(rope: &Rope) -> Self {
		let mut text = String::with_capacity(rope.len_bytes());
		for chunk in rope.chunks() {
			text.push_str(chunk);
		}
		Self::new(text)
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	pub fn len_lines(&self) -> usize {
		self.line_starts.len()
	}
}

impl From<&str> for TextSnapshot {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for TextSnapshot {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

impl From<&Rope> for TextSnapshot {
	fn from(rope: &Rope) -> Self {
		Self::from_rope(rope)
	}
}

impl TextAccess for TextSnapshot {
	fn len_bytes(&self) -> usize {
		self.text.len()
	}

	fn line_from_byte(&self, pos: usize) -> usize {
		let pos = pos.min(self.text.len());
		self.line_starts.partition_point(|&start| start <= pos) - 1
	}

	fn search(&self, re: &Regex, range: Range<usize>) -> Option<Range<usize>> {
		let end = range.end.min(self.text.len());
		if range.start > end {
			return None;
		}
		re.find_at(&self.text[..end], range.start).map(|m| m.range())
	}

	fn text_range(&self, range: Range<usize>) -> String {
		self.text[range].to_owned()
	}

	fn next_char_boundary(&self, pos: usize) -> usize {
		let len = self.text.len();
		let mut next = pos.saturating_add(1);
		while next < len && !self.text.is_char_boundary(next) {
			next += 1;
		}
		next.min(len)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn re(p: &str) -> Regex {
		regex::RegexBuilder::new(p).multi_line(true).build().unwrap()
	}

	#[test]
	fn line_lookup() {
		let text = TextSnapshot::new("a\nbb\n\nccc");
		assert_eq!(text.len_lines(), 4);
		assert_eq!(text.line_from_byte(0), 0);
		assert_eq!(text.line_from_byte(1), 0);
		assert_eq!(text.line_from_byte(2), 1);
		assert_eq!(text.line_from_byte(5), 2);
		assert_eq!(text.line_from_byte(6), 3);
		assert_eq!(text.line_from_byte(999), 3);
	}

	#[test]
	fn line_index_agrees_with_rope() {
		let src = "fn a()\r\n{\n}\n\nfn é()\n";
		let rope = Rope::from_str(src);
		let text = TextSnapshot::from(&rope);
		assert_eq!(text.as_str(), src);
		for pos in 0..=src.len() {
			let counted = src.as_bytes()[..pos].iter().filter(|&&b| b == b'\n').count();
			assert_eq!(text.line_from_byte(pos), counted, "pos {pos}");
			if src.is_char_boundary(pos) {
				assert_eq!(text.line_from_byte(pos), rope.byte_to_line(pos), "pos {pos}");
			}
		}
	}

	#[test]
	fn rope_snapshot_spans_many_chunks() {
		let src = "int f(void) {\n}\n".repeat(5_000);
		let rope = Rope::from_str(&src);
		assert!(rope.chunks().count() > 1);
		let text = TextSnapshot::from_rope(&rope);
		assert_eq!(text.as_str(), src);
		assert_eq!(text.len_lines(), 10_001);
	}

	#[test]
	fn search_respects_range() {
		let text = TextSnapshot::from("foo bar foo");
		let r = re("foo");
		assert_eq!(text.search(&r, 0..11), Some(0..3));
		assert_eq!(text.search(&r, 1..11), Some(8..11));
		assert_eq!(text.search(&r, 1..10), None);
		assert_eq!(text.search(&r, 12..11), None);
	}

	#[test]
	fn search_keeps_line_anchor_context() {
		let text = TextSnapshot::from("xfoo\nfoo");
		// Position 1 is mid-line, so `^` must not match there.
		assert_eq!(text.search(&re("^foo"), 1..8), Some(5..8));
	}

	#[test]
	fn next_boundary_skips_multibyte() {
		let text = TextSnapshot::from("aé b");
		assert_eq!(text.next_char_boundary(0), 1);
		assert_eq!(text.next_char_boundary(1), 3);
		assert_eq!(text.next_char_boundary(5), 5);
	}

	#[test]
	fn clones_share_text() {
		let text = TextSnapshot::from(String::from("hello world"));
		let copy = text.clone();
		assert!(std::ptr::eq(text.as_str(), copy.as_str()));
		assert_eq!(copy.text_range(6..11), "world");
	}
}
