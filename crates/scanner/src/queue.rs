//! Pending scan requests, served most recent first.

use symscan_text::DocumentId;

/// Why a document was queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
	Opened,
	Modified,
	Saved,
	LexerChanged,
}

/// A document waiting to be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingEvent {
	pub doc: DocumentId,
	pub kind: EventKind,
}

/// LIFO queue holding at most one entry per document.
///
/// A repeated push moves the document to the top and replaces its kind, so a
/// burst of edits to one file coalesces into a single scan.
#[derive(Debug, Default)]
pub struct EventQueue {
	entries: Vec<PendingEvent>,
}

impl EventQueue {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues `doc`, replacing any entry it already has.
	pub fn push(&mut self, doc: DocumentId, kind: EventKind) {
		self.remove_all_for(doc);
		self.entries.push(PendingEvent { doc, kind });
	}

	/// Removes and returns the most recently pushed entry.
	pub fn pop_most_recent(&mut self) -> Option<PendingEvent> {
		self.entries.pop()
	}

	/// Drops every entry for `doc`.
	pub fn remove_all_for(&mut self, doc: DocumentId) {
		self.entries.retain(|e| e.doc != doc);
	}

	pub fn contains(&self, doc: DocumentId) -> bool {
		self.entries.iter().any(|e| e.doc == doc)
	}

	pub fn kind_for(&self, doc: DocumentId) -> Option<EventKind> {
		self.entries.iter().find(|e| e.doc == doc).map(|e| e.kind)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Entries from oldest to most recent.
	pub fn iter(&self) -> impl Iterator<Item = &PendingEvent> {
		self.entries.iter()
	}
}
