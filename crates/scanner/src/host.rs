//! The editor seen from the scanner.

use std::sync::Arc;

use symscan_language::ScanRules;
use symscan_text::{DocumentId, TextAccess};

/// Everything the scanners need from the hosting editor.
///
/// Queries take `&self`; operations that change what the user sees take
/// `&mut self`. Documents may vanish between calls, so every lookup is
/// fallible and callers treat `None` as "skip".
pub trait EditorHost {
	fn has_document(&self, doc: DocumentId) -> bool;

	/// Language name of `doc`, `None` for plain buffers or unknown documents.
	fn language_of(&self, doc: DocumentId) -> Option<String>;

	/// Scan rules for `language`, `None` when it has no function regex.
	fn scan_rules(&self, language: &str) -> Option<Arc<ScanRules>>;

	/// Read-only view of the current text of `doc`.
	///
	/// The view is held across slices of an incremental scan. Any edit to the
	/// document produces a push that discards it before the next slice.
	fn attach_text(&self, doc: DocumentId) -> Option<Box<dyn TextAccess>>;

	fn active_document(&self) -> Option<DocumentId>;

	/// Open documents in tab order.
	fn documents_in_tab_order(&self) -> Vec<DocumentId>;

	/// Adds a user keyword, returning whether it was new.
	fn register_keyword(&mut self, language: &str, name: &str) -> bool;

	/// Reapplies highlighting for documents of `language`.
	fn refresh_highlighting(&mut self, language: &str);

	/// Rebuilds the symbol drop-down for the active document.
	fn refresh_function_list(&mut self);

	/// Activates `doc` and moves the caret to the 0-based `line`.
	fn open_at_line(&mut self, doc: DocumentId, line: usize);

	/// Audible or visual "not found".
	fn alert(&mut self);
}
