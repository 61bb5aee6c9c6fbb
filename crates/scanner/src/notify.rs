//! Editor notifications routed into the background scanner.

use symscan_text::DocumentId;
use tracing::trace;

use crate::host::EditorHost;
use crate::incremental::{IncrementalScanner, Reschedule};
use crate::queue::EventKind;

/// Document lifecycle events the scanner reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorNotification {
	Opened(DocumentId),
	/// Text changed. Only edits that leave the document dirty queue a scan.
	Modified {
		doc: DocumentId,
		dirty: bool,
	},
	SavedAs(DocumentId),
	LexerChanged(DocumentId),
	Closed(DocumentId),
	/// The drop-down follows the active tab; keywords need no rescan.
	TabSwitched(DocumentId),
}

impl IncrementalScanner {
	/// Applies a notification, returning what the host should do with its
	/// scan timer.
	pub fn notify<H>(&mut self, host: &mut H, notification: EditorNotification) -> Reschedule
	where
		H: EditorHost + ?Sized,
	{
		match notification {
			EditorNotification::Opened(doc) => self.forward(host, doc, EventKind::Opened),
			EditorNotification::Modified { doc, dirty: true } => {
				self.forward(host, doc, EventKind::Modified)
			}
			EditorNotification::Modified { doc, dirty: false } => {
				trace!(%doc, "clean modification ignored");
				Reschedule::Done
			}
			EditorNotification::SavedAs(doc) => self.forward(host, doc, EventKind::Saved),
			EditorNotification::LexerChanged(doc) => {
				self.forward(host, doc, EventKind::LexerChanged)
			}
			EditorNotification::Closed(doc) => {
				self.remove_all_for(doc);
				Reschedule::Done
			}
			EditorNotification::TabSwitched(_) => {
				host.refresh_function_list();
				Reschedule::Done
			}
		}
	}

	fn forward<H>(&mut self, host: &mut H, doc: DocumentId, kind: EventKind) -> Reschedule
	where
		H: EditorHost + ?Sized,
	{
		// Without background scans nothing else would update the drop-down.
		if !self.cfg().autoscan {
			host.refresh_function_list();
		}
		self.push(doc, kind)
	}
}
