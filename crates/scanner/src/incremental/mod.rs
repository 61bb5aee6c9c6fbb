//! Time-sliced background scanning that feeds user keywords.
//!
//! The host drives the scanner from its event loop:
//! - [`IncrementalScanner::push`] (or [`IncrementalScanner::notify`]) queues a
//!   document and may ask for a timer to be armed
//! - [`IncrementalScanner::tick`] runs one bounded slice when that timer fires
//! - every call returns a [`Reschedule`] telling the host when to tick next
//!
//! A slice never carries progress across an interruption. Whenever a document
//! is selected again its scan restarts at offset 0 against a fresh view.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use symscan_language::ScanRules;
use symscan_text::{DocumentId, TextAccess, find_next};
use tracing::{debug, trace};

use crate::host::EditorHost;
use crate::normalize::normalize;
use crate::queue::{EventKind, EventQueue};
use crate::signature::parse_name;


pub const DEFAULT_SLICE_BUDGET: Duration = Duration::from_millis(20);
pub const DEFAULT_ARM_DELAY: Duration = Duration::from_millis(30);
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 1000 * 1024;

/// Scanner tunables, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct ScannerCfg {
	/// Wall-clock time a slice may run before yielding. Checked between
	/// matches, so one slice always processes at least one match.
	pub slice_budget: Duration,
	/// Delay between the first push into an idle scanner and its first slice.
	pub arm_delay: Duration,
	/// Larger documents are skipped by the background scan.
	pub max_document_bytes: Option<usize>,
	/// When off, pushes are dropped and the queue stays empty.
	pub autoscan: bool,
}

impl Default for ScannerCfg {
	fn default() -> Self {
		Self {
			slice_budget: DEFAULT_SLICE_BUDGET,
			arm_delay: DEFAULT_ARM_DELAY,
			max_document_bytes: Some(DEFAULT_MAX_DOCUMENT_BYTES),
			autoscan: true,
		}
	}
}

/// What the host should do with its scan timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reschedule {
	/// Nothing left to do; leave the timer disarmed.
	Done,
	/// Tick again as soon as the event loop is free.
	Immediately,
	/// Tick once after the given delay.
	After(Duration),
}

/// Observable scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
	Idle,
	/// A tick is expected; the next one picks a document from the queue.
	Selecting,
	Scanning(DocumentId),
}

/// Summary of one finished document scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStats {
	pub doc: DocumentId,
	pub language: String,
	/// Number of slices the scan took.
	pub parts: usize,
	pub matches: usize,
	/// Keywords that were new to the table.
	pub registered: usize,
	pub elapsed: Duration,
}

/// Resumable state of the document being scanned.
struct ScanCursor {
	doc: DocumentId,
	kind: EventKind,
	language: String,
	rules: Arc<ScanRules>,
	offset: usize,
	end: usize,
	text: Box<dyn TextAccess>,
	parts: usize,
	matches: usize,
	registered: usize,
	started_at: Instant,
}

impl fmt::Debug for ScanCursor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScanCursor")
			.field("doc", &self.doc)
			.field("kind", &self.kind)
			.field("language", &self.language)
			.field("offset", &self.offset)
			.field("end", &self.end)
			.field("parts", &self.parts)
			.finish_non_exhaustive()
	}
}

#[derive(Debug)]
enum ScanState {
	Idle,
	Selecting,
	Scanning(ScanCursor),
}

/// Background keyword scanner for one editor instance.
#[derive(Debug)]
pub struct IncrementalScanner {
	cfg: ScannerCfg,
	queue: EventQueue,
	state: ScanState,
	last_stats: Option<ScanStats>,
}

impl Default for IncrementalScanner {
	fn default() -> Self {
		Self::new(ScannerCfg::default())
	}
}

impl IncrementalScanner {
	pub fn new(cfg: ScannerCfg) -> Self {
		Self {
			cfg,
			queue: EventQueue::new(),
			state: ScanState::Idle,
			last_stats: None,
		}
	}

	pub fn cfg(&self) -> &ScannerCfg {
		&self.cfg
	}

	/// Queues `doc` for scanning.
	///
	/// Any scan in progress is abandoned. If it was for another document, that
	/// document goes back on the queue beneath `doc` and restarts from the
	/// beginning later.
	///
	/// Returns [`Reschedule::After`] when the scanner was idle. Otherwise a
	/// tick is already expected and the result is [`Reschedule::Done`].
	pub fn push(&mut self, doc: DocumentId, kind: EventKind) -> Reschedule {
		if !self.cfg.autoscan {
			self.queue.clear();
			return Reschedule::Done;
		}

		let rearm = match std::mem::replace(&mut self.state, ScanState::Selecting) {
			ScanState::Idle => true,
			ScanState::Selecting => false,
			ScanState::Scanning(cursor) => {
				debug!(
					doc = %cursor.doc,
					offset = cursor.offset,
					by = %doc,
					"scan interrupted"
				);
				if cursor.doc != doc {
					self.queue.push(cursor.doc, cursor.kind);
				}
				false
			}
		};

		self.queue.push(doc, kind);
		if rearm {
			Reschedule::After(self.cfg.arm_delay)
		} else {
			Reschedule::Done
		}
	}

	/// Forgets `doc`, dropping its queue entry and any scan in progress.
	pub fn remove_all_for(&mut self, doc: DocumentId) {
		self.queue.remove_all_for(doc);
		if let ScanState::Scanning(cursor) = &self.state
			&& cursor.doc == doc
		{
			trace!(%doc, "scan dropped with document");
			self.state = ScanState::Selecting;
		}
	}

	/// Runs one slice: selects a document if none is being scanned, then scans
	/// until the budget is spent or the document is exhausted.
	pub fn tick<H>(&mut self, host: &mut H) -> Reschedule
	where
		H: EditorHost + ?Sized,
	{
		let started = Instant::now();

		if matches!(self.state, ScanState::Idle) {
			return Reschedule::Done;
		}
		if matches!(self.state, ScanState::Selecting) {
			match self.select(host) {
				Some(cursor) => self.state = ScanState::Scanning(cursor),
				None => {
					self.state = ScanState::Idle;
					return Reschedule::Done;
				}
			}
		}

		let ScanState::Scanning(cursor) = &mut self.state else {
			return Reschedule::Done;
		};
		if !run_slice(cursor, host, self.cfg.slice_budget, started) {
			return Reschedule::Immediately;
		}

		if let ScanState::Scanning(cursor) = std::mem::replace(&mut self.state, ScanState::Idle) {
			self.finish(host, cursor);
		}
		if self.queue.is_empty() {
			Reschedule::Done
		} else {
			self.state = ScanState::Selecting;
			Reschedule::Immediately
		}
	}

	/// Pops events until one names a scannable document.
	fn select<H>(&mut self, host: &H) -> Option<ScanCursor>
	where
		H: EditorHost + ?Sized,
	{
		while let Some(event) = self.queue.pop_most_recent() {
			let doc = event.doc;
			if !host.has_document(doc) {
				trace!(%doc, "document gone, skipping");
				continue;
			}
			let Some(language) = host.language_of(doc).filter(|l| !l.is_empty()) else {
				trace!(%doc, "no language, skipping");
				continue;
			};
			let Some(rules) = host.scan_rules(&language) else {
				trace!(%doc, %language, "no function regex, skipping");
				continue;
			};
			let Some(text) = host.attach_text(doc) else {
				trace!(%doc, "text unavailable, skipping");
				continue;
			};

			let end = text.len_bytes();
			if let Some(limit) = self.cfg.max_document_bytes
				&& end > limit
			{
				debug!(%doc, bytes = end, limit, "document too large for background scan");
				continue;
			}

			trace!(%doc, %language, kind = ?event.kind, bytes = end, "scan started");
			return Some(ScanCursor {
				doc,
				kind: event.kind,
				language,
				rules,
				offset: 0,
				end,
				text,
				parts: 0,
				matches: 0,
				registered: 0,
				started_at: Instant::now(),
			});
		}
		None
	}

	fn finish<H>(&mut self, host: &mut H, cursor: ScanCursor)
	where
		H: EditorHost + ?Sized,
	{
		let stats = ScanStats {
			doc: cursor.doc,
			language: cursor.language,
			parts: cursor.parts,
			matches: cursor.matches,
			registered: cursor.registered,
			elapsed: cursor.started_at.elapsed(),
		};
		debug!(
			doc = %stats.doc,
			language = %stats.language,
			parts = stats.parts,
			matches = stats.matches,
			registered = stats.registered,
			elapsed_ms = stats.elapsed.as_millis() as u64,
			"scan finished"
		);

		if host.active_document() == Some(stats.doc) {
			host.refresh_function_list();
		}
		self.last_stats = Some(stats);
	}

	pub fn phase(&self) -> ScanPhase {
		match &self.state {
			ScanState::Idle => ScanPhase::Idle,
			ScanState::Selecting => ScanPhase::Selecting,
			ScanState::Scanning(cursor) => ScanPhase::Scanning(cursor.doc),
		}
	}

	/// Document and byte offset of the scan in progress.
	pub fn scan_position(&self) -> Option<(DocumentId, usize)> {
		match &self.state {
			ScanState::Scanning(cursor) => Some((cursor.doc, cursor.offset)),
			_ => None,
		}
	}

	pub fn pending(&self) -> &EventQueue {
		&self.queue
	}

	/// Statistics of the most recently finished scan.
	pub fn last_stats(&self) -> Option<&ScanStats> {
		self.last_stats.as_ref()
	}
}

/// Scans matches from the cursor until `budget` has elapsed since `started`.
///
/// Returns `true` once the document is exhausted.
fn run_slice<H>(cursor: &mut ScanCursor, host: &mut H, budget: Duration, started: Instant) -> bool
where
	H: EditorHost + ?Sized,
{
	cursor.parts += 1;
	let mut added = false;

	let finished = loop {
		let Some(candidate) = find_next(
			cursor.text.as_ref(),
			cursor.offset..cursor.end,
			&cursor.rules.function_regex,
		) else {
			break true;
		};
		cursor.offset = candidate.resume;
		cursor.matches += 1;

		let sig = normalize(&candidate.text, &cursor.rules.trim_tokens);
		if cursor.rules.user_functions
			&& let Some(name) = parse_name(&sig)
			&& host.register_keyword(&cursor.language, name)
		{
			cursor.registered += 1;
			added = true;
		}

		if cursor.offset >= cursor.end {
			break true;
		}
		if started.elapsed() >= budget {
			break false;
		}
	};

	if added {
		let active_language = host.active_document().and_then(|doc| host.language_of(doc));
		if active_language.as_deref() == Some(cursor.language.as_str()) {
			host.refresh_highlighting(&cursor.language);
		}
	}
	finished
}
