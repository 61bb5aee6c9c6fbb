//! In-memory [`EditorHost`] recording every call the scanners make.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use symscan_language::{KeywordTable, LanguageRegistry, ScanRules};
use symscan_text::{DocumentId, TextAccess, TextSnapshot};

use crate::host::EditorHost;

pub(crate) const C_SRC: &str = "\
#include <stdio.h>

static int add(int a, int b)
{
	return a + b;
}

int main(void) {
	return add(1, 2);
}
";

struct FakeDoc {
	id: DocumentId,
	language: Option<String>,
	text: String,
}

pub(crate) struct FakeHost {
	registry: LanguageRegistry,
	docs: Vec<FakeDoc>,
	next_id: u64,
	pub active: Option<DocumentId>,
	pub keywords: KeywordTable,
	/// Every `register_keyword` call, including repeats.
	pub registrations: Vec<String>,
	pub highlight_refreshes: Vec<String>,
	pub list_refreshes: usize,
	pub opened: Vec<(DocumentId, usize)>,
	pub alerts: usize,
	attaches: Mutex<Vec<DocumentId>>,
	rule_lookups: AtomicUsize,
}

impl FakeHost {
	pub fn new() -> Self {
		Self {
			registry: LanguageRegistry::from_embedded().unwrap(),
			docs: Vec::new(),
			next_id: 1,
			active: None,
			keywords: KeywordTable::new(),
			registrations: Vec::new(),
			highlight_refreshes: Vec::new(),
			list_refreshes: 0,
			opened: Vec::new(),
			alerts: 0,
			attaches: Mutex::new(Vec::new()),
			rule_lookups: AtomicUsize::new(0),
		}
	}

	pub fn open(&mut self, language: Option<&str>, text: &str) -> DocumentId {
		let id = DocumentId(self.next_id);
		self.next_id += 1;
		self.docs.push(FakeDoc {
			id,
			language: language.map(str::to_owned),
			text: text.to_owned(),
		});
		id
	}

	pub fn close(&mut self, doc: DocumentId) {
		self.docs.retain(|d| d.id != doc);
		if self.active == Some(doc) {
			self.active = None;
		}
	}

	pub fn set_rules(&mut self, rules: ScanRules) {
		self.registry.register(rules);
	}

	pub fn attach_count(&self, doc: DocumentId) -> usize {
		self.attaches.lock().iter().filter(|&&d| d == doc).count()
	}

	pub fn total_attaches(&self) -> usize {
		self.attaches.lock().len()
	}

	pub fn rule_lookups(&self) -> usize {
		self.rule_lookups.load(Ordering::Relaxed)
	}

	fn doc(&self, doc: DocumentId) -> Option<&FakeDoc> {
		self.docs.iter().find(|d| d.id == doc)
	}
}

impl EditorHost for FakeHost {
	fn has_document(&self, doc: DocumentId) -> bool {
		self.doc(doc).is_some()
	}

	fn language_of(&self, doc: DocumentId) -> Option<String> {
		self.doc(doc)?.language.clone()
	}

	fn scan_rules(&self, language: &str) -> Option<Arc<ScanRules>> {
		self.rule_lookups.fetch_add(1, Ordering::Relaxed);
		self.registry.rules_for(language)
	}

	fn attach_text(&self, doc: DocumentId) -> Option<Box<dyn TextAccess>> {
		let text = TextSnapshot::from(self.doc(doc)?.text.as_str());
		self.attaches.lock().push(doc);
		Some(Box::new(text))
	}

	fn active_document(&self) -> Option<DocumentId> {
		self.active
	}

	fn documents_in_tab_order(&self) -> Vec<DocumentId> {
		self.docs.iter().map(|d| d.id).collect()
	}

	fn register_keyword(&mut self, language: &str, name: &str) -> bool {
		self.registrations.push(name.to_owned());
		self.keywords.insert(language, name)
	}

	fn refresh_highlighting(&mut self, language: &str) {
		self.highlight_refreshes.push(language.to_owned());
	}

	fn refresh_function_list(&mut self) {
		self.list_refreshes += 1;
	}

	fn open_at_line(&mut self, doc: DocumentId, line: usize) {
		self.active = Some(doc);
		self.opened.push((doc, line));
	}

	fn alert(&mut self) {
		self.alerts += 1;
	}
}
