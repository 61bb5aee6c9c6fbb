//! Files on disk presented to the scanners as open editor tabs.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use ropey::Rope;
use symscan::EditorHost;
use symscan_language::{KeywordTable, LanguageRegistry, ScanRules};
use symscan_text::{DocumentId, TextAccess, TextSnapshot};
use tracing::debug;

struct FileDoc {
	id: DocumentId,
	path: PathBuf,
	language: Option<String>,
	rope: Rope,
}

/// Read-only "editor" whose tabs are the files given on the command line.
pub struct FileHost {
	registry: LanguageRegistry,
	docs: Vec<FileDoc>,
	active: Option<DocumentId>,
	keywords: KeywordTable,
	jump: Option<(DocumentId, usize)>,
	alerted: bool,
}

impl FileHost {
	pub fn new(registry: LanguageRegistry) -> Self {
		Self {
			registry,
			docs: Vec::new(),
			active: None,
			keywords: KeywordTable::new(),
			jump: None,
			alerted: false,
		}
	}

	/// Loads `path` as a new tab. The language comes from `language` or the
	/// file extension.
	pub fn open(&mut self, path: &Path, language: Option<&str>) -> anyhow::Result<DocumentId> {
		let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
		let rope = Rope::from_reader(BufReader::new(file))
			.with_context(|| format!("failed to read {}", path.display()))?;
		let language = language
			.map(str::to_owned)
			.or_else(|| self.registry.language_for_path(path).map(str::to_owned));
		debug!(path = %path.display(), language = ?language, bytes = rope.len_bytes(), "opened");
		Ok(self.insert(path.to_path_buf(), language, rope))
	}

	fn insert(&mut self, path: PathBuf, language: Option<String>, rope: Rope) -> DocumentId {
		let id = DocumentId::next();
		self.docs.push(FileDoc {
			id,
			path,
			language,
			rope,
		});
		if self.active.is_none() {
			self.active = Some(id);
		}
		id
	}

	pub fn path(&self, doc: DocumentId) -> Option<&Path> {
		self.doc(doc).map(|d| d.path.as_path())
	}

	pub fn keywords(&self) -> &KeywordTable {
		&self.keywords
	}

	/// Where the last successful "go to symbol" landed.
	pub fn jump(&self) -> Option<(DocumentId, usize)> {
		self.jump
	}

	pub fn alerted(&self) -> bool {
		self.alerted
	}

	fn doc(&self, doc: DocumentId) -> Option<&FileDoc> {
		self.docs.iter().find(|d| d.id == doc)
	}
}

impl EditorHost for FileHost {
	fn has_document(&self, doc: DocumentId) -> bool {
		self.doc(doc).is_some()
	}

	fn language_of(&self, doc: DocumentId) -> Option<String> {
		self.doc(doc)?.language.clone()
	}

	fn scan_rules(&self, language: &str) -> Option<Arc<ScanRules>> {
		self.registry.rules_for(language)
	}

	fn attach_text(&self, doc: DocumentId) -> Option<Box<dyn TextAccess>> {
		Some(Box::new(TextSnapshot::from(&self.doc(doc)?.rope)))
	}

	fn active_document(&self) -> Option<DocumentId> {
		self.active
	}

	fn documents_in_tab_order(&self) -> Vec<DocumentId> {
		self.docs.iter().map(|d| d.id).collect()
	}

	fn register_keyword(&mut self, language: &str, name: &str) -> bool {
		self.keywords.insert(language, name)
	}

	fn refresh_highlighting(&mut self, language: &str) {
		if self.keywords.take_updated(language) {
			debug!(%language, count = self.keywords.len(language), "keywords updated");
		}
	}

	fn refresh_function_list(&mut self) {}

	fn open_at_line(&mut self, doc: DocumentId, line: usize) {
		self.active = Some(doc);
		self.jump = Some((doc, line));
	}

	fn alert(&mut self) {
		self.alerted = true;
	}
}
