//! Synchronous full-document scans for the drop-down and "go to symbol".
//!
//! These share the match pipeline with the background scanner but run to the
//! end of the document in one call, ignore the background size limit and
//! never touch the keyword table.

use std::sync::Arc;

use symscan_language::ScanRules;
use symscan_text::{DocumentId, find_next};
use tracing::{debug, trace};

use crate::functions::{FunctionEntry, FunctionMap};
use crate::host::EditorHost;
use crate::list::{FunctionList, display_text};
use crate::normalize::normalize;
use crate::signature::{Signature, parse_signature};

/// Document to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	Active,
	Document(DocumentId),
}

impl Target {
	fn resolve<H>(self, host: &H) -> Option<DocumentId>
	where
		H: EditorHost + ?Sized,
	{
		match self {
			Self::Active => host.active_document(),
			Self::Document(doc) => Some(doc),
		}
	}
}

/// Scans `doc` completely. `None` when it has no language, rules or text.
fn scan_document<H>(host: &H, doc: DocumentId) -> Option<(FunctionMap, Arc<ScanRules>)>
where
	H: EditorHost + ?Sized,
{
	let language = host.language_of(doc).filter(|l| !l.is_empty())?;
	let rules = host.scan_rules(&language)?;
	let text = host.attach_text(doc)?;

	let mut map = FunctionMap::new();
	let end = text.len_bytes();
	let mut offset = 0;
	while offset < end
		&& let Some(candidate) = find_next(text.as_ref(), offset..end, &rules.function_regex)
	{
		offset = candidate.resume;
		let sig = normalize(&candidate.text, &rules.trim_tokens);
		match parse_signature(&sig) {
			Signature::Parsed { name, args } => map.insert(FunctionEntry {
				name: name.to_owned(),
				line: candidate.line,
				display: display_text(rules.display_mode, &sig, name, args),
			}),
			Signature::NotAFunctionLikeMatch => {
				trace!(%doc, line = candidate.line, %sig, "match has no name");
			}
		}
	}

	Some((map, rules))
}

/// Every function in the target document, grouped by name.
///
/// Unscannable targets yield an empty map.
pub fn find_functions_now<H>(host: &H, target: Target) -> FunctionMap
where
	H: EditorHost + ?Sized,
{
	target
		.resolve(host)
		.and_then(|doc| scan_document(host, doc))
		.map(|(map, _)| map)
		.unwrap_or_default()
}

/// Drop-down rows for the target document, ordered per its language's sort
/// flag.
pub fn function_list<H>(host: &H, target: Target) -> FunctionList
where
	H: EditorHost + ?Sized,
{
	target
		.resolve(host)
		.and_then(|doc| scan_document(host, doc))
		.map(|(map, rules)| FunctionList::from_map(&map, rules.sort))
		.unwrap_or_default()
}

/// Jumps to the first definition of `symbol` across open documents.
///
/// Documents are scanned one at a time in tab order and the search stops at
/// the first one that defines `symbol` (case-insensitive). Returns `false`
/// after alerting the host when no document does.
pub fn goto_symbol<H>(host: &mut H, symbol: &str) -> bool
where
	H: EditorHost + ?Sized,
{
	if !symbol.is_empty() {
		for doc in host.documents_in_tab_order() {
			let Some((map, _)) = scan_document(&*host, doc) else {
				continue;
			};
			if let Some(entry) = map.get(symbol).first() {
				debug!(%doc, line = entry.line, symbol, "symbol found");
				host.open_at_line(doc, entry.line);
				return true;
			}
		}
	}

	debug!(symbol, "symbol not found");
	host.alert();
	false
}
