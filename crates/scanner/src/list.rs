//! Symbol drop-down contents.

use symscan_language::FunctionDisplayMode;

use crate::functions::FunctionMap;

/// Formats a parsed signature for the drop-down.
///
/// `sig` is the whole normalized signature and `args` its suffix starting at
/// the name. A space goes in front of the first `(` unless one is there.
pub fn display_text(mode: FunctionDisplayMode, sig: &str, name: &str, args: &str) -> String {
	match mode {
		FunctionDisplayMode::Name => name.to_owned(),
		FunctionDisplayMode::NameAndArgs => space_before_paren(args),
		FunctionDisplayMode::Signature => space_before_paren(sig),
	}
}

fn space_before_paren(text: &str) -> String {
	match text.find('(') {
		Some(i) if i > 0 && !text[..i].ends_with(' ') => {
			format!("{} {}", &text[..i], &text[i..])
		}
		_ => text.to_owned(),
	}
}

/// One row of the drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
	pub display: String,
	pub line: usize,
}

/// Flattened, ordered drop-down rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionList {
	items: Vec<ListItem>,
}

impl FunctionList {
	/// Builds rows in match order, or sorted case-insensitively by name.
	///
	/// Sorting is stable, so duplicates of a name keep their match order.
	pub fn from_map(map: &FunctionMap, sort: bool) -> Self {
		let mut entries: Vec<_> = map.entries().collect();
		if sort {
			entries.sort_by_cached_key(|e| e.name.to_lowercase());
		}
		let items = entries
			.into_iter()
			.map(|e| ListItem {
				display: e.display.clone(),
				line: e.line,
			})
			.collect();
		Self { items }
	}

	/// Target line of the row at `index`.
	pub fn line_of(&self, index: usize) -> Option<usize> {
		self.items.get(index).map(|item| item.line)
	}

	pub fn items(&self) -> &[ListItem] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Hosts show their "no functions found" placeholder when this holds.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
