//! User keyword tables fed by the function scanner.
//!
//! Names only ever get added during a session. A function deleted from the
//! source keeps its keyword until the table is rebuilt.

use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default)]
struct LanguageKeywords {
	words: BTreeSet<String>,
	updated: bool,
}

/// Per-language sets of user function names.
#[derive(Debug, Default)]
pub struct KeywordTable {
	langs: HashMap<String, LanguageKeywords>,
}

impl KeywordTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `name` to `language`'s set, returning whether it was new.
	pub fn insert(&mut self, language: &str, name: &str) -> bool {
		let entry = self.langs.entry(language.to_owned()).or_default();
		let added = entry.words.insert(name.to_owned());
		entry.updated |= added;
		added
	}

	pub fn contains(&self, language: &str, name: &str) -> bool {
		self.langs
			.get(language)
			.is_some_and(|l| l.words.contains(name))
	}

	/// Keywords for `language` in sorted order.
	pub fn keywords<'a>(&'a self, language: &str) -> impl Iterator<Item = &'a str> + use<'a> {
		self.langs
			.get(language)
			.into_iter()
			.flat_map(|l| l.words.iter().map(String::as_str))
	}

	pub fn len(&self, language: &str) -> usize {
		self.langs.get(language).map_or(0, |l| l.words.len())
	}

	/// Languages that have at least one keyword.
	pub fn languages(&self) -> impl Iterator<Item = &str> {
		self.langs
			.iter()
			.filter(|(_, l)| !l.words.is_empty())
			.map(|(name, _)| name.as_str())
	}

	/// Returns and clears the "new names since last take" flag.
	pub fn take_updated(&mut self, language: &str) -> bool {
		self.langs
			.get_mut(language)
			.is_some_and(|l| std::mem::take(&mut l.updated))
	}

	/// Space separated keyword list in the form lexers expect.
	pub fn keyword_list(&self, language: &str) -> String {
		self.keywords(language).collect::<Vec<_>>().join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_is_idempotent() {
		let mut table = KeywordTable::new();
		assert!(table.insert("c", "main"));
		assert!(!table.insert("c", "main"));
		assert_eq!(table.len("c"), 1);
		assert!(table.contains("c", "main"));
		assert!(!table.contains("cpp", "main"));
	}

	#[test]
	fn updated_flag_tracks_new_names_only() {
		let mut table = KeywordTable::new();
		assert!(!table.take_updated("c"));
		table.insert("c", "a");
		assert!(table.take_updated("c"));
		assert!(!table.take_updated("c"));
		table.insert("c", "a");
		assert!(!table.take_updated("c"));
	}

	#[test]
	fn keyword_list_is_sorted_and_space_separated() {
		let mut table = KeywordTable::new();
		for name in ["zeta", "alpha", "Mid"] {
			table.insert("c", name);
		}
		assert_eq!(table.keyword_list("c"), "Mid alpha zeta");
		assert_eq!(table.keyword_list("rust"), "");
	}

	#[test]
	fn languages_lists_only_non_empty() {
		let mut table = KeywordTable::new();
		table.take_updated("c");
		table.insert("rust", "f");
		assert_eq!(table.languages().collect::<Vec<_>>(), vec!["rust"]);
	}
}
