//! Functions found by a full scan, grouped by name.

use std::collections::BTreeMap;

/// One occurrence of a function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
	pub name: String,
	/// 0-based line of the match.
	pub line: usize,
	/// Text shown in the drop-down, already formatted for the display mode.
	pub display: String,
}

/// Occurrences grouped by name, compared case-insensitively.
///
/// Groups keep the first spelling seen. Entries within a group stay in
/// match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionMap {
	groups: BTreeMap<String, Vec<FunctionEntry>>,
	/// Group key and index within the group, in insertion order.
	order: Vec<(String, usize)>,
}

impl FunctionMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, entry: FunctionEntry) {
		let key = entry.name.to_lowercase();
		let group = self.groups.entry(key.clone()).or_default();
		self.order.push((key, group.len()));
		group.push(entry);
	}

	/// Occurrences of `name`, in match order.
	pub fn get(&self, name: &str) -> &[FunctionEntry] {
		self.groups
			.get(&name.to_lowercase())
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}

	pub fn contains(&self, name: &str) -> bool {
		self.groups.contains_key(&name.to_lowercase())
	}

	/// Groups in case-insensitive name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[FunctionEntry])> {
		self.groups.values().filter_map(|entries| {
			let first = entries.first()?;
			Some((first.name.as_str(), entries.as_slice()))
		})
	}

	/// Every entry in insertion order.
	pub fn entries(&self) -> impl Iterator<Item = &FunctionEntry> {
		self.order
			.iter()
			.filter_map(|(key, idx)| self.groups.get(key)?.get(*idx))
	}

	/// Total number of occurrences.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}
