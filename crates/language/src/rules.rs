//! Compiled per-language scan rules.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// How a function is rendered in the symbol drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionDisplayMode {
	/// Name followed by the argument list, e.g. `add (int a, int b)`.
	#[default]
	NameAndArgs,
	/// Bare name.
	Name,
	/// The whole normalized signature including the return type.
	Signature,
}

/// Everything needed to scan documents of one language.
#[derive(Debug, Clone)]
pub struct ScanRules {
	/// Language name as reported by the host (e.g. "cpp").
	pub language: String,
	/// Function-definition regex. Case-sensitive, `^`/`$` match at line ends.
	pub function_regex: Regex,
	/// Literal substrings removed from every matched signature.
	pub trim_tokens: Vec<String>,
	/// Sort the drop-down case-insensitively instead of by position.
	pub sort: bool,
	/// Publish parsed names as user keywords for highlighting.
	pub user_functions: bool,
	pub display_mode: FunctionDisplayMode,
}

impl ScanRules {
	/// Compiles rules for `language` from a raw pattern.
	///
	/// Returns `Ok(None)` for an empty pattern: the language is known but has
	/// nothing to scan for.
	pub fn compile(language: &str, pattern: &str) -> Result<Option<Self>> {
		if pattern.trim().is_empty() {
			return Ok(None);
		}

		let function_regex = RegexBuilder::new(pattern)
			.case_insensitive(false)
			.multi_line(true)
			.build()
			.map_err(|source| ConfigError::InvalidRegex {
				language: language.to_owned(),
				source,
			})?;

		Ok(Some(Self {
			language: language.to_owned(),
			function_regex,
			trim_tokens: Vec::new(),
			sort: false,
			user_functions: true,
			display_mode: FunctionDisplayMode::default(),
		}))
	}

	/// Replaces the trim tokens, dropping empty ones.
	pub fn with_trim_tokens<I, S>(mut self, tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.trim_tokens = tokens
			.into_iter()
			.map(Into::into)
			.filter(|t: &String| !t.is_empty())
			.collect();
		self
	}

	pub fn with_sort(mut self, sort: bool) -> Self {
		self.sort = sort;
		self
	}

	pub fn with_user_functions(mut self, enabled: bool) -> Self {
		self.user_functions = enabled;
		self
	}

	pub fn with_display_mode(mut self, mode: FunctionDisplayMode) -> Self {
		self.display_mode = mode;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_pattern_has_no_rules() {
		assert!(ScanRules::compile("text", "").unwrap().is_none());
		assert!(ScanRules::compile("text", "   ").unwrap().is_none());
	}

	#[test]
	fn invalid_pattern_names_language() {
		let err = ScanRules::compile("cpp", "(unclosed").unwrap_err();
		assert!(matches!(&err, ConfigError::InvalidRegex { language, .. } if language == "cpp"));
		assert!(err.to_string().contains("cpp"));
	}

	#[test]
	fn compiled_regex_is_case_sensitive_and_multiline() {
		let rules = ScanRules::compile("vb", "^Function").unwrap().unwrap();
		assert!(rules.function_regex.is_match("x\nFunction"));
		assert!(!rules.function_regex.is_match("function"));
	}

	#[test]
	fn empty_trim_tokens_are_dropped() {
		let rules = ScanRules::compile("c", "x")
			.unwrap()
			.unwrap()
			.with_trim_tokens(["WINAPI", "", "CALLBACK"]);
		assert_eq!(rules.trim_tokens, vec!["WINAPI", "CALLBACK"]);
	}
}
