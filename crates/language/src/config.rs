//! Scan configuration loading.
//!
//! Connects languages to their file types and compiles their function regexes
//! into [`ScanRules`] once at startup.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::rules::{FunctionDisplayMode, ScanRules};

/// Embedded default `languages.toml`.
const LANGUAGES_TOML: &str = include_str!("../runtime/languages.toml");

/// Top-level shape of a scan configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScanConfigFile {
	/// Whether background scanning runs at all. Read once at startup.
	#[serde(default = "default_true")]
	pub autoscan: bool,
	#[serde(default)]
	pub language: BTreeMap<String, LanguageEntry>,
}

/// One `[language.<name>]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LanguageEntry {
	#[serde(default)]
	pub extensions: Vec<String>,
	#[serde(default)]
	pub function_regex: String,
	#[serde(default)]
	pub function_regex_trim: Vec<String>,
	#[serde(default)]
	pub function_regex_sort: bool,
	#[serde(default = "default_true")]
	pub user_functions: bool,
	#[serde(default)]
	pub function_display_mode: FunctionDisplayMode,
}

fn default_true() -> bool {
	true
}

/// Registry of known languages and their compiled scan rules.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
	autoscan: bool,
	rules: HashMap<String, Arc<ScanRules>>,
	by_extension: HashMap<String, String>,
	names: Vec<String>,
}

impl Default for LanguageRegistry {
	fn default() -> Self {
		Self {
			autoscan: true,
			rules: HashMap::new(),
			by_extension: HashMap::new(),
			names: Vec::new(),
		}
	}
}

impl LanguageRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads the embedded default configuration.
	pub fn from_embedded() -> Result<Self> {
		Self::from_toml_str(LANGUAGES_TOML)
	}

	/// Reads and compiles a configuration file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&content)
	}

	/// Parses and compiles a configuration document.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let file: ScanConfigFile = toml::from_str(content)?;
		Self::from_config(file)
	}

	/// Compiles an already parsed configuration.
	pub fn from_config(file: ScanConfigFile) -> Result<Self> {
		let mut registry = Self {
			autoscan: file.autoscan,
			..Self::default()
		};

		for (name, entry) in file.language {
			registry.add_language(&name, &entry.extensions);
			let Some(rules) = ScanRules::compile(&name, &entry.function_regex)? else {
				debug!(language = %name, "no function regex configured");
				continue;
			};
			registry.register(
				rules
					.with_trim_tokens(entry.function_regex_trim)
					.with_sort(entry.function_regex_sort)
					.with_user_functions(entry.user_functions)
					.with_display_mode(entry.function_display_mode),
			);
		}

		Ok(registry)
	}

	/// Makes `name` known, mapping each extension to it.
	pub fn add_language(&mut self, name: &str, extensions: &[String]) {
		if !self.names.iter().any(|n| n == name) {
			self.names.push(name.to_owned());
		}
		for ext in extensions {
			self.by_extension
				.insert(ext.trim_start_matches('.').to_ascii_lowercase(), name.to_owned());
		}
	}

	/// Registers compiled rules, replacing any previous rules for the language.
	pub fn register(&mut self, rules: ScanRules) -> Arc<ScanRules> {
		self.add_language(&rules.language, &[]);
		let rules = Arc::new(rules);
		self.rules.insert(rules.language.clone(), rules.clone());
		rules
	}

	/// Rules for `language`, if it has a function regex.
	pub fn rules_for(&self, language: &str) -> Option<Arc<ScanRules>> {
		self.rules.get(language).cloned()
	}

	/// Finds a language by file extension.
	pub fn language_for_path(&self, path: &Path) -> Option<&str> {
		path.extension()
			.and_then(|ext| ext.to_str())
			.and_then(|ext| self.by_extension.get(&ext.to_ascii_lowercase()))
			.map(String::as_str)
	}

	/// Whether background scanning is enabled.
	pub fn autoscan(&self) -> bool {
		self.autoscan
	}

	pub fn set_autoscan(&mut self, enabled: bool) {
		self.autoscan = enabled;
	}

	/// All known language names in registration order.
	pub fn languages(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}
}
