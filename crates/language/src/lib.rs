//! Per-language function scan configuration.
//!
//! This crate owns everything the scanners need to know about a language:
//!
//! * [`rules`]: compiled [`ScanRules`] (function regex, trim tokens, list options)
//! * [`config`]: TOML loading into a [`LanguageRegistry`]
//! * [`keywords`]: the per-language [`KeywordTable`] of user function names
//!   consumed by syntax highlighting
//!
//! # Configuration
//!
//! Rules are read from a `languages.toml` style document:
//!
//! ```toml
//! autoscan = true
//!
//! [language.c]
//! extensions = ["c", "h"]
//! function-regex = '^[\w\*&][\w \t\*&:<>,~]*\([^;{()]*\)\s*\{'
//! function-regex-trim = ["WINAPI"]
//! function-regex-sort = true
//! ```
//!
//! A default set is embedded, see [`LanguageRegistry::from_embedded`].

pub mod config;
pub mod error;
pub mod keywords;
pub mod rules;

pub use config::{LanguageEntry, LanguageRegistry, ScanConfigFile};
pub use error::{ConfigError, Result};
pub use keywords::KeywordTable;
pub use rules::{FunctionDisplayMode, ScanRules};
