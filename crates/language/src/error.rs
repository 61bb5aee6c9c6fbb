//! Error types for scan configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading scan configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("failed to parse scan configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// A language's function regex does not compile.
	#[error("invalid function regex for language '{language}': {source}")]
	InvalidRegex {
		/// Language the pattern belongs to.
		language: String,
		/// The underlying regex error.
		#[source]
		source: regex::Error,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
