//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A top-level node that names no known setting.
	#[error("unknown configuration node: '{0}'")]
	UnknownNode(String),

	/// A setting whose value has the wrong shape or type.
	#[error("invalid value for '{field}': {detail}")]
	InvalidValue {
		/// Setting name.
		field: String,
		/// What was expected.
		detail: String,
	},

	/// A name listed twice, or a setting given twice.
	#[error("duplicate entry '{name}' in '{list}'")]
	DuplicateEntry {
		/// List or scope containing the duplicate.
		list: String,
		/// The repeated name.
		name: String,
	},

	/// A list setting with no entries.
	#[error("'{0}' must list at least one entry")]
	EmptyList(String),
}

impl ConfigError {
	pub(crate) fn invalid(field: &str, detail: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.to_string(),
			detail: detail.into(),
		}
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
