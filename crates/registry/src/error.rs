//! Error types for registry loading and selection.

use thiserror::Error;

/// Errors that abort a generation run.
///
/// None of these are recoverable within a run: the registry or configuration
/// has to be corrected and the generator re-run.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// The registry document is not well-formed XML.
	#[error("failed to parse registry XML: {0}")]
	Xml(#[from] xmltree::ParseError),

	/// The registry document does not have the expected shape.
	#[error("schema violation in {context}: {detail}")]
	SchemaViolation {
		/// Where the violation was found (e.g. `command 'xrCreateSession'`).
		context: String,
		/// What was wrong.
		detail: String,
	},

	/// A configured command name is absent from the registry.
	#[error("unknown command: '{0}'")]
	UnknownCommand(String),

	/// A handle type name is absent from the registry's handle table.
	#[error("unknown handle type '{name}' ({context})")]
	UnknownHandle {
		/// The handle type that could not be resolved.
		name: String,
		/// Who referenced it.
		context: String,
	},

	/// A supported command does not follow the controlling-handle or
	/// creation-output conventions.
	#[error("invalid shape for command '{command}': {detail}")]
	InvalidCommandShape {
		/// Command name.
		command: String,
		/// Which convention was broken.
		detail: String,
	},

	/// A handle's parent chain revisits a type.
	#[error("handle parent chain forms a cycle: {}", chain.join(" -> "))]
	CycleDetected {
		/// The chain walked, ending with the revisited type.
		chain: Vec<String>,
	},
}

impl RegistryError {
	pub(crate) fn schema(context: impl Into<String>, detail: impl Into<String>) -> Self {
		Self::SchemaViolation {
			context: context.into(),
			detail: detail.into(),
		}
	}

	pub(crate) fn shape(command: impl Into<String>, detail: impl Into<String>) -> Self {
		Self::InvalidCommandShape {
			command: command.into(),
			detail: detail.into(),
		}
	}

	pub(crate) fn unknown_handle(name: impl Into<String>, context: impl Into<String>) -> Self {
		Self::UnknownHandle {
			name: name.into(),
			context: context.into(),
		}
	}
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
