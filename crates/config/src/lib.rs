//! Generation configuration for layergen.
//!
//! Without a config file, layergen generates the OpenXR overlay layer: the
//! built-in command and handle lists in [`defaults`] with the naming and
//! include defaults of [`EmitOptions`]. A KDL (v2) file overrides any subset
//! of those settings:
//!
//! ```kdl
//! layer-name "OverlaysLayer"
//! thread-safe #true
//! command-prefix "xr"
//! dispatch-table "XrGeneratedDispatchTable"
//! success-check "XR_SUCCEEDED"
//! header-includes "<cstdint>" "<set>" "<openxr/openxr.h>"
//! source-includes "\"xr_generated_overlays.hpp\"" "<mutex>" "<unordered_map>"
//!
//! handles {
//!     XrInstance
//!     XrSession
//! }
//!
//! commands {
//!     xrCreateSession
//!     xrDestroySession
//! }
//! ```
//!
//! Settings not named keep their defaults. Lists replace the default list
//! wholesale. Unknown nodes are errors, so a misspelled setting never
//! silently falls back to a default.

pub mod defaults;
pub mod error;
pub mod kdl_util;

use std::collections::HashSet;
use std::path::Path;

use kdl::KdlDocument;
pub use layergen_emit::EmitOptions;
pub use layergen_registry::SupportedSet;

pub use error::{ConfigError, Result};

/// Everything a generation run needs besides the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
	/// Commands and handle types to generate for.
	pub supported: SupportedSet,
	/// Naming, locking and include settings.
	pub emit: EmitOptions,
}

impl Default for GenConfig {
	fn default() -> Self {
		Self {
			supported: SupportedSet::new(
				defaults::SUPPORTED_COMMANDS.iter().copied(),
				defaults::SUPPORTED_HANDLES.iter().copied(),
			),
			emit: EmitOptions::default(),
		}
	}
}

impl GenConfig {
	/// Parse a KDL string, applying its settings over the defaults.
	pub fn parse(input: &str) -> Result<Self> {
		let doc: KdlDocument = input.parse()?;
		let mut config = Self::default();
		let mut seen = HashSet::new();

		for node in doc.nodes() {
			let name = node.name().value();
			if !seen.insert(name) {
				return Err(ConfigError::DuplicateEntry {
					list: "configuration".into(),
					name: name.to_string(),
				});
			}

			let emit = &mut config.emit;
			match name {
				"layer-name" => emit.layer_name = kdl_util::string_arg(node)?,
				"thread-safe" => emit.thread_safe = kdl_util::bool_arg(node)?,
				"command-prefix" => emit.command_prefix = kdl_util::string_arg_allow_empty(node)?,
				"dispatch-table" => emit.dispatch_table = kdl_util::string_arg(node)?,
				"success-check" => emit.success_check = kdl_util::string_arg(node)?,
				"header-includes" => emit.header_includes = kdl_util::string_args(node)?,
				"source-includes" => emit.source_includes = kdl_util::string_args(node)?,
				"handles" => config.supported.handles = kdl_util::child_names(node)?,
				"commands" => config.supported.commands = kdl_util::child_names(node)?,
				other => return Err(ConfigError::UnknownNode(other.to_string())),
			}
		}

		tracing::debug!(
			settings = seen.len(),
			commands = config.supported.commands.len(),
			handles = config.supported.handles.len(),
			"parsed generation config"
		);

		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}
}
